// Module exports for models

pub mod boundary;
pub mod calendar;
pub mod entity;
pub mod geometry;
pub mod range;
pub mod settings;
pub mod ui;
