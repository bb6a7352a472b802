// Service module exports

pub mod boundary;
pub mod calendar;
pub mod dataset;
pub mod position;
pub mod reconcile;
pub mod settings;
pub mod timeline;
