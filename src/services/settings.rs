// Settings service
// Loads timeline settings from TOML, falling back to built-in defaults

mod service;

pub use service::SettingsService;
