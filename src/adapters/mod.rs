pub mod settings_toml;

pub use settings_toml::TomlSettingsStore;
