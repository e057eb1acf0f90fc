#![forbid(unsafe_code)]

pub mod adapters;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use adapters::TomlSettingsStore;
pub use app::PrefsController;
pub use domain::{
    resolve_selection, DeviceSelection, DomainError, PreferredDevice, PrefsConfig, SerialDevice,
    UpdateCadence,
};
pub use ports::{DeviceEnumerator, SettingsStore, UpdateEngine};
