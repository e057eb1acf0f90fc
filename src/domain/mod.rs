pub mod cadence;
pub mod config;
pub mod device;
pub mod error;

pub use cadence::UpdateCadence;
pub use config::PrefsConfig;
pub use device::{resolve_selection, DeviceSelection, PreferredDevice, SerialDevice};
pub use error::DomainError;
