pub mod device_enumerator;
pub mod settings;
pub mod update_engine;

pub use device_enumerator::DeviceEnumerator;
pub use settings::SettingsStore;
pub use update_engine::UpdateEngine;
