use crate::domain::{PreferredDevice, SerialDevice};

/// Port for the OS serial-port enumeration facility.
///
/// Implementations report failure as `is_available() == false` or an empty
/// list; raw enumeration errors never cross this boundary.
pub trait DeviceEnumerator: Send + Sync {
    /// Whether serial enumeration works on this system at all.
    fn is_available(&self) -> bool;

    /// Currently attached serial devices, in a stable order.
    fn list_devices(&self) -> Vec<SerialDevice>;

    /// Platform best guess at the device to use, with its line speed.
    fn preferred_device(&self) -> Option<PreferredDevice>;
}
