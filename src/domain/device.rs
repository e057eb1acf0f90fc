use serde::{Deserialize, Serialize};

/// A serial device as shown in the device menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerialDevice {
    /// Human-readable name. Not guaranteed unique.
    pub name: String,
    /// Device path. Stable identifier used for persistence and matching.
    pub path: String,
}

impl SerialDevice {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Entry standing in for a device the OS does not currently list,
    /// e.g. a user-configured symlink or an unplugged adapter.
    fn placeholder(path: &str) -> Self {
        Self {
            name: path.to_string(),
            path: path.to_string(),
        }
    }
}

/// Platform-suggested default device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferredDevice {
    pub path: String,
    /// Line speed the platform suggests for this device.
    pub baud_rate: u32,
}

/// Outcome of resolving the device menu: the catalog to display and the
/// index to mark selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceSelection {
    pub catalog: Vec<SerialDevice>,
    /// Valid index into `catalog`; `None` only when the catalog is empty.
    pub selected: Option<usize>,
}

impl DeviceSelection {
    /// No devices, nothing to select.
    pub fn empty() -> Self {
        Self {
            catalog: Vec::new(),
            selected: None,
        }
    }

    /// Path at `index`, used to translate a menu pick back into the value
    /// to persist. Out-of-range indices yield `None`.
    pub fn path_for(&self, index: usize) -> Option<&str> {
        self.catalog.get(index).map(|device| device.path.as_str())
    }
}

/// Resolve which device the menu should mark selected.
///
/// The persisted path wins over the platform suggestion: a choice the user
/// already confirmed must survive a relaunch even when the platform would
/// suggest something else. When the target path is not among `available`,
/// a placeholder entry is appended to an independent copy of the catalog so
/// the choice stays visible and persistable; `available` itself is never
/// touched. With no persisted and no preferred path, the first enumerated
/// device is selected.
pub fn resolve_selection(
    available: &[SerialDevice],
    persisted: Option<&str>,
    preferred: Option<&str>,
) -> DeviceSelection {
    if available.is_empty() {
        return DeviceSelection::empty();
    }

    let Some(target) = persisted.or(preferred) else {
        return DeviceSelection {
            catalog: available.to_vec(),
            selected: Some(0),
        };
    };

    if let Some(index) = available.iter().position(|device| device.path == target) {
        return DeviceSelection {
            catalog: available.to_vec(),
            selected: Some(index),
        };
    }

    let mut catalog = available.to_vec();
    catalog.push(SerialDevice::placeholder(target));
    DeviceSelection {
        selected: Some(catalog.len() - 1),
        catalog,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_ports() -> Vec<SerialDevice> {
        vec![
            SerialDevice::new("USB Serial A", "/dev/cu.usbserial-A"),
            SerialDevice::new("USB Serial B", "/dev/cu.usbserial-B"),
        ]
    }

    #[test]
    fn test_empty_catalog_has_no_selection() {
        let selection = resolve_selection(&[], Some("/dev/cu.usbserial-A"), None);
        assert!(selection.catalog.is_empty());
        assert_eq!(selection.selected, None);
    }

    #[test]
    fn test_persisted_path_wins_over_preferred() {
        let ports = two_ports();
        let selection = resolve_selection(
            &ports,
            Some("/dev/cu.usbserial-B"),
            Some("/dev/cu.Bluetooth-Incoming"),
        );
        assert_eq!(selection.selected, Some(1));
        assert_eq!(selection.catalog, ports);
    }

    #[test]
    fn test_preferred_used_when_nothing_persisted() {
        let ports = two_ports();
        let selection = resolve_selection(&ports, None, Some("/dev/cu.usbserial-A"));
        assert_eq!(selection.selected, Some(0));
        assert_eq!(selection.catalog.len(), 2);
    }

    #[test]
    fn test_missing_path_gets_placeholder_entry() {
        let ports = vec![SerialDevice::new("USB Serial A", "/dev/cu.usbserial-A")];
        let selection = resolve_selection(&ports, Some("/dev/ttyNewton"), None);
        assert_eq!(selection.catalog.len(), 2);
        assert_eq!(selection.selected, Some(1));
        let placeholder = &selection.catalog[1];
        assert_eq!(placeholder.name, "/dev/ttyNewton");
        assert_eq!(placeholder.path, "/dev/ttyNewton");
        // input list untouched
        assert_eq!(ports.len(), 1);
    }

    #[test]
    fn test_enumerated_match_suppresses_placeholder() {
        let ports = two_ports();
        let selection = resolve_selection(&ports, Some("/dev/cu.usbserial-A"), None);
        assert_eq!(selection.catalog.len(), 2);
        assert_eq!(selection.selected, Some(0));
    }

    #[test]
    fn test_both_paths_absent_selects_first() {
        let ports = two_ports();
        let selection = resolve_selection(&ports, None, None);
        assert_eq!(selection.selected, Some(0));
        assert_eq!(selection.catalog, ports);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let ports = two_ports();
        let first = resolve_selection(&ports, Some("/dev/ttyNewton"), Some("/dev/cu.usbserial-A"));
        let second = resolve_selection(&ports, Some("/dev/ttyNewton"), Some("/dev/cu.usbserial-A"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_path_for_selection() {
        let selection = resolve_selection(&two_ports(), None, None);
        assert_eq!(selection.path_for(1), Some("/dev/cu.usbserial-B"));
        assert_eq!(selection.path_for(2), None);
        assert_eq!(DeviceSelection::empty().path_for(0), None);
    }
}
