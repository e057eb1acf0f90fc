use serde::{Deserialize, Serialize};

/// Seconds in one day.
const DAY_SECS: u64 = 86_400;

/// How often scheduled update checks run.
///
/// The discriminant doubles as the stable tag carried by the frequency
/// menu items; it must not change across releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum UpdateCadence {
    /// Scheduled checks disabled. Only reachable through the auto-check
    /// flag; never derived from a stored interval.
    Never = 0,
    Daily = 1,
    Weekly = 2,
    Monthly = 3,
}

/// Tag table for menu-item dispatch. [`UpdateCadence::from_tag`] is the only
/// place raw tags are interpreted.
const TAG_TABLE: [(u8, UpdateCadence); 4] = [
    (0, UpdateCadence::Never),
    (1, UpdateCadence::Daily),
    (2, UpdateCadence::Weekly),
    (3, UpdateCadence::Monthly),
];

impl UpdateCadence {
    /// Categorize a stored check interval.
    ///
    /// Thresholds are half-open on a real-valued day count: persisted
    /// intervals are not guaranteed to equal a canonical duration exactly.
    /// `Never` is never produced here.
    pub fn from_interval(secs: u64) -> Self {
        let days = secs as f64 / DAY_SECS as f64;
        if days > 27.0 {
            UpdateCadence::Monthly
        } else if days > 6.0 {
            UpdateCadence::Weekly
        } else {
            UpdateCadence::Daily
        }
    }

    /// Canonical check interval for this cadence, in seconds.
    ///
    /// A month is 28 days, not a calendar month. `Never` has no meaningful
    /// interval and takes the daily default to keep the mapping total; the
    /// host disables checks through the auto-check flag instead.
    pub fn interval_secs(self) -> u64 {
        match self {
            UpdateCadence::Never | UpdateCadence::Daily => DAY_SECS,
            UpdateCadence::Weekly => 7 * DAY_SECS,
            UpdateCadence::Monthly => 28 * DAY_SECS,
        }
    }

    /// Look up the cadence for a raw menu tag.
    pub fn from_tag(tag: u8) -> Option<Self> {
        TAG_TABLE
            .iter()
            .find(|(t, _)| *t == tag)
            .map(|(_, cadence)| *cadence)
    }

    /// Check interval for a raw menu tag. Unrecognized tags fall back to
    /// the daily interval.
    pub fn interval_for_tag(tag: u8) -> u64 {
        Self::from_tag(tag)
            .unwrap_or(UpdateCadence::Daily)
            .interval_secs()
    }

    /// Stable menu tag for this cadence.
    pub fn tag(self) -> u8 {
        self as u8
    }
}
