/// Port for the auto-update engine's scheduling knobs.
///
/// The engine is injected wherever it is needed, never reached as a
/// process-wide singleton; the controller keeps it in sync with the
/// persisted preferences.
pub trait UpdateEngine: Send + Sync {
    /// Seconds between scheduled update checks.
    fn check_interval(&self) -> u64;

    /// Reschedule checks at the given interval.
    fn set_check_interval(&self, secs: u64);

    /// Whether scheduled checks are enabled.
    fn auto_check_enabled(&self) -> bool;

    /// Enable or disable scheduled checks.
    fn set_auto_check(&self, enabled: bool);
}
