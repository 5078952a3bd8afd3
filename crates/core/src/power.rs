/// Every platform backend (and test fake) must implement this trait.
///
/// The three queries are independent snapshots of the OS power-management
/// data, answered with raw integers and sentinels rather than errors:
/// only the *state* sentinel is fatal, and escalating it is the caller's
/// job. Each call reads cached kernel state, so implementations are
/// expected to return immediately.
pub trait PowerSource {
    /// Discharge/charge state bitmask (`state::STATE_*` bits), or
    /// [`STATE_UNAVAILABLE`](crate::state::STATE_UNAVAILABLE) when the
    /// platform reports no power-management information.
    fn state(&self) -> i32;

    /// Charge percentage `0..=100`, or `-1` when unreadable.
    fn percent(&self) -> i32;

    /// Remaining runtime in minutes, or a negative sentinel when not
    /// applicable (charging, full) or unreadable.
    fn time_minutes(&self) -> i32;
}
