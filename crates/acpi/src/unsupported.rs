use batt_core::state::STATE_UNAVAILABLE;
use batt_core::PowerSource;

/// Stand-in for platforms with no power-management interface: every
/// query fails permanently, so each run takes the fatal path.
#[derive(Debug, Default)]
pub struct UnsupportedSource;

impl UnsupportedSource {
    pub fn new() -> Self {
        Self
    }
}

impl PowerSource for UnsupportedSource {
    fn state(&self) -> i32 {
        STATE_UNAVAILABLE
    }

    fn percent(&self) -> i32 {
        -1
    }

    fn time_minutes(&self) -> i32 {
        -1
    }
}
