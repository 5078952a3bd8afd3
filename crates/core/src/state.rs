//! Raw battery state model: the bitmask the platform reports, the display
//! categories it collapses into, and the rendering switches.

/// Battery is draining.
pub const STATE_DISCHARGING: i32 = 0x1;
/// Battery is being charged from wall power.
pub const STATE_CHARGING: i32 = 0x2;
/// Charge has fallen below the platform's critical threshold.
pub const STATE_CRITICAL: i32 = 0x4;
/// No battery installed in the bay.
pub const STATE_NOT_PRESENT: i32 = 0x8;

/// Sentinel: the state query itself failed (no ACPI data at all).
pub const STATE_UNAVAILABLE: i32 = -1;

/// Stand-in for status values we have no bit for. Sits outside the
/// recognized mask, so it classifies as [`Category::Unknown`].
pub const STATE_UNRECOGNIZED: i32 = 1 << 8;

/// What the raw bitmask boils down to for display purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Draining and below the critical threshold.
    Critical,
    /// Draining normally.
    OnBattery,
    /// Charging, full, or running without a battery.
    OnAc,
    /// Bits we don't recognize.
    Unknown,
}

/// Rendering switches, parsed once from the command line and threaded
/// through every render call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Wrap the line in ANSI color escapes.
    pub color: bool,
    /// One-letter labels instead of the full words.
    pub short_labels: bool,
}

/// Collapse the raw state bitmask into a [`Category`].
///
/// Evaluated in priority order: a draining battery that is also critical
/// is always `Critical`, whatever other bits are set. A state of exactly
/// zero means wall power with nothing to flag.
pub fn classify(state: i32) -> Category {
    if state & STATE_DISCHARGING != 0 {
        if state & STATE_CRITICAL != 0 {
            Category::Critical
        } else {
            Category::OnBattery
        }
    } else if state & STATE_CHARGING != 0 || state == 0 || state & STATE_NOT_PRESENT != 0 {
        Category::OnAc
    } else {
        Category::Unknown
    }
}
