use std::path::{Path, PathBuf};

use batt_core::state::{
    STATE_CHARGING, STATE_CRITICAL, STATE_DISCHARGING, STATE_UNAVAILABLE, STATE_UNRECOGNIZED,
};
use batt_core::PowerSource;

const SYSFS_BASE: &str = "/sys/class/power_supply";

/// Reads battery data from the Linux sysfs power-supply interface.
///
/// Only the first battery found (`BAT0`..`BAT2`) is reported; systems
/// without one (desktop, VM) fail the state query, which callers treat
/// as fatal.
#[derive(Debug)]
pub struct SysfsSource {
    base: PathBuf,
}

impl SysfsSource {
    pub fn new() -> Self {
        Self {
            base: PathBuf::from(SYSFS_BASE),
        }
    }

    /// Use a different sysfs root. Tests point this at a fabricated tree.
    pub fn with_base(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    fn battery_dir(&self) -> Option<PathBuf> {
        ["BAT0", "BAT1", "BAT2"]
            .iter()
            .map(|name| self.base.join(name))
            .find(|dir| dir.exists())
    }

    fn read_trimmed(dir: &Path, name: &str) -> Option<String> {
        std::fs::read_to_string(dir.join(name))
            .ok()
            .map(|raw| raw.trim().to_string())
    }

    fn read_value(dir: &Path, name: &str) -> Option<i64> {
        Self::read_trimmed(dir, name)?.parse().ok()
    }
}

impl Default for SysfsSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PowerSource for SysfsSource {
    fn state(&self) -> i32 {
        let Some(dir) = self.battery_dir() else {
            tracing::debug!("no battery under {}", self.base.display());
            return STATE_UNAVAILABLE;
        };
        let Some(status) = Self::read_trimmed(&dir, "status") else {
            return STATE_UNAVAILABLE;
        };

        match status.as_str() {
            "Discharging" => {
                let critical = Self::read_trimmed(&dir, "capacity_level")
                    .is_some_and(|level| level == "Critical");
                if critical {
                    STATE_DISCHARGING | STATE_CRITICAL
                } else {
                    STATE_DISCHARGING
                }
            }
            "Charging" => STATE_CHARGING,
            // Wall power, nothing to flag.
            "Full" | "Not charging" => 0,
            other => {
                tracing::warn!("unrecognized battery status '{other}'");
                STATE_UNRECOGNIZED
            }
        }
    }

    fn percent(&self) -> i32 {
        let Some(dir) = self.battery_dir() else {
            return -1;
        };
        Self::read_value(&dir, "capacity").map_or(-1, |pct| pct as i32)
    }

    fn time_minutes(&self) -> i32 {
        let Some(dir) = self.battery_dir() else {
            return -1;
        };
        // Remaining runtime only makes sense while draining.
        if Self::read_trimmed(&dir, "status").as_deref() != Some("Discharging") {
            return -1;
        }

        // µWh over µW, or µAh over µA — either ratio gives hours.
        for (stock, rate) in [("energy_now", "power_now"), ("charge_now", "current_now")] {
            if let (Some(stock), Some(rate)) =
                (Self::read_value(&dir, stock), Self::read_value(&dir, rate))
            {
                if rate > 0 {
                    return (stock * 60 / rate) as i32;
                }
            }
        }
        -1
    }
}
