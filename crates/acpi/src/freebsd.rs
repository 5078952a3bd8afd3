use batt_core::state::STATE_UNAVAILABLE;
use batt_core::PowerSource;
use sysctl::{Ctl, CtlValue, Sysctl};

/// Reads the ACPI battery sysctls FreeBSD exposes under `hw.acpi.battery`.
///
/// The kernel's bit assignments (discharging 0x1, charging 0x2, critical
/// 0x4) match the `STATE_*` constants, so the state value passes through
/// untranslated.
#[derive(Debug, Default)]
pub struct SysctlSource;

impl SysctlSource {
    pub fn new() -> Self {
        Self
    }

    fn read_int(name: &str) -> i32 {
        match Ctl::new(name).and_then(|ctl| ctl.value()) {
            Ok(CtlValue::Int(value)) => value,
            Ok(other) => {
                tracing::warn!("sysctl {name} has unexpected type: {other:?}");
                STATE_UNAVAILABLE
            }
            Err(err) => {
                tracing::debug!("sysctl {name} unavailable: {err}");
                STATE_UNAVAILABLE
            }
        }
    }
}

impl PowerSource for SysctlSource {
    fn state(&self) -> i32 {
        Self::read_int("hw.acpi.battery.state")
    }

    fn percent(&self) -> i32 {
        Self::read_int("hw.acpi.battery.life")
    }

    fn time_minutes(&self) -> i32 {
        Self::read_int("hw.acpi.battery.time")
    }
}
