//! Platform backends for the power-management queries.
//!
//! Exactly one backend is compiled in and re-exported as [`SystemSource`]:
//! Linux reads the sysfs power-supply class, FreeBSD reads the
//! `hw.acpi.battery` sysctls, and everything else gets a stand-in whose
//! queries fail permanently.

cfg_if::cfg_if! {
    if #[cfg(target_os = "linux")] {
        mod linux;
        pub use linux::SysfsSource;
        pub use linux::SysfsSource as SystemSource;
    } else if #[cfg(target_os = "freebsd")] {
        mod freebsd;
        pub use freebsd::SysctlSource;
        pub use freebsd::SysctlSource as SystemSource;
    } else {
        mod unsupported;
        pub use unsupported::UnsupportedSource;
        pub use unsupported::UnsupportedSource as SystemSource;
    }
}
