//! Turns raw battery readings into the one-line status indicator.
//!
//! The line is `<color?><label> [<bar>] <time?><reset?>` — a category
//! label, a fixed 10-cell charge bar, and the remaining time when one
//! applies. No trailing newline: the line is meant to be embedded in a
//! status bar or prompt verbatim.

use std::io::Write;

use batt_core::state::STATE_UNAVAILABLE;
use batt_core::{classify, BattError, Category, DisplayOptions, PowerSource, Result};

const COLOR_RED: &str = "\x1b[31m";
const COLOR_GREEN: &str = "\x1b[32m";
const COLOR_RESET: &str = "\x1b[0m";

/// Width of the charge bar in cells.
const BAR_WIDTH: i32 = 10;

/// Category label, full or one-letter form.
pub fn label(category: Category, short: bool) -> &'static str {
    match (category, short) {
        (Category::Critical, false) => "CRIT",
        (Category::Critical, true) => "C",
        (Category::OnBattery, false) => "BAT",
        (Category::OnBattery, true) => "B",
        (Category::OnAc, false) => "A/C",
        (Category::OnAc, true) => "P",
        (Category::Unknown, false) => "UNKNOWN",
        (Category::Unknown, true) => "?",
    }
}

fn color_prefix(category: Category) -> &'static str {
    match category {
        Category::Critical => COLOR_RED,
        Category::OnBattery | Category::OnAc => COLOR_GREEN,
        Category::Unknown => "",
    }
}

/// Fixed 10-cell charge bar: one `#` per full 10%, `_` elsewhere.
///
/// A failed percent query (-1) truncates to zero filled cells, so the
/// bar degrades to all `_` without a special case.
pub fn bar(percent: i32) -> String {
    let filled = percent / 10;
    (0..BAR_WIDTH)
        .map(|cell| if cell < filled { '#' } else { '_' })
        .collect()
}

/// Remaining time. The hour part and its `:` appear only above an hour;
/// the minute part is always two digits. Negative minutes mean "not
/// applicable" (charging, full) and render as nothing at all.
pub fn time(minutes: i32) -> String {
    if minutes < 0 {
        return String::new();
    }
    if minutes > 60 {
        format!("{}:{:02}", minutes / 60, minutes % 60)
    } else {
        format!("{:02}", minutes % 60)
    }
}

/// Assemble the full status line from raw readings.
///
/// The space after `]` is emitted even when the time section is empty,
/// and the color reset always closes a colorized line regardless of
/// category.
pub fn render_line(state: i32, percent: i32, minutes: i32, opts: DisplayOptions) -> String {
    let category = classify(state);

    let mut line = String::new();
    if opts.color {
        line.push_str(color_prefix(category));
    }
    line.push_str(label(category, opts.short_labels));
    line.push_str(" [");
    line.push_str(&bar(percent));
    line.push_str("] ");
    line.push_str(&time(minutes));
    if opts.color {
        line.push_str(COLOR_RESET);
    }
    line
}

/// Query the source once, render, and write the line to `out`.
///
/// A failed state query aborts before anything is written; failed
/// percent/time queries degrade to an empty bar / omitted time.
pub fn report<W: Write>(source: &dyn PowerSource, opts: DisplayOptions, out: &mut W) -> Result<()> {
    let state = source.state();
    if state == STATE_UNAVAILABLE {
        return Err(BattError::NoBatteryInfo);
    }

    let percent = source.percent();
    let minutes = source.time_minutes();
    tracing::debug!(state, percent, minutes, "battery readings");

    write!(out, "{}", render_line(state, percent, minutes, opts))?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use batt_core::state::{STATE_CRITICAL, STATE_DISCHARGING, STATE_UNRECOGNIZED};

    /// Canned readings standing in for a platform backend.
    struct FakeSource {
        state: i32,
        percent: i32,
        minutes: i32,
    }

    impl PowerSource for FakeSource {
        fn state(&self) -> i32 {
            self.state
        }

        fn percent(&self) -> i32 {
            self.percent
        }

        fn time_minutes(&self) -> i32 {
            self.minutes
        }
    }

    #[test]
    fn bar_fill_tracks_tens_of_percent() {
        for pct in 0..=100 {
            let rendered = bar(pct);
            assert_eq!(rendered.len(), 10, "bar for {pct}% has wrong width");
            let filled = rendered.chars().filter(|&c| c == '#').count();
            assert_eq!(filled, (pct / 10) as usize, "wrong fill for {pct}%");
        }
    }

    #[test]
    fn bar_for_failed_percent_query_is_empty() {
        assert_eq!(bar(-1), "__________");
    }

    #[test]
    fn time_under_an_hour_has_no_hour_part() {
        assert_eq!(time(45), "45");
        assert_eq!(time(5), "05");
    }

    #[test]
    fn time_above_an_hour() {
        assert_eq!(time(125), "2:05");
    }

    #[test]
    fn time_at_exactly_sixty_minutes() {
        // 60 is not "> 60", so only the minute part appears.
        assert_eq!(time(60), "00");
    }

    #[test]
    fn negative_time_renders_nothing() {
        assert_eq!(time(-5), "");
        assert_eq!(time(-1), "");
    }

    #[test]
    fn critical_line_plain() {
        let source = FakeSource {
            state: STATE_DISCHARGING | STATE_CRITICAL,
            percent: 5,
            minutes: 12,
        };
        let mut out = Vec::new();
        report(&source, DisplayOptions::default(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "CRIT [__________] 12");
    }

    #[test]
    fn ac_line_colored_and_short() {
        let source = FakeSource {
            state: 0,
            percent: 100,
            minutes: -1,
        };
        let opts = DisplayOptions {
            color: true,
            short_labels: true,
        };
        let mut out = Vec::new();
        report(&source, opts, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\x1b[32mP [##########] \x1b[0m"
        );
    }

    #[test]
    fn discharging_line_with_hours() {
        let source = FakeSource {
            state: STATE_DISCHARGING,
            percent: 57,
            minutes: 125,
        };
        let mut out = Vec::new();
        report(&source, DisplayOptions::default(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "BAT [#####_____] 2:05");
    }

    #[test]
    fn unknown_state_gets_no_color_but_still_resets() {
        let line = render_line(
            STATE_UNRECOGNIZED,
            50,
            -1,
            DisplayOptions {
                color: true,
                short_labels: false,
            },
        );
        assert_eq!(line, "UNKNOWN [#####_____] \x1b[0m");
    }

    #[test]
    fn failed_state_query_is_fatal_and_writes_nothing() {
        let source = FakeSource {
            state: -1,
            percent: 42,
            minutes: 30,
        };
        let mut out = Vec::new();
        let err = report(&source, DisplayOptions::default(), &mut out).unwrap_err();
        assert!(matches!(err, BattError::NoBatteryInfo));
        assert!(out.is_empty());
    }

    #[test]
    fn degraded_queries_keep_the_line_going() {
        let source = FakeSource {
            state: STATE_DISCHARGING,
            percent: -1,
            minutes: -1,
        };
        let mut out = Vec::new();
        report(&source, DisplayOptions::default(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "BAT [__________] ");
    }
}
