//! Trailing date-window helpers for reports.
//!
//! A window is a trailing span of N days ending at a reference date. The
//! reference date is always an explicit argument so that results do not
//! silently depend on the wall clock; callers that want "now" pass
//! [crate::today_utc].

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use time::{Date, Duration};

/// The preset window lengths offered by the reporting range selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WindowPreset {
    /// The trailing 7 days.
    Week,
    /// The trailing 30 days.
    Month,
    /// The trailing 90 days.
    Quarter,
    /// The trailing 365 days.
    Year,
}

impl WindowPreset {
    /// The preset selected when no explicit choice has been made.
    pub fn default_preset() -> Self {
        Self::Month
    }

    /// The window length in days.
    pub fn days(self) -> i64 {
        match self {
            Self::Week => 7,
            Self::Month => 30,
            Self::Quarter => 90,
            Self::Year => 365,
        }
    }

    /// The label shown by range selectors.
    pub fn label(self) -> &'static str {
        match self {
            Self::Week => "Last 7 days",
            Self::Month => "Last 30 days",
            Self::Quarter => "Last 3 months",
            Self::Year => "Last year",
        }
    }

    /// The inclusive date range covered by this preset, ending at
    /// `reference`.
    pub fn range(self, reference: Date) -> RangeInclusive<Date> {
        trailing_range(self.days(), reference)
    }
}

impl Default for WindowPreset {
    fn default() -> Self {
        Self::default_preset()
    }
}

/// The inclusive date range spanning the `days` before `reference` up to and
/// including `reference` itself.
pub fn trailing_range(days: i64, reference: Date) -> RangeInclusive<Date> {
    reference - Duration::days(days)..=reference
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::{WindowPreset, trailing_range};

    #[test]
    fn trailing_range_is_inclusive_on_both_ends() {
        let reference = date!(2024 - 08 - 31);

        let range = trailing_range(30, reference);

        assert!(range.contains(&date!(2024 - 08 - 01)));
        assert!(range.contains(&reference));
        assert!(!range.contains(&date!(2024 - 07 - 31)));
        assert!(!range.contains(&date!(2024 - 09 - 01)));
    }

    #[test]
    fn preset_ranges_nest() {
        let reference = date!(2024 - 08 - 31);
        let presets = [
            WindowPreset::Week,
            WindowPreset::Month,
            WindowPreset::Quarter,
            WindowPreset::Year,
        ];

        for pair in presets.windows(2) {
            let shorter = pair[0].range(reference);
            let longer = pair[1].range(reference);

            assert!(
                longer.contains(shorter.start()),
                "{:?} should contain the start of {:?}",
                pair[1],
                pair[0]
            );
            assert_eq!(shorter.end(), longer.end());
        }
    }

    #[test]
    fn default_preset_is_month() {
        assert_eq!(WindowPreset::default(), WindowPreset::Month);
        assert_eq!(WindowPreset::default_preset().days(), 30);
    }
}
