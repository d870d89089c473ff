//! Display-formatting helpers for the presentation layer.
//!
//! Pure string formatting only; no locale handling and no precision
//! guarantees beyond what is shown. The reporting layer returns raw numbers
//! and dates, and the UI runs them through these helpers.

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};
use time::{Date, Month};
use unicode_segmentation::UnicodeSegmentation;

use crate::transaction::TransactionKind;

/// The max number of graphemes to display in transaction table rows before
/// truncating and displaying ellipses.
pub const MAX_DESCRIPTION_GRAPHEMES: usize = 32;

/// Format an amount as a dollar value with thousands separators, e.g.
/// `$1,234.50`. Negative values get a leading minus sign.
pub fn format_currency(number: f64) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency("$")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency("-$")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    let mut formatted_string = if number < 0.0 {
        negative_fmt.fmt_string(number.abs())
    } else if number > 0.0 {
        positive_fmt.fmt_string(number)
    } else {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        "$0.00".to_owned()
    };

    // numfmt omits trailing zeros, rendering "12.30" as "12.3" and "12.00"
    // as "12", so we must restore the full two decimal places ourselves.
    match formatted_string.rfind('.') {
        Some(position) if formatted_string.len() - position == 2 => formatted_string.push('0'),
        None => formatted_string.push_str(".00"),
        _ => {}
    }

    formatted_string
}

/// Format an amount with the sign implied by the transaction kind, e.g.
/// `+$5,000.00` for income and `-$45.50` for an expense.
pub fn signed_amount(kind: TransactionKind, amount: f64) -> String {
    match kind {
        TransactionKind::Income => format!("+{}", format_currency(amount)),
        TransactionKind::Expense => format!("-{}", format_currency(amount)),
    }
}

/// Format a category share percentage with one decimal, e.g. `64.5%`.
pub fn format_percent(percent: f64) -> String {
    format!("{percent:.1}%")
}

/// The chart label for a month, e.g. `Aug 24`.
pub fn month_label(date: Date) -> String {
    format!("{} {:02}", month_abbrev(date.month()), date.year() % 100)
}

/// A table-row date, e.g. `Aug 3, 2024`.
pub fn format_date(date: Date) -> String {
    format!(
        "{} {}, {}",
        month_abbrev(date.month()),
        date.day(),
        date.year()
    )
}

/// Truncate a description for table display, appending an ellipsis when it
/// exceeds [MAX_DESCRIPTION_GRAPHEMES].
pub fn truncate_description(description: &str) -> String {
    let description_length = description.graphemes(true).count();

    if description_length <= MAX_DESCRIPTION_GRAPHEMES {
        description.to_owned()
    } else {
        let truncated: String = description
            .graphemes(true)
            .take(MAX_DESCRIPTION_GRAPHEMES - 3)
            .collect();

        truncated + "..."
    }
}

fn month_abbrev(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}
