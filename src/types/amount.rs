//! Currency amounts.

use crate::config::{DISPLAY_SUFFIX, DISPLAY_UNIT};

/// Integer amount in the smallest currency unit. Signed so that a badly
/// authored delta shows up as a negative balance instead of wrapping.
pub type Amount = i64;

/// Formats an amount in display units, e.g. `20_000_000` as `20M` and
/// `2_500_000` as `2.5M`.
pub fn format_amount(amount: Amount) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs();
    let unit = DISPLAY_UNIT as u64;
    let whole = abs / unit;
    let frac = abs % unit;
    if frac == 0 {
        return format!("{sign}{whole}{DISPLAY_SUFFIX}");
    }
    let width = unit.to_string().len() - 1;
    let digits = format!("{frac:0width$}");
    let digits = digits.trim_end_matches('0');
    format!("{sign}{whole}.{digits}{DISPLAY_SUFFIX}")
}
