//! Currency formatting.

use vb_config::LocaleConfig;

use crate::context::HostError;

/// Format an amount as currency using the locale's unit, precision,
/// delimiter and separator.
///
/// `1234.5` with the default locale becomes `$1,234.50`; negative amounts
/// get a leading minus before the unit.
pub fn format_currency(amount: f64, locale: &LocaleConfig) -> Result<String, HostError> {
    if !amount.is_finite() {
        return Err(HostError::InvalidNumber {
            value: amount.to_string(),
        });
    }

    let precision = locale.currency_precision;
    let fixed = format!("{:.*}", precision, amount.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut number = delimit(integer, &locale.delimiter);
    if !fraction.is_empty() {
        number.push_str(&locale.separator);
        number.push_str(fraction);
    }

    let is_zero = fixed.chars().all(|c| c == '0' || c == '.');
    let sign = if amount < 0.0 && !is_zero { "-" } else { "" };

    Ok(format!("{sign}{}{number}", locale.currency_unit))
}

/// Insert `delimiter` between groups of three digits.
fn delimit(digits: &str, delimiter: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * delimiter.len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(delimiter);
        }
        out.push(c);
    }
    out
}
