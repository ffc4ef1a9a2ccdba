//! Display formatting for scalar values coming from the backend.

use grafos_core::models::Language;
use serde_json::{Number, Value};

/// Shown in place of a missing value
pub const PLACEHOLDER: &str = "—";

/// Fractional numbers are rounded to at most this many decimals
pub const MAX_FRACTION_DIGITS: usize = 3;

/// Converts raw JSON scalars into display strings
///
/// Every input has a defined output: missing values become [`PLACEHOLDER`],
/// integers get digit grouping, fractional numbers get grouping and at most
/// three decimals without trailing zeros, everything else its natural text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Formatter {
    language: Language,
}

impl Formatter {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Format a possibly missing value
    pub fn format(&self, value: Option<&Value>) -> String {
        match value {
            None | Some(Value::Null) => PLACEHOLDER.to_string(),
            Some(Value::Number(n)) => self.format_number(n),
            Some(other) => plain_text(other),
        }
    }

    pub fn format_number(&self, n: &Number) -> String {
        if let Some(i) = n.as_i64() {
            return self.format_integer_digits(i < 0, &i.unsigned_abs().to_string());
        }
        if let Some(u) = n.as_u64() {
            return self.format_integer_digits(false, &u.to_string());
        }
        n.as_f64().map(|f| self.format_f64(f)).unwrap_or_else(|| n.to_string())
    }

    pub fn format_f64(&self, value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value.is_infinite() {
            return if value > 0.0 { "∞" } else { "-∞" }.to_string();
        }

        let negative = value < 0.0;
        if value.fract() == 0.0 {
            return self.format_integer_digits(negative, &format!("{:.0}", value.abs()));
        }

        let rounded = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
        let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
        let frac_part = frac_part.trim_end_matches('0');

        let mut out = self.format_integer_digits(negative, int_part);
        if !frac_part.is_empty() {
            out.push(self.language.decimal_separator());
            out.push_str(frac_part);
        }
        out
    }

    fn format_integer_digits(&self, negative: bool, digits: &str) -> String {
        let grouped = group_digits(digits, self.language.group_separator());
        if negative && grouped != "0" {
            format!("-{}", grouped)
        } else {
            grouped
        }
    }
}

/// Natural string form of a value, without number grouping
pub fn plain_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items.iter().map(plain_text).collect::<Vec<_>>().join(","),
        Value::Object(_) => value.to_string(),
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
