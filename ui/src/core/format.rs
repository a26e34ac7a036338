//! Formatting helpers for presenting quantities.

/// Groups thousands with a thin space: `12345` → `12 345`.
pub fn format_quantity(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('\u{2009}');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Like [`format_quantity`] but always carries a sign for non-zero values.
pub fn format_signed(value: i64) -> String {
    if value > 0 {
        format!("+{}", format_quantity(value))
    } else {
        format_quantity(value)
    }
}

pub fn format_percent(fraction: f64) -> String {
    if !fraction.is_finite() {
        return "—".into();
    }
    format!("{:.1}%", fraction * 100.0)
}
