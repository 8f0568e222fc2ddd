//! Formatting utilities used for CLI outputs.

/// Decimal hours as "7.50 h".
pub fn hours_readable(hours: f64) -> String {
    format!("{hours:.2} h")
}

/// Decimal hours as "07h 30m".
pub fn hours_to_hm(hours: f64) -> String {
    let mins = (hours * 60.0).round() as i64;
    format!("{:02}h {:02}m", mins / 60, mins % 60)
}

pub fn money(amount: f64, currency: &str) -> String {
    format!("{currency} {amount:.2}")
}
