/// Round half toward positive infinity, the way browsers round for display.
#[must_use]
pub fn round_half_up(n: f64) -> i64 {
    #[allow(clippy::cast_possible_truncation)]
    let rounded = (n + 0.5).floor() as i64;
    rounded
}

#[must_use]
pub fn format_meters(n: f64) -> String {
    format!("{} m", round_half_up(n))
}

/// Adjustments read as `+12 m` / `-10 m`.
#[must_use]
pub fn format_signed_meters(n: f64) -> String {
    let sign = if n >= 0.0 { "+" } else { "" };
    format!("{sign}{}", format_meters(n))
}

#[must_use]
pub fn format_pct(n: f64) -> String {
    format!("{}%", round_half_up(n))
}
