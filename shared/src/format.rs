//! Number formatting shared by every view.
//!
//! Two percentage conventions coexist. Roster, resources and active-war values
//! are fractions in [0, 1]; war-execution values already sit on a 0-100 scale.

/// Shown wherever a display field is missing.
pub const PLACEHOLDER: &str = "--";

/// Round to the nearest integer, ties toward positive infinity.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Shortest round-trip spelling of a number: `5` rather than `5.0`, `-0` as `0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}

/// Fraction in [0, 1] to a whole percentage: `0.456` → `"46%"`.
pub fn format_fraction_pct(value: f64) -> String {
    whole_pct(value * 100.0)
}

/// Value already on a 0-100 scale to a whole percentage: `45.6` → `"46%"`.
pub fn format_pct(value: f64) -> String {
    whole_pct(value)
}

/// `"0"` for zero, `"+x"` for positive values, natural minus sign otherwise.
pub fn format_signed(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else if value > 0.0 {
        format!("+{}", format_number(value))
    } else {
        format_number(value)
    }
}

/// Two fixed decimals, used for MVP scores. Ties round away from zero.
pub fn format_fixed2(value: f64) -> String {
    let hundredths = round_half_up(value.abs() * 100.0);
    format!("{:.2}", value.signum() * hundredths / 100.0)
}

/// Display text or the placeholder.
pub fn text_or_placeholder(value: Option<&str>) -> String {
    value.unwrap_or(PLACEHOLDER).to_string()
}

fn whole_pct(scaled: f64) -> String {
    format!("{}%", format_number(round_half_up(scaled)))
}
