//! Display formatting for energies and large counts.

/// Scientific notation, e.g. `3.14 x 10^20 J`.
pub fn format_energy_scientific(joules: f64) -> String {
    if !joules.is_finite() || joules <= 0.0 {
        return format!("{joules} J");
    }
    let exponent = joules.log10().floor() as i32;
    let mantissa = joules / 10f64.powi(exponent);
    format!("{mantissa:.2} x 10^{exponent} J")
}

/// SI-prefixed energy, GJ and up.
pub fn format_energy_si(joules: f64) -> String {
    if joules >= 1e18 {
        format!("{:.2} EJ", joules / 1e18)
    } else if joules >= 1e15 {
        format!("{:.2} PJ", joules / 1e15)
    } else if joules >= 1e12 {
        format!("{:.2} TJ", joules / 1e12)
    } else {
        format!("{:.2} GJ", joules / 1e9)
    }
}

/// Compact count with a word suffix, e.g. `4.50 million`.
pub fn format_number(num: f64, decimals: usize) -> String {
    if num >= 1e9 {
        format!("{:.*} billion", decimals, num / 1e9)
    } else if num >= 1e6 {
        format!("{:.*} million", decimals, num / 1e6)
    } else if num >= 1e3 {
        format!("{:.*}k", decimals, num / 1e3)
    } else {
        format!("{:.*}", decimals, num)
    }
}
