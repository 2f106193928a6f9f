//! Display formatting: two-decimal currency and sign-prefixed change strings.

/// Round to two decimals, half away from zero.
///
/// The nudge keeps boundary cents like `-1.005` (stored just below the
/// half-cent in binary) rounding away from zero instead of truncating.
fn round2(v: f64) -> f64 {
    let cents = (v.abs() * 100.0 + 0.5 + 1e-9).floor();
    if v < 0.0 {
        -cents / 100.0
    } else {
        cents / 100.0
    }
}

/// `$` plus fixed two decimals: `$38543.07`.
pub fn price(v: f64) -> String {
    format!("${:.2}", round2(v))
}

/// Sign-prefixed two decimals: non-negative values get a leading `+`,
/// negatives keep their native `-`. `+123.45`, `-45.67`.
pub fn change(v: f64) -> String {
    let r = round2(v);
    if v >= 0.0 {
        format!("+{:.2}", r.abs())
    } else {
        format!("-{:.2}", r.abs())
    }
}

/// Same sign convention as [`change`], with a trailing percent sign.
pub fn percent(v: f64) -> String {
    format!("{}%", change(v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_two_decimals() {
        assert_eq!(price(38543.07), "$38543.07");
        assert_eq!(price(44.2), "$44.20");
        assert_eq!(price(0.0), "$0.00");
    }

    #[test]
    fn change_sign_prefix() {
        assert_eq!(change(123.45), "+123.45");
        assert_eq!(change(-45.67), "-45.67");
        assert_eq!(change(0.0), "+0.00");
    }

    #[test]
    fn half_cent_rounds_away_from_zero() {
        assert_eq!(change(-1.005), "-1.01");
        assert_eq!(change(1.005), "+1.01");
        assert_eq!(change(-1.004), "-1.00");
    }

    #[test]
    fn tiny_negative_keeps_minus() {
        assert_eq!(change(-0.003), "-0.00");
    }

    #[test]
    fn percent_suffix() {
        assert_eq!(percent(0.32), "+0.32%");
        assert_eq!(percent(-0.29), "-0.29%");
        assert_eq!(percent(5.21), "+5.21%");
    }
}
