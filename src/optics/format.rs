//! # 处方字符串格式化
//!
//! 屈光度 → 常见处方写法：正值带 "+"，保留两位小数，0 写作 "0.00"。
//!
//! 两位小数统一走 `to_fixed2`：恰好落在中点的值远离 0 取整
//! （`0.125` → `0.13`），`{:.2}` 会取偶得到 `0.12`。

/// 两位小数，中点远离 0 取整；非有限值原样输出
pub fn to_fixed2(value: f64) -> String {
    if !value.is_finite() {
        return format!("{:.2}", value);
    }

    let rounded = (value.abs() * 100.0 + 0.5).floor() / 100.0;
    // 负数保留符号，-0.001 → "-0.00"
    let signed = if value < 0.0 { -rounded } else { rounded };
    format!("{:.2}", signed)
}

/// 格式化屈光度
pub fn format_diopter(power: f64) -> String {
    if power == 0.0 {
        return "0.00".to_string();
    }

    let sign = if power > 0.0 { "+" } else { "" };
    format!("{}{}", sign, to_fixed2(power))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(format_diopter(0.0), "0.00");
        assert_eq!(format_diopter(-0.0), "0.00");
    }

    #[test]
    fn test_sign_prefix() {
        assert_eq!(format_diopter(2.25), "+2.25");
        assert_eq!(format_diopter(-4.75), "-4.75");
        assert_eq!(format_diopter(8.0), "+8.00");
        assert_eq!(format_diopter(0.001), "+0.00");
        assert_eq!(format_diopter(-0.001), "-0.00");
    }

    #[test]
    fn test_two_decimals_for_any_nonzero() {
        for v in [-12.5, -0.25, 0.1, 3.14159, 20.0] {
            let s = format_diopter(v);
            assert_eq!(s.starts_with('+'), v > 0.0, "{}", s);
            let decimals = s.rsplit('.').next().unwrap();
            assert_eq!(decimals.len(), 2, "{}", s);
        }
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        assert_eq!(format_diopter(0.125), "+0.13");
        assert_eq!(format_diopter(-5.125), "-5.13");
        assert_eq!(format_diopter(5.625), "+5.63");
        assert_eq!(to_fixed2(0.375), "0.38");
        assert_eq!(to_fixed2(-0.125), "-0.13");
    }

    #[test]
    fn test_non_finite_stays_visible() {
        assert_eq!(format_diopter(f64::NAN), "NaN");
        assert_eq!(format_diopter(f64::INFINITY), "+inf");
        assert_eq!(format_diopter(f64::NEG_INFINITY), "-inf");
    }
}
