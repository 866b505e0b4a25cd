//! # 步进调整
//!
//! 加减按钮按用户当前的写法步进：
//! - 度数写法 `500` → `525`（每 0.25D 对应 25 度）
//! - 屈光度写法 `5.00` → `5.25`
//!
//! 写法判定：解析值 >= 阈值，或不含小数点且 |屈光度| >= 1，视为度数写法。
//! 两种写法在同一会话里切换是正常用法，判定规则保持不变。
//!
//! ## 依赖关系
//! - 被 `commands/step.rs` 使用
//! - 使用 `optics/normalize.rs`

use super::format::to_fixed2;
use super::normalize::{normalize_with, parse_leading_number};
use super::DEGREE_THRESHOLD;

use std::fmt;

/// 输入写法
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputConvention {
    /// 度数（"500"）
    Degree,
    /// 屈光度（"5.00"）
    Decimal,
}

impl fmt::Display for InputConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputConvention::Degree => write!(f, "degree"),
            InputConvention::Decimal => write!(f, "decimal"),
        }
    }
}

/// 判定当前输入写法
pub fn detect_convention(raw: &str, threshold: f64) -> InputConvention {
    let magnitude = normalize_with(raw, threshold).abs();
    let parsed_large = parse_leading_number(raw).is_some_and(|v| v >= threshold);

    if parsed_large || (!raw.contains('.') && magnitude >= 1.0) {
        InputConvention::Degree
    } else {
        InputConvention::Decimal
    }
}

/// 按 `delta`（D）步进，返回新的输入文本
///
/// 结果为屈光度绝对值，下限 0；符号由近视/远视选择决定。
pub fn step_input(raw: &str, delta: f64, threshold: f64) -> String {
    let magnitude = normalize_with(raw, threshold).abs();

    match detect_convention(raw, threshold) {
        InputConvention::Degree => {
            let degrees = (magnitude * 100.0 + delta * 100.0).max(0.0);
            render_degrees(degrees)
        }
        InputConvention::Decimal => {
            let diopters = (magnitude + delta).max(0.0);
            to_fixed2(diopters)
        }
    }
}

/// 默认阈值下的步进
pub fn step_default(raw: &str, delta: f64) -> String {
    step_input(raw, delta, DEGREE_THRESHOLD)
}

/// 度数渲染为整数样式（消除 0.1 + 0.2 类浮点尾数）
fn render_degrees(degrees: f64) -> String {
    let rounded = (degrees * 1e6).round() / 1e6;
    // -0 → 0
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{}", rounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_step_up() {
        assert_eq!(step_default("500", 0.25), "525");
        assert_eq!(step_default("525", -0.25), "500");
    }

    #[test]
    fn test_decimal_step_up() {
        assert_eq!(step_default("5.00", 0.25), "5.25");
        assert_eq!(step_default("0.75", -0.25), "0.50");
    }

    #[test]
    fn test_decimal_step_rounds_half_up() {
        // 5.375 + 0.25 = 5.625，两位小数取 5.63
        assert_eq!(step_default("5.375", 0.25), "5.63");
        assert_eq!(step_default("0.125", 0.0), "0.13");
    }

    #[test]
    fn test_clamped_at_zero() {
        assert_eq!(step_default("0.00", -0.25), "0.00");
        assert_eq!(step_default("25", -0.25), "0");
        assert_eq!(step_default("25", -0.5), "0");
    }

    #[test]
    fn test_detection_rules() {
        assert_eq!(detect_convention("500", 25.0), InputConvention::Degree);
        assert_eq!(detect_convention("25", 25.0), InputConvention::Degree);
        // 无小数点且 >= 1D：按度数写法
        assert_eq!(detect_convention("5", 25.0), InputConvention::Degree);
        assert_eq!(detect_convention("5.00", 25.0), InputConvention::Decimal);
        assert_eq!(detect_convention("0", 25.0), InputConvention::Decimal);
        assert_eq!(detect_convention("", 25.0), InputConvention::Decimal);
        // 负号写法不满足 >= 25，但 |5.00| >= 1 且无小数点
        assert_eq!(detect_convention("-500", 25.0), InputConvention::Degree);
        assert_eq!(detect_convention("-5.5", 25.0), InputConvention::Decimal);
    }

    #[test]
    fn test_ambiguous_single_digit() {
        // "5" 判为度数写法：5D → 500 度 → 525
        assert_eq!(step_default("5", 0.25), "525");
    }

    #[test]
    fn test_fractional_degrees() {
        assert_eq!(step_default("512.5", 0.25), "537.5");
        assert_eq!(step_default("510", 0.1), "520");
    }
}
