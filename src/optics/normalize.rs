//! # 输入归一化
//!
//! 把用户随手输入的文本转成带符号的屈光度。
//!
//! 两种写法并存：
//! - 屈光度写法：`5.00` → 5.00D
//! - 度数写法：`500` → 5.00D（|值| >= 25 时除以 100）
//!
//! 近视/远视的符号不在这里决定，由 `models::EyeCondition::apply` 在边界处施加。
//!
//! ## 依赖关系
//! - 被 `optics/step.rs`, `commands/` 使用
//! - 使用 `regex` 清洗输入

use super::{OpticsConfig, DEGREE_THRESHOLD};

use regex::Regex;
use std::sync::OnceLock;

/// 非数字字符（保留数字、小数点、负号）
fn strip_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[^\d.\-]").unwrap())
}

/// 开头的合法十进制数
fn number_prefix() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^-?(?:\d+\.?\d*|\.\d+)").unwrap())
}

/// 清洗后解析开头的数字（宽松前缀解析，如 "5.00.1" → 5.0）
///
/// 无法解析时返回 `None`。
pub fn parse_leading_number(raw: &str) -> Option<f64> {
    let cleaned = strip_pattern().replace_all(raw, "");
    let prefix = number_prefix().find(&cleaned)?;
    prefix.as_str().parse::<f64>().ok()
}

/// 使用默认阈值归一化
pub fn normalize(raw: &str) -> f64 {
    normalize_with(raw, DEGREE_THRESHOLD)
}

/// 归一化为屈光度
///
/// - 空串或非数字 → 0
/// - |值| >= `threshold` → 除以 100（边界含等号："25" → 0.25）
pub fn normalize_with(raw: &str, threshold: f64) -> f64 {
    let value = match parse_leading_number(raw) {
        Some(v) => v,
        None => return 0.0,
    };

    if value.abs() >= threshold {
        value / 100.0
    } else {
        value
    }
}

impl OpticsConfig {
    /// 按当前配置归一化
    pub fn normalize(&self, raw: &str) -> f64 {
        normalize_with(raw, self.degree_threshold)
    }
}
