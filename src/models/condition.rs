//! # 屈光状态
//!
//! 近视/远视的选择决定度数的符号。这是展示层的策略，不属于输入解析。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 屈光状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EyeCondition {
    /// 近视（负度数）
    #[default]
    Myopia,
    /// 远视（正度数）
    Hyperopia,
}

impl EyeCondition {
    /// 施加符号：近视强制为负，远视强制为非负
    pub fn apply(&self, diopters: f64) -> f64 {
        match self {
            EyeCondition::Myopia => -diopters.abs(),
            EyeCondition::Hyperopia => diopters.abs(),
        }
    }

    /// 中文名称
    pub fn label_zh(&self) -> &'static str {
        match self {
            EyeCondition::Myopia => "近视",
            EyeCondition::Hyperopia => "远视",
        }
    }
}

impl fmt::Display for EyeCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EyeCondition::Myopia => write!(f, "myopia"),
            EyeCondition::Hyperopia => write!(f, "hyperopia"),
        }
    }
}

impl FromStr for EyeCondition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "myopia" | "m" | "-" | "近視" | "近视" => Ok(EyeCondition::Myopia),
            "hyperopia" | "h" | "+" | "遠視" | "远视" => Ok(EyeCondition::Hyperopia),
            other => Err(format!(
                "unknown condition '{}' (expected myopia or hyperopia)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_forces_sign() {
        assert_eq!(EyeCondition::Myopia.apply(5.0), -5.0);
        assert_eq!(EyeCondition::Myopia.apply(-5.0), -5.0);
        assert_eq!(EyeCondition::Hyperopia.apply(-2.5), 2.5);
        assert_eq!(EyeCondition::Hyperopia.apply(0.0), 0.0);
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("Myopia".parse::<EyeCondition>(), Ok(EyeCondition::Myopia));
        assert_eq!(" h ".parse::<EyeCondition>(), Ok(EyeCondition::Hyperopia));
        assert_eq!("近視".parse::<EyeCondition>(), Ok(EyeCondition::Myopia));
        assert_eq!("远视".parse::<EyeCondition>(), Ok(EyeCondition::Hyperopia));
        assert!("astigmatism".parse::<EyeCondition>().is_err());
    }
}
