//! # 共享参数
//!
//! 换算参数在所有子命令间共享，支持环境变量覆盖。
//!
//! ## 依赖关系
//! - 被 `cli/` 下各子命令 flatten 使用
//! - 转换为 `optics::OpticsConfig`

use crate::error::{LensError, Result};
use crate::models::EyeCondition;
use crate::optics::{OpticsConfig, DEFAULT_VERTEX_MM, DEGREE_THRESHOLD, QUARTER_STEP};

use clap::{Args, ValueEnum};

/// 换算参数
#[derive(Args, Debug, Clone)]
pub struct OpticsArgs {
    /// Vertex distance between spectacle lens and cornea, in millimetres
    #[arg(long = "vertex", env = "LENSCONV_VERTEX_MM", default_value_t = DEFAULT_VERTEX_MM)]
    pub vertex_mm: f64,

    /// Inputs with magnitude at or above this value are read as "degrees" (500 = 5.00 D)
    #[arg(long, env = "LENSCONV_DEGREE_THRESHOLD", default_value_t = DEGREE_THRESHOLD)]
    pub degree_threshold: f64,

    /// Manufacturing step the contact lens power is rounded to, in diopters
    #[arg(long, env = "LENSCONV_ROUNDING_STEP", default_value_t = QUARTER_STEP)]
    pub rounding_step: f64,
}

impl OpticsArgs {
    /// 校验并转换为核心配置
    pub fn to_config(&self) -> Result<OpticsConfig> {
        check_positive("vertex distance", self.vertex_mm)?;
        check_positive("degree threshold", self.degree_threshold)?;
        check_positive("rounding step", self.rounding_step)?;

        Ok(OpticsConfig {
            vertex_distance_mm: self.vertex_mm,
            degree_threshold: self.degree_threshold,
            rounding_step: self.rounding_step,
        })
    }
}

fn check_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(LensError::InvalidArgument(format!(
            "{} must be a positive number, got {}",
            name, value
        )))
    }
}

/// 屈光状态参数
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum ConditionArg {
    /// Nearsighted: power is forced negative
    #[default]
    #[value(alias = "m")]
    Myopia,
    /// Farsighted: power is forced non-negative
    #[value(alias = "h")]
    Hyperopia,
}

impl From<ConditionArg> for EyeCondition {
    fn from(arg: ConditionArg) -> Self {
        match arg {
            ConditionArg::Myopia => EyeCondition::Myopia,
            ConditionArg::Hyperopia => EyeCondition::Hyperopia,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(vertex_mm: f64, degree_threshold: f64, rounding_step: f64) -> OpticsArgs {
        OpticsArgs {
            vertex_mm,
            degree_threshold,
            rounding_step,
        }
    }

    #[test]
    fn test_defaults_match_core() {
        let config = args(DEFAULT_VERTEX_MM, DEGREE_THRESHOLD, QUARTER_STEP)
            .to_config()
            .unwrap();
        assert_eq!(config, OpticsConfig::default());
    }

    #[test]
    fn test_rejects_non_positive() {
        assert!(args(0.0, 25.0, 0.25).to_config().is_err());
        assert!(args(12.0, -1.0, 0.25).to_config().is_err());
        assert!(args(12.0, 25.0, f64::NAN).to_config().is_err());
        assert!(args(f64::INFINITY, 25.0, 0.25).to_config().is_err());
    }
}
