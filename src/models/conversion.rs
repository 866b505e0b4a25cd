//! # 换算结果数据模型
//!
//! 一次换算的完整记录：原度数、换算后度数、差值、公式文本，
//! 以及结果卡片下方显示的建议。
//!
//! ## 依赖关系
//! - 被 `commands/`, `report/` 使用
//! - 使用 `optics/` 计算

use crate::optics::{self, format_diopter, OpticsConfig};

use serde::Serialize;
use std::fmt;

/// 低于此差值（D）视为无需换算
pub const CHANGE_TOLERANCE: f64 = 0.1;

/// 换算结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionResult {
    /// 眼镜度数（D，带符号）
    pub original: f64,
    /// 隐形眼镜度数（D，已取整）
    pub converted: f64,
    /// |converted| - |original|
    pub difference: f64,
    /// 公式展开
    pub formula: String,
    /// 镜眼距（mm）
    pub vertex_distance_mm: f64,
}

impl ConversionResult {
    /// 从带符号的眼镜度数计算
    pub fn compute(spectacle_power: f64, config: &OpticsConfig) -> Self {
        let converted = optics::contact_power_with(spectacle_power, config);
        let exact = optics::exact_contact_power(spectacle_power, config.vertex_distance_mm);

        let formula = if spectacle_power == 0.0 {
            "Fs = 0.00 → Fc = 0.00".to_string()
        } else {
            format!(
                "Fc = {:.2} / (1 - {:.3} × {:.2}) = {:.3} → {}",
                spectacle_power,
                config.vertex_distance_m(),
                spectacle_power,
                exact,
                format_diopter(converted)
            )
        };

        ConversionResult {
            original: spectacle_power,
            converted,
            difference: converted.abs() - spectacle_power.abs(),
            formula,
            vertex_distance_mm: config.vertex_distance_mm,
        }
    }

    /// 换算是否有实际意义
    pub fn is_changed(&self) -> bool {
        (self.original.abs() - self.converted.abs()).abs() >= CHANGE_TOLERANCE
    }

    /// 结果建议
    pub fn advice(&self) -> VertexAdvice {
        if !self.is_changed() {
            VertexAdvice::NoConversionNeeded
        } else if self.original < 0.0 {
            VertexAdvice::ReducePower
        } else {
            VertexAdvice::AddPower
        }
    }
}

/// 结果建议
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VertexAdvice {
    /// 度数较轻，眼镜与隐形眼镜通用
    NoConversionNeeded,
    /// 近视需降度
    ReducePower,
    /// 远视需补正
    AddPower,
}

impl VertexAdvice {
    /// 简短代码（CSV 列）
    pub fn code(&self) -> &'static str {
        match self {
            VertexAdvice::NoConversionNeeded => "none",
            VertexAdvice::ReducePower => "reduce",
            VertexAdvice::AddPower => "add",
        }
    }

    /// 完整说明
    pub fn message(&self) -> &'static str {
        match self {
            VertexAdvice::NoConversionNeeded => {
                "Mild prescription (within ±4.00 D): glasses and contact lens powers are \
                 usually interchangeable, no conversion needed."
            }
            VertexAdvice::ReducePower => {
                "Contact lenses sit on the cornea with no vertex gap, so myopic power \
                 must be reduced to achieve the same vision."
            }
            VertexAdvice::AddPower => {
                "Contact lenses sit on the cornea with no vertex gap, so hyperopic power \
                 must be increased to achieve the same vision."
            }
        }
    }
}

impl fmt::Display for VertexAdvice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// 免责声明
pub const DISCLAIMER: &str = "Results are for reference only. Corneal curvature differs \
between individuals; consult an ophthalmologist or optometrist before wearing contact \
lenses for the first time.";
