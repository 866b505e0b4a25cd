//! # 光学换算核心模块
//!
//! 眼镜度数 → 隐形眼镜度数的纯函数实现，无 I/O、无状态。
//!
//! ## 子模块
//! - `normalize`: 用户输入文本 → 屈光度（支持 "500" 度数写法）
//! - `vertex`: 镜眼距校正公式与 0.25D 取整
//! - `format`: 处方字符串格式化（"+2.25" / "-4.75" / "0.00"）
//! - `step`: 加减按钮的双写法步进
//!
//! ## 依赖关系
//! - 被 `models/`, `commands/`, `report/` 使用
//! - 无内部模块依赖

pub mod format;
pub mod normalize;
pub mod step;
pub mod vertex;

pub use format::{format_diopter, to_fixed2};
pub use normalize::{normalize, normalize_with, parse_leading_number};
pub use step::{detect_convention, step_default, step_input, InputConvention};
pub use vertex::{contact_power, contact_power_with, exact_contact_power, quantize};

/// 默认镜眼距（mm）
pub const DEFAULT_VERTEX_MM: f64 = 12.0;

/// 度数写法阈值：|值| >= 25 视为 "度"（100 度 = 1.00D）
pub const DEGREE_THRESHOLD: f64 = 25.0;

/// 隐形眼镜常见生产步长（D）
pub const QUARTER_STEP: f64 = 0.25;

/// 换算参数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpticsConfig {
    /// 镜眼距（mm）
    pub vertex_distance_mm: f64,
    /// 度数写法判定阈值（含）
    pub degree_threshold: f64,
    /// 结果取整步长（D）
    pub rounding_step: f64,
}

impl Default for OpticsConfig {
    fn default() -> Self {
        OpticsConfig {
            vertex_distance_mm: DEFAULT_VERTEX_MM,
            degree_threshold: DEGREE_THRESHOLD,
            rounding_step: QUARTER_STEP,
        }
    }
}

impl OpticsConfig {
    /// 镜眼距（m）
    pub fn vertex_distance_m(&self) -> f64 {
        self.vertex_distance_mm / 1000.0
    }
}
