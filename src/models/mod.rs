//! # 数据模型模块
//!
//! 定义屈光状态与换算结果数据模型。
//!
//! ## 依赖关系
//! - 被 `commands/`, `report/`, `batch/` 使用
//! - 子模块: condition, conversion

pub mod condition;
pub mod conversion;

pub use condition::EyeCondition;
pub use conversion::{ConversionResult, VertexAdvice, DISCLAIMER};
