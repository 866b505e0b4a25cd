//! # 批量处理模块
//!
//! 处方表（CSV）的批量换算。
//!
//! ## 功能
//! - 自动检测输入类型（文件/目录）
//! - 收集匹配的处方表
//! - 并行处理
//! - 进度反馈与统计
//!
//! ## 依赖关系
//! - 被 `commands/batch.rs` 使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod runner;
pub mod sheet;

pub use collector::SheetCollector;
pub use runner::{BatchResult, BatchRunner, ProcessResult};
pub use sheet::{ContactRow, PrescriptionRow};
