//! # 报表模块
//!
//! 换算对照表的生成、导出与绘图。
//!
//! ## 子模块
//! - `table`: 按范围生成对照表与曲线数据
//! - `export`: CSV 导出
//! - `plot`: 换算曲线图（PNG/SVG）
//!
//! ## 依赖关系
//! - 被 `commands/table.rs`, `commands/plot.rs`, `commands/batch.rs` 使用
//! - 使用 `models/`, `optics/`

pub mod export;
pub mod plot;
pub mod table;

pub use table::{conversion_table, curve_points, power_range, CurvePoint};
