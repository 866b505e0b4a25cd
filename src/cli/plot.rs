//! # plot 子命令 CLI 定义
//!
//! 绘制换算曲线，格式由扩展名决定（.svg 为矢量图，其余为 PNG）。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/plot.rs`

use super::options::OpticsArgs;

use clap::Args;
use std::path::PathBuf;

/// plot 子命令参数
#[derive(Args, Debug)]
pub struct PlotArgs {
    /// Lowest spectacle power in diopters
    #[arg(long, default_value_t = -20.0, allow_negative_numbers = true)]
    pub from: f64,

    /// Highest spectacle power in diopters
    #[arg(long, default_value_t = 20.0, allow_negative_numbers = true)]
    pub to: f64,

    /// Output image path (.png or .svg)
    #[arg(short, long, default_value = "vertex_curve.png")]
    pub output: PathBuf,

    /// Figure width in pixels (PNG) or points (SVG)
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Figure height in pixels (PNG) or points (SVG)
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Plot title
    #[arg(long)]
    pub title: Option<String>,

    #[command(flatten)]
    pub optics: OpticsArgs,
}
