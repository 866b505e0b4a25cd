//! # table 子命令 CLI 定义
//!
//! 按区间打印度数对照表，可导出 CSV。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/table.rs`

use super::options::OpticsArgs;

use clap::Args;
use std::path::PathBuf;

/// table 子命令参数
#[derive(Args, Debug)]
pub struct TableArgs {
    /// Lowest spectacle power in diopters
    #[arg(long, default_value_t = -10.0, allow_negative_numbers = true)]
    pub from: f64,

    /// Highest spectacle power in diopters
    #[arg(long, default_value_t = 10.0, allow_negative_numbers = true)]
    pub to: f64,

    /// Row spacing in diopters
    #[arg(long, default_value_t = 0.25)]
    pub step: f64,

    /// Only list rows where the contact lens power differs from the spectacle power
    #[arg(long, default_value_t = false)]
    pub changed_only: bool,

    /// Also export the chart to this CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub optics: OpticsArgs,
}
