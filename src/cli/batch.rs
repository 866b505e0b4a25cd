//! # batch 子命令 CLI 定义
//!
//! 批量换算处方表（CSV），支持单文件与目录。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/batch.rs`

use super::options::OpticsArgs;

use clap::Args;
use std::path::PathBuf;

/// batch 子命令参数
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Input: a prescription sheet (CSV) or a directory of sheets
    pub input: PathBuf,

    /// Output directory (default: next to each input sheet)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Glob pattern for sheets in directory mode (comma separated)
    #[arg(short, long, default_value = "*.csv")]
    pub pattern: String,

    /// Recurse into subdirectories
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Overwrite existing output files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,

    #[command(flatten)]
    pub optics: OpticsArgs,
}
