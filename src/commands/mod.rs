//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `optics/`, `models/`, `report/`, `batch/`, `utils/`
//! - 子模块: convert, step, table, batch, plot

pub mod batch;
pub mod convert;
pub mod plot;
pub mod step;
pub mod table;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Convert(args) => convert::execute(args),
        Commands::Step(args) => step::execute(args),
        Commands::Table(args) => table::execute(args),
        Commands::Batch(args) => batch::execute(args),
        Commands::Plot(args) => plot::execute(args),
    }
}
