//! # lensconv 命令行入口
//!
//! ## 子命令
//! - `convert` - 单次换算
//! - `step`    - 加减步进
//! - `table`   - 度数对照表
//! - `batch`   - 处方表批量换算
//! - `plot`    - 换算曲线图

use clap::Parser;
use lensconv::cli::Cli;
use lensconv::{commands, utils};

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
