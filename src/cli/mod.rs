//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `convert`: 单次换算，输出结果卡片
//! - `step`: 加减步进（度数/屈光度两种写法）
//! - `table`: 度数对照表
//! - `batch`: 处方表批量换算
//! - `plot`: 换算曲线图
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: options, convert, step, table, batch, plot

pub mod batch;
pub mod convert;
pub mod options;
pub mod plot;
pub mod step;
pub mod table;

use clap::{Parser, Subcommand};

/// lensconv - 眼镜度数换算隐形眼镜度数
#[derive(Parser)]
#[command(name = "lensconv")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Convert spectacle lens power to contact lens power (vertex distance correction)",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Convert one spectacle power (accepts "500" or "5.00") to contact lens power
    Convert(convert::ConvertArgs),

    /// Step an input up or down in whichever notation it is written in
    Step(step::StepArgs),

    /// Print a spectacle-to-contact conversion chart
    Table(table::TableArgs),

    /// Convert prescription sheets (CSV: id,power[,condition])
    Batch(batch::BatchArgs),

    /// Plot the conversion curve (PNG or SVG)
    Plot(plot::PlotArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_convert_with_negative_input() {
        let cli = Cli::try_parse_from(["lensconv", "convert", "-5.00", "--condition", "h"])
            .unwrap();
        match cli.command {
            Commands::Convert(args) => {
                assert_eq!(args.input, "-5.00");
                assert_eq!(args.condition, options::ConditionArg::Hyperopia);
                assert!(!args.json);
            }
            _ => panic!("expected convert"),
        }
    }

    #[test]
    fn test_parse_step_negative_delta() {
        let cli = Cli::try_parse_from(["lensconv", "step", "500", "--delta", "-0.25"]).unwrap();
        match cli.command {
            Commands::Step(args) => {
                assert_eq!(args.delta, -0.25);
                assert_eq!(args.times, 1);
            }
            _ => panic!("expected step"),
        }
    }
}
