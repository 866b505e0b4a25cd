//! # step 子命令 CLI 定义
//!
//! 模拟加减按钮：按输入的写法（度数/屈光度）步进。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/step.rs`

use super::options::{ConditionArg, OpticsArgs};

use clap::Args;

/// step 子命令参数
#[derive(Args, Debug)]
pub struct StepArgs {
    /// Current input text: "500" (degrees) or "5.00" (diopters)
    #[arg(allow_hyphen_values = true)]
    pub input: String,

    /// Step size in diopters per click (negative steps down)
    #[arg(short, long, default_value_t = 0.25, allow_negative_numbers = true)]
    pub delta: f64,

    /// Number of clicks to apply
    #[arg(short = 'n', long, default_value_t = 1)]
    pub times: usize,

    /// Refractive condition; decides the sign of the resulting power
    #[arg(short, long, value_enum, default_value = "myopia")]
    pub condition: ConditionArg,

    #[command(flatten)]
    pub optics: OpticsArgs,
}
