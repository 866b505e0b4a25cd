//! # convert 子命令 CLI 定义
//!
//! 单次换算：输入眼镜度数（"500" 或 "5.00"），输出隐形眼镜度数。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/convert.rs`

use super::options::{ConditionArg, OpticsArgs};

use clap::Args;

/// convert 子命令参数
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Spectacle power as typed: "500" (degrees) or "5.00" (diopters)
    #[arg(allow_hyphen_values = true)]
    pub input: String,

    /// Refractive condition; decides the sign of the power
    #[arg(short, long, value_enum, default_value = "myopia")]
    pub condition: ConditionArg,

    /// Print the result as JSON instead of a result card
    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[command(flatten)]
    pub optics: OpticsArgs,
}
