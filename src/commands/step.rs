//! # step 命令实现
//!
//! 连续按加减按钮 N 次，逐步打印输入文本、判定的写法与对应度数。
//!
//! ## 依赖关系
//! - 使用 `cli/step.rs` 定义的参数
//! - 使用 `optics/step.rs`, `utils/output.rs`

use crate::cli::step::StepArgs;
use crate::error::{LensError, Result};
use crate::models::{ConversionResult, EyeCondition};
use crate::optics::{self, format_diopter, InputConvention, OpticsConfig};
use crate::utils::output;

/// 单步记录
#[derive(Debug, Clone, PartialEq)]
pub struct StepRecord {
    pub raw: String,
    pub convention: InputConvention,
    pub spectacle: f64,
    pub contact: f64,
}

/// 执行 step 命令
pub fn execute(args: StepArgs) -> Result<()> {
    let config = args.optics.to_config()?;
    if !args.delta.is_finite() {
        return Err(LensError::InvalidArgument(format!(
            "delta must be a finite number, got {}",
            args.delta
        )));
    }

    let condition: EyeCondition = args.condition.into();
    let records = run_steps(&args.input, args.delta, args.times, condition, &config);

    output::print_header(&format!(
        "Stepping '{}' by {:+.2} D × {}",
        args.input, args.delta, args.times
    ));

    for (i, record) in records.iter().enumerate() {
        let label = if i == 0 {
            "start".to_string()
        } else {
            format!("#{}", i)
        };
        output::print_field(
            &label,
            &format!(
                "{:<8} [{}] glasses {} -> contacts {}",
                record.raw,
                record.convention,
                format_diopter(record.spectacle),
                format_diopter(record.contact)
            ),
        );
    }

    if let Some(last) = records.last() {
        println!();
        output::print_done(&format!("New input: {}", last.raw));
    }

    Ok(())
}

/// 记录起点及每一步之后的状态
pub fn run_steps(
    raw: &str,
    delta: f64,
    times: usize,
    condition: EyeCondition,
    config: &OpticsConfig,
) -> Vec<StepRecord> {
    let mut records = Vec::with_capacity(times + 1);
    let mut current = raw.to_string();
    records.push(record_for(&current, condition, config));

    for _ in 0..times {
        current = optics::step_input(&current, delta, config.degree_threshold);
        records.push(record_for(&current, condition, config));
    }

    records
}

fn record_for(raw: &str, condition: EyeCondition, config: &OpticsConfig) -> StepRecord {
    let spectacle = condition.apply(config.normalize(raw));
    let result = ConversionResult::compute(spectacle, config);
    StepRecord {
        raw: raw.to_string(),
        convention: optics::detect_convention(raw, config.degree_threshold),
        spectacle,
        contact: result.converted,
    }
}
