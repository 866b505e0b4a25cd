//! # convert 命令实现
//!
//! 单次换算并输出结果卡片。
//!
//! ## 流程
//! 1. 归一化输入（"500" → 5.00）
//! 2. 按近视/远视施加符号
//! 3. 镜眼距校正并取整
//! 4. 输出结果卡片或 JSON
//!
//! ## 依赖关系
//! - 使用 `cli/convert.rs` 定义的参数
//! - 使用 `optics/`, `models/`, `utils/output.rs`

use crate::cli::convert::ConvertArgs;
use crate::error::Result;
use crate::models::{ConversionResult, EyeCondition, DISCLAIMER};
use crate::optics::{format_diopter, OpticsConfig};
use crate::utils::output;

/// 执行 convert 命令
pub fn execute(args: ConvertArgs) -> Result<()> {
    let config = args.optics.to_config()?;
    let condition: EyeCondition = args.condition.into();
    let result = convert_input(&args.input, condition, &config);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print_result_card(&args.input, condition, &result);
    Ok(())
}

/// 输入文本 → 换算结果
pub fn convert_input(raw: &str, condition: EyeCondition, config: &OpticsConfig) -> ConversionResult {
    let diopters = config.normalize(raw);
    let spectacle = condition.apply(diopters);
    ConversionResult::compute(spectacle, config)
}

/// 打印结果卡片
fn print_result_card(raw: &str, condition: EyeCondition, result: &ConversionResult) {
    output::print_header("Contact Lens Power Conversion");

    output::print_info(&format!(
        "Current setting: {} ({}) {:.2} D",
        condition,
        condition.label_zh(),
        result.original.abs()
    ));
    output::print_field("Input", raw);
    output::print_field("Vertex distance", &format!("{} mm", result.vertex_distance_mm));
    output::print_field("Formula", &result.formula);
    println!();

    output::print_conversion(
        &format!("Glasses {}", format_diopter(result.original)),
        &format!("Contacts {}", format_diopter(result.converted)),
    );

    if !result.converted.is_finite() {
        output::print_warning("Power and vertex distance are outside the range the formula covers");
    }

    println!();
    if result.is_changed() {
        output::print_info(&result.advice().to_string());
    } else {
        output::print_success(&result.advice().to_string());
    }

    println!();
    output::print_note(DISCLAIMER);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_input_for_myopia() {
        let result = convert_input("500", EyeCondition::Myopia, &OpticsConfig::default());
        assert_eq!(result.original, -5.0);
        assert_eq!(result.converted, -4.75);
    }

    #[test]
    fn test_sign_is_forced_by_condition() {
        let config = OpticsConfig::default();
        let result = convert_input("-800", EyeCondition::Hyperopia, &config);
        assert_eq!(result.original, 8.0);
        assert_eq!(result.converted, 8.75);

        let result = convert_input("+3.00", EyeCondition::Myopia, &config);
        assert_eq!(result.original, -3.0);
    }

    #[test]
    fn test_garbage_input_is_zero() {
        let result = convert_input("abc", EyeCondition::Myopia, &OpticsConfig::default());
        assert_eq!(result.converted, 0.0);
        assert_eq!(format_diopter(result.converted), "0.00");
    }

    #[test]
    fn test_custom_vertex_distance() {
        let config = OpticsConfig {
            vertex_distance_mm: 14.0,
            ..OpticsConfig::default()
        };
        // -10 / (1 + 0.14) = -8.77
        let result = convert_input("1000", EyeCondition::Myopia, &config);
        assert_eq!(result.converted, -8.75);
    }
}
