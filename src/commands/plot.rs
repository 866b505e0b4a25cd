//! # plot 命令实现
//!
//! 绘制换算曲线图。
//!
//! ## 依赖关系
//! - 使用 `cli/plot.rs` 定义的参数
//! - 使用 `report/table.rs` 生成数据, `report/plot.rs` 渲染

use crate::cli::plot::PlotArgs;
use crate::error::Result;
use crate::report::{self, plot::PlotOptions};
use crate::utils::output;

use std::path::Path;

/// 曲线采样步长（D）
const CURVE_STEP: f64 = 0.05;

/// 执行 plot 命令
pub fn execute(args: PlotArgs) -> Result<()> {
    output::print_header("Vertex Correction Curve");

    let config = args.optics.to_config()?;
    let points = report::curve_points(args.from, args.to, CURVE_STEP, &config)?;

    let use_svg = is_svg(&args.output);
    let options = PlotOptions {
        title: args
            .title
            .clone()
            .unwrap_or_else(|| "Spectacle → Contact Lens Power".to_string()),
        width: args.width,
        height: args.height,
        vertex_distance_mm: config.vertex_distance_mm,
        use_svg,
    };

    output::print_info(&format!(
        "Sampling {} points, format: {}",
        points.len(),
        if use_svg { "SVG" } else { "PNG" }
    ));

    let skipped = points
        .iter()
        .filter(|p| !p.exact.is_finite())
        .count();
    if skipped > 0 {
        output::print_warning(&format!(
            "{} points fall outside the formula's domain and are not drawn",
            skipped
        ));
    }

    report::plot::generate_curve_plot(&points, &args.output, &options)?;
    output::print_success(&format!("Curve saved to '{}'", args.output.display()));

    Ok(())
}

/// 按扩展名判断输出格式
fn is_svg(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|s| s.eq_ignore_ascii_case("svg"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_svg() {
        assert!(is_svg(Path::new("curve.svg")));
        assert!(is_svg(Path::new("curve.SVG")));
        assert!(!is_svg(Path::new("curve.png")));
        assert!(!is_svg(Path::new("curve")));
    }
}
