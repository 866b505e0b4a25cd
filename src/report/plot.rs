//! # 换算曲线图
//!
//! 使用 `plotters` 绘制眼镜度数 → 隐形眼镜度数曲线。
//!
//! ## 图层
//! - 参考线 y = x（无镜眼距时）
//! - 精确换算曲线
//! - 0.25D 取整后的实际处方点
//!
//! ## 依赖关系
//! - 被 `commands/plot.rs` 调用
//! - 使用 `report/table.rs` 的 CurvePoint

use crate::error::{LensError, Result};
use crate::report::CurvePoint;

use plotters::prelude::*;
use std::path::Path;

/// 绘图参数
#[derive(Debug, Clone)]
pub struct PlotOptions {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub vertex_distance_mm: f64,
    pub use_svg: bool,
}

/// 生成换算曲线图
pub fn generate_curve_plot(
    points: &[CurvePoint],
    output_path: &Path,
    options: &PlotOptions,
) -> Result<()> {
    if points.is_empty() {
        return Err(LensError::PlotError("No data to plot".to_string()));
    }
    // 在创建输出文件之前检查
    axis_bounds(points)?;

    if options.use_svg {
        let root =
            SVGBackend::new(output_path, (options.width, options.height)).into_drawing_area();
        draw_curve_chart(&root, points, options)?;
        root.present()
            .map_err(|e| LensError::PlotError(e.to_string()))?;
    } else {
        let root =
            BitMapBackend::new(output_path, (options.width, options.height)).into_drawing_area();
        draw_curve_chart(&root, points, options)?;
        root.present()
            .map_err(|e| LensError::PlotError(e.to_string()))?;
    }
    Ok(())
}

/// 坐标范围（含 5% 边距，忽略非有限值）
///
/// 没有任何有限值可画时返回错误。
pub fn axis_bounds(points: &[CurvePoint]) -> Result<((f64, f64), (f64, f64))> {
    let xs = points.iter().map(|p| p.spectacle);
    let ys = points
        .iter()
        .flat_map(|p| [p.spectacle, p.exact, p.quantized]);

    match (finite_extent(xs), finite_extent(ys)) {
        (Some((x_min, x_max)), Some((y_min, y_max))) => {
            Ok((pad(x_min, x_max), pad(y_min, y_max)))
        }
        _ => Err(LensError::PlotError("no finite points to plot".to_string())),
    }
}

fn finite_extent(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((f64::min(lo, v), f64::max(hi, v))),
        })
}

fn pad(lo: f64, hi: f64) -> (f64, f64) {
    let margin = ((hi - lo).abs() * 0.05).max(0.25);
    (lo - margin, hi + margin)
}

/// 绘制曲线图
fn draw_curve_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    points: &[CurvePoint],
    options: &PlotOptions,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)
        .map_err(|e| LensError::PlotError(format!("{:?}", e)))?;

    let ((x_min, x_max), (y_min, y_max)) = axis_bounds(points)?;

    let mut chart = ChartBuilder::on(root)
        .caption(&options.title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(|e| LensError::PlotError(format!("{:?}", e)))?;

    chart
        .configure_mesh()
        .x_desc("Spectacle power (D)")
        .y_desc("Contact lens power (D)")
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(|e| LensError::PlotError(format!("{:?}", e)))?;

    // 参考线 y = x
    chart
        .draw_series(LineSeries::new(
            [(x_min, x_min), (x_max, x_max)],
            BLACK.mix(0.3).stroke_width(1),
        ))
        .map_err(|e| LensError::PlotError(format!("{:?}", e)))?
        .label("No vertex correction")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK.mix(0.3)));

    let line_color = RGBColor(0, 102, 204);
    chart
        .draw_series(LineSeries::new(
            points
                .iter()
                .filter(|p| p.exact.is_finite())
                .map(|p| (p.spectacle, p.exact)),
            line_color.stroke_width(2),
        ))
        .map_err(|e| LensError::PlotError(format!("{:?}", e)))?
        .label("Exact")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_color));

    let point_color = RGBColor(230, 90, 60);
    chart
        .draw_series(
            points
                .iter()
                .filter(|p| p.quantized.is_finite())
                .map(|p| Circle::new((p.spectacle, p.quantized), 3, point_color.filled())),
        )
        .map_err(|e| LensError::PlotError(format!("{:?}", e)))?
        .label("Prescribed (0.25 D steps)")
        .legend(move |(x, y)| Circle::new((x + 10, y), 3, point_color.filled()));

    // 镜眼距标注
    chart
        .draw_series(std::iter::once(Text::new(
            format!("Vertex: {:.1} mm", options.vertex_distance_mm),
            (x_min + (x_max - x_min) * 0.02, y_max - (y_max - y_min) * 0.05),
            ("sans-serif", 14).into_font().color(&BLACK),
        )))
        .map_err(|e| LensError::PlotError(format!("{:?}", e)))?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(|e| LensError::PlotError(format!("{:?}", e)))?;

    Ok(())
}
