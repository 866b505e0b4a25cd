//! # 对照表生成
//!
//! 在给定眼镜度数区间内按步长列出换算结果。

use crate::error::{LensError, Result};
use crate::models::ConversionResult;
use crate::optics::{self, OpticsConfig};

/// 单次生成的行数上限
const MAX_ROWS: usize = 100_000;

/// 曲线上的一点
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    /// 眼镜度数（D）
    pub spectacle: f64,
    /// 精确换算值（D）
    pub exact: f64,
    /// 取整后（D）
    pub quantized: f64,
}

/// 区间内的等步长度数序列（含两端）
pub fn power_range(from: f64, to: f64, step: f64) -> Result<Vec<f64>> {
    if !from.is_finite() || !to.is_finite() {
        return Err(LensError::InvalidRange(format!("{} to {}", from, to)));
    }
    if !(step.is_finite() && step > 0.0) {
        return Err(LensError::InvalidArgument(format!(
            "step must be positive, got {}",
            step
        )));
    }
    if to < from {
        return Err(LensError::InvalidRange(format!(
            "{} to {} (from must not exceed to)",
            from, to
        )));
    }

    // 先在 f64 上判断行数，再转 usize
    let span = ((to - from) / step + 1e-9).floor();
    if !span.is_finite() || span >= MAX_ROWS as f64 {
        return Err(LensError::InvalidRange(format!(
            "{} to {} with step {} yields too many rows (limit {})",
            from, to, step, MAX_ROWS
        )));
    }
    let count = span as usize + 1;

    // 逐项相乘，避免累加误差
    Ok((0..count)
        .map(|i| {
            let v = from + i as f64 * step;
            (v * 1e9).round() / 1e9
        })
        .collect())
}

/// 对照表
pub fn conversion_table(
    from: f64,
    to: f64,
    step: f64,
    config: &OpticsConfig,
) -> Result<Vec<ConversionResult>> {
    Ok(power_range(from, to, step)?
        .into_iter()
        .map(|p| ConversionResult::compute(p, config))
        .collect())
}

/// 曲线数据（精确值与取整值）
pub fn curve_points(
    from: f64,
    to: f64,
    step: f64,
    config: &OpticsConfig,
) -> Result<Vec<CurvePoint>> {
    Ok(power_range(from, to, step)?
        .into_iter()
        .map(|p| CurvePoint {
            spectacle: p,
            exact: optics::exact_contact_power(p, config.vertex_distance_mm),
            quantized: optics::contact_power_with(p, config),
        })
        .collect())
}
