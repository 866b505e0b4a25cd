//! # 镜眼距校正
//!
//! 把镜片平面的度数换算到角膜平面。
//!
//! ## 公式
//! ```text
//! Fc = Fs / (1 - d · Fs)
//! ```
//! - Fc: 隐形眼镜度数（D）
//! - Fs: 眼镜度数（D）
//! - d: 镜眼距（m，通常 0.012）
//!
//! 结果按 0.25D 取整。极端输入（d·Fs → 1）得到 ±inf/NaN，原样返回，不截断。
//!
//! ## 依赖关系
//! - 被 `models/`, `commands/`, `report/` 使用

use super::{OpticsConfig, QUARTER_STEP};

/// 未取整的角膜平面度数
pub fn exact_contact_power(spectacle_power: f64, vertex_distance_mm: f64) -> f64 {
    if spectacle_power == 0.0 {
        return 0.0;
    }

    let d = vertex_distance_mm / 1000.0;
    spectacle_power / (1.0 - d * spectacle_power)
}

/// 取整到最近的 `step` 倍数（半数向 +∞ 舍入）
pub fn quantize(value: f64, step: f64) -> f64 {
    (value / step + 0.5).floor() * step
}

/// 隐形眼镜度数（0.25D 步长）
pub fn contact_power(spectacle_power: f64, vertex_distance_mm: f64) -> f64 {
    if spectacle_power == 0.0 {
        return 0.0;
    }

    quantize(
        exact_contact_power(spectacle_power, vertex_distance_mm),
        QUARTER_STEP,
    )
}

/// 按配置的镜眼距与步长计算
pub fn contact_power_with(spectacle_power: f64, config: &OpticsConfig) -> f64 {
    if spectacle_power == 0.0 {
        return 0.0;
    }

    quantize(
        exact_contact_power(spectacle_power, config.vertex_distance_mm),
        config.rounding_step,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_quarter_multiple(v: f64) -> bool {
        ((v * 4.0) - (v * 4.0).round()).abs() < 1e-9
    }

    #[test]
    fn test_zero_power() {
        assert_eq!(contact_power(0.0, 12.0), 0.0);
        assert_eq!(contact_power(0.0, 20.0), 0.0);
        assert_eq!(contact_power(-0.0, 12.0), 0.0);
    }

    #[test]
    fn test_myopia_minus_five() {
        let exact = exact_contact_power(-5.0, 12.0);
        assert!((exact - (-5.0 / 1.06)).abs() < 1e-12);
        assert_eq!(contact_power(-5.0, 12.0), -4.75);
    }

    #[test]
    fn test_hyperopia_plus_eight() {
        let exact = exact_contact_power(8.0, 12.0);
        assert!((exact - 8.849557).abs() < 1e-5);
        assert_eq!(contact_power(8.0, 12.0), 8.75);
    }

    #[test]
    fn test_results_are_quarter_steps() {
        let mut p = -20.0;
        while p <= 20.0 {
            let c = contact_power(p, 12.0);
            assert!(is_quarter_multiple(c), "{} -> {} not a quarter step", p, c);
            p += 0.13;
        }
    }

    #[test]
    fn test_low_power_is_nearly_unchanged() {
        for i in -15..=15 {
            let p = i as f64 * 0.25;
            let c = contact_power(p, 12.0);
            assert!((c - p).abs() <= 0.25 + 1e-9, "{} -> {}", p, c);
        }
    }

    #[test]
    fn test_half_rounds_up() {
        assert_eq!(quantize(0.125, 0.25), 0.25);
        assert_eq!(quantize(-0.125, 0.25), 0.0);
        assert_eq!(quantize(1.3, 0.5), 1.5);
    }

    #[test]
    fn test_out_of_domain_propagates() {
        // d · Fs = 1 → 除零
        let c = contact_power(2.0, 500.0);
        assert!(c.is_infinite());
        let c = contact_power(f64::NAN, 12.0);
        assert!(c.is_nan());
    }

    #[test]
    fn test_config_step() {
        let config = OpticsConfig {
            rounding_step: 0.5,
            ..OpticsConfig::default()
        };
        assert_eq!(contact_power_with(-5.0, &config), -4.5);
        assert_eq!(contact_power_with(0.0, &config), 0.0);
        assert_eq!(
            contact_power_with(-5.0, &OpticsConfig::default()),
            contact_power(-5.0, 12.0)
        );
    }
}
