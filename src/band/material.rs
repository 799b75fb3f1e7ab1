//! # 材料体系参数库
//!
//! 提供量子阱异质结构常用材料体系的阱/垒参数，以及由合金组分
//! 线性插值得到的派生物理量。
//!
//! ## 公式
//! 插值假定为线性：p(x) = p_well + x·(p_barr − p_well)
//!
//! Kane 非抛物性：α_K(x) = 1/Eg(x)
//!
//! Ekenberg 非抛物性（Golubov 系数链）：
//! ```text
//! E0  = Eg' − Eg
//! ksi = P⁴ / (9·Eg³·(Eg+Δ0)²)
//! hi  = P²·Q² / (9·E0·Eg²·(Eg+Δ0)²)
//! α0  = −ksi·(3Eg² + 4Eg·Δ0 + 2Δ0²)·(3Eg + 2Δ0)/(Eg+Δ0) − 2·hi·Δ0²
//! β0  = −12·hi·(3Eg² + 4Eg·Δ0 + Δ0²)
//! α0' = −(2·m·e·Å²/(ħ·u0))²·α0,  u0 = ħ/m0        (eV⁻¹)
//! ```
//!
//! ## 数据来源
//! 文献值，能量单位 eV，动量矩阵元单位 eV·Å。垒高由带隙差和
//! 体系特定的导带偏移比例给出：V_barr = ratio·(Eg_barr − Eg_well)。
//!
//! ## 依赖关系
//! - 被 `band/grid.rs` 调用，逐格点插值
//! - 使用 `band/constants.rs` 的单位换算表

use crate::band::constants::Units;
use crate::error::{MqwbandError, Result};

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 支持的异质结构材料体系（封闭枚举）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaterialSystem {
    /// GaAs 阱 / Al(Ga)As 垒
    AlGaAs,
    /// GaSb 阱 / Al(Ga)Sb 垒
    AlGaSb,
    /// InGaAs 阱 / InAlAs 垒
    InGaAsInAlAs,
    /// InGaAs 阱 / GaAsSb 垒
    InGaAsGaAsSb,
}

impl MaterialSystem {
    /// 全部支持的体系，按文献表顺序
    pub const ALL: [MaterialSystem; 4] = [
        MaterialSystem::AlGaAs,
        MaterialSystem::AlGaSb,
        MaterialSystem::InGaAsInAlAs,
        MaterialSystem::InGaAsGaAsSb,
    ];

    /// 导带偏移比例：垒高 = ratio·(Eg_barr − Eg_well)
    pub fn band_offset_ratio(self) -> f64 {
        match self {
            MaterialSystem::AlGaAs => 0.67,
            MaterialSystem::AlGaSb => 0.55,
            MaterialSystem::InGaAsInAlAs => 0.73,
            MaterialSystem::InGaAsGaAsSb => 1.0,
        }
    }
}

impl FromStr for MaterialSystem {
    type Err = MqwbandError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "algaas" => Ok(MaterialSystem::AlGaAs),
            "algasb" => Ok(MaterialSystem::AlGaSb),
            "ingaas_inalas" => Ok(MaterialSystem::InGaAsInAlAs),
            "ingaas_gaassb" => Ok(MaterialSystem::InGaAsGaAsSb),
            _ => Err(MqwbandError::UnsupportedMaterial(s.to_string())),
        }
    }
}

impl std::fmt::Display for MaterialSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaterialSystem::AlGaAs => write!(f, "AlGaAs"),
            MaterialSystem::AlGaSb => write!(f, "AlGaSb"),
            MaterialSystem::InGaAsInAlAs => write!(f, "InGaAs_InAlAs"),
            MaterialSystem::InGaAsGaAsSb => write!(f, "InGaAs_GaAsSb"),
        }
    }
}

/// 阱/垒成对参数
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ParamPair {
    /// 阱侧值 (x = 0)
    pub well: f64,
    /// 垒侧值 (x = 1)
    pub barrier: f64,
}

impl ParamPair {
    pub fn new(well: f64, barrier: f64) -> Self {
        ParamPair { well, barrier }
    }
}

/// 材料参数表
///
/// 常数在构造时按所选体系固定，此后不再变动。
#[derive(Debug, Clone)]
pub struct Material {
    /// 所属材料体系
    pub system: MaterialSystem,
    /// 有效质量 (m0 单位)
    pub m: ParamPair,
    /// 基态带隙 Eg (eV)
    pub eg: ParamPair,
    /// 高能带隙 Eg' (eV)
    pub egp: ParamPair,
    /// 自旋轨道分裂 Δ0 (eV)
    pub d0: ParamPair,
    /// 动量矩阵元 P (eV·Å)
    pub p: ParamPair,
    /// 动量矩阵元 Q (eV·Å)
    pub q: ParamPair,
    /// 限制势 (eV)，阱侧恒为 0
    pub v: ParamPair,
    units: Units,
}

impl Material {
    /// 按体系名称选择材料表
    ///
    /// 名称不在封闭枚举中时返回 `UnsupportedMaterial`。
    pub fn select(name: &str) -> Result<Material> {
        let system = name.parse::<MaterialSystem>()?;
        Ok(Material::for_system(system))
    }

    /// 按体系构造材料表（SI 常数）
    pub fn for_system(system: MaterialSystem) -> Material {
        Material::with_units(system, Units::default())
    }

    /// 按体系构造材料表，使用给定的单位换算表
    pub fn with_units(system: MaterialSystem, units: Units) -> Material {
        let (m, eg, egp, d0, p, q) = match system {
            MaterialSystem::AlGaAs => (
                ParamPair::new(0.067, 0.15),
                ParamPair::new(1.424, 2.777),
                ParamPair::new(4.48, 4.55),
                ParamPair::new(0.341, 0.3),
                ParamPair::new(9.88, 8.88),
                ParamPair::new(8.68, 8.07),
            ),
            MaterialSystem::AlGaSb => (
                ParamPair::new(0.041, 0.12),
                ParamPair::new(0.81, 1.7),
                ParamPair::new(3.11, 3.53),
                ParamPair::new(0.76, 0.67),
                ParamPair::new(9.69, 8.57),
                ParamPair::new(8.25, 7.8),
            ),
            MaterialSystem::InGaAsInAlAs => (
                ParamPair::new(0.043, 0.075),
                ParamPair::new(0.8161, 1.5296),
                ParamPair::new(4.508, 4.514),
                ParamPair::new(0.3617, 0.3416),
                ParamPair::new(9.4189, 8.9476),
                ParamPair::new(8.1712, 7.888),
            ),
            MaterialSystem::InGaAsGaAsSb => (
                ParamPair::new(0.043, 0.045),
                ParamPair::new(0.8161, 1.1786),
                ParamPair::new(4.508, 3.8393),
                ParamPair::new(0.3617, 0.39637),
                ParamPair::new(9.4189, 9.7869),
                ParamPair::new(8.1712, 8.4693),
            ),
        };

        let v = ParamPair::new(0.0, system.band_offset_ratio() * (eg.barrier - eg.well));

        Material {
            system,
            m,
            eg,
            egp,
            d0,
            p,
            q,
            v,
            units,
        }
    }

    /// 按合金组分线性插值
    ///
    /// 不做 [0,1] 范围检查，越界组分静默外推，由调用方保证输入合理。
    pub fn interpolate(&self, x: f64, pair: ParamPair) -> f64 {
        pair.well + x * (pair.barrier - pair.well)
    }

    /// Kane 非抛物性系数 α_K(x) = 1/Eg(x)  (eV⁻¹)
    ///
    /// 插值带隙为 0 时结果为非有限值，不作特殊处理。
    pub fn kane_nonparabolicity(&self, x: f64) -> f64 {
        1.0 / self.interpolate(x, self.eg)
    }

    /// Golubov 基础系数 (α0, β0)
    fn golubov_coefficients(&self, x: f64) -> (f64, f64) {
        let eg = self.interpolate(x, self.eg);
        let egp = self.interpolate(x, self.egp);
        let d0 = self.interpolate(x, self.d0);
        let p = self.interpolate(x, self.p);
        let q = self.interpolate(x, self.q);

        let e0 = egp - eg;
        let ksi = p.powi(4) / (9.0 * eg.powi(3) * (eg + d0).powi(2));
        let hi = p.powi(2) * q.powi(2) / (9.0 * e0 * eg.powi(2) * (eg + d0).powi(2));

        let alpha0 = -ksi * (3.0 * eg.powi(2) + 4.0 * eg * d0 + 2.0 * d0.powi(2))
            * (3.0 * eg + 2.0 * d0)
            / (eg + d0)
            - 2.0 * hi * d0.powi(2);
        let beta0 = -12.0 * hi * (3.0 * eg.powi(2) + 4.0 * eg * d0 + d0.powi(2));

        (alpha0, beta0)
    }

    /// Ekenberg 非抛物性系数 (α0', β0')  (eV⁻¹)
    ///
    /// 在 Golubov 系数上乘以质量相关的标度因子 −(2·m·e·Å²/(ħ·u0))²。
    pub fn ekenberg_nonparabolicity(&self, x: f64) -> (f64, f64) {
        let m = self.interpolate(x, self.m);
        let (alpha0, beta0) = self.golubov_coefficients(x);

        let e = self.units.e;
        let a = self.units.angstrom;
        let hbar = self.units.hbar;
        let u0 = hbar / self.units.m0;

        let scale = (2.0 * m * e * a * a / (hbar * u0)).powi(2);

        (-scale * alpha0, -scale * beta0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_known_systems() {
        for name in ["AlGaAs", "AlGaSb", "InGaAs_InAlAs", "InGaAs_GaAsSb"] {
            let material = Material::select(name).unwrap();
            assert_eq!(material.system.to_string(), name);
        }
    }

    #[test]
    fn test_select_unsupported() {
        let err = Material::select("GaN").unwrap_err();
        assert!(matches!(err, MqwbandError::UnsupportedMaterial(_)));
    }

    #[test]
    fn test_interpolate_endpoints() {
        for system in MaterialSystem::ALL {
            let material = Material::for_system(system);
            for pair in [
                material.m,
                material.eg,
                material.egp,
                material.d0,
                material.p,
                material.q,
                material.v,
            ] {
                assert!(
                    (material.interpolate(0.0, pair) - pair.well).abs() < 1e-12,
                    "x=0 should give well value for {}",
                    system
                );
                assert!(
                    (material.interpolate(1.0, pair) - pair.barrier).abs() < 1e-12,
                    "x=1 should give barrier value for {}",
                    system
                );
            }
        }
    }

    #[test]
    fn test_interpolate_extrapolates_out_of_range() {
        let material = Material::for_system(MaterialSystem::AlGaAs);
        // 越界组分不截断
        let below = material.interpolate(-1.0, material.eg);
        assert!((below - (2.0 * 1.424 - 2.777)).abs() < 1e-12);
    }

    #[test]
    fn test_band_offset() {
        let material = Material::for_system(MaterialSystem::AlGaAs);
        assert_eq!(material.v.well, 0.0);
        assert!((material.v.barrier - 0.67 * (2.777 - 1.424)).abs() < 1e-12);

        // InGaAs/GaAsSb 的偏移比例为 1：垒高等于带隙差
        let material = Material::for_system(MaterialSystem::InGaAsGaAsSb);
        assert!((material.v.barrier - (1.1786 - 0.8161)).abs() < 1e-12);
    }

    #[test]
    fn test_kane_nonparabolicity() {
        let material = Material::for_system(MaterialSystem::AlGaAs);
        // 阱侧 GaAs：α_K = 1/1.424 eV⁻¹
        assert!((material.kane_nonparabolicity(0.0) - 1.0 / 1.424).abs() < 1e-12);
        assert!((material.kane_nonparabolicity(1.0) - 1.0 / 2.777).abs() < 1e-12);
    }

    #[test]
    fn test_ekenberg_positive_and_finite() {
        for system in MaterialSystem::ALL {
            let material = Material::for_system(system);
            for x in [0.0, 0.5, 1.0] {
                let (alpha, beta) = material.ekenberg_nonparabolicity(x);
                assert!(alpha.is_finite() && alpha > 0.0, "alpha for {}", system);
                assert!(beta.is_finite() && beta > 0.0, "beta for {}", system);
            }
        }
    }

    #[test]
    fn test_ekenberg_magnitude_gaas() {
        // GaAs 阱的 Ekenberg α 与 Kane α 应为同一量级 (eV⁻¹)
        let material = Material::for_system(MaterialSystem::AlGaAs);
        let (alpha, _) = material.ekenberg_nonparabolicity(0.0);
        let kane = material.kane_nonparabolicity(0.0);
        assert!(alpha > 0.1 && alpha < 10.0, "alpha = {}", alpha);
        assert!(alpha / kane > 0.1 && alpha / kane < 10.0);
    }
}
