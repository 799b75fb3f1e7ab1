//! # 物理常数与单位换算
//!
//! 网格与材料计算所用的基本物理常数。文献中的材料参数以 eV/Å 给出，
//! `Grid` 在构造和访问器中用这里的比例因子换算到 SI。
//!
//! ## 数据来源
//! CODATA 2018 推荐值
//!
//! ## 依赖关系
//! - 被 `band/material.rs`, `band/grid.rs`, `band/export.rs` 使用
//! - 纯静态数据，无外部依赖

/// 基本电荷 e (C)，同时也是 eV -> J 的换算因子
pub const ELEMENTARY_CHARGE: f64 = 1.602176634e-19;

/// 自由电子质量 m0 (kg)
pub const ELECTRON_MASS: f64 = 9.1093837015e-31;

/// 约化普朗克常数 ħ (J·s)
pub const HBAR: f64 = 1.054571817e-34;

/// 场强换算：1 kV/cm = 1e5 V/m
pub const KV_PER_CM: f64 = 1.0e5;

/// 长度换算：1 Å = 1e-10 m
pub const ANGSTROM: f64 = 1.0e-10;

/// 单位换算表
///
/// 在构造时传入 `Material`/`Grid` 并持有，而不是作为全局可变状态，
/// 这样单位处理可以单独测试。
#[derive(Debug, Clone, Copy)]
pub struct Units {
    /// 基本电荷 (C)
    pub e: f64,
    /// 自由电子质量 (kg)
    pub m0: f64,
    /// 约化普朗克常数 (J·s)
    pub hbar: f64,
    /// kV/cm -> V/m
    pub kv_per_cm: f64,
    /// Å -> m
    pub angstrom: f64,
}

impl Default for Units {
    fn default() -> Self {
        Self {
            e: ELEMENTARY_CHARGE,
            m0: ELECTRON_MASS,
            hbar: HBAR,
            kv_per_cm: KV_PER_CM,
            angstrom: ANGSTROM,
        }
    }
}
