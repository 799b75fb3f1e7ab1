//! # 结构网格
//!
//! 由层堆叠描述构建多量子阱体系的一维空间网格，并生成下游
//! 薛定谔求解器所需的各物理量剖面：
//! - z 坐标轴
//! - 带边限制势剖面（含偏置电场倾斜与零点归一）
//! - 有效质量剖面
//! - 非抛物性参数剖面（Kane / Ekenberg）
//!
//! 剖面通过材料体系阱/垒参数按各格点合金组分线性插值得到。
//!
//! ## 依赖关系
//! - 被 `commands/profile.rs`, `commands/sweep.rs` 调用
//! - 使用 `models/layers.rs` 的 LayerStack
//! - 使用 `band/material.rs` 逐格点插值
//! - 使用 `band/constants.rs` 的单位换算表

use crate::band::constants::Units;
use crate::band::material::{Material, MaterialSystem};
use crate::error::{MqwbandError, Result};
use crate::models::LayerStack;

/// 默认能量收敛容差 (eV)，供下游求解器使用
const DEFAULT_ENERGY_TOLERANCE: f64 = 0.05e-3;

/// 结构网格
///
/// 网格与组分剖面在构造时一次建好；四个剖面访问器每次调用都重新
/// 计算，保证始终反映当前偏置电场（不做缓存，N 只有数百到数千）。
#[derive(Debug, Clone)]
pub struct Grid {
    /// 网格步长 (m)
    dz: f64,
    /// z 坐标轴 (m)，等间距严格递增
    z: Vec<f64>,
    /// 每个格点的合金组分，按层分段常数
    x: Vec<f64>,
    /// 材料参数表，构造时选定后不再变动
    material: Material,
    /// 偏置电场 (kV/cm)
    field: f64,
    /// 能量收敛容差 (eV)
    energy_tolerance: f64,
    units: Units,
}

impl Grid {
    /// 由层堆叠构建网格，步长单位 Å
    pub fn new(stack: &LayerStack, dz: f64, system: MaterialSystem) -> Result<Grid> {
        Grid::with_units(stack, dz, system, Units::default())
    }

    /// 同 [`Grid::new`]，使用给定的单位换算表
    pub fn with_units(
        stack: &LayerStack,
        dz: f64,
        system: MaterialSystem,
        units: Units,
    ) -> Result<Grid> {
        if stack.is_empty() {
            return Err(MqwbandError::EmptyLayerStack);
        }
        for (index, layer) in stack.layers.iter().enumerate() {
            if layer.thickness <= 0.0 {
                return Err(MqwbandError::NonPositiveThickness {
                    index,
                    thickness: layer.thickness,
                });
            }
        }

        // 坐标轴先在输入单位 (Å) 下生成，覆盖 [0, total + dz)，
        // 即在总厚度之外多出一个边界填充点
        let total = stack.total_thickness();
        let n = ((total + dz) / dz).ceil() as usize;
        let mut z: Vec<f64> = (0..n).map(|i| i as f64 * dz).collect();

        // 单次前向扫描：层指针与坐标扫描同步推进，整体 O(N)。
        // 坐标到达累计厚度阈值时归入下一层。
        let layers = &stack.layers;
        let mut x = vec![0.0; n];
        let mut layer = 0;
        let mut cum_sum = layers[0].thickness;
        for i in 0..n {
            if z[i] >= cum_sum && layer < layers.len() - 1 {
                layer += 1;
                cum_sum += layers[layer].thickness;
            }
            x[i] = layers[layer].fraction;
        }

        // 层扫描完成后才换算到 SI
        for zi in &mut z {
            *zi *= units.angstrom;
        }

        Ok(Grid {
            dz: dz * units.angstrom,
            z,
            x,
            material: Material::with_units(system, units),
            field: 0.0,
            energy_tolerance: DEFAULT_ENERGY_TOLERANCE,
            units,
        })
    }

    // ─────────────────────────────────────────────────────────────
    // 设置方法
    // ─────────────────────────────────────────────────────────────

    /// 设置偏置电场 (kV/cm)，立即对后续剖面计算生效
    pub fn set_field(&mut self, field: f64) {
        self.field = field;
    }

    /// 设置能量收敛容差 (eV)
    pub fn set_energy_tolerance(&mut self, tolerance: f64) {
        self.energy_tolerance = tolerance;
    }

    // ─────────────────────────────────────────────────────────────
    // 访问器
    // ─────────────────────────────────────────────────────────────

    /// 格点数
    pub fn num_points(&self) -> usize {
        self.z.len()
    }

    /// 网格步长 (m)
    pub fn step(&self) -> f64 {
        self.dz
    }

    /// z 坐标轴 (m)
    pub fn coordinates(&self) -> &[f64] {
        &self.z
    }

    /// 单个格点坐标 (m)
    pub fn coordinate(&self, index: usize) -> Result<f64> {
        self.z
            .get(index)
            .copied()
            .ok_or(MqwbandError::IndexOutOfRange {
                index,
                len: self.z.len(),
            })
    }

    /// 合金组分剖面
    pub fn fractions(&self) -> &[f64] {
        &self.x
    }

    /// 材料参数表
    pub fn material(&self) -> &Material {
        &self.material
    }

    /// 偏置电场 (kV/cm)
    pub fn field(&self) -> f64 {
        self.field
    }

    /// 能量收敛容差 (J)
    pub fn energy_tolerance(&self) -> f64 {
        self.energy_tolerance * self.units.e
    }

    /// 单位换算表
    pub fn units(&self) -> Units {
        self.units
    }

    // ─────────────────────────────────────────────────────────────
    // 剖面生成
    // ─────────────────────────────────────────────────────────────

    /// 给定电场下势能景观的上界 (J)
    ///
    /// 最高组分的垒势加上远端边界处的线性偏置贡献，供求解器确定
    /// 能量搜索范围。只依赖参数 `field`，不使用存储的电场。
    pub fn max_potential(&self, field: f64) -> f64 {
        let max_x = self.x.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let max_z = self.z.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        self.units.e * (max_x * self.material.v.barrier + max_z * field * self.units.kv_per_cm)
    }

    /// 带边限制势剖面 (J)
    ///
    /// 逐格点插值限制势并换算到 J，再减去偏置电场的线性倾斜。
    /// 偏置会产生负势能，最后整体减去最小值使最低点恰为 0。
    /// 先倾斜再取最小值：偏置会移动最低点的位置。
    pub fn potential_profile(&self) -> Vec<f64> {
        let e = self.units.e;
        let tilt = self.field * self.units.kv_per_cm;

        let mut v: Vec<f64> = self
            .z
            .iter()
            .zip(&self.x)
            .map(|(&z, &x)| e * self.material.interpolate(x, self.material.v) - e * tilt * z)
            .collect();

        let v_min = v.iter().cloned().fold(f64::INFINITY, f64::min);
        for vi in &mut v {
            *vi -= v_min;
        }
        v
    }

    /// 有效质量剖面 (kg)
    pub fn effective_mass_profile(&self) -> Vec<f64> {
        self.x
            .iter()
            .map(|&x| self.units.m0 * self.material.interpolate(x, self.material.m))
            .collect()
    }

    /// Kane 非抛物性参数剖面 (J⁻¹)
    pub fn kane_nonparabolicity_profile(&self) -> Vec<f64> {
        self.x
            .iter()
            .map(|&x| self.material.kane_nonparabolicity(x) / self.units.e)
            .collect()
    }

    /// Ekenberg 非抛物性参数剖面 (J⁻¹)
    ///
    /// 材料公式同时给出 α 和 β，剖面目前只取 α 项。
    pub fn ekenberg_nonparabolicity_profile(&self) -> Vec<f64> {
        self.x
            .iter()
            .map(|&x| {
                let (alpha, _beta) = self.material.ekenberg_nonparabolicity(x);
                alpha / self.units.e
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::band::constants::{ANGSTROM, ELECTRON_MASS, ELEMENTARY_CHARGE};
    use crate::models::{Layer, LayerStack};

    /// 垒-阱-垒测试结构：100 Å / 50 Å / 100 Å
    fn barrier_well_barrier() -> LayerStack {
        LayerStack::new(
            "test",
            vec![
                Layer::new(100.0, 0.0),
                Layer::new(50.0, 1.0),
                Layer::new(100.0, 0.0),
            ],
        )
    }

    #[test]
    fn test_grid_dimensions() {
        let grid = Grid::new(&barrier_well_barrier(), 10.0, MaterialSystem::AlGaAs).unwrap();
        // 0..250 Å 步长 10，含端点共 26 点
        assert_eq!(grid.num_points(), 26);
        assert_eq!(grid.coordinates().len(), grid.fractions().len());
        assert!((grid.step() - 10.0 * ANGSTROM).abs() < 1e-18);
    }

    #[test]
    fn test_coordinates_uniform_and_increasing() {
        let grid = Grid::new(&barrier_well_barrier(), 10.0, MaterialSystem::AlGaAs).unwrap();
        let z = grid.coordinates();
        for i in 1..z.len() {
            assert!(z[i] > z[i - 1]);
            assert!(((z[i] - z[i - 1]) - grid.step()).abs() < 1e-18);
        }
        assert_eq!(z[0], 0.0);
        assert!((z[z.len() - 1] - 250.0 * ANGSTROM).abs() < 1e-18);
    }

    #[test]
    fn test_fraction_profile_layer_assignment() {
        let grid = Grid::new(&barrier_well_barrier(), 10.0, MaterialSystem::AlGaAs).unwrap();
        let x = grid.fractions();
        // [0,100) Å 属第一层，[100,150) 属第二层，[150,250] 属第三层；
        // 恰在界面上的点归入下一层
        for (i, &xi) in x.iter().enumerate() {
            let expected = if i < 10 {
                0.0
            } else if i < 15 {
                1.0
            } else {
                0.0
            };
            assert_eq!(xi, expected, "fraction at point {}", i);
        }
    }

    #[test]
    fn test_trailing_pad_point() {
        // 总厚 95 Å 步长 10：坐标覆盖到 100 Å，共 11 点
        let stack = LayerStack::new("pad", vec![Layer::new(95.0, 0.3)]);
        let grid = Grid::new(&stack, 10.0, MaterialSystem::AlGaAs).unwrap();
        assert_eq!(grid.num_points(), 11);
        assert!((grid.coordinate(10).unwrap() - 100.0 * ANGSTROM).abs() < 1e-18);
    }

    #[test]
    fn test_empty_stack_rejected() {
        let stack = LayerStack::new("empty", vec![]);
        let err = Grid::new(&stack, 1.0, MaterialSystem::AlGaAs).unwrap_err();
        assert!(matches!(err, MqwbandError::EmptyLayerStack));
    }

    #[test]
    fn test_non_positive_thickness_rejected() {
        let stack = LayerStack::new(
            "bad",
            vec![Layer::new(100.0, 0.0), Layer::new(-5.0, 1.0)],
        );
        let err = Grid::new(&stack, 1.0, MaterialSystem::AlGaAs).unwrap_err();
        assert!(matches!(
            err,
            MqwbandError::NonPositiveThickness { index: 1, .. }
        ));
    }

    #[test]
    fn test_coordinate_index_out_of_range() {
        let grid = Grid::new(&barrier_well_barrier(), 10.0, MaterialSystem::AlGaAs).unwrap();
        assert!(grid.coordinate(25).is_ok());
        let err = grid.coordinate(26).unwrap_err();
        assert!(matches!(
            err,
            MqwbandError::IndexOutOfRange { index: 26, len: 26 }
        ));
    }

    #[test]
    fn test_potential_profile_zero_field() {
        let grid = Grid::new(&barrier_well_barrier(), 10.0, MaterialSystem::AlGaAs).unwrap();
        let v = grid.potential_profile();
        let barrier_ev = 0.67 * (2.777 - 1.424);

        for (i, (&vi, &xi)) in v.iter().zip(grid.fractions()).enumerate() {
            if xi == 0.0 {
                assert_eq!(vi, 0.0, "well floor at point {}", i);
            } else {
                assert!(
                    (vi / ELEMENTARY_CHARGE - barrier_ev).abs() < 1e-9,
                    "barrier plateau at point {}",
                    i
                );
            }
        }
    }

    #[test]
    fn test_potential_floor_is_zero_under_bias() {
        let mut grid = Grid::new(&barrier_well_barrier(), 10.0, MaterialSystem::AlGaAs).unwrap();
        grid.set_field(15.0);
        let v = grid.potential_profile();
        let v_min = v.iter().cloned().fold(f64::INFINITY, f64::min);
        assert_eq!(v_min, 0.0);
        // 偏置将最低点推向高 z 端
        assert_eq!(v[v.len() - 1], 0.0);
        assert!(v[0] > 0.0);
    }

    #[test]
    fn test_profiles_idempotent() {
        let mut grid = Grid::new(&barrier_well_barrier(), 10.0, MaterialSystem::AlGaAs).unwrap();
        grid.set_field(7.5);
        assert_eq!(grid.potential_profile(), grid.potential_profile());
        assert_eq!(grid.effective_mass_profile(), grid.effective_mass_profile());
        assert_eq!(
            grid.kane_nonparabolicity_profile(),
            grid.kane_nonparabolicity_profile()
        );
        assert_eq!(
            grid.ekenberg_nonparabolicity_profile(),
            grid.ekenberg_nonparabolicity_profile()
        );
    }

    #[test]
    fn test_effective_mass_profile() {
        let grid = Grid::new(&barrier_well_barrier(), 10.0, MaterialSystem::AlGaAs).unwrap();
        let m = grid.effective_mass_profile();
        assert!((m[0] / ELECTRON_MASS - 0.067).abs() < 1e-12);
        assert!((m[12] / ELECTRON_MASS - 0.15).abs() < 1e-12);
    }

    #[test]
    fn test_kane_profile() {
        let grid = Grid::new(&barrier_well_barrier(), 10.0, MaterialSystem::AlGaAs).unwrap();
        let alpha = grid.kane_nonparabolicity_profile();
        // 阱区：1/1.424 eV⁻¹ 换算到 J⁻¹
        assert!((alpha[0] * ELEMENTARY_CHARGE - 1.0 / 1.424).abs() < 1e-9);
    }

    #[test]
    fn test_ekenberg_profile_positive() {
        let grid = Grid::new(&barrier_well_barrier(), 10.0, MaterialSystem::AlGaAs).unwrap();
        for (i, &a) in grid.ekenberg_nonparabolicity_profile().iter().enumerate() {
            assert!(a.is_finite() && a > 0.0, "alpha at point {}", i);
        }
    }

    #[test]
    fn test_max_potential() {
        let grid = Grid::new(&barrier_well_barrier(), 10.0, MaterialSystem::AlGaAs).unwrap();
        // 零场：上界即最高组分的垒势
        let expected = ELEMENTARY_CHARGE * 0.67 * (2.777 - 1.424);
        assert!((grid.max_potential(0.0) - expected).abs() / expected < 1e-9);
        // 有限场：加上远端边界的偏置贡献；不依赖存储的电场
        let z_max = 250.0 * ANGSTROM;
        let expected = ELEMENTARY_CHARGE * (0.67 * (2.777 - 1.424) + z_max * 20.0 * 1.0e5);
        assert!((grid.max_potential(20.0) - expected).abs() / expected < 1e-9);
    }

    #[test]
    fn test_field_and_tolerance_accessors() {
        let mut grid = Grid::new(&barrier_well_barrier(), 10.0, MaterialSystem::AlGaAs).unwrap();
        assert_eq!(grid.field(), 0.0);
        grid.set_field(12.5);
        assert_eq!(grid.field(), 12.5);

        // 默认容差 0.05 meV，以 J 报告
        assert!((grid.energy_tolerance() - 0.05e-3 * ELEMENTARY_CHARGE).abs() < 1e-30);
        grid.set_energy_tolerance(1.0e-4);
        assert!((grid.energy_tolerance() - 1.0e-4 * ELEMENTARY_CHARGE).abs() < 1e-30);
    }
}
