//! # 剖面数据导出
//!
//! 导出网格剖面到 CSV 和 DAT 格式。
//!
//! ## 支持格式
//! - CSV: z_nm, fraction, potential_mev, mass_m0, alpha_kane_per_ev,
//!   alpha_ekenberg_per_ev 的完整剖面表
//! - DAT: 同样的列，空白分隔，带 `#` 注释头（求解器输入风格）
//!
//! 核心访问器给出 SI 值，人类可读的单位换算只发生在这里：
//! z -> nm，势能 -> meV，质量 -> m0，非抛物性 -> eV⁻¹。
//!
//! ## 依赖关系
//! - 被 `commands/profile.rs`, `commands/sweep.rs` 调用
//! - 使用 `band/grid.rs` 的剖面访问器
//! - 使用 `csv` 库写入 CSV 文件

use crate::band::grid::Grid;
use crate::error::{MqwbandError, Result};

use std::fs::File;
use std::io::Write;
use std::path::Path;

/// 导出全部剖面为 CSV 格式
pub fn profiles_to_csv(grid: &Grid, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path).map_err(MqwbandError::CsvError)?;

    wtr.write_record([
        "z_nm",
        "fraction",
        "potential_mev",
        "mass_m0",
        "alpha_kane_per_ev",
        "alpha_ekenberg_per_ev",
    ])
    .map_err(MqwbandError::CsvError)?;

    for row in profile_rows(grid) {
        wtr.write_record([
            format!("{:.4}", row.z_nm),
            format!("{:.4}", row.fraction),
            format!("{:.6}", row.potential_mev),
            format!("{:.6}", row.mass_m0),
            format!("{:.6}", row.alpha_kane_per_ev),
            format!("{:.6}", row.alpha_ekenberg_per_ev),
        ])
        .map_err(MqwbandError::CsvError)?;
    }

    wtr.flush().map_err(|e| MqwbandError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 导出全部剖面为 DAT 格式
pub fn profiles_to_dat(grid: &Grid, structure_name: &str, output_path: &Path) -> Result<()> {
    let mut file = File::create(output_path).map_err(|e| MqwbandError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    let write_err = |e: std::io::Error| MqwbandError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    };

    writeln!(file, "# Band profile: {}", structure_name).map_err(write_err)?;
    writeln!(file, "# Material system: {}", grid.material().system).map_err(write_err)?;
    writeln!(file, "# Field: {:.4} kV/cm", grid.field()).map_err(write_err)?;
    writeln!(file, "# Energy tolerance: {:.4e} J", grid.energy_tolerance()).map_err(write_err)?;
    writeln!(
        file,
        "# Columns: z (nm), fraction, V (meV), m (m0), alpha_kane (1/eV), alpha_ekenberg (1/eV)"
    )
    .map_err(write_err)?;
    writeln!(file, "#").map_err(write_err)?;

    for row in profile_rows(grid) {
        writeln!(
            file,
            "{:.4}\t{:.4}\t{:.6}\t{:.6}\t{:.6}\t{:.6}",
            row.z_nm,
            row.fraction,
            row.potential_mev,
            row.mass_m0,
            row.alpha_kane_per_ev,
            row.alpha_ekenberg_per_ev
        )
        .map_err(write_err)?;
    }

    Ok(())
}

/// 导出单个势能剖面为 CSV（场扫描的逐场输出）
pub fn potential_to_csv(grid: &Grid, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path).map_err(MqwbandError::CsvError)?;

    wtr.write_record(["z_nm", "potential_mev"])
        .map_err(MqwbandError::CsvError)?;

    let units = grid.units();
    let nm = 10.0 * units.angstrom;
    let v = grid.potential_profile();

    for (&z, &vi) in grid.coordinates().iter().zip(&v) {
        wtr.write_record([
            format!("{:.4}", z / nm),
            format!("{:.6}", vi / units.e * 1000.0),
        ])
        .map_err(MqwbandError::CsvError)?;
    }

    wtr.flush().map_err(|e| MqwbandError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 导出场扫描汇总 (field_kvcm, vmax_mev) 为 CSV
pub fn sweep_summary_to_csv(rows: &[(f64, f64)], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path).map_err(MqwbandError::CsvError)?;

    wtr.write_record(["field_kvcm", "vmax_mev"])
        .map_err(MqwbandError::CsvError)?;

    for (field, vmax) in rows {
        wtr.write_record([format!("{:.4}", field), format!("{:.6}", vmax)])
            .map_err(MqwbandError::CsvError)?;
    }

    wtr.flush().map_err(|e| MqwbandError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 单个格点的显示单位剖面行
struct ProfileRow {
    z_nm: f64,
    fraction: f64,
    potential_mev: f64,
    mass_m0: f64,
    alpha_kane_per_ev: f64,
    alpha_ekenberg_per_ev: f64,
}

/// 收集全部剖面并换算到显示单位
fn profile_rows(grid: &Grid) -> Vec<ProfileRow> {
    let units = grid.units();
    let nm = 10.0 * units.angstrom;

    let v = grid.potential_profile();
    let m = grid.effective_mass_profile();
    let kane = grid.kane_nonparabolicity_profile();
    let ekenberg = grid.ekenberg_nonparabolicity_profile();

    (0..grid.num_points())
        .map(|i| ProfileRow {
            z_nm: grid.coordinates()[i] / nm,
            fraction: grid.fractions()[i],
            potential_mev: v[i] / units.e * 1000.0,
            mass_m0: m[i] / units.m0,
            alpha_kane_per_ev: kane[i] * units.e,
            alpha_ekenberg_per_ev: ekenberg[i] * units.e,
        })
        .collect()
}
