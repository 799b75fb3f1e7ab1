//! # materials 子命令实现
//!
//! 打印材料体系的阱/垒参数表。
//!
//! ## 依赖关系
//! - 使用 `cli/materials.rs` 定义的 MaterialsArgs
//! - 使用 `band/material.rs` 的参数表

use crate::band::{Material, MaterialSystem};
use crate::cli::materials::MaterialsArgs;
use crate::error::Result;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 执行 materials 命令
pub fn execute(args: MaterialsArgs) -> Result<()> {
    let materials: Vec<Material> = match &args.system {
        Some(name) => vec![Material::select(name)?],
        None => MaterialSystem::ALL
            .iter()
            .map(|&system| Material::for_system(system))
            .collect(),
    };

    for material in &materials {
        print_material_table(material);
    }

    Ok(())
}

/// 打印单个体系的参数表
fn print_material_table(material: &Material) {
    #[derive(Tabled)]
    struct ParamRow {
        #[tabled(rename = "Parameter")]
        name: String,
        #[tabled(rename = "Well")]
        well: String,
        #[tabled(rename = "Barrier")]
        barrier: String,
    }

    let pairs = [
        ("m* (m0)", material.m),
        ("Eg (eV)", material.eg),
        ("Eg' (eV)", material.egp),
        ("Δ0 (eV)", material.d0),
        ("P (eV·Å)", material.p),
        ("Q (eV·Å)", material.q),
        ("V (eV)", material.v),
    ];

    let rows: Vec<ParamRow> = pairs
        .iter()
        .map(|(name, pair)| ParamRow {
            name: name.to_string(),
            well: format!("{:.5}", pair.well),
            barrier: format!("{:.5}", pair.barrier),
        })
        .collect();

    output::print_header(&format!(
        "{} (band offset ratio {:.2})",
        material.system,
        material.system.band_offset_ratio()
    ));
    println!("{}", Table::new(&rows));
}
