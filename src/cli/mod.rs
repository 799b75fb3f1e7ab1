//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `profile`: 由层堆叠文件计算并导出能带剖面
//! - `materials`: 查看材料体系参数表
//! - `sweep`: 偏置电场扫描
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: profile, materials, sweep

pub mod materials;
pub mod profile;
pub mod sweep;

use clap::{Parser, Subcommand};

/// mqwband - 多量子阱能带剖面工具箱
#[derive(Parser)]
#[command(name = "mqwband")]
#[command(version)]
#[command(about = "A multiple quantum well band profile toolkit", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Build band-edge profiles from a layer stack description
    Profile(profile::ProfileArgs),

    /// Show material system parameter tables
    Materials(materials::MaterialsArgs),

    /// Sweep the applied bias field over one structure
    Sweep(sweep::SweepArgs),
}
