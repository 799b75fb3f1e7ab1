//! # profile 子命令 CLI 定义
//!
//! 由层堆叠文件计算能带剖面并导出图像或数据文件。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/profile.rs`

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 剖面输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ProfileOutputFormat {
    /// PNG image
    Png,
    /// SVG vector image
    Svg,
    /// CSV data file (all profile columns)
    Csv,
    /// DAT data file (solver input style, # header)
    Dat,
}

/// 绘图物理量
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum ProfileQuantity {
    /// Band-edge potential (meV)
    #[default]
    Potential,
    /// Effective mass (m0)
    Mass,
    /// Kane nonparabolicity (1/eV)
    Kane,
    /// Ekenberg nonparabolicity (1/eV)
    Ekenberg,
}

impl std::fmt::Display for ProfileQuantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfileQuantity::Potential => write!(f, "potential"),
            ProfileQuantity::Mass => write!(f, "mass"),
            ProfileQuantity::Kane => write!(f, "kane"),
            ProfileQuantity::Ekenberg => write!(f, "ekenberg"),
        }
    }
}

/// profile 子命令参数
#[derive(Args, Debug)]
pub struct ProfileArgs {
    /// Input: layer stack file or directory containing layer stack files
    pub input: PathBuf,

    /// Output: file path (single mode) or directory (batch mode)
    #[arg(short, long, default_value = "band_profile.png")]
    pub output: PathBuf,

    /// Output format (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<ProfileOutputFormat>,

    /// Material system (AlGaAs, AlGaSb, InGaAs_InAlAs, InGaAs_GaAsSb)
    #[arg(short, long, default_value = "AlGaAs")]
    pub material: String,

    /// Grid step size in Angstrom
    #[arg(short, long, default_value_t = 1.0)]
    pub step: f64,

    /// Applied bias field in kV/cm
    #[arg(short = 'K', long, default_value_t = 0.0)]
    pub field: f64,

    /// Solver energy tolerance in eV (written to DAT headers)
    #[arg(long, default_value_t = 0.05e-3)]
    pub tolerance: f64,

    /// Quantity to plot (PNG/SVG output only)
    #[arg(short, long, value_enum, default_value = "potential")]
    pub quantity: ProfileQuantity,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Title for the plot (default: structure name)
    #[arg(long)]
    pub title: Option<String>,

    // ─────────────────────────────────────────────────────────────
    // 批量处理参数
    // ─────────────────────────────────────────────────────────────
    /// Glob pattern for input files (batch mode, e.g., "*.txt,*.layers")
    #[arg(long, default_value = "*.txt,*.layers")]
    pub pattern: String,

    /// Number of parallel jobs (0 = auto, batch mode only)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Recurse into subdirectories (batch mode)
    #[arg(long, default_value_t = false)]
    pub recursive: bool,

    /// Overwrite existing output files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}
