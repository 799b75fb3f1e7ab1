//! # sweep 子命令 CLI 定义
//!
//! 对单个结构扫描偏置电场，逐场导出势能剖面。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/sweep.rs`

use crate::error::{MqwbandError, Result};

use clap::Args;
use std::path::PathBuf;

/// sweep 子命令参数
#[derive(Args, Debug)]
pub struct SweepArgs {
    /// Input: layer stack file
    pub input: PathBuf,

    /// Output directory for per-field CSV files
    #[arg(short, long, default_value = "sweep")]
    pub output: PathBuf,

    /// Material system (AlGaAs, AlGaSb, InGaAs_InAlAs, InGaAs_GaAsSb)
    #[arg(short, long, default_value = "AlGaAs")]
    pub material: String,

    /// Grid step size in Angstrom
    #[arg(short, long, default_value_t = 1.0)]
    pub step: f64,

    /// Field range in kV/cm (e.g., "0-50")
    #[arg(short, long, default_value = "0-50")]
    pub range: String,

    /// Number of field values in the range (inclusive endpoints)
    #[arg(short = 'n', long, default_value_t = 11)]
    pub points: usize,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Overwrite existing output files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}

/// 解析电场范围 "MIN-MAX" (kV/cm)
///
/// 负的下限是合法的（反向偏置扫描），只要求 MIN < MAX。
/// 负数范围写作 "-10-10" 这类形式时用 rsplit 切出最后一个 '-'。
pub fn parse_field_range(range: &str) -> Result<(f64, f64)> {
    let (min_str, max_str) = match range.rsplit_once('-') {
        Some(parts) => parts,
        None => return Err(MqwbandError::InvalidRange(range.to_string())),
    };

    let min: f64 = min_str
        .trim()
        .parse()
        .map_err(|_| MqwbandError::InvalidRange(range.to_string()))?;
    let max: f64 = max_str
        .trim()
        .parse()
        .map_err(|_| MqwbandError::InvalidRange(range.to_string()))?;

    if max <= min {
        return Err(MqwbandError::InvalidRange(format!(
            "{} (must be min < max)",
            range
        )));
    }

    Ok((min, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_range() {
        assert_eq!(parse_field_range("0-50").unwrap(), (0.0, 50.0));
        assert_eq!(parse_field_range("2.5-10").unwrap(), (2.5, 10.0));
        assert_eq!(parse_field_range("-10-10").unwrap(), (-10.0, 10.0));
    }

    #[test]
    fn test_parse_field_range_rejects_bad_input() {
        assert!(parse_field_range("50").is_err());
        assert!(parse_field_range("a-b").is_err());
        assert!(parse_field_range("50-0").is_err());
        assert!(parse_field_range("10-10").is_err());
    }
}
