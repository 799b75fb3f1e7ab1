//! # sweep 子命令实现
//!
//! 对单个结构扫描偏置电场：逐场导出势能剖面 CSV，并汇总
//! 各场强下的势能上界 Vmax。
//!
//! ## 依赖关系
//! - 使用 `cli/sweep.rs` 定义的 SweepArgs
//! - 使用 `batch/runner.rs` 并行处理场强值
//! - 使用 `band/` 模块进行计算
//! - 使用 `parsers/` 读取层堆叠

use crate::band::{export, Grid, MaterialSystem};
use crate::batch::{BatchRunner, ProcessResult};
use crate::cli::sweep::{parse_field_range, SweepArgs};
use crate::error::{MqwbandError, Result};
use crate::models::LayerStack;
use crate::parsers;
use crate::utils::output;

use std::fs;
use std::path::Path;

/// 执行场扫描
pub fn execute(args: SweepArgs) -> Result<()> {
    output::print_header("Bias Field Sweep");

    if !args.input.is_file() {
        return Err(MqwbandError::FileNotFound {
            path: args.input.display().to_string(),
        });
    }
    if args.step <= 0.0 {
        return Err(MqwbandError::InvalidArgument(format!(
            "step must be positive, got {}",
            args.step
        )));
    }
    if args.points < 2 {
        return Err(MqwbandError::InvalidArgument(format!(
            "sweep needs at least 2 field values, got {}",
            args.points
        )));
    }

    let system = args.material.parse::<MaterialSystem>()?;
    let (min, max) = parse_field_range(&args.range)?;

    let stack = parsers::parse_layers_file(&args.input)?;
    output::print_success(&format!(
        "Loaded structure: {} ({} layers, {:.1} Å total)",
        stack.name,
        stack.num_layers(),
        stack.total_thickness()
    ));

    // 基准网格：用于 Vmax 汇总（max_potential 只依赖传入的场强）
    let grid = Grid::new(&stack, args.step, system)?;
    let units = grid.units();
    output::print_info(&format!(
        "Material system: {}, step {:.2} Å, grid {} points",
        system,
        args.step,
        grid.num_points()
    ));

    let field_step = (max - min) / (args.points - 1) as f64;
    let fields: Vec<f64> = (0..args.points)
        .map(|i| min + i as f64 * field_step)
        .collect();
    output::print_info(&format!(
        "Sweeping {} field values in {:.2} - {:.2} kV/cm",
        fields.len(),
        min,
        max
    ));

    fs::create_dir_all(&args.output).map_err(|e| MqwbandError::FileWriteError {
        path: args.output.display().to_string(),
        source: e,
    })?;

    // 汇总各场强下的势能上界
    let summary: Vec<(f64, f64)> = fields
        .iter()
        .map(|&field| (field, grid.max_potential(field) / units.e * 1000.0))
        .collect();
    let summary_path = args.output.join("sweep_summary.csv");
    export::sweep_summary_to_csv(&summary, &summary_path)?;

    // 并行逐场导出势能剖面
    let runner = BatchRunner::new(args.jobs);
    let result = runner.run(fields, |&field| {
        process_field(field, &stack, system, &args)
    });

    output::print_separator();
    output::print_success(&format!(
        "Sweep complete: {} success, {} skipped, {} failed",
        result.success, result.skipped, result.failed
    ));

    if !result.failures.is_empty() {
        output::print_warning("Failed field values:");
        for (field, err) in result.failures.iter().take(10) {
            output::print_error(&format!("  {} kV/cm: {}", field, err));
        }
    }

    print_summary_table(&summary);
    output::print_done(&format!(
        "Sweep results in '{}' (summary: '{}')",
        args.output.display(),
        summary_path.display()
    ));

    Ok(())
}

/// 处理单个场强值
fn process_field(
    field: f64,
    stack: &LayerStack,
    system: MaterialSystem,
    args: &SweepArgs,
) -> ProcessResult {
    let output_file = args
        .output
        .join(format!("{}_K{:.2}kVcm.csv", stack.name, field));

    if output_file.exists() && !args.overwrite {
        return ProcessResult::Skipped(format!(
            "Output exists, skipping: {}",
            output_file.display()
        ));
    }

    match export_field_profile(field, stack, system, args.step, &output_file) {
        Ok(_) => ProcessResult::Success(format!("K = {:.2} kV/cm", field)),
        Err(e) => ProcessResult::Failed(format!("{:.2}", field), e.to_string()),
    }
}

/// 构建带偏置的网格并导出势能剖面
fn export_field_profile(
    field: f64,
    stack: &LayerStack,
    system: MaterialSystem,
    step: f64,
    output_file: &Path,
) -> Result<()> {
    let mut grid = Grid::new(stack, step, system)?;
    grid.set_field(field);
    export::potential_to_csv(&grid, output_file)
}

/// 打印场扫描汇总表格
fn print_summary_table(summary: &[(f64, f64)]) {
    use tabled::{Table, Tabled};

    #[derive(Tabled)]
    struct SweepRow {
        #[tabled(rename = "Field (kV/cm)")]
        field: String,
        #[tabled(rename = "Vmax (meV)")]
        vmax: String,
    }

    let rows: Vec<SweepRow> = summary
        .iter()
        .take(10)
        .map(|(field, vmax)| SweepRow {
            field: format!("{:.2}", field),
            vmax: format!("{:.2}", vmax),
        })
        .collect();

    if !rows.is_empty() {
        output::print_header(&format!("Sweep Summary (first {} rows)", rows.len()));
        println!("{}", Table::new(&rows));
    }
}
