//! # profile 子命令实现
//!
//! 由层堆叠文件构建网格，计算并导出能带剖面。
//!
//! ## 功能
//! - 支持单文件和批量目录处理
//! - 并行计算（rayon）
//! - 输出高质量图像 (PNG/SVG)
//! - 导出数据文件 (CSV/DAT)
//!
//! ## 依赖关系
//! - 使用 `cli/profile.rs` 定义的 ProfileArgs
//! - 使用 `batch/` 模块进行批量处理
//! - 使用 `band/` 模块进行计算
//! - 使用 `parsers/` 读取层堆叠

use crate::band::{export, plot, Grid, MaterialSystem};
use crate::batch::{BatchRunner, FileCollector, ProcessResult};
use crate::cli::profile::{ProfileArgs, ProfileOutputFormat, ProfileQuantity};
use crate::error::{MqwbandError, Result};
use crate::models::LayerStack;
use crate::parsers;
use crate::utils::output;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// 执行 profile 分析
pub fn execute(args: ProfileArgs) -> Result<()> {
    output::print_header("Band-Edge Profile Construction");

    // 检测输入类型
    if args.input.is_file() {
        execute_single_file(&args)
    } else if args.input.is_dir() {
        execute_batch(&args)
    } else {
        Err(MqwbandError::FileNotFound {
            path: args.input.display().to_string(),
        })
    }
}

/// 单文件模式
fn execute_single_file(args: &ProfileArgs) -> Result<()> {
    output::print_info(&format!("Single file mode: '{}'", args.input.display()));

    let config = ProfileConfig::from_args(args, args.output.clone())?;

    let stack = parsers::parse_layers_file(&args.input)?;
    output::print_success(&format!(
        "Loaded structure: {} ({} layers, {:.1} Å total)",
        stack.name,
        stack.num_layers(),
        stack.total_thickness()
    ));

    let grid = build_grid(&stack, &config)?;
    let units = grid.units();
    let z_end = grid.coordinate(grid.num_points() - 1)?;
    output::print_info(&format!(
        "Material system: {}, step {:.2} Å",
        config.system,
        grid.step() / units.angstrom
    ));
    output::print_info(&format!(
        "Grid: {} points spanning {:.2} nm, field {:.2} kV/cm, Vmax {:.2} meV",
        grid.num_points(),
        z_end / (10.0 * units.angstrom),
        grid.field(),
        grid.max_potential(grid.field()) / units.e * 1000.0
    ));

    print_layer_table(&stack);

    let format = args
        .format
        .unwrap_or_else(|| guess_format_from_extension(&args.output));

    let title = args.title.clone().unwrap_or_else(|| stack.name.clone());
    write_output(&grid, &stack, &args.output, format, &title, &config)?;

    output::print_success(&format!("Profile saved to '{}'", args.output.display()));
    Ok(())
}

/// 批量处理模式
fn execute_batch(args: &ProfileArgs) -> Result<()> {
    output::print_info(&format!("Batch mode: directory '{}'", args.input.display()));

    // 收集文件
    let collector = FileCollector::new(args.input.clone())
        .with_pattern(&args.pattern)
        .recursive(args.recursive);

    let files = collector.collect();

    if files.is_empty() {
        output::print_warning(&format!(
            "No matching files found with pattern '{}'",
            args.pattern
        ));
        return Ok(());
    }

    output::print_info(&format!("Found {} layer stack files", files.len()));

    // 确保输出目录存在
    fs::create_dir_all(&args.output).map_err(|e| MqwbandError::FileWriteError {
        path: args.output.display().to_string(),
        source: e,
    })?;

    // 材料与步长提前解析一次，避免逐文件重复报错
    let config = Arc::new(ProfileConfig::from_args(args, args.output.clone())?);

    let format = args.format.unwrap_or(ProfileOutputFormat::Png);
    output::print_info(&format!(
        "Material system: {}, step {:.2} Å, field {:.2} kV/cm",
        config.system, config.step, config.field
    ));
    output::print_info(&format!("Output format: {:?}", format));

    // 并行处理
    let runner = BatchRunner::new(args.jobs);
    let result = runner.run(files, |file| process_batch_file(file, format, &config));

    // 打印统计
    output::print_separator();
    output::print_success(&format!(
        "Batch complete: {} success, {} skipped, {} failed",
        result.success, result.skipped, result.failed
    ));

    if !result.failures.is_empty() {
        output::print_warning("Failed files:");
        for (path, err) in result.failures.iter().take(10) {
            output::print_error(&format!("  {}: {}", path, err));
        }
        if result.failures.len() > 10 {
            output::print_warning(&format!("  ... and {} more", result.failures.len() - 10));
        }
    }

    Ok(())
}

/// 剖面计算配置
struct ProfileConfig {
    output_dir: PathBuf,
    system: MaterialSystem,
    step: f64,
    field: f64,
    tolerance: f64,
    quantity: ProfileQuantity,
    width: u32,
    height: u32,
    overwrite: bool,
}

impl ProfileConfig {
    fn from_args(args: &ProfileArgs, output_dir: PathBuf) -> Result<Self> {
        if args.step <= 0.0 {
            return Err(MqwbandError::InvalidArgument(format!(
                "step must be positive, got {}",
                args.step
            )));
        }
        let system = args.material.parse::<MaterialSystem>()?;

        Ok(Self {
            output_dir,
            system,
            step: args.step,
            field: args.field,
            tolerance: args.tolerance,
            quantity: args.quantity,
            width: args.width,
            height: args.height,
            overwrite: args.overwrite,
        })
    }
}

/// 构建网格并施加偏置电场
fn build_grid(stack: &LayerStack, config: &ProfileConfig) -> Result<Grid> {
    let mut grid = Grid::new(stack, config.step, config.system)?;
    grid.set_field(config.field);
    grid.set_energy_tolerance(config.tolerance);
    Ok(grid)
}

/// 处理批量模式中的单个文件
fn process_batch_file(
    input: &PathBuf,
    format: ProfileOutputFormat,
    config: &Arc<ProfileConfig>,
) -> ProcessResult {
    // 构造输出文件名
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");

    let ext = match format {
        ProfileOutputFormat::Png => "png",
        ProfileOutputFormat::Svg => "svg",
        ProfileOutputFormat::Csv => "csv",
        ProfileOutputFormat::Dat => "dat",
    };

    let output_file = config.output_dir.join(format!("{}_profile.{}", stem, ext));

    // 检查是否已存在
    if output_file.exists() && !config.overwrite {
        return ProcessResult::Skipped(format!(
            "Output exists, skipping: {}",
            output_file.display()
        ));
    }

    match process_structure(input, &output_file, format, config) {
        Ok(_) => {
            ProcessResult::Success(format!("{} -> {}", input.display(), output_file.display()))
        }
        Err(e) => ProcessResult::Failed(input.display().to_string(), e.to_string()),
    }
}

/// 处理单个结构（批量路径，不打印）
fn process_structure(
    input: &Path,
    output_file: &Path,
    format: ProfileOutputFormat,
    config: &ProfileConfig,
) -> Result<()> {
    let stack = parsers::parse_layers_file(input)?;
    let grid = build_grid(&stack, config)?;
    write_output(&grid, &stack, output_file, format, &stack.name, config)
}

/// 按格式写出剖面
fn write_output(
    grid: &Grid,
    stack: &LayerStack,
    output_file: &Path,
    format: ProfileOutputFormat,
    title: &str,
    config: &ProfileConfig,
) -> Result<()> {
    match format {
        ProfileOutputFormat::Png | ProfileOutputFormat::Svg => {
            let (data, y_desc) = quantity_series(grid, config.quantity);
            let annotation = format!("K = {:.2} kV/cm", grid.field());
            plot::generate_profile_plot(
                &data,
                output_file,
                title,
                y_desc,
                &annotation,
                config.width,
                config.height,
                format == ProfileOutputFormat::Svg,
            )
        }
        ProfileOutputFormat::Csv => export::profiles_to_csv(grid, output_file),
        ProfileOutputFormat::Dat => export::profiles_to_dat(grid, &stack.name, output_file),
    }
}

/// 准备绘图数据：所选物理量对 z (nm)，换算到显示单位
fn quantity_series(grid: &Grid, quantity: ProfileQuantity) -> (Vec<(f64, f64)>, &'static str) {
    let units = grid.units();
    let nm = 10.0 * units.angstrom;
    let z = grid.coordinates();

    let (values, y_desc): (Vec<f64>, &'static str) = match quantity {
        ProfileQuantity::Potential => (
            grid.potential_profile()
                .iter()
                .map(|v| v / units.e * 1000.0)
                .collect(),
            "Potential (meV)",
        ),
        ProfileQuantity::Mass => (
            grid.effective_mass_profile()
                .iter()
                .map(|m| m / units.m0)
                .collect(),
            "Effective mass (m0)",
        ),
        ProfileQuantity::Kane => (
            grid.kane_nonparabolicity_profile()
                .iter()
                .map(|a| a * units.e)
                .collect(),
            "α_Kane (1/eV)",
        ),
        ProfileQuantity::Ekenberg => (
            grid.ekenberg_nonparabolicity_profile()
                .iter()
                .map(|a| a * units.e)
                .collect(),
            "α_Ekenberg (1/eV)",
        ),
    };

    let data = z
        .iter()
        .zip(values)
        .map(|(&zi, v)| (zi / nm, v))
        .collect();

    (data, y_desc)
}

/// 从文件扩展名推断输出格式
fn guess_format_from_extension(path: &Path) -> ProfileOutputFormat {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .as_deref()
    {
        Some("svg") => ProfileOutputFormat::Svg,
        Some("csv") => ProfileOutputFormat::Csv,
        Some("dat") | Some("xy") => ProfileOutputFormat::Dat,
        _ => ProfileOutputFormat::Png,
    }
}

/// 打印层堆叠表格
fn print_layer_table(stack: &LayerStack) {
    use tabled::{Table, Tabled};

    #[derive(Tabled)]
    struct LayerRow {
        #[tabled(rename = "#")]
        index: usize,
        #[tabled(rename = "Thickness (Å)")]
        thickness: String,
        #[tabled(rename = "Fraction")]
        fraction: String,
    }

    let rows: Vec<LayerRow> = stack
        .layers
        .iter()
        .enumerate()
        .map(|(i, layer)| LayerRow {
            index: i + 1,
            thickness: format!("{:.1}", layer.thickness),
            fraction: format!("{:.3}", layer.fraction),
        })
        .collect();

    if !rows.is_empty() {
        output::print_header(&format!("Layer Stack ({} layers)", rows.len()));
        println!("{}", Table::new(&rows));
    }
}
