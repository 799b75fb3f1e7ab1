//! # 剖面图表生成
//!
//! 使用 `plotters` 库生成剖面图。
//!
//! ## 功能
//! - 单一物理量剖面对 z 的折线图
//! - 支持 PNG 和 SVG 输出
//! - 图内标注偏置电场
//!
//! ## 依赖关系
//! - 被 `commands/profile.rs` 调用
//! - 数据由调用方换算到显示单位后传入
//! - 使用 `plotters` 渲染图表

use crate::error::{MqwbandError, Result};

use plotters::prelude::*;
use std::path::Path;

/// 生成剖面图
#[allow(clippy::too_many_arguments)]
pub fn generate_profile_plot(
    data: &[(f64, f64)],
    output_path: &Path,
    title: &str,
    y_desc: &str,
    annotation: &str,
    width: u32,
    height: u32,
    use_svg: bool,
) -> Result<()> {
    if use_svg {
        let root = SVGBackend::new(output_path, (width, height)).into_drawing_area();
        draw_profile_chart(&root, data, title, y_desc, annotation)?;
        root.present()
            .map_err(|e| MqwbandError::Other(e.to_string()))?;
    } else {
        let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
        draw_profile_chart(&root, data, title, y_desc, annotation)?;
        root.present()
            .map_err(|e| MqwbandError::Other(e.to_string()))?;
    }
    Ok(())
}

/// 绘制剖面图表的核心逻辑
fn draw_profile_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    data: &[(f64, f64)],
    title: &str,
    y_desc: &str,
    annotation: &str,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)
        .map_err(|e| MqwbandError::Other(format!("{:?}", e)))?;

    let x_min = data.first().map(|(x, _)| *x).unwrap_or(0.0);
    let x_max = data.last().map(|(x, _)| *x).unwrap_or(1.0);

    let y_min = data.iter().map(|(_, y)| *y).fold(f64::INFINITY, f64::min);
    let y_max = data
        .iter()
        .map(|(_, y)| *y)
        .fold(f64::NEG_INFINITY, f64::max);

    // 平坦剖面（如单层结构的质量）也要有可用的 y 范围
    let span = y_max - y_min;
    let pad = if span > 0.0 {
        0.1 * span
    } else {
        0.1 * y_max.abs().max(1.0)
    };
    let (y_lo, y_hi) = (y_min - pad, y_max + pad);

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_lo..y_hi)
        .map_err(|e| MqwbandError::Other(format!("{:?}", e)))?;

    chart
        .configure_mesh()
        .x_desc("z (nm)")
        .y_desc(y_desc)
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(|e| MqwbandError::Other(format!("{:?}", e)))?;

    let line_color = RGBColor(0, 102, 204);

    // 填充曲线下方区域
    let fill_color = line_color.mix(0.2);
    chart
        .draw_series(AreaSeries::new(
            data.iter().map(|(x, y)| (*x, *y)),
            y_lo,
            fill_color,
        ))
        .map_err(|e| MqwbandError::Other(format!("{:?}", e)))?;

    chart
        .draw_series(LineSeries::new(
            data.iter().map(|(x, y)| (*x, *y)),
            line_color.stroke_width(2),
        ))
        .map_err(|e| MqwbandError::Other(format!("{:?}", e)))?;

    // 标注偏置电场
    if !annotation.is_empty() {
        let x_pos = x_min + 0.72 * (x_max - x_min);
        let y_pos = y_hi - 0.05 * (y_hi - y_lo);
        chart
            .draw_series(std::iter::once(Text::new(
                annotation.to_string(),
                (x_pos, y_pos),
                ("sans-serif", 14).into_font().color(&BLACK),
            )))
            .map_err(|e| MqwbandError::Other(format!("{:?}", e)))?;
    }

    Ok(())
}
