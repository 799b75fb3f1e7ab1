//! # 能带模型模块
//!
//! 多量子阱异质结构的离散化物理模型：空间网格、材料参数表与
//! 各物理量剖面的生成、导出和绘图。
//!
//! ## 子模块
//! - `constants`: 物理常数与单位换算
//! - `material`: 材料体系参数库
//! - `grid`: 结构网格与剖面生成
//! - `export`: 数据导出
//! - `plot`: 图表生成
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/layers.rs`

pub mod constants;
pub mod export;
pub mod grid;
pub mod material;
pub mod plot;

pub use grid::Grid;
pub use material::{Material, MaterialSystem};
