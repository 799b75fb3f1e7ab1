//! # 数据模型模块
//!
//! 定义层堆叠的数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/` 和 `band/` 使用
//! - 子模块: layers

pub mod layers;

pub use layers::{Layer, LayerStack};
