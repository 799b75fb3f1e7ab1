//! # 解析器模块
//!
//! 提供层堆叠描述文件的解析器。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: layers

pub mod layers;

pub use layers::{parse_layers_content, parse_layers_file};
