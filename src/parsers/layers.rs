//! # 层堆叠文件解析器
//!
//! 解析层堆叠描述文件。
//!
//! ## 格式说明
//! ```text
//! 100.0  0.0
//! 50.0   1.0
//! 100.0  0.0
//! ```
//! 每个非空行描述一层：厚度 (Å) 与合金组分，空白分隔。
//! 空行跳过；无表头、无层数声明、无注释语法。行内多余的
//! 字段被忽略。
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 使用
//! - 使用 `models/layers.rs`

use crate::error::{MqwbandError, Result};
use crate::models::{Layer, LayerStack};

use std::fs;
use std::path::Path;

/// 解析层堆叠文件
pub fn parse_layers_file(path: &Path) -> Result<LayerStack> {
    let content = fs::read_to_string(path).map_err(|e| MqwbandError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_layers_content(
        &content,
        path.file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown"),
    )
}

/// 从字符串内容解析层堆叠
pub fn parse_layers_content(content: &str, default_name: &str) -> Result<LayerStack> {
    let mut layers = Vec::new();

    for (lineno, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut fields = line.split_whitespace();
        let thickness = fields.next().and_then(|s| s.parse::<f64>().ok());
        let fraction = fields.next().and_then(|s| s.parse::<f64>().ok());

        match (thickness, fraction) {
            (Some(thickness), Some(fraction)) => {
                layers.push(Layer::new(thickness, fraction));
            }
            _ => {
                return Err(MqwbandError::ParseError {
                    format: "layers".to_string(),
                    path: default_name.to_string(),
                    reason: format!(
                        "line {}: expected '<thickness> <fraction>', got '{}'",
                        lineno + 1,
                        line
                    ),
                });
            }
        }
    }

    Ok(LayerStack::new(default_name, layers))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let content = "100.0 0.0\n50.0 1.0\n100.0 0.0\n";
        let stack = parse_layers_content(content, "qw").unwrap();
        assert_eq!(stack.num_layers(), 3);
        assert_eq!(stack.name, "qw");
        assert!((stack.layers[1].thickness - 50.0).abs() < 1e-12);
        assert!((stack.layers[1].fraction - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let content = "\n100.0 0.0\n\n   \n50.0 0.5\n\n";
        let stack = parse_layers_content(content, "qw").unwrap();
        assert_eq!(stack.num_layers(), 2);
    }

    #[test]
    fn test_parse_ignores_extra_fields() {
        let content = "100.0 0.0 extra tokens\n";
        let stack = parse_layers_content(content, "qw").unwrap();
        assert_eq!(stack.num_layers(), 1);
    }

    #[test]
    fn test_parse_malformed_line() {
        let content = "100.0 0.0\nnot-a-number 0.3\n";
        let err = parse_layers_content(content, "qw").unwrap_err();
        match err {
            MqwbandError::ParseError { reason, .. } => {
                assert!(reason.contains("line 2"), "reason: {}", reason);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_parse_missing_fraction() {
        let err = parse_layers_content("100.0\n", "qw").unwrap_err();
        assert!(matches!(err, MqwbandError::ParseError { .. }));
    }

    #[test]
    fn test_parse_empty_content_gives_empty_stack() {
        // 空文件在此处合法；空堆叠在网格构造时才报错
        let stack = parse_layers_content("", "qw").unwrap();
        assert!(stack.is_empty());
    }
}
