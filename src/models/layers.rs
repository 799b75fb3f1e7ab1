//! # 层堆叠数据模型
//!
//! 描述异质结构沿生长方向的物理组成：按沉积顺序排列的
//! (厚度, 合金组分) 序列。
//!
//! ## 依赖关系
//! - 被 `parsers/layers.rs` 和 `band/grid.rs` 使用
//! - 无外部模块依赖

use serde::{Deserialize, Serialize};

/// 单个外延层
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Layer {
    /// 层厚 (Å)
    pub thickness: f64,

    /// 合金组分 x，0 = 阱材料，1 = 垒材料
    pub fraction: f64,
}

impl Layer {
    pub fn new(thickness: f64, fraction: f64) -> Self {
        Layer {
            thickness,
            fraction,
        }
    }
}

/// 层堆叠
///
/// 有效性（非空、层厚为正）在网格构造时检查，模型本身不做约束。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerStack {
    /// 结构名称（通常取自文件名）
    pub name: String,

    /// 层序列，顺序即生长方向
    pub layers: Vec<Layer>,
}

impl LayerStack {
    pub fn new(name: impl Into<String>, layers: Vec<Layer>) -> Self {
        LayerStack {
            name: name.into(),
            layers,
        }
    }

    /// 层数
    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// 总厚度 (Å)
    pub fn total_thickness(&self) -> f64 {
        self.layers.iter().map(|l| l.thickness).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_thickness() {
        let stack = LayerStack::new(
            "qw",
            vec![
                Layer::new(100.0, 0.0),
                Layer::new(50.0, 1.0),
                Layer::new(100.0, 0.0),
            ],
        );
        assert_eq!(stack.num_layers(), 3);
        assert!((stack.total_thickness() - 250.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_stack() {
        let stack = LayerStack::new("empty", vec![]);
        assert!(stack.is_empty());
        assert_eq!(stack.total_thickness(), 0.0);
    }
}
