//! # materials 子命令 CLI 定义
//!
//! 查看支持的材料体系及其阱/垒参数表。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/materials.rs`

use clap::Args;

/// materials 子命令参数
#[derive(Args, Debug)]
pub struct MaterialsArgs {
    /// Material system to show (all systems if omitted)
    pub system: Option<String>,
}
