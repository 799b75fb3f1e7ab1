//! # mqwband - 多量子阱能带剖面工具箱
//!
//! 由层堆叠描述构建多量子阱异质结构的离散化物理模型：一维空间
//! 网格及随位置变化的材料剖面（带边势、有效质量、非抛物性参数），
//! 供下游薛定谔求解器使用。
//!
//! ## 子命令
//! - `profile` - 由层堆叠文件计算并导出能带剖面 (PNG/SVG/CSV/DAT)
//! - `materials` - 查看材料体系阱/垒参数表
//! - `sweep` - 偏置电场扫描
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (层堆叠解析器)
//!   │     ├── models/    (数据模型)
//!   │     └── band/      (网格、材料与剖面)
//!   ├── batch/      (批量处理)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod band;
mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
