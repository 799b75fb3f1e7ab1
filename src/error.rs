//! # 统一错误处理模块
//!
//! 定义 mqwband 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// mqwband 统一错误类型
#[derive(Error, Debug)]
pub enum MqwbandError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse {format} file: {path}\nReason: {reason}")]
    ParseError {
        format: String,
        path: String,
        reason: String,
    },

    // ─────────────────────────────────────────────────────────────
    // 结构与材料错误
    // ─────────────────────────────────────────────────────────────
    #[error("Layer stack contains no layers")]
    EmptyLayerStack,

    #[error("Layer {index} has non-positive thickness: {thickness}")]
    NonPositiveThickness { index: usize, thickness: f64 },

    #[error(
        "Unsupported material system: '{0}'. Supported: AlGaAs, AlGaSb, InGaAs_InAlAs, InGaAs_GaAsSb"
    )]
    UnsupportedMaterial(String),

    #[error("Grid index {index} out of range (grid has {len} points)")]
    IndexOutOfRange { index: usize, len: usize },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid range format: {0}")]
    InvalidRange(String),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, MqwbandError>;
