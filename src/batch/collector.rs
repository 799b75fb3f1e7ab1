//! # 文件收集器
//!
//! 根据输入路径和模式收集待处理文件列表。
//!
//! ## 功能
//! - 支持单文件和目录输入
//! - glob 模式匹配（逗号分隔的多模式）
//! - 递归目录搜索
//!
//! ## 依赖关系
//! - 被 `commands/profile.rs` 调用
//! - 使用 `walkdir` 遍历目录
//! - 使用 `glob` 编译匹配模式

use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 文件收集器
pub struct FileCollector {
    /// 输入路径
    input: PathBuf,
    /// 编译后的匹配模式
    patterns: Vec<Pattern>,
    /// 是否递归
    recursive: bool,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new(input: PathBuf) -> Self {
        Self {
            input,
            patterns: vec![Pattern::new("*").unwrap()],
            recursive: false,
        }
    }

    /// 设置匹配模式（逗号分隔的多模式）
    ///
    /// 非法模式被忽略；全部非法时退回 `*`。
    pub fn with_pattern(mut self, pattern: &str) -> Self {
        self.patterns = pattern
            .split(',')
            .filter_map(|s| Pattern::new(s.trim()).ok())
            .collect();
        if self.patterns.is_empty() {
            self.patterns = vec![Pattern::new("*").unwrap()];
        }
        self
    }

    /// 设置是否递归搜索
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 收集所有匹配的文件
    pub fn collect(&self) -> Vec<PathBuf> {
        if self.input.is_file() {
            return vec![self.input.clone()];
        }

        if !self.input.is_dir() {
            return vec![];
        }

        let max_depth = if self.recursive { usize::MAX } else { 1 };

        WalkDir::new(&self.input)
            .max_depth(max_depth)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| self.matches_name(e.path()))
            .map(|e| e.path().to_path_buf())
            .collect()
    }

    /// 检查文件名是否匹配任一模式
    fn matches_name(&self, path: &Path) -> bool {
        let filename = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => return false,
        };

        self.patterns.iter().any(|p| p.matches(filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_matching() {
        let collector =
            FileCollector::new(PathBuf::from(".")).with_pattern("*.txt,*.layers");
        assert!(collector.matches_name(Path::new("qcl_active.txt")));
        assert!(collector.matches_name(Path::new("stack.layers")));
        assert!(!collector.matches_name(Path::new("notes.csv")));
    }

    #[test]
    fn test_invalid_pattern_falls_back() {
        let collector = FileCollector::new(PathBuf::from(".")).with_pattern("[");
        assert!(collector.matches_name(Path::new("anything")));
    }
}
