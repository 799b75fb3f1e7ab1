//! # 批量执行器
//!
//! 并行执行批量处理任务。
//!
//! ## 功能
//! - 基于 rayon 的并行迭代，工作项类型泛化
//! - 进度条显示
//! - 错误收集与汇总报告
//!
//! ## 依赖关系
//! - 被 `commands/profile.rs`, `commands/sweep.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `rayon` 进行并行计算

use crate::utils::progress;

use rayon::prelude::*;

/// 单个工作项处理结果
#[derive(Debug, Clone)]
pub enum ProcessResult {
    /// 处理成功
    Success(String),
    /// 跳过（如输出文件已存在）
    Skipped(String),
    /// 处理失败
    Failed(String, String), // (工作项描述, 错误信息)
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 成功数量
    pub success: usize,
    /// 跳过数量
    pub skipped: usize,
    /// 失败数量
    pub failed: usize,
    /// 失败详情
    pub failures: Vec<(String, String)>,
}

impl BatchResult {
    /// 合并处理结果
    pub fn merge(&mut self, result: ProcessResult) {
        match result {
            ProcessResult::Success(_) => self.success += 1,
            ProcessResult::Skipped(_) => self.skipped += 1,
            ProcessResult::Failed(item, err) => {
                self.failed += 1;
                self.failures.push((item, err));
            }
        }
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.success + self.skipped + self.failed
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 并行作业数
    jobs: usize,
}

impl BatchRunner {
    /// 创建新的批量执行器（0 = 按 CPU 数自动选择）
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self { jobs }
    }

    /// 并行处理工作项列表
    pub fn run<T, F>(&self, items: Vec<T>, processor: F) -> BatchResult
    where
        T: Sync + Send,
        F: Fn(&T) -> ProcessResult + Sync + Send,
    {
        let pb = progress::create_progress_bar(items.len() as u64, "Processing");

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .unwrap();

        let results: Vec<ProcessResult> = pool.install(|| {
            items
                .par_iter()
                .map(|item| {
                    let result = processor(item);
                    pb.inc(1);
                    result
                })
                .collect()
        });

        pb.finish_and_clear();

        let mut batch_result = BatchResult::default();
        for result in results {
            batch_result.merge(result);
        }

        batch_result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_result_merge() {
        let mut result = BatchResult::default();
        result.merge(ProcessResult::Success("a".to_string()));
        result.merge(ProcessResult::Skipped("b".to_string()));
        result.merge(ProcessResult::Failed("c".to_string(), "boom".to_string()));

        assert_eq!(result.success, 1);
        assert_eq!(result.skipped, 1);
        assert_eq!(result.failed, 1);
        assert_eq!(result.total(), 3);
        assert_eq!(result.failures.len(), 1);
    }

    #[test]
    fn test_runner_over_values() {
        let runner = BatchRunner::new(2);
        let items: Vec<u32> = (0..10).collect();
        let result = runner.run(items, |&n| {
            if n % 2 == 0 {
                ProcessResult::Success(n.to_string())
            } else {
                ProcessResult::Skipped(n.to_string())
            }
        });
        assert_eq!(result.success, 5);
        assert_eq!(result.skipped, 5);
        assert_eq!(result.failed, 0);
    }
}
