//! # 顺序批量执行器
//!
//! 逐个处理文件列表，严格单线程顺序执行。
//!
//! ## 功能
//! - 进度条显示
//! - 逐文件打印处理状态
//! - 错误隔离在单个文件边界内，不中断整批
//!
//! ## 依赖关系
//! - 被 `commands/fix.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `utils/output.rs` 打印状态行

use crate::utils::{output, progress};

use std::path::{Path, PathBuf};

/// 单个文件处理结果
#[derive(Debug, Clone)]
pub enum Disposition {
    /// 内容有变化，已写回
    Updated(PathBuf),
    /// 内容无变化，未写入
    Unchanged(PathBuf),
    /// 处理失败
    Failed(PathBuf, String), // (文件路径, 错误信息)
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct RunSummary {
    /// 更新数量
    pub updated: usize,
    /// 未变化数量
    pub unchanged: usize,
    /// 失败数量
    pub failed: usize,
    /// 逐文件处理结果
    pub dispositions: Vec<Disposition>,
}

impl RunSummary {
    /// 合并处理结果
    pub fn merge(&mut self, result: Disposition) {
        match &result {
            Disposition::Updated(_) => self.updated += 1,
            Disposition::Unchanged(_) => self.unchanged += 1,
            Disposition::Failed(_, _) => self.failed += 1,
        }
        self.dispositions.push(result);
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.updated + self.unchanged + self.failed
    }
}

/// 顺序批量执行器
pub struct BatchRunner {
    /// 进度条标签
    label: &'static str,
}

impl BatchRunner {
    /// 创建新的批量执行器
    pub fn new(label: &'static str) -> Self {
        Self { label }
    }

    /// 顺序处理文件列表，逐文件打印状态行
    pub fn run<F>(&self, files: &[PathBuf], processor: F) -> RunSummary
    where
        F: Fn(&Path) -> Disposition,
    {
        let pb = progress::create_progress_bar(files.len() as u64, self.label);

        let mut summary = RunSummary::default();

        for file in files {
            let result = processor(file);

            pb.suspend(|| match &result {
                Disposition::Updated(path) => {
                    output::print_success(&format!("Updated {}", path.display()));
                }
                Disposition::Unchanged(path) => {
                    output::print_skip(&format!("{} (no changes needed)", path.display()));
                }
                Disposition::Failed(path, err) => {
                    output::print_error(&format!("{}: {}", path.display(), err));
                }
            });

            summary.merge(result);
            pb.inc(1);
        }

        pb.finish_and_clear();

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake_files(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_run_counts_each_disposition() {
        let files = fake_files(&["a.ts", "b.ts", "c.ts", "d.ts"]);

        let summary = BatchRunner::new("Testing").run(&files, |path| {
            match path.to_str().unwrap() {
                "a.ts" | "c.ts" => Disposition::Updated(path.to_path_buf()),
                "b.ts" => Disposition::Unchanged(path.to_path_buf()),
                _ => Disposition::Failed(path.to_path_buf(), "denied".to_string()),
            }
        });

        assert_eq!(summary.updated, 2);
        assert_eq!(summary.unchanged, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.total(), 4);
        assert_eq!(summary.dispositions.len(), 4);
    }

    #[test]
    fn test_run_continues_past_failures() {
        // 中间文件失败不影响其后文件的处理
        let files = fake_files(&["first.ts", "broken.ts", "last.ts"]);

        let summary = BatchRunner::new("Testing").run(&files, |path| {
            if path.to_str().unwrap() == "broken.ts" {
                Disposition::Failed(path.to_path_buf(), "unreadable".to_string())
            } else {
                Disposition::Updated(path.to_path_buf())
            }
        });

        assert_eq!(summary.total(), 3);
        assert!(matches!(summary.dispositions[0], Disposition::Updated(_)));
        assert!(matches!(summary.dispositions[1], Disposition::Failed(_, _)));
        assert!(matches!(summary.dispositions[2], Disposition::Updated(_)));
    }

    #[test]
    fn test_run_empty_list_is_zero_summary() {
        let summary = BatchRunner::new("Testing").run(&[], |path| {
            Disposition::Unchanged(path.to_path_buf())
        });

        assert_eq!(summary.total(), 0);
        assert_eq!(summary.updated, 0);
        assert!(summary.dispositions.is_empty());
    }
}
