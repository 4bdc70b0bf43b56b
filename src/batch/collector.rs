//! # 文件收集器
//!
//! 根据根目录和文件名模式收集待处理文件列表。
//!
//! ## 功能
//! - glob 模式匹配文件名
//! - 递归目录搜索
//! - 结果按路径排序，保证输出顺序稳定
//!
//! ## 依赖关系
//! - 被 `commands/fix.rs` 调用
//! - 使用 `walkdir` 遍历目录
//! - 使用 `glob` 匹配文件名

use crate::error::{Result, RoutefixError};

use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 文件收集器
pub struct FileCollector {
    /// 扫描根目录
    root: PathBuf,
    /// 文件名匹配模式列表
    patterns: Vec<String>,
    /// 是否递归
    recursive: bool,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            patterns: vec!["*".to_string()],
            recursive: false,
        }
    }

    /// 设置匹配模式（逗号分隔的多模式）
    pub fn with_pattern(mut self, pattern: &str) -> Self {
        self.patterns = pattern
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if self.patterns.is_empty() {
            self.patterns = vec!["*".to_string()];
        }
        self
    }

    /// 设置是否递归搜索
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 收集所有匹配的文件，按路径排序
    ///
    /// 根目录不存在时返回空列表。
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        let mut compiled = Vec::with_capacity(self.patterns.len());
        for pattern in &self.patterns {
            let p = Pattern::new(pattern).map_err(|e| {
                RoutefixError::InvalidPattern(format!("'{}': {}", pattern, e))
            })?;
            compiled.push(p);
        }

        if !self.root.is_dir() {
            return Ok(Vec::new());
        }

        let max_depth = if self.recursive { usize::MAX } else { 1 };

        let mut files: Vec<PathBuf> = WalkDir::new(&self.root)
            .max_depth(max_depth)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| Self::matches_patterns(&compiled, e.path()))
            .map(|e| e.path().to_path_buf())
            .collect();

        files.sort();
        Ok(files)
    }

    /// 检查文件名是否匹配任一模式
    fn matches_patterns(patterns: &[Pattern], path: &Path) -> bool {
        let filename = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => return false,
        };

        patterns.iter().any(|p| p.matches(filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_collect_recursive_matches_only_named_files() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("users/route.ts"));
        touch(&dir.path().join("users/[id]/route.ts"));
        touch(&dir.path().join("users/helpers.ts"));
        touch(&dir.path().join("route.d.ts"));

        let files = FileCollector::new(dir.path().to_path_buf())
            .with_pattern("route.ts")
            .recursive(true)
            .collect()
            .unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.file_name().unwrap() == "route.ts"));
    }

    #[test]
    fn test_collect_returns_sorted_paths() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("z/route.ts"));
        touch(&dir.path().join("a/route.ts"));
        touch(&dir.path().join("m/route.ts"));

        let files = FileCollector::new(dir.path().to_path_buf())
            .with_pattern("route.ts")
            .recursive(true)
            .collect()
            .unwrap();

        let mut sorted = files.clone();
        sorted.sort();
        assert_eq!(files, sorted);
    }

    #[test]
    fn test_collect_non_recursive_stays_at_top_level() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("route.ts"));
        touch(&dir.path().join("nested/route.ts"));

        let files = FileCollector::new(dir.path().to_path_buf())
            .with_pattern("route.ts")
            .collect()
            .unwrap();

        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_collect_missing_root_is_empty() {
        let dir = TempDir::new().unwrap();
        let files = FileCollector::new(dir.path().join("does-not-exist"))
            .with_pattern("route.ts")
            .recursive(true)
            .collect()
            .unwrap();

        assert!(files.is_empty());
    }
}
