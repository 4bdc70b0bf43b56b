//! # 文件重写引擎
//!
//! 对单个文件全文应用替换规则，仅在内容变化时写回。
//!
//! ## 功能
//! - 全文读取为字符串
//! - 按固定顺序应用全部规则（全局替换，不限于单行）
//! - 精确字符串比较，内容不变则不触碰磁盘
//!
//! ## 依赖关系
//! - 被 `commands/fix.rs` 调用
//! - 使用 `rewrite/rules.rs` 定义的规则
//! - 使用 `error.rs` 的错误类型

use crate::error::{Result, RoutefixError};
use crate::rewrite::rules::{self, SubstitutionRule};

use std::fs;
use std::path::Path;

/// 单个文件的处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// 内容有变化，已写回
    Updated,
    /// 内容无变化，未写入
    Unchanged,
}

/// 重写引擎
pub struct Rewriter {
    /// 按顺序应用的替换规则
    rules: Vec<SubstitutionRule>,
}

impl Rewriter {
    /// 创建使用内置声明规则的重写引擎
    pub fn new() -> Self {
        Self {
            rules: rules::declaration_rules(),
        }
    }

    /// 对全文按顺序应用所有规则，返回替换后的文本
    pub fn apply(&self, content: &str) -> String {
        let mut text = content.to_string();
        for rule in &self.rules {
            text = rule.pattern.replace_all(&text, rule.replacement).into_owned();
        }
        text
    }

    /// 处理单个文件：读取、替换、仅在内容变化时写回
    pub fn process(&self, path: &Path) -> Result<FileOutcome> {
        let content = fs::read_to_string(path).map_err(|e| RoutefixError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;

        let rewritten = self.apply(&content);
        if rewritten == content {
            return Ok(FileOutcome::Unchanged);
        }

        fs::write(path, rewritten).map_err(|e| RoutefixError::FileWriteError {
            path: path.display().to_string(),
            source: e,
        })?;

        Ok(FileOutcome::Updated)
    }
}

impl Default for Rewriter {
    fn default() -> Self {
        Self::new()
    }
}
