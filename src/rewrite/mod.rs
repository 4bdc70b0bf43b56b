//! # 重写模块
//!
//! 提供声明替换规则与文件重写引擎。
//!
//! ## 功能
//! - 固定顺序的正则替换规则
//! - 全文替换与逐文件写回
//!
//! ## 依赖关系
//! - 被 `commands/fix.rs` 使用
//! - 使用 `regex` 进行文本替换

pub mod engine;
pub mod rules;

pub use engine::{FileOutcome, Rewriter};
pub use rules::CANONICAL_DECL;
