//! # 声明替换规则
//!
//! 定义需要被规范化的历史声明写法及其统一替换目标。
//!
//! ## 历史写法
//! ```text
//! const BACKEND_URL = 'http://old-host:9999';
//! const backendUrl = "https://x";
//! ```
//! 两种写法均替换为带环境变量回退的规范行。
//!
//! ## 依赖关系
//! - 被 `rewrite/engine.rs` 使用
//! - 使用 `regex` crate

use regex::Regex;

/// 规范的后端 URL 声明行，所有匹配处统一替换为此行
pub const CANONICAL_DECL: &str = "const BACKEND_URL = process.env.NEXT_PUBLIC_API_URL || process.env.BACKEND_URL || 'http://localhost:3001';";

/// 单条替换规则：匹配模式与替换文本
pub struct SubstitutionRule {
    /// 匹配历史声明写法的正则
    pub pattern: Regex,
    /// 替换文本
    pub replacement: &'static str,
}

/// 按固定顺序返回所有声明替换规则
///
/// 标识符匹配区分大小写，只覆盖两种历史写法；
/// 其他拼写保持原样。
pub fn declaration_rules() -> Vec<SubstitutionRule> {
    vec![
        SubstitutionRule {
            pattern: Regex::new(r#"const BACKEND_URL = ['"][^'"]*['"];?"#).unwrap(),
            replacement: CANONICAL_DECL,
        },
        SubstitutionRule {
            pattern: Regex::new(r#"const backendUrl = ['"][^'"]*['"];?"#).unwrap(),
            replacement: CANONICAL_DECL,
        },
    ]
}
