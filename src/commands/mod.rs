//! # 命令执行模块
//!
//! 实现批量修正的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `rewrite/`, `utils/`
//! - 子模块: fix

pub mod fix;

use crate::cli::Cli;
use crate::error::Result;

/// 执行命令
pub fn run(_cli: Cli) -> Result<()> {
    fix::execute()
}
