//! # CLI 模块
//!
//! 使用 `clap` 定义命令行入口。
//!
//! ## 命令结构
//! 单一用途工具，不消费任何参数、标志或环境变量，
//! clap 仅提供 `--help` 与 `--version`。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 传递给 `commands/fix.rs`

use clap::Parser;

/// Routefix - 后端 URL 声明批量修正工具
#[derive(Parser)]
#[command(name = "routefix")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Canonicalize backend URL constants in Next.js API route files", long_about = None)]
pub struct Cli {}
