//! # fix 命令实现
//!
//! 扫描 API 路由文件并统一后端 URL 声明。
//!
//! ## 功能
//! - 递归收集 `apps/frontend/app/api` 下的 route.ts 文件
//! - 逐文件应用替换规则，仅在内容变化时写回
//! - 打印逐文件状态、结果表格与最终汇总
//!
//! ## 依赖关系
//! - 使用 `batch/` 收集与顺序执行
//! - 使用 `rewrite/` 应用替换
//! - 使用 `utils/output.rs`

use crate::batch::{BatchRunner, Disposition, FileCollector};
use crate::error::Result;
use crate::rewrite::{FileOutcome, Rewriter, CANONICAL_DECL};
use crate::utils::output;

use std::path::PathBuf;
use tabled::{Table, Tabled};

/// 路由文件扫描根目录（相对于工作目录）
const API_ROUTES_ROOT: &str = "apps/frontend/app/api";

/// 路由文件名匹配模式
const ROUTE_FILE_PATTERN: &str = "route.ts";

/// 结果表格行
#[derive(Debug, Clone, Tabled)]
struct DispositionRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl From<&Disposition> for DispositionRow {
    fn from(disposition: &Disposition) -> Self {
        match disposition {
            Disposition::Updated(path) => DispositionRow {
                file: path.display().to_string(),
                status: "updated".to_string(),
            },
            Disposition::Unchanged(path) => DispositionRow {
                file: path.display().to_string(),
                status: "unchanged".to_string(),
            },
            Disposition::Failed(path, _) => DispositionRow {
                file: path.display().to_string(),
                status: "error".to_string(),
            },
        }
    }
}

/// 执行 fix 命令
///
/// 单个文件的读写失败只记录为该文件的 error 状态，
/// 不中断整批，也不影响进程退出码。
pub fn execute() -> Result<()> {
    output::print_header("Canonicalizing Backend URL Declarations");

    let files = FileCollector::new(PathBuf::from(API_ROUTES_ROOT))
        .with_pattern(ROUTE_FILE_PATTERN)
        .recursive(true)
        .collect()?;

    if files.is_empty() {
        output::print_warning(&format!(
            "No files matched '{}' under {}",
            ROUTE_FILE_PATTERN, API_ROUTES_ROOT
        ));
        output::print_done("Updated 0 of 0 route files");
        output::print_info(&format!("Canonical declaration: {}", CANONICAL_DECL));
        return Ok(());
    }

    output::print_info(&format!("Found {} route files", files.len()));

    let rewriter = Rewriter::new();
    let summary = BatchRunner::new("Rewriting").run(&files, |path| {
        match rewriter.process(path) {
            Ok(FileOutcome::Updated) => Disposition::Updated(path.to_path_buf()),
            Ok(FileOutcome::Unchanged) => Disposition::Unchanged(path.to_path_buf()),
            Err(e) => Disposition::Failed(path.to_path_buf(), e.to_string()),
        }
    });

    // 结果表格
    output::print_header("Results");
    let rows: Vec<DispositionRow> = summary.dispositions.iter().map(DispositionRow::from).collect();
    let table = Table::new(&rows);
    println!("{}", table);

    if summary.failed > 0 {
        output::print_warning(&format!("{} file(s) could not be processed", summary.failed));
    }

    output::print_done(&format!(
        "Updated {} of {} route files",
        summary.updated,
        summary.total()
    ));
    output::print_info(&format!("Canonical declaration: {}", CANONICAL_DECL));

    Ok(())
}
