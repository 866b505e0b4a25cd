//! # table 命令实现
//!
//! 打印度数对照表，可选导出 CSV。
//!
//! ## 依赖关系
//! - 使用 `cli/table.rs` 定义的参数
//! - 使用 `report/table.rs`, `report/export.rs`
//! - 使用 `tabled` 渲染表格

use crate::cli::table::TableArgs;
use crate::error::Result;
use crate::models::ConversionResult;
use crate::optics::format_diopter;
use crate::report::{self, export};
use crate::utils::output;

use tabled::{Table, Tabled};

#[derive(Tabled)]
struct TableRow {
    #[tabled(rename = "Glasses (D)")]
    spectacle: String,
    #[tabled(rename = "Contacts (D)")]
    contact: String,
    #[tabled(rename = "Δ (D)")]
    difference: String,
    #[tabled(rename = "Advice")]
    advice: String,
}

/// 执行 table 命令
pub fn execute(args: TableArgs) -> Result<()> {
    let config = args.optics.to_config()?;
    let mut results = report::conversion_table(args.from, args.to, args.step, &config)?;

    if args.changed_only {
        results.retain(|r| r.is_changed());
    }

    output::print_header(&format!(
        "Conversion chart {} to {} D (vertex {} mm)",
        format_diopter(args.from),
        format_diopter(args.to),
        config.vertex_distance_mm
    ));

    if results.is_empty() {
        output::print_warning("No rows to show");
    } else {
        println!("{}", Table::new(to_rows(&results)));
        output::print_info(&format!("{} rows", results.len()));
    }

    if let Some(path) = &args.output {
        export::table_to_csv(&results, path)?;
        output::print_success(&format!("Chart saved to '{}'", path.display()));
    }

    Ok(())
}

fn to_rows(results: &[ConversionResult]) -> Vec<TableRow> {
    results
        .iter()
        .map(|r| TableRow {
            spectacle: format_diopter(r.original),
            contact: format_diopter(r.converted),
            difference: format_diopter(r.difference),
            advice: r.advice().code().to_string(),
        })
        .collect()
}
