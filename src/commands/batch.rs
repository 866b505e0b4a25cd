//! # batch 命令实现
//!
//! 批量换算处方表。
//!
//! ## 功能
//! - 单文件或目录输入
//! - 并行处理（rayon）
//! - 每张表输出 `<名称>_contacts.csv`
//! - 指定输出目录时保留相对输入目录的子路径，同名表互不覆盖
//!
//! ## 依赖关系
//! - 使用 `cli/batch.rs` 定义的 BatchArgs
//! - 使用 `batch/` 模块进行收集、读取与并行处理
//! - 使用 `report/export.rs` 写出结果

use crate::batch::collector::output_name_for;
use crate::batch::{sheet, BatchRunner, ProcessResult, SheetCollector};
use crate::cli::batch::BatchArgs;
use crate::error::{LensError, Result};
use crate::optics::OpticsConfig;
use crate::report::export;
use crate::utils::output;

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// 执行 batch 命令
pub fn execute(args: BatchArgs) -> Result<()> {
    output::print_header("Prescription Sheet Conversion");

    let config = args.optics.to_config()?;

    if !args.input.exists() {
        return Err(LensError::FileNotFound {
            path: args.input.display().to_string(),
        });
    }

    if let Some(dir) = &args.output {
        fs::create_dir_all(dir).map_err(|e| LensError::FileWriteError {
            path: dir.display().to_string(),
            source: e,
        })?;
    }

    if args.input.is_file() {
        execute_single_sheet(&args, &config)
    } else {
        execute_directory(&args, &config)
    }
}

/// 单文件模式
fn execute_single_sheet(args: &BatchArgs, config: &OpticsConfig) -> Result<()> {
    output::print_info(&format!("Single sheet mode: '{}'", args.input.display()));

    let root = args.input.parent().unwrap_or_else(|| Path::new(""));
    let target = output_path_for(&args.input, root, args.output.as_deref());
    match process_sheet(&args.input, &target, config, args.overwrite) {
        ProcessResult::Success(rows) => {
            output::print_success(&format!(
                "{} rows converted -> '{}'",
                rows,
                target.display()
            ));
            Ok(())
        }
        ProcessResult::Skipped(msg) => {
            output::print_skip(&msg);
            Ok(())
        }
        ProcessResult::Failed(_, err) => Err(LensError::Other(err)),
    }
}

/// 目录模式
fn execute_directory(args: &BatchArgs, config: &OpticsConfig) -> Result<()> {
    output::print_info(&format!("Batch mode: directory '{}'", args.input.display()));

    let sheets = SheetCollector::new(args.input.clone())
        .with_pattern(&args.pattern)
        .recursive(args.recursive)
        .collect();

    if sheets.is_empty() {
        return Err(LensError::NoFilesFound {
            pattern: args.pattern.clone(),
        });
    }

    output::print_info(&format!("Found {} prescription sheets", sheets.len()));
    output::print_info(&format!(
        "Vertex distance: {} mm, rounding step: {} D",
        config.vertex_distance_mm, config.rounding_step
    ));

    let output_dir = args.output.as_deref();
    let collisions = colliding_targets(
        sheets
            .iter()
            .map(|sheet| output_path_for(sheet, &args.input, output_dir)),
    );
    if !collisions.is_empty() {
        output::print_warning(&format!(
            "{} output paths are shared by several sheets; those sheets will fail",
            collisions.len()
        ));
    }

    let runner = BatchRunner::new(args.jobs);
    let result = runner.run(sheets, |sheet_path| {
        let target = output_path_for(sheet_path, &args.input, output_dir);
        if collisions.contains(&target) {
            return ProcessResult::Failed(
                sheet_path.display().to_string(),
                format!(
                    "output '{}' would be written by more than one sheet",
                    target.display()
                ),
            );
        }
        process_sheet(sheet_path, &target, config, args.overwrite)
    })?;

    output::print_separator();
    output::print_done(&format!(
        "Batch complete: {} sheets, {} converted ({} rows), {} skipped, {} failed",
        result.total(),
        result.success,
        result.rows,
        result.skipped,
        result.failed
    ));

    if !result.failures.is_empty() {
        output::print_warning("Failed sheets:");
        for (path, err) in result.failures.iter().take(10) {
            output::print_error(&format!("  {}: {}", path, err));
        }
        if result.failures.len() > 10 {
            output::print_warning(&format!("  ... and {} more", result.failures.len() - 10));
        }
    }

    Ok(())
}

/// 输出路径：与输入同目录；指定输出目录时保留相对 `input_root` 的子目录
fn output_path_for(input: &Path, input_root: &Path, output_dir: Option<&Path>) -> PathBuf {
    let name = output_name_for(input);
    let parent = input.parent().unwrap_or_else(|| Path::new(""));
    match output_dir {
        Some(dir) => {
            let relative = parent.strip_prefix(input_root).unwrap_or(Path::new(""));
            dir.join(relative).join(name)
        }
        None => parent.join(name),
    }
}

/// 同一次运行中被多张表共用的输出路径
fn colliding_targets(targets: impl Iterator<Item = PathBuf>) -> HashSet<PathBuf> {
    let mut seen = HashSet::new();
    targets.filter(|t| !seen.insert(t.clone())).collect()
}

/// 换算一张表
fn process_sheet(
    input: &Path,
    target: &Path,
    config: &OpticsConfig,
    overwrite: bool,
) -> ProcessResult {
    if target.exists() && !overwrite {
        return ProcessResult::Skipped(format!("Output exists, skipping: {}", target.display()));
    }

    match convert_sheet(input, target, config) {
        Ok(rows) => ProcessResult::Success(rows),
        Err(e) => ProcessResult::Failed(input.display().to_string(), e.to_string()),
    }
}

fn convert_sheet(input: &Path, target: &Path, config: &OpticsConfig) -> Result<usize> {
    let label = input.display().to_string();
    let rows = sheet::read_sheet(input)?;
    let converted = sheet::convert_rows(&rows, config, &label)?;

    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| LensError::FileWriteError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }
    export::contacts_to_csv(&converted, target)?;
    Ok(converted.len())
}
