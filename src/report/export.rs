//! # 数据导出
//!
//! ## 支持格式
//! - 对照表 CSV：spectacle, contact, exact, difference, advice, formula
//! - 换算后的处方表 CSV：id, input, condition, spectacle, contact, difference, advice
//!
//! ## 依赖关系
//! - 被 `commands/table.rs`, `commands/batch.rs` 调用
//! - 使用 `csv` 库写入

use crate::batch::ContactRow;
use crate::error::{LensError, Result};
use crate::models::ConversionResult;
use crate::optics::{self, format_diopter};

use std::fs::File;
use std::io::Write;
use std::path::Path;

/// 换算后处方表的列，与 `ContactRow` 字段顺序一致
const CONTACT_COLUMNS: [&str; 7] = [
    "id",
    "input",
    "condition",
    "spectacle",
    "contact",
    "difference",
    "advice",
];

/// 导出对照表为 CSV 文件
pub fn table_to_csv(results: &[ConversionResult], output_path: &Path) -> Result<()> {
    let file = File::create(output_path).map_err(|e| LensError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;
    write_table(results, file).map_err(|e| with_path(e, output_path))
}

/// 对照表写入任意输出
pub fn write_table<W: Write>(results: &[ConversionResult], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record([
        "spectacle",
        "contact",
        "exact",
        "difference",
        "advice",
        "formula",
    ])?;

    for result in results {
        let exact = optics::exact_contact_power(result.original, result.vertex_distance_mm);
        wtr.write_record(&[
            format_diopter(result.original),
            format_diopter(result.converted),
            format!("{:.4}", exact),
            format_diopter(result.difference),
            result.advice().code().to_string(),
            result.formula.clone(),
        ])?;
    }

    wtr.flush().map_err(|e| LensError::FileWriteError {
        path: "<table>".to_string(),
        source: e,
    })?;

    Ok(())
}

/// 导出换算后的处方表
pub fn contacts_to_csv(rows: &[ContactRow], output_path: &Path) -> Result<()> {
    let file = File::create(output_path).map_err(|e| LensError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;
    write_contacts(rows, file).map_err(|e| with_path(e, output_path))
}

/// 处方表写入任意输出
pub fn write_contacts<W: Write>(rows: &[ContactRow], writer: W) -> Result<()> {
    // 表头显式写出，空表也保留表头
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(CONTACT_COLUMNS)?;
    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush().map_err(|e| LensError::FileWriteError {
        path: "<sheet>".to_string(),
        source: e,
    })?;

    Ok(())
}

/// 把占位路径替换成真实路径
fn with_path(err: LensError, path: &Path) -> LensError {
    match err {
        LensError::FileWriteError { source, .. } => LensError::FileWriteError {
            path: path.display().to_string(),
            source,
        },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::sheet::{convert_rows, read_sheet_from};
    use crate::optics::OpticsConfig;

    #[test]
    fn test_write_table() {
        let config = OpticsConfig::default();
        let results = vec![
            ConversionResult::compute(-5.0, &config),
            ConversionResult::compute(0.0, &config),
        ];

        let mut buf = Vec::new();
        write_table(&results, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "spectacle,contact,exact,difference,advice,formula");
        assert!(lines[1].starts_with("-5.00,-4.75,-4.7170,-0.25,reduce,"));
        assert!(lines[2].starts_with("0.00,0.00,0.0000,0.00,none,"));
    }

    #[test]
    fn test_write_contacts() {
        let rows = read_sheet_from("id,power\nA,500\n".as_bytes(), "mem").unwrap();
        let converted = convert_rows(&rows, &OpticsConfig::default(), "mem").unwrap();

        let mut buf = Vec::new();
        write_contacts(&converted, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert_eq!(
            text,
            "id,input,condition,spectacle,contact,difference,advice\n\
             A,500,myopia,-5.00,-4.75,-0.25,reduce\n"
        );
    }

    #[test]
    fn test_write_contacts_header_only_sheet() {
        let rows = read_sheet_from("id,power,condition\n".as_bytes(), "mem").unwrap();
        let converted = convert_rows(&rows, &OpticsConfig::default(), "mem").unwrap();
        assert!(converted.is_empty());

        let mut buf = Vec::new();
        write_contacts(&converted, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "id,input,condition,spectacle,contact,difference,advice\n"
        );
    }

    #[test]
    fn test_table_to_csv_file() {
        let dir = std::env::temp_dir().join("lensconv_export_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("table.csv");

        let results = vec![ConversionResult::compute(8.0, &OpticsConfig::default())];
        table_to_csv(&results, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("+8.00,+8.75"));

        std::fs::remove_dir_all(&dir).ok();
    }
}
