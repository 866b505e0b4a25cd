//! # 处方表读取与换算
//!
//! ## 输入格式
//! ```text
//! id,power,condition
//! A001,500,myopia
//! A002,+2.50,hyperopia
//! A003,-6.00,
//! ```
//! - `power` 与命令行输入同样宽松（"500" / "5.00" / "-5.00 D"）
//! - `condition` 可省略或留空，默认近视
//!
//! ## 依赖关系
//! - 被 `commands/batch.rs` 调用
//! - 使用 `csv` + `serde` 读取
//! - 使用 `models/`, `optics/` 换算

use crate::error::{LensError, Result};
use crate::models::{ConversionResult, EyeCondition};
use crate::optics::{format_diopter, OpticsConfig};

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// 处方表中的一行
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PrescriptionRow {
    pub id: String,
    pub power: String,
    #[serde(default)]
    pub condition: Option<String>,
}

/// 换算后的一行
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactRow {
    pub id: String,
    pub input: String,
    pub condition: EyeCondition,
    pub spectacle: String,
    pub contact: String,
    pub difference: String,
    pub advice: &'static str,
}

/// 读取处方表文件
pub fn read_sheet(path: &Path) -> Result<Vec<PrescriptionRow>> {
    let file = File::open(path).map_err(|e| LensError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    read_sheet_from(file, &path.display().to_string())
}

/// 从任意来源读取处方表
pub fn read_sheet_from<R: Read>(reader: R, label: &str) -> Result<Vec<PrescriptionRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (idx, record) in rdr.deserialize::<PrescriptionRow>().enumerate() {
        let row = record.map_err(|e| LensError::ParseError {
            format: "prescription sheet".to_string(),
            path: label.to_string(),
            reason: format!("line {}: {}", idx + 2, e),
        })?;
        rows.push(row);
    }

    Ok(rows)
}

/// 换算整张表
///
/// 任一行的屈光状态无法识别时整张表失败，错误信息指出行号。
pub fn convert_rows(
    rows: &[PrescriptionRow],
    config: &OpticsConfig,
    label: &str,
) -> Result<Vec<ContactRow>> {
    rows.iter()
        .enumerate()
        .map(|(idx, row)| {
            convert_row(row, config).map_err(|reason| LensError::ParseError {
                format: "prescription sheet".to_string(),
                path: label.to_string(),
                reason: format!("line {} (id '{}'): {}", idx + 2, row.id, reason),
            })
        })
        .collect()
}

/// 换算单行
fn convert_row(
    row: &PrescriptionRow,
    config: &OpticsConfig,
) -> std::result::Result<ContactRow, String> {
    let condition = match row.condition.as_deref().map(str::trim) {
        None | Some("") => EyeCondition::default(),
        Some(text) => text.parse::<EyeCondition>()?,
    };

    let spectacle = condition.apply(config.normalize(&row.power));
    let result = ConversionResult::compute(spectacle, config);

    Ok(ContactRow {
        id: row.id.clone(),
        input: row.power.clone(),
        condition,
        spectacle: format_diopter(result.original),
        contact: format_diopter(result.converted),
        difference: format_diopter(result.difference),
        advice: result.advice().code(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHEET: &str = "id,power,condition\n\
                         A001,500,myopia\n\
                         A002,+8.00,hyperopia\n\
                         A003,-2.00,\n\
                         A004,abc,h\n";

    #[test]
    fn test_read_sheet() {
        let rows = read_sheet_from(SHEET.as_bytes(), "mem").unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].id, "A001");
        assert_eq!(rows[1].condition.as_deref(), Some("hyperopia"));
    }

    #[test]
    fn test_condition_column_is_optional() {
        let rows = read_sheet_from("id,power\nX,600\n".as_bytes(), "mem").unwrap();
        assert_eq!(rows[0].condition, None);

        let converted = convert_rows(&rows, &OpticsConfig::default(), "mem").unwrap();
        assert_eq!(converted[0].condition, EyeCondition::Myopia);
        assert_eq!(converted[0].spectacle, "-6.00");
    }

    #[test]
    fn test_convert_rows() {
        let rows = read_sheet_from(SHEET.as_bytes(), "mem").unwrap();
        let converted = convert_rows(&rows, &OpticsConfig::default(), "mem").unwrap();

        assert_eq!(converted[0].spectacle, "-5.00");
        assert_eq!(converted[0].contact, "-4.75");
        assert_eq!(converted[0].difference, "-0.25");
        assert_eq!(converted[0].advice, "reduce");

        assert_eq!(converted[1].contact, "+8.75");
        assert_eq!(converted[1].difference, "+0.75");
        assert_eq!(converted[1].advice, "add");

        assert_eq!(converted[2].condition, EyeCondition::Myopia);
        assert_eq!(converted[2].advice, "none");

        // 无法解析的度数静默归零
        assert_eq!(converted[3].spectacle, "0.00");
        assert_eq!(converted[3].contact, "0.00");
    }

    #[test]
    fn test_unknown_condition_names_the_line() {
        let rows = read_sheet_from("id,power,condition\nA,500,m\nB,300,cyl\n".as_bytes(), "mem")
            .unwrap();
        let err = convert_rows(&rows, &OpticsConfig::default(), "mem").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("line 3"), "{}", msg);
        assert!(msg.contains("cyl"), "{}", msg);
    }
}
