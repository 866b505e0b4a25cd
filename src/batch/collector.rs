//! # 处方表收集器
//!
//! 根据输入路径和模式收集待换算的处方表。
//!
//! ## 功能
//! - 支持单文件和目录输入
//! - 逗号分隔的多个通配模式（`*` / `?`）
//! - 递归目录搜索
//! - 跳过本工具自己生成的 `*_contacts.csv`
//!
//! ## 依赖关系
//! - 被 `commands/batch.rs` 调用
//! - 使用 `walkdir` 遍历目录

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 输出文件后缀
pub const OUTPUT_SUFFIX: &str = "_contacts.csv";

/// 处方表收集器
pub struct SheetCollector {
    /// 输入路径
    input: PathBuf,
    /// 匹配模式列表
    patterns: Vec<String>,
    /// 是否递归
    recursive: bool,
}

impl SheetCollector {
    /// 创建新的收集器（默认匹配 `*.csv`）
    pub fn new(input: PathBuf) -> Self {
        Self {
            input,
            patterns: vec!["*.csv".to_string()],
            recursive: false,
        }
    }

    /// 设置匹配模式（逗号分隔）
    pub fn with_pattern(mut self, pattern: &str) -> Self {
        let patterns: Vec<String> = pattern
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if !patterns.is_empty() {
            self.patterns = patterns;
        }
        self
    }

    /// 设置是否递归搜索
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 收集所有匹配的处方表（按路径排序）
    pub fn collect(&self) -> Vec<PathBuf> {
        if self.input.is_file() {
            return vec![self.input.clone()];
        }

        if !self.input.is_dir() {
            return vec![];
        }

        let max_depth = if self.recursive { usize::MAX } else { 1 };

        let mut sheets: Vec<PathBuf> = WalkDir::new(&self.input)
            .max_depth(max_depth)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| self.accepts(e.path()))
            .map(|e| e.path().to_path_buf())
            .collect();

        sheets.sort();
        sheets
    }

    /// 匹配任一模式且不是输出文件
    fn accepts(&self, path: &Path) -> bool {
        let filename = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => return false,
        };

        if filename.ends_with(OUTPUT_SUFFIX) {
            return false;
        }

        self.patterns.iter().any(|p| glob_match(p, filename))
    }
}

/// 由输入表路径生成输出文件名
pub fn output_name_for(input: &Path) -> String {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("sheet");
    format!("{}{}", stem, OUTPUT_SUFFIX)
}

/// 简单通配匹配（`*` 任意串，`?` 单字符）
fn glob_match(pattern: &str, text: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();

    let mut p = 0;
    let mut t = 0;
    let mut star: Option<(usize, usize)> = None;

    while t < text.len() {
        if p < pattern.len() && (pattern[p] == '?' || pattern[p] == text[t]) {
            p += 1;
            t += 1;
        } else if p < pattern.len() && pattern[p] == '*' {
            star = Some((p, t));
            p += 1;
        } else if let Some((sp, st)) = star {
            p = sp + 1;
            t = st + 1;
            star = Some((sp, st + 1));
        } else {
            return false;
        }
    }

    pattern[p..].iter().all(|&c| c == '*')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_glob_match() {
        assert!(glob_match("*.csv", "clinic.csv"));
        assert!(glob_match("*.csv", "處方.csv"));
        assert!(!glob_match("*.csv", "clinic.tsv"));
        assert!(glob_match("rx_??.csv", "rx_01.csv"));
        assert!(!glob_match("rx_??.csv", "rx_001.csv"));
        assert!(glob_match("*", "anything"));
    }

    #[test]
    fn test_output_name() {
        assert_eq!(
            output_name_for(Path::new("/tmp/clinic.csv")),
            "clinic_contacts.csv"
        );
    }

    #[test]
    fn test_collect_skips_outputs() {
        let dir = std::env::temp_dir().join("lensconv_collector_test");
        let nested = dir.join("nested");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.join("a.csv"), "id,power\n").unwrap();
        fs::write(dir.join("a_contacts.csv"), "id\n").unwrap();
        fs::write(dir.join("notes.txt"), "").unwrap();
        fs::write(nested.join("b.csv"), "id,power\n").unwrap();

        let flat = SheetCollector::new(dir.clone()).collect();
        assert_eq!(flat, vec![dir.join("a.csv")]);

        let deep = SheetCollector::new(dir.clone()).recursive(true).collect();
        assert_eq!(deep.len(), 2);

        let txt = SheetCollector::new(dir.clone())
            .with_pattern("*.txt, ")
            .collect();
        assert_eq!(txt, vec![dir.join("notes.txt")]);

        fs::remove_dir_all(&dir).ok();
    }
}
