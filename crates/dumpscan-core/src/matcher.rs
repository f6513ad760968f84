//! 子串匹配原语与配置文件扫描
//!
//! 设计目标：
//! - “一行命中哪些词”统一为一个原语，配置扫描与凭据回查共用同一入口。
//! - 非空词构建一个全局 Aho-Corasick 自动机，用重叠搜索保证被其他命中
//!   覆盖的词不被吞掉；空词单独登记，恒命中。
//! - 返回的命中子集按词表顺序排列（影响输出行顺序，不影响正确性）。
use std::collections::BTreeSet;
use std::path::Path;

use aho_corasick::AhoCorasick;
use anyhow::Result;

use crate::types::MatchRecord;

/// 从词表构建一次、整个运行期间复用的匹配器
pub struct TermMatcher {
    /// 词表（文件顺序，含空词）
    terms: Vec<String>,
    /// 非空词的自动机；词表全为空词时为 None
    ac: Option<AhoCorasick>,
    /// 自动机模式下标 -> 词表下标
    ac_term_ids: Vec<usize>,
    /// 空词的词表下标（恒命中）
    blank_ids: Vec<usize>,
}

impl TermMatcher {
    pub fn new(terms: &[String]) -> Result<Self> {
        let mut patterns: Vec<&str> = Vec::new();
        let mut ac_term_ids = Vec::new();
        let mut blank_ids = Vec::new();
        for (idx, t) in terms.iter().enumerate() {
            if t.is_empty() {
                blank_ids.push(idx);
            } else {
                patterns.push(t.as_str());
                ac_term_ids.push(idx);
            }
        }
        let ac = if patterns.is_empty() {
            None
        } else {
            Some(AhoCorasick::new(&patterns)?)
        };
        Ok(Self {
            terms: terms.to_vec(),
            ac,
            ac_term_ids,
            blank_ids,
        })
    }

    /// 返回命中该行的词的子集（词表顺序）
    /// 空词恒命中，包括空行（Python 的 `"" in line` 语义）
    pub fn matched_terms<'a>(&'a self, line: &str) -> Vec<&'a str> {
        let mut hit: BTreeSet<usize> = self.blank_ids.iter().copied().collect();
        if let Some(ac) = &self.ac {
            // 重叠搜索：leftmost 迭代会跳过与先前命中重叠的模式，这里不能用
            for m in ac.find_overlapping_iter(line) {
                hit.insert(self.ac_term_ids[m.pattern().as_usize()]);
            }
        }
        hit.into_iter().map(|i| self.terms[i].as_str()).collect()
    }

    /// 是否至少有一个词命中（凭据回查的快速判定）
    pub fn matches_any(&self, line: &str) -> bool {
        if !self.blank_ids.is_empty() {
            return true;
        }
        match &self.ac {
            Some(ac) => ac.is_match(line),
            None => false,
        }
    }
}

/// 扫描单个配置文件（子串语义，任意位置命中）
/// - 整文件读入内存后按行匹配（预期文件都很小，整读是刻意的简化取舍）
/// - 一行命中多个词就输出多条记录，重复允许
/// - 读取/解码失败上抛，由调用方决定 skip-and-log
pub(crate) fn scan_config_file(path: &Path, matcher: &TermMatcher) -> Result<Vec<MatchRecord>> {
    let txt = std::fs::read_to_string(path)?;

    let file = path.display().to_string();
    let mut records = Vec::new();
    for line in txt.lines() {
        for term in matcher.matched_terms(line) {
            records.push(MatchRecord {
                file: file.clone(),
                term: term.to_string(),
                line: line.to_string(),
            });
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn matcher(terms: &[&str]) -> TermMatcher {
        let owned: Vec<String> = terms.iter().map(|s| s.to_string()).collect();
        TermMatcher::new(&owned).unwrap()
    }

    #[test]
    fn matched_subset_in_term_order() {
        let m = matcher(&["pass", "root", "admin"]);
        assert_eq!(m.matched_terms("root:password"), vec!["pass", "root"]);
        assert!(m.matched_terms("nothing here").is_empty());
    }

    #[test]
    fn overlapping_terms_all_reported() {
        // "ab" 的命中覆盖了 "b"，重叠搜索下两者都要报
        let m = matcher(&["ab", "b"]);
        assert_eq!(m.matched_terms("ab"), vec!["ab", "b"]);
    }

    #[test]
    fn blank_term_matches_everything() {
        let m = matcher(&["", "root"]);
        assert_eq!(m.matched_terms("anything at all"), vec![""]);
        assert_eq!(m.matched_terms("root login"), vec!["", "root"]);
        // 空行也命中（与 Python 的 `"" in ""` 一致）
        assert_eq!(m.matched_terms(""), vec![""]);
        assert!(m.matches_any(""));
    }

    #[test]
    fn empty_term_list_matches_nothing() {
        let m = matcher(&[]);
        assert!(m.matched_terms("root:toor").is_empty());
        assert!(!m.matches_any("root:toor"));
    }

    #[test]
    fn config_scan_emits_one_record_per_matching_term() {
        let m = matcher(&["listen", "port"]);
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "listen port 8080\nmax_clients 10\n").unwrap();
        let records = scan_config_file(f.path(), &m).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].term, "listen");
        assert_eq!(records[1].term, "port");
        assert_eq!(records[0].line, "listen port 8080");
        assert!(records[0].format_line().ends_with("| Matched Term: listen port 8080"));
    }

    #[test]
    fn unreadable_config_file_is_an_error() {
        let m = matcher(&["x"]);
        assert!(scan_config_file(Path::new("/nonexistent/app.conf"), &m).is_err());
    }
}
