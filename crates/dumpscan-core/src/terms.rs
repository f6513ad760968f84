//! 搜索词加载
use std::path::Path;

use crate::error::ScanError;

/// 读取按行分隔的搜索词文件，保持文件顺序
/// - 每行去除首尾空白
/// - 空行不过滤：空词在子串语义下命中所有行（参考实现的既有行为，保留）
pub fn load_terms(path: &Path) -> Result<Vec<String>, ScanError> {
    let txt = std::fs::read_to_string(path).map_err(|source| ScanError::TermsFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(txt.lines().map(|l| l.trim().to_string()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_trimmed_terms_in_order() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "  root \npassword\n\nadmin").unwrap();
        let terms = load_terms(f.path()).unwrap();
        assert_eq!(terms, vec!["root", "password", "", "admin"]);
    }

    #[test]
    fn missing_file_is_fatal() {
        let err = load_terms(Path::new("/nonexistent/searchterms.txt")).unwrap_err();
        assert!(matches!(err, ScanError::TermsFile { .. }));
    }
}
