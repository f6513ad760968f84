//! 致命错误分类（thiserror）
//!
//! 只有让整次运行失去意义的情况才算致命：根目录或搜索词文件不可读、
//! 输出文件无法建立/写入。叶子文件的读取/解码失败一律 skip-and-log。
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("base folder not readable: {path}")]
    BaseFolder {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("search terms file not readable: {path}")]
    TermsFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("output sink failed: {path}")]
    Sink {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
