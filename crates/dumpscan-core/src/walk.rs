//! 目录树遍历与分类
//!
//! 约定结构：`base/<国家码>/<地址_端口>/<叶子文件>`。
//! 每层都只看“直接子项”（walkdir 限深为 1），非目录项静默跳过。
//! 列举顺序沿用文件系统返回的顺序，输出顺序的非确定性是接受的。
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::ScanError;

/// 主机目录名解出的地址与端口（两段原样保留，不做 IP/端口合法性校验）
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HostAddr {
    pub(crate) address: String,
    pub(crate) port: String,
}

/// 叶子文件按后缀分类的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LeafKind {
    /// `*conf`：子串扫描
    Config,
    /// `*.txt`：凭据抽取
    Credentials,
}

/// 按第一个下划线把 `地址_端口` 拆成两段；两段都非空才算解析成功
/// 解析失败不是错误：该主机照常抽取凭据，只是不写表头行
pub(crate) fn parse_host_name(name: &str) -> Option<HostAddr> {
    let (address, port) = name.split_once('_')?;
    if address.is_empty() || port.is_empty() {
        return None;
    }
    Some(HostAddr {
        address: address.to_string(),
        port: port.to_string(),
    })
}

/// 文件名后缀分类；其余后缀一律忽略
pub(crate) fn classify_leaf(name: &str) -> Option<LeafKind> {
    if name.ends_with("conf") {
        Some(LeafKind::Config)
    } else if name.ends_with(".txt") {
        Some(LeafKind::Credentials)
    } else {
        None
    }
}

/// 列举一个目录的直接子目录，返回 (目录名, 路径)
/// 目录名无法转成 UTF-8 的条目跳过（转储目录名都是 ASCII 码/地址）
pub(crate) fn list_subdirs(dir: &Path) -> Vec<(String, PathBuf)> {
    let mut out = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };
        if !entry.file_type().is_dir() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            out.push((name.to_string(), entry.into_path()));
        }
    }
    out
}

/// 列举一个主机目录的直接子文件，返回 (文件名, 路径)
pub(crate) fn list_files(dir: &Path) -> Vec<(String, PathBuf)> {
    let mut out = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            out.push((name.to_string(), entry.into_path()));
        }
    }
    out
}

/// 校验根目录可读；根目录不可读对整次运行是致命的
pub(crate) fn check_base_folder(base: &Path) -> Result<(), ScanError> {
    std::fs::read_dir(base)
        .map(|_| ())
        .map_err(|source| ScanError::BaseFolder {
            path: base.to_path_buf(),
            source,
        })
}
