//! 运行配置文件加载（TOML）
//!
//! 字段全部可选：缺省字段落到内置默认值，CLI 参数再覆盖文件值
//! （合并在 CLI 侧完成，这里只负责解析）。
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::options::{OutputPaths, ScanOptions};

/// 顶层配置文件结构
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RunConfig {
    #[serde(default)]
    pub base_folder: Option<PathBuf>,
    #[serde(default)]
    pub search_terms: Option<PathBuf>,
    #[serde(default)]
    pub outputs: OutputConfig,
}

/// `[outputs]` 小节
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub config_matches: Option<PathBuf>,
    #[serde(default)]
    pub credentials_report: Option<PathBuf>,
    #[serde(default)]
    pub matched_credentials: Option<PathBuf>,
    #[serde(default)]
    pub ip_port_listing: Option<PathBuf>,
}

impl RunConfig {
    /// 从 TOML 文件加载
    pub fn load(path: &Path) -> Result<Self> {
        let txt = std::fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let parsed: RunConfig = toml::from_str(&txt)
            .with_context(|| format!("parse config file {}", path.display()))?;
        Ok(parsed)
    }

    /// 在内置默认值上套用文件值，产出完整的扫描选项
    pub fn into_options(self) -> ScanOptions {
        let defaults = ScanOptions::default();
        let default_outputs = OutputPaths::default();
        ScanOptions {
            base_folder: self.base_folder.unwrap_or(defaults.base_folder),
            terms_path: self.search_terms.unwrap_or(defaults.terms_path),
            outputs: OutputPaths {
                config_matches: self
                    .outputs
                    .config_matches
                    .unwrap_or(default_outputs.config_matches),
                credentials_report: self
                    .outputs
                    .credentials_report
                    .unwrap_or(default_outputs.credentials_report),
                matched_credentials: self
                    .outputs
                    .matched_credentials
                    .unwrap_or(default_outputs.matched_credentials),
                ip_port_listing: self
                    .outputs
                    .ip_port_listing
                    .unwrap_or(default_outputs.ip_port_listing),
            },
        }
    }
}
