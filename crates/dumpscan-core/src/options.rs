//! 扫描选项与统计信息（模块）
use std::path::PathBuf;

/// 四个输出文件的路径
#[derive(Debug, Clone)]
pub struct OutputPaths {
    /// 通用命中日志（配置扫描 + 凭据回查的格式化记录）
    pub config_matches: PathBuf,
    /// 按国家/主机分组的凭据报告（带表头与缩进）
    pub credentials_report: PathBuf,
    /// 仅命中搜索词的凭据（原始行）
    pub matched_credentials: PathBuf,
    /// 国家表头 + `地址:端口` 清单
    pub ip_port_listing: PathBuf,
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self {
            config_matches: PathBuf::from("./configMatches.txt"),
            credentials_report: PathBuf::from("./creds.txt"),
            matched_credentials: PathBuf::from("./matchedCreds.txt"),
            ip_port_listing: PathBuf::from("./ipPorts.txt"),
        }
    }
}

/// 扫描选项
/// 路径全部显式传入（原型实现的硬编码常量在此被配置结构取代）
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// 转储根目录：直接子目录为国家码目录
    pub base_folder: PathBuf,
    /// 搜索词文件（按行分隔；空行不过滤，空词在子串语义下命中一切）
    pub terms_path: PathBuf,
    /// 输出文件集合（运行开始时全部截断）
    pub outputs: OutputPaths,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            base_folder: PathBuf::from("./data"),
            terms_path: PathBuf::from("./searchterms.txt"),
            outputs: OutputPaths::default(),
        }
    }
}

/// 扫描统计信息（便于 CLI 打印）
#[derive(Debug, Default, Clone)]
pub struct ScanStats {
    pub countries_processed: usize,
    pub hosts_processed: usize,
    pub files_scanned: usize,
    pub files_skipped: usize,
    pub config_matches: usize,
    pub credentials_extracted: usize,
    pub credentials_matched: usize,
}
