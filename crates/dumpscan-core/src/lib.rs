//! 泄露凭据转储扫描库
//!
//! 设计要点：
//! - 目录结构约定为 `base/<国家码>/<地址_端口>/<叶子文件>`，两层遍历 + 后缀分类。
//! - 两套扫描语义刻意保持独立：conf 文件走“子串命中”（任意位置），txt 文件走
//!   行首锚定的 `user:pass` 模式抽取——合并两者会悄悄改变命中集合。
//! - 子串匹配统一为一个原语（Aho-Corasick，重叠搜索），配置扫描与凭据回查
//!   共用同一入口，返回按词序排列的命中子集。
//! - 全流程串行单线程；输出文件在运行开始时一律截断，保证重复运行结果逐字节一致。

mod config;
mod countries;
mod credentials;
mod error;
mod matcher;
mod options;
mod report;
mod scan;
mod terms;
mod types;
mod walk;

// 对外暴露的最小 API
pub use config::{OutputConfig, RunConfig};
pub use countries::country_name;
pub use credentials::extract_credentials;
pub use error::ScanError;
pub use matcher::TermMatcher;
pub use options::{OutputPaths, ScanOptions, ScanStats};
pub use scan::scan_and_report;
pub use terms::load_terms;
pub use types::MatchRecord;
