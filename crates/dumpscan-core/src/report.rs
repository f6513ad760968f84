//! 输出聚合器：四个文件 sink + 回查用的原始凭据累积
//!
//! 写入纪律：
//! - 构造时四个文件全部截断（File::create），重复运行不累积。
//! - 国家表头与收尾空行同时写入凭据报告和 IP/端口清单。
//! - 凭据行在报告里带制表符缩进；同一行以未缩进形式进入内存累积，
//!   供第二遍回查使用（第五个 sink，不落盘）。
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::ScanError;
use crate::options::OutputPaths;
use crate::types::MatchRecord;

pub(crate) struct Reporter {
    config_matches: BufWriter<File>,
    credentials_report: BufWriter<File>,
    matched_credentials: BufWriter<File>,
    ip_port_listing: BufWriter<File>,
    /// 回查输入：按抽取顺序累积的原始凭据行
    raw_credentials: Vec<String>,
}

fn create_sink(path: &Path) -> Result<BufWriter<File>, ScanError> {
    let file = File::create(path).map_err(|source| ScanError::Sink {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufWriter::new(file))
}

impl Reporter {
    /// 打开（并截断）全部输出文件
    pub(crate) fn create(outputs: &OutputPaths) -> Result<Self, ScanError> {
        Ok(Self {
            config_matches: create_sink(&outputs.config_matches)?,
            credentials_report: create_sink(&outputs.credentials_report)?,
            matched_credentials: create_sink(&outputs.matched_credentials)?,
            ip_port_listing: create_sink(&outputs.ip_port_listing)?,
            raw_credentials: Vec::new(),
        })
    }

    fn sink_err(path: &Path, source: std::io::Error) -> ScanError {
        ScanError::Sink {
            path: path.to_path_buf(),
            source,
        }
    }

    /// 国家表头：`== <显示名> (<码>) ==`，写入报告与 IP/端口清单
    pub(crate) fn begin_country(&mut self, name: &str, code: &str) -> std::io::Result<()> {
        writeln!(self.credentials_report, "== {name} ({code}) ==")?;
        writeln!(self.ip_port_listing, "== {name} ({code}) ==")
    }

    /// 国家收尾空行（可读性），同样写两个 sink
    pub(crate) fn end_country(&mut self) -> std::io::Result<()> {
        writeln!(self.credentials_report)?;
        writeln!(self.ip_port_listing)
    }

    /// 主机行：`<地址>:<端口>`；仅当目录名解析成功时调用
    pub(crate) fn host(&mut self, address: &str, port: &str) -> std::io::Result<()> {
        writeln!(self.credentials_report, "{address}:{port}")?;
        writeln!(self.ip_port_listing, "{address}:{port}")
    }

    /// 单条凭据：报告里缩进，原始行进入回查累积
    pub(crate) fn credential(&mut self, line: &str) -> std::io::Result<()> {
        writeln!(self.credentials_report, "\t{line}")?;
        self.raw_credentials.push(line.to_string());
        Ok(())
    }

    /// 配置扫描命中记录（参考实现的文本格式）
    pub(crate) fn config_match(&mut self, record: &MatchRecord) -> std::io::Result<()> {
        writeln!(self.config_matches, "{}", record.format_line())
    }

    /// 回查命中：格式化记录进通用日志，原始行进 matched sink
    pub(crate) fn cross_match(&mut self, term: &str, line: &str) -> std::io::Result<()> {
        writeln!(self.config_matches, "Matched Term: {term} | Line: {line}")
    }

    pub(crate) fn matched_credential(&mut self, line: &str) -> std::io::Result<()> {
        writeln!(self.matched_credentials, "{line}")
    }

    /// 取走累积的原始凭据（回查阶段需要同时可变借用 sink）
    pub(crate) fn take_raw_credentials(&mut self) -> Vec<String> {
        std::mem::take(&mut self.raw_credentials)
    }

    /// 冲刷全部 sink；路径仅用于错误报告
    pub(crate) fn finish(mut self, outputs: &OutputPaths) -> Result<(), ScanError> {
        self.config_matches
            .flush()
            .map_err(|e| Self::sink_err(&outputs.config_matches, e))?;
        self.credentials_report
            .flush()
            .map_err(|e| Self::sink_err(&outputs.credentials_report, e))?;
        self.matched_credentials
            .flush()
            .map_err(|e| Self::sink_err(&outputs.matched_credentials, e))?;
        self.ip_port_listing
            .flush()
            .map_err(|e| Self::sink_err(&outputs.ip_port_listing, e))?;
        Ok(())
    }
}
