//! 凭据行抽取（行首锚定模式）
//!
//! 注意与配置扫描的语义差别：这里是「行首 ≥1 字符 + 冒号 + 任意尾部」的
//! 锚定匹配，不是任意位置子串。两套语义刻意分开维护。
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::Result;
use regex::Regex;
use tracing::warn;

/// 逐行扫描单个 txt 文件，返回命中 `^.+:.*` 的行（去除首尾空白，保持文件顺序）
/// - `alice:secret123` 命中；`:orphaned`（冒号前无字符）与无冒号行不命中
/// - 中途出现解码/读取错误：告警后放弃该文件剩余部分，已抽到的行保留
pub fn extract_credentials(path: &Path) -> Result<Vec<String>> {
    // 每文件编译一次；模式固定且极小，不值得全局缓存
    let pattern = Regex::new(r"^.+:.*").expect("credential pattern is valid");

    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut creds = Vec::new();
    for line in reader.lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "abandoning credential file mid-read");
                break;
            }
        };
        if pattern.is_match(&line) {
            creds.push(line.trim().to_string());
        }
    }
    Ok(creds)
}
