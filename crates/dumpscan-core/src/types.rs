//! 公共类型（对外暴露）

/// 配置扫描的单条命中记录：三元组 (文件路径, 命中词, 命中行)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub file: String,
    pub term: String,
    pub line: String,
}

impl MatchRecord {
    /// 序列化为参考实现的单行文本格式（格式里写的是命中行，不是词，保持逐字一致）
    pub fn format_line(&self) -> String {
        format!("File: {} | Matched Term: {}", self.file, self.line)
    }
}
