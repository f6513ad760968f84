//! 扫描主流程（严格串行，单线程）
//!
//! 三段式：词表加载 → 两层目录遍历 + 叶子分发 → 凭据回查。
//! 叶子文件的读取失败 skip-and-log；根目录/词表/输出 sink 的失败致命。
use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::countries::country_name;
use crate::credentials::extract_credentials;
use crate::matcher::{scan_config_file, TermMatcher};
use crate::options::{ScanOptions, ScanStats};
use crate::report::Reporter;
use crate::terms::load_terms;
use crate::walk::{check_base_folder, classify_leaf, list_files, list_subdirs, parse_host_name, LeafKind};

/// 扫描整个转储目录并写出四个报告文件
///
/// 幂等性保证：输出在开始时全部截断，同一输入跑两遍产生逐字节一致的结果
/// （目录列举顺序不变的前提下）。
pub fn scan_and_report(opts: &ScanOptions) -> Result<ScanStats> {
    check_base_folder(&opts.base_folder)?;
    let terms = load_terms(&opts.terms_path)?;
    let matcher = TermMatcher::new(&terms).context("build term matcher")?;
    // Reporter 构造即截断全部输出文件
    let mut reporter = Reporter::create(&opts.outputs)?;

    let mut stats = ScanStats::default();

    let countries = list_subdirs(&opts.base_folder);
    let total = countries.len();

    for (code, country_path) in countries {
        let name = country_name(&code);
        reporter
            .begin_country(name, &code)
            .context("write country header")?;

        for (host_name, host_path) in list_subdirs(&country_path) {
            stats.hosts_processed += 1;
            // 目录名解析失败不是错误：没有表头行，凭据照常抽取
            if let Some(host) = parse_host_name(&host_name) {
                reporter
                    .host(&host.address, &host.port)
                    .context("write host line")?;
            }

            for (file_name, file_path) in list_files(&host_path) {
                let kind = match classify_leaf(&file_name) {
                    Some(k) => k,
                    None => continue,
                };
                match kind {
                    LeafKind::Config => match scan_config_file(&file_path, &matcher) {
                        Ok(records) => {
                            stats.files_scanned += 1;
                            for record in &records {
                                reporter.config_match(record).context("write config match")?;
                            }
                            stats.config_matches += records.len();
                        }
                        Err(e) => {
                            stats.files_skipped += 1;
                            warn!(path = %file_path.display(), error = %e, "skipping config file");
                        }
                    },
                    LeafKind::Credentials => match extract_credentials(&file_path) {
                        Ok(creds) => {
                            stats.files_scanned += 1;
                            for line in &creds {
                                reporter.credential(line).context("write credential")?;
                            }
                            stats.credentials_extracted += creds.len();
                        }
                        Err(e) => {
                            stats.files_skipped += 1;
                            warn!(path = %file_path.display(), error = %e, "skipping credential file");
                        }
                    },
                }
            }
        }

        reporter.end_country().context("write country trailer")?;
        stats.countries_processed += 1;
        let pct = (stats.countries_processed as f64 / total as f64) * 100.0;
        info!(code = %code, path = %country_path.display(), "processed country ({pct:.0}%)");
    }

    cross_match_credentials(&matcher, &mut reporter, &mut stats)?;

    reporter.finish(&opts.outputs)?;
    Ok(stats)
}

/// 第二遍：对累积的原始凭据行重跑子串匹配
/// 每个命中词在通用日志里各记一条；命中行本身只进 matched sink 一次
fn cross_match_credentials(
    matcher: &TermMatcher,
    reporter: &mut Reporter,
    stats: &mut ScanStats,
) -> Result<()> {
    for line in reporter.take_raw_credentials() {
        let matched = matcher.matched_terms(&line);
        if matched.is_empty() {
            continue;
        }
        for term in &matched {
            reporter
                .cross_match(term, &line)
                .context("write cross-match record")?;
        }
        reporter
            .matched_credential(&line)
            .context("write matched credential")?;
        stats.credentials_matched += 1;
    }
    Ok(())
}
