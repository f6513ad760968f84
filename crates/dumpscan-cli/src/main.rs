use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dumpscan_core::{scan_and_report, OutputPaths, RunConfig, ScanOptions};
use std::path::PathBuf;
use tracing::info;

/// 命令行入口（基于 clap）
#[derive(Parser, Debug)]
#[command(name = "dumpscan", version, about = "泄露凭据转储扫描器")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 扫描转储目录并生成四个报告文件
    Scan {
        /// 转储根目录（直接子目录为国家码目录）
        #[arg(long)]
        input: Option<PathBuf>,

        /// 搜索词文件（按行分隔）
        #[arg(long)]
        terms: Option<PathBuf>,

        /// 运行配置文件（TOML）；CLI 参数优先于文件值
        #[arg(long)]
        config: Option<PathBuf>,

        /// 通用命中日志输出路径
        #[arg(long)]
        out_config_matches: Option<PathBuf>,

        /// 按国家/主机分组的凭据报告输出路径
        #[arg(long)]
        out_credentials: Option<PathBuf>,

        /// 仅命中词的凭据输出路径
        #[arg(long)]
        out_matched_creds: Option<PathBuf>,

        /// IP/端口清单输出路径
        #[arg(long)]
        out_ip_ports: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // 初始化日志（支持通过 RUST_LOG 控制等级，例如 info、debug）
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan {
            input,
            terms,
            config,
            out_config_matches,
            out_credentials,
            out_matched_creds,
            out_ip_ports,
        } => {
            // 三层合并：内置默认值 ← 配置文件 ← CLI 参数
            let base = match config {
                Some(path) => RunConfig::load(&path)?.into_options(),
                None => ScanOptions::default(),
            };
            let opts = ScanOptions {
                base_folder: input.unwrap_or(base.base_folder),
                terms_path: terms.unwrap_or(base.terms_path),
                outputs: OutputPaths {
                    config_matches: out_config_matches.unwrap_or(base.outputs.config_matches),
                    credentials_report: out_credentials.unwrap_or(base.outputs.credentials_report),
                    matched_credentials: out_matched_creds
                        .unwrap_or(base.outputs.matched_credentials),
                    ip_port_listing: out_ip_ports.unwrap_or(base.outputs.ip_port_listing),
                },
            };
            info!(input = %opts.base_folder.display(), terms = %opts.terms_path.display(), "starting scan");

            let stats = scan_and_report(&opts).context("scan failed")?;

            info!(
                countries = stats.countries_processed,
                hosts = stats.hosts_processed,
                files_scanned = stats.files_scanned,
                files_skipped = stats.files_skipped,
                config_matches = stats.config_matches,
                credentials = stats.credentials_extracted,
                matched = stats.credentials_matched,
                "scan finished"
            );
        }
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    // 支持通过环境变量 RUST_LOG 控制日志等级，如：RUST_LOG=debug
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(env_filter).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
