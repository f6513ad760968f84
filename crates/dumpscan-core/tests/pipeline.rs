//! 整条流水线的端到端测试（tempfile 搭临时目录树）
use std::fs;
use std::path::Path;

use dumpscan_core::{scan_and_report, OutputPaths, ScanOptions};

/// 在临时目录下搭 `base/<国家码>/<地址_端口>/<文件>` 结构并返回扫描选项
fn setup(dir: &Path, terms: &str, tree: &[(&str, &str, &str, &str)]) -> ScanOptions {
    let base = dir.join("data");
    for (country, host, file, content) in tree {
        let host_dir = base.join(country).join(host);
        fs::create_dir_all(&host_dir).unwrap();
        fs::write(host_dir.join(file), content).unwrap();
    }
    let terms_path = dir.join("searchterms.txt");
    fs::write(&terms_path, terms).unwrap();

    ScanOptions {
        base_folder: base,
        terms_path,
        outputs: OutputPaths {
            config_matches: dir.join("configMatches.txt"),
            credentials_report: dir.join("creds.txt"),
            matched_credentials: dir.join("matchedCreds.txt"),
            ip_port_listing: dir.join("ipPorts.txt"),
        },
    }
}

#[test]
fn end_to_end_scenario_from_a_single_dump() {
    let tmp = tempfile::tempdir().unwrap();
    let opts = setup(
        tmp.path(),
        "root\n",
        &[("de", "1.2.3.4_22", "creds.txt", "root:toor\nbadline\nadmin:1234")],
    );

    let stats = scan_and_report(&opts).unwrap();
    assert_eq!(stats.countries_processed, 1);
    assert_eq!(stats.hosts_processed, 1);
    assert_eq!(stats.credentials_extracted, 2);
    assert_eq!(stats.credentials_matched, 1);

    let report = fs::read_to_string(&opts.outputs.credentials_report).unwrap();
    assert_eq!(
        report,
        "== Germany (de) ==\n1.2.3.4:22\n\troot:toor\n\tadmin:1234\n\n"
    );

    let listing = fs::read_to_string(&opts.outputs.ip_port_listing).unwrap();
    assert_eq!(listing, "== Germany (de) ==\n1.2.3.4:22\n\n");

    let matched = fs::read_to_string(&opts.outputs.matched_credentials).unwrap();
    assert_eq!(matched, "root:toor\n");

    let general = fs::read_to_string(&opts.outputs.config_matches).unwrap();
    assert_eq!(general, "Matched Term: root | Line: root:toor\n");
}

#[test]
fn unknown_country_code_gets_sentinel_header() {
    let tmp = tempfile::tempdir().unwrap();
    let opts = setup(
        tmp.path(),
        "root\n",
        &[("zz", "1.2.3.4_22", "creds.txt", "a:b")],
    );
    scan_and_report(&opts).unwrap();

    let report = fs::read_to_string(&opts.outputs.credentials_report).unwrap();
    assert!(report.starts_with("== Unknown Country Code (zz) ==\n"));
}

#[test]
fn host_without_separator_still_yields_credentials() {
    let tmp = tempfile::tempdir().unwrap();
    let opts = setup(
        tmp.path(),
        "nosuchterm\n",
        &[("de", "no-underscore", "creds.txt", "root:toor")],
    );
    scan_and_report(&opts).unwrap();

    let report = fs::read_to_string(&opts.outputs.credentials_report).unwrap();
    // 无表头行，凭据照常出现
    assert_eq!(report, "== Germany (de) ==\n\troot:toor\n\n");
    let listing = fs::read_to_string(&opts.outputs.ip_port_listing).unwrap();
    assert_eq!(listing, "== Germany (de) ==\n\n");
}

#[test]
fn config_files_are_substring_scanned() {
    let tmp = tempfile::tempdir().unwrap();
    let opts = setup(
        tmp.path(),
        "listen\nroot\n",
        &[(
            "fr",
            "5.6.7.8_80",
            "nginx.conf",
            "listen 80;\nroot /var/www;\nworker_processes 4;\n",
        )],
    );
    let stats = scan_and_report(&opts).unwrap();
    assert_eq!(stats.config_matches, 2);

    let general = fs::read_to_string(&opts.outputs.config_matches).unwrap();
    let nginx_path = opts
        .base_folder
        .join("fr")
        .join("5.6.7.8_80")
        .join("nginx.conf");
    assert_eq!(
        general,
        format!(
            "File: {p} | Matched Term: listen 80;\nFile: {p} | Matched Term: root /var/www;\n",
            p = nginx_path.display()
        )
    );
}

#[test]
fn blank_term_matches_every_credential() {
    let tmp = tempfile::tempdir().unwrap();
    // 词表：一个空行（trim 后为空词）
    let opts = setup(
        tmp.path(),
        "\n",
        &[("de", "1.2.3.4_22", "creds.txt", "root:toor\nadmin:1234")],
    );
    let stats = scan_and_report(&opts).unwrap();
    assert_eq!(stats.credentials_matched, 2);

    let matched = fs::read_to_string(&opts.outputs.matched_credentials).unwrap();
    assert_eq!(matched, "root:toor\nadmin:1234\n");
}

#[test]
fn other_suffixes_are_ignored() {
    let tmp = tempfile::tempdir().unwrap();
    let opts = setup(
        tmp.path(),
        "root\n",
        &[("de", "1.2.3.4_22", "dump.sql", "root:toor")],
    );
    let stats = scan_and_report(&opts).unwrap();
    assert_eq!(stats.files_scanned, 0);
    assert_eq!(stats.credentials_extracted, 0);
}

#[test]
fn rerun_produces_byte_identical_outputs() {
    let tmp = tempfile::tempdir().unwrap();
    let opts = setup(
        tmp.path(),
        "root\nadmin\n",
        &[
            ("de", "1.2.3.4_22", "creds.txt", "root:toor\nadmin:1234"),
            ("fr", "5.6.7.8_80", "app.conf", "admin_panel = true\n"),
        ],
    );

    scan_and_report(&opts).unwrap();
    let first: Vec<String> = [
        &opts.outputs.config_matches,
        &opts.outputs.credentials_report,
        &opts.outputs.matched_credentials,
        &opts.outputs.ip_port_listing,
    ]
    .iter()
    .map(|p| fs::read_to_string(p).unwrap())
    .collect();

    scan_and_report(&opts).unwrap();
    let second: Vec<String> = [
        &opts.outputs.config_matches,
        &opts.outputs.credentials_report,
        &opts.outputs.matched_credentials,
        &opts.outputs.ip_port_listing,
    ]
    .iter()
    .map(|p| fs::read_to_string(p).unwrap())
    .collect();

    assert_eq!(first, second);
}

#[test]
fn unreadable_base_folder_is_fatal() {
    let tmp = tempfile::tempdir().unwrap();
    let mut opts = setup(tmp.path(), "root\n", &[]);
    opts.base_folder = tmp.path().join("does-not-exist");
    assert!(scan_and_report(&opts).is_err());
}

#[test]
fn binary_credential_file_is_skipped_not_fatal() {
    let tmp = tempfile::tempdir().unwrap();
    let opts = setup(
        tmp.path(),
        "root\n",
        &[("de", "1.2.3.4_22", "good.txt", "root:toor")],
    );
    // 混入一个非 UTF-8 的 conf 文件：告警跳过，运行继续
    let host_dir = opts.base_folder.join("de").join("1.2.3.4_22");
    fs::write(host_dir.join("broken.conf"), [0xff, 0xfe, 0x00, 0x01]).unwrap();

    let stats = scan_and_report(&opts).unwrap();
    assert_eq!(stats.files_skipped, 1);
    assert_eq!(stats.credentials_extracted, 1);
}
