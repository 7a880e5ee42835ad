use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn report_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("growth-report"))
}

fn init(config_path: &Path) {
    report_cmd()
        .args(["-C", config_path.to_str().unwrap(), "init"])
        .assert()
        .success();
}

#[test]
fn test_help() {
    report_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bilingual growth report renderer"));
}

#[test]
fn test_version() {
    report_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("growth-report"));
}

#[test]
fn test_init_creates_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("report-config");

    report_cmd()
        .args(["-C", config_path.to_str().unwrap(), "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized growth-report config"));

    assert!(config_path.join("config.toml").exists());
    let data = fs::read_to_string(config_path.join("data.toml")).unwrap();
    assert!(data.contains("[financials]"));
    assert!(data.contains("[[tenants]]"));
}

#[test]
fn test_init_fails_if_exists() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("report-config");

    init(&config_path);

    report_cmd()
        .args(["-C", config_path.to_str().unwrap(), "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_render_writes_both_locales() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("nonexistent");
    let out = temp_dir.path().join("out");

    report_cmd()
        .args([
            "-C",
            config_path.to_str().unwrap(),
            "render",
            "-o",
            out.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("report.en.html"))
        .stdout(predicate::str::contains("report.ar.html"));

    let en = fs::read_to_string(out.join("report.en.html")).unwrap();
    assert!(en.contains(r#"<html lang="en" dir="ltr">"#));
    assert!(en.contains("SAR 45,003.15"));
    assert!(en.contains(r#"href="report.ar.html""#));

    let ar = fs::read_to_string(out.join("report.ar.html")).unwrap();
    assert!(ar.contains(r#"<html lang="ar" dir="rtl">"#));
    assert!(ar.contains("٤٥٬٠٠٣٫١٥ ريال"));
    assert!(!ar.contains("SAR 45,003.15"));
}

#[test]
fn test_render_single_locale_from_dataset_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("report-config");
    let out = temp_dir.path().join("out");
    init(&config_path);

    report_cmd()
        .args([
            "-C",
            config_path.to_str().unwrap(),
            "render",
            "-l",
            "ar",
            "-t",
            "light",
            "-o",
            out.to_str().unwrap(),
        ])
        .assert()
        .success();

    for page in ["report.en.html", "report.ar.html"] {
        let html = fs::read_to_string(out.join(page)).unwrap();
        let targets: Vec<&str> = html
            .match_indices(r#"href="report."#)
            .map(|(idx, _)| {
                let rest = &html[idx + 6..];
                &rest[..rest.find('"').unwrap()]
            })
            .collect();
        assert!(!targets.is_empty(), "{page} has no locale toggle");
        for target in targets {
            assert!(out.join(target).exists(), "{page} links to missing {target}");
        }
    }
}

#[test]
fn test_render_with_open_modal() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("out");

    report_cmd()
        .args([
            "-C",
            temp_dir.path().join("cfg").to_str().unwrap(),
            "render",
            "-l",
            "en",
            "--modal",
            "expenses",
            "-o",
            out.to_str().unwrap(),
        ])
        .assert()
        .success();

    let html = fs::read_to_string(out.join("report.en.html")).unwrap();
    assert!(html.contains(r#"id="expenses" class="modal is-open""#));
}

#[test]
fn test_invalid_locale() {
    let temp_dir = TempDir::new().unwrap();

    report_cmd()
        .args([
            "-C",
            temp_dir.path().join("cfg").to_str().unwrap(),
            "render",
            "-l",
            "fr",
            "-o",
            temp_dir.path().join("out").to_str().unwrap(),
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown locale 'fr'"));
}

#[test]
fn test_invalid_theme() {
    let temp_dir = TempDir::new().unwrap();

    report_cmd()
        .args([
            "-C",
            temp_dir.path().join("cfg").to_str().unwrap(),
            "model",
            "-t",
            "sepia",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown theme 'sepia'"));
}

#[test]
fn test_summary() {
    let temp_dir = TempDir::new().unwrap();

    report_cmd()
        .args(["-C", temp_dir.path().join("cfg").to_str().unwrap(), "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("140%"))
        .stdout(predicate::str::contains("Recognized Revenue"))
        .stdout(predicate::str::contains("SAR 45,003.15"));

    report_cmd()
        .args([
            "-C",
            temp_dir.path().join("cfg").to_str().unwrap(),
            "summary",
            "-l",
            "ar",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("٤٥٬٠٠٣٫١٥ ريال"))
        .stdout(predicate::str::contains("الإيرادات المعترف بها"))
        .stdout(predicate::str::contains("صافي النقد المحصل"))
        .stdout(predicate::str::contains("Recognized Revenue").not())
        .stdout(predicate::str::contains("Net Cash Collected").not())
        .stdout(predicate::str::contains("SAR").not());
}

#[test]
fn test_tenants_in_dataset_order() {
    let temp_dir = TempDir::new().unwrap();

    let output = report_cmd()
        .args([
            "-C",
            temp_dir.path().join("cfg").to_str().unwrap(),
            "tenants",
            "-l",
            "ar",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let first = stdout.find("سهيم العنزي").unwrap();
    let second = stdout.find("محاسن شداد").unwrap();
    assert!(first < second);
    assert!(stdout.contains("ملغي"));
    assert!(stdout.contains("٣٠ معاملة مسجلة"));
}

#[test]
fn test_formulas_lists_five_metrics() {
    let temp_dir = TempDir::new().unwrap();

    report_cmd()
        .args(["-C", temp_dir.path().join("cfg").to_str().unwrap(), "formulas"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Net Cash Collected"))
        .stdout(predicate::str::contains("Mathwaa Revenue"))
        .stdout(predicate::str::contains("Mathwaa LTV"))
        .stdout(predicate::str::contains("Marketing ROI"))
        .stdout(predicate::str::contains("Attributed Revenue"));
}

#[test]
fn test_expenses_total() {
    let temp_dir = TempDir::new().unwrap();

    report_cmd()
        .args(["-C", temp_dir.path().join("cfg").to_str().unwrap(), "expenses"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Video Production"))
        .stdout(predicate::str::contains("SAR 6,350"));
}

#[test]
fn test_validate_sample() {
    let temp_dir = TempDir::new().unwrap();

    report_cmd()
        .args(["-C", temp_dir.path().join("cfg").to_str().unwrap(), "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No issues found."));
}

#[test]
fn test_validate_reports_findings_without_failing() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("report-config");
    init(&config_path);

    let data_path = config_path.join("data.toml");
    let data = fs::read_to_string(&data_path).unwrap();
    let data = data.replacen("roi = 140.0", "roi = 300.0", 1);
    fs::write(&data_path, data).unwrap();

    report_cmd()
        .args(["-C", config_path.to_str().unwrap(), "validate"])
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout(predicate::str::contains("stored ROI 300%").count(1))
        .stdout(predicate::str::contains("1 issue(s) found."))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_render_warns_about_findings_once() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("report-config");
    let out = temp_dir.path().join("out");
    init(&config_path);

    let data_path = config_path.join("data.toml");
    let data = fs::read_to_string(&data_path).unwrap();
    fs::write(&data_path, data.replacen("roi = 140.0", "roi = 300.0", 1)).unwrap();

    report_cmd()
        .args([
            "-C",
            config_path.to_str().unwrap(),
            "render",
            "-o",
            out.to_str().unwrap(),
        ])
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("stored ROI 300%").count(1));
}

#[test]
fn test_model_json() {
    let temp_dir = TempDir::new().unwrap();

    let output = report_cmd()
        .args([
            "-C",
            temp_dir.path().join("cfg").to_str().unwrap(),
            "model",
            "-l",
            "ar",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let model: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(model["dir"], "rtl");
    assert_eq!(model["sections"][0]["kind"], "hero");
    assert_eq!(model["sections"][5]["kind"], "tenants");
}
