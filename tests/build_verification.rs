//! Integration tests for production build verification.

use anyhow::Result;
use happyvisit::build_check::{verify_dist, CheckStatus};
use std::fs;
use tempfile::TempDir;

const PROD_INDEX: &str = r#"<!doctype html>
<html>
  <head><script type="module" crossorigin src="/assets/index-4f2a9c.js"></script></head>
  <body><div id="root"></div></body>
</html>"#;

fn dist_with(index: Option<&str>, sitemap: bool) -> Result<TempDir> {
    let dir = TempDir::new()?;
    if let Some(index) = index {
        fs::write(dir.path().join("index.html"), index)?;
    }
    if sitemap {
        fs::write(dir.path().join("sitemap.xml"), "<urlset/>")?;
    }
    Ok(dir)
}

#[test]
fn clean_build_passes() -> Result<()> {
    let dist = dist_with(Some(PROD_INDEX), true)?;

    let report = verify_dist(dist.path());

    assert!(report.passed());
    assert_eq!(report.exit_code(), 0);
    assert_eq!(report.summary.warnings, 0);
    assert_eq!(report.summary.errors, 0);
    Ok(())
}

#[test]
fn missing_sitemap_only_warns() -> Result<()> {
    let dist = dist_with(Some(PROD_INDEX), false)?;

    let report = verify_dist(dist.path());

    assert!(report.passed());
    assert_eq!(report.exit_code(), 0);
    assert_eq!(report.summary.warnings, 1);
    Ok(())
}

#[test]
fn dev_entry_script_fails() -> Result<()> {
    let dist = dist_with(
        Some(r#"<script type="module" src="/src/main.tsx"></script>"#),
        true,
    )?;

    let report = verify_dist(dist.path());

    assert!(!report.passed());
    assert_eq!(report.exit_code(), 1);
    // stops at the dev entry; the bundle and sitemap are never checked
    assert_eq!(report.summary.errors, 1);
    assert_eq!(report.results.len(), 1);
    Ok(())
}

#[test]
fn missing_index_fails() -> Result<()> {
    let dist = dist_with(None, true)?;

    let report = verify_dist(dist.path());

    assert_eq!(report.exit_code(), 1);
    assert_eq!(report.results[0].status, CheckStatus::Error);
    Ok(())
}

#[test]
fn json_report_uses_lowercase_status() -> Result<()> {
    let dist = dist_with(Some("<html></html>"), false)?;

    let report = verify_dist(dist.path());
    let json = serde_json::to_value(&report)?;

    assert_eq!(json["summary"]["errors"], 1);
    assert_eq!(json["summary"]["warnings"], 0);
    let statuses: Vec<&str> = json["results"]
        .as_array()
        .map(|r| r.iter().filter_map(|c| c["status"].as_str()).collect())
        .unwrap_or_default();
    assert_eq!(statuses, vec!["pass", "error"]);
    Ok(())
}
