//! Checks a built `dist/` folder before it is deployed.
//!
//! A production `index.html` must reference the hashed bundle under
//! `/assets/` and must not still point at the development entry script,
//! which would ship a blank page.

use serde::Serialize;
use std::fs;
use std::path::Path;

/// Development entry that must never appear in a production build
const DEV_ENTRY: &str = "/src/main.tsx";
/// Either marker shows the bundled production script is referenced
const PROD_MARKERS: &[&str] = &["/assets/index-", "src=\"/assets/"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub category: &'static str,
    pub message: String,
    pub status: CheckStatus,
    /// What to do about a failed check
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<&'static str>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckSummary {
    pub passed: usize,
    pub warnings: usize,
    pub errors: usize,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BuildReport {
    pub results: Vec<CheckResult>,
    pub summary: CheckSummary,
}

impl BuildReport {
    fn add(
        &mut self,
        category: &'static str,
        message: impl Into<String>,
        status: CheckStatus,
        hint: Option<&'static str>,
    ) {
        match status {
            CheckStatus::Pass => self.summary.passed += 1,
            CheckStatus::Warning => self.summary.warnings += 1,
            CheckStatus::Error => self.summary.errors += 1,
        }
        self.results.push(CheckResult {
            category,
            message: message.into(),
            status,
            hint,
        });
    }

    pub fn passed(&self) -> bool {
        self.summary.errors == 0
    }

    /// Process exit code for the `verify-build` command
    pub fn exit_code(&self) -> i32 {
        if self.passed() {
            0
        } else {
            1
        }
    }

    /// Print results as a checklist
    pub fn print(&self) {
        for result in &self.results {
            match result.status {
                CheckStatus::Pass => println!("   ✅ {}", result.message),
                CheckStatus::Warning => println!("   ⚠️  {}", result.message),
                CheckStatus::Error => eprintln!("   ❌ {}", result.message),
            }
            if let Some(hint) = result.hint {
                println!("      {}", hint);
            }
        }

        println!();
        if self.passed() {
            println!("✅ Build verification passed!");
        } else {
            eprintln!(
                "❌ Build verification failed ({} error(s), {} warning(s))",
                self.summary.errors, self.summary.warnings
            );
        }
    }
}

/// Verify the build output in `dist`
pub fn verify_dist(dist: &Path) -> BuildReport {
    let mut report = BuildReport::default();
    let index_path = dist.join("index.html");

    match fs::read_to_string(&index_path) {
        Ok(content) => {
            if !check_index(&content, &mut report) {
                return report;
            }
        }
        Err(e) => {
            tracing::warn!("Could not read {:?}: {}", index_path, e);
            report.add(
                "index.html",
                format!("Could not verify build: {}", e),
                CheckStatus::Error,
                Some("Make sure you run the production build first"),
            );
            return report;
        }
    }

    if dist.join("sitemap.xml").exists() {
        report.add("sitemap", "sitemap.xml present", CheckStatus::Pass, None);
    } else {
        report.add(
            "sitemap",
            "sitemap.xml not found in dist folder",
            CheckStatus::Warning,
            Some("Make sure public/sitemap.xml exists"),
        );
    }

    report
}

/// Check the built index, stopping at the first error. Returns whether it passed.
fn check_index(content: &str, report: &mut BuildReport) -> bool {
    if content.contains(DEV_ENTRY) {
        report.add(
            "index.html",
            format!("Built index.html contains development script ({})", DEV_ENTRY),
            CheckStatus::Error,
            Some("This will cause a blank page in production; the build may have failed"),
        );
        return false;
    }
    report.add(
        "index.html",
        "No development scripts found",
        CheckStatus::Pass,
        None,
    );

    if !PROD_MARKERS.iter().any(|marker| content.contains(marker)) {
        report.add(
            "index.html",
            "Built index.html missing production script reference",
            CheckStatus::Error,
            Some("The build may be incomplete"),
        );
        return false;
    }
    report.add(
        "index.html",
        "index.html has correct production script",
        CheckStatus::Pass,
        None,
    );
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_dev_entry_fails_even_with_assets() {
        let mut report = BuildReport::default();
        let ok = check_index(
            r#"<script src="/src/main.tsx"></script><script src="/assets/index-abc.js"></script>"#,
            &mut report,
        );
        assert!(!ok);
        assert_eq!(report.summary.errors, 1);
        assert_eq!(report.summary.passed, 0);
        assert_eq!(report.results.len(), 1);
    }

    #[test]
    fn test_either_marker_counts() {
        let mut report = BuildReport::default();
        assert!(check_index(r#"<script src="/assets/app.js"></script>"#, &mut report));
        assert!(report.passed());
    }

    #[test]
    fn test_missing_dir_is_error() {
        let temp = TempDir::new().unwrap();
        let report = verify_dist(&temp.path().join("dist"));
        assert_eq!(report.exit_code(), 1);
        assert_eq!(report.results.len(), 1);
    }
}
