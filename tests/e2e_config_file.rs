/// End-to-end tests for config file support
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_config(path: &std::path::Path, content: &str) {
    fs::write(path, content).unwrap();
}

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn basic_advisory() -> PathBuf {
    fixtures_path().join("advisory-basic.json")
}

fn followup_advisory() -> PathBuf {
    fixtures_path().join("advisory-followup.json")
}

// ============================================================================
// Config File Auto-Discovery Tests
// ============================================================================

mod auto_discovery_tests {
    use super::*;

    #[test]
    fn test_auto_discovery_supplies_product_ids() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("csaf-purls.config.yml"),
            r#"
product_ids:
  - CSAFPID-0002
"#,
        );

        let output = cargo_bin_cmd!("csaf-purls")
            .current_dir(dir.path())
            .arg(basic_advisory())
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert_eq!(
            stdout,
            "Found URLs for CSAFPID-0002:\n1. pkg:generic/acme/agent@2.0\n"
        );
    }

    #[test]
    fn test_auto_discovery_applies_format() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("csaf-purls.config.yml"),
            r#"
format: markdown
product_ids: [CSAFPID-0001]
"#,
        );

        let output = cargo_bin_cmd!("csaf-purls")
            .current_dir(dir.path())
            .arg(basic_advisory())
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("# Package URLs by Product"));
    }

    #[test]
    fn test_auto_discovery_applies_isolation() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("csaf-purls.config.yml"),
            "product_ids: [CSAFPID-0001]\nisolate_advisories: true\n",
        );

        let output = cargo_bin_cmd!("csaf-purls")
            .current_dir(dir.path())
            .arg(basic_advisory())
            .arg(followup_advisory())
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert_eq!(stdout.matches("Found URLs for CSAFPID-0001:").count(), 2);
        assert!(stdout.contains("advisory-followup.json =="));
    }

    #[test]
    fn test_no_config_file_runs_normally() {
        let dir = TempDir::new().unwrap();

        let output = cargo_bin_cmd!("csaf-purls")
            .current_dir(dir.path())
            .args(["-i", "CSAFPID-0003"])
            .arg(basic_advisory())
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert_eq!(
            stdout,
            "Found URLs for CSAFPID-0003:\n1. pkg:generic/acme/agent@2.1\n"
        );
    }
}

// ============================================================================
// Explicit --config Path Tests
// ============================================================================

mod explicit_config_tests {
    use super::*;

    #[test]
    fn test_explicit_config_path_loads_successfully() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("custom.yml");
        write_config(&config_path, "product_ids: [CSAFPID-0003]\nformat: json\n");

        let output = cargo_bin_cmd!("csaf-purls")
            .arg("--config")
            .arg(&config_path)
            .arg(basic_advisory())
            .output()
            .unwrap();

        assert!(output.status.success());
        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["purls"], serde_json::json!(["pkg:generic/acme/agent@2.1"]));
    }

    #[test]
    fn test_explicit_config_nonexistent_file_error() {
        cargo_bin_cmd!("csaf-purls")
            .args(["-c", "/nonexistent/path/config.yml", "-i", "CSAFPID-0001"])
            .arg(basic_advisory())
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to read config file"));
    }

    #[test]
    fn test_invalid_yaml_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        write_config(&config_path, "product_ids: [[[broken");

        cargo_bin_cmd!("csaf-purls")
            .arg("-c")
            .arg(&config_path)
            .arg(basic_advisory())
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to parse config file"));
    }

    #[test]
    fn test_unknown_field_warning() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        write_config(
            &config_path,
            "product_ids: [CSAFPID-0001]\nignore_cves: [CVE-2024-0001]\n",
        );

        cargo_bin_cmd!("csaf-purls")
            .arg("-c")
            .arg(&config_path)
            .arg(basic_advisory())
            .assert()
            .success()
            .stderr(predicate::str::contains(
                "Unknown config field 'ignore_cves' will be ignored",
            ));
    }
}

// ============================================================================
// CLI + Config Merge Tests
// ============================================================================

mod merge_tests {
    use super::*;

    #[test]
    fn test_cli_and_config_product_ids_merged() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        write_config(&config_path, "product_ids: [CSAFPID-0003]\n");

        let output = cargo_bin_cmd!("csaf-purls")
            .arg("-c")
            .arg(&config_path)
            .args(["-i", "CSAFPID-0002"])
            .arg(basic_advisory())
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        // Config ids are tracked first
        assert_eq!(
            stdout,
            "Found URLs for CSAFPID-0003:\n\
             1. pkg:generic/acme/agent@2.1\n\
             Found URLs for CSAFPID-0002:\n\
             1. pkg:generic/acme/agent@2.0\n"
        );
    }

    #[test]
    fn test_cli_format_overrides_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        write_config(&config_path, "format: markdown\nproduct_ids: [CSAFPID-0001]\n");

        let output = cargo_bin_cmd!("csaf-purls")
            .arg("-c")
            .arg(&config_path)
            .args(["-f", "json"])
            .arg(basic_advisory())
            .output()
            .unwrap();

        assert!(output.status.success());
        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["advisories"][0]["products"][0]["productId"], "CSAFPID-0001");
    }

    #[test]
    fn test_config_fail_if_empty() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        write_config(&config_path, "product_ids: [CSAFPID-9999]\nfail_if_empty: true\n");

        cargo_bin_cmd!("csaf-purls")
            .arg("-c")
            .arg(&config_path)
            .arg(basic_advisory())
            .assert()
            .code(1);
    }
}
