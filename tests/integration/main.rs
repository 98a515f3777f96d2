//! Integration tests for fitsfetch

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use tempfile::TempDir;

    fn fitsfetch() -> Command {
        cargo_bin_cmd!("fitsfetch")
    }

    /// A command pinned to a throwaway config and cache root
    fn sandboxed(temp: &TempDir) -> Command {
        let mut cmd = fitsfetch();
        cmd.arg("--config")
            .arg(temp.path().join("config.toml"))
            .arg("--cache-dir")
            .arg(temp.path().join("cache"));
        cmd
    }

    #[test]
    fn help_displays() {
        fitsfetch()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Fetch and cache spectra"));
    }

    #[test]
    fn version_displays() {
        fitsfetch()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("fitsfetch"));
    }

    #[test]
    fn config_path_displays() {
        let temp = TempDir::new().unwrap();
        sandboxed(&temp)
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }

    #[test]
    fn config_show_displays_defaults() {
        let temp = TempDir::new().unwrap();
        sandboxed(&temp)
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[remote]"));
    }

    #[test]
    fn config_init_writes_file() {
        let temp = TempDir::new().unwrap();
        sandboxed(&temp)
            .args(["config", "init", "--bucket", "desi-us-east-2"])
            .assert()
            .success();

        sandboxed(&temp)
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("desi-us-east-2"));
    }

    #[test]
    fn fetch_rejects_traversal_key() {
        let temp = TempDir::new().unwrap();
        sandboxed(&temp)
            .args(["--bucket", "test", "fetch", "../etc/passwd"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid cache key"));
    }

    #[test]
    fn fetch_requires_bucket() {
        let temp = TempDir::new().unwrap();
        sandboxed(&temp)
            .args(["fetch", "a/b.fits"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("No bucket configured"));
    }

    #[test]
    fn evict_missing_key_succeeds() {
        let temp = TempDir::new().unwrap();
        sandboxed(&temp)
            .args(["--bucket", "test", "evict", "never/cached.fits"])
            .assert()
            .success()
            .stdout(predicate::str::contains("was not cached"));
    }

    #[test]
    fn verify_missing_key_fails() {
        let temp = TempDir::new().unwrap();
        sandboxed(&temp)
            .args(["--bucket", "test", "verify", "never/cached.fits"])
            .assert()
            .failure()
            .stdout(predicate::str::contains("missing or corrupt"));
    }

    #[test]
    fn list_empty_cache() {
        let temp = TempDir::new().unwrap();
        sandboxed(&temp)
            .args(["--bucket", "test", "list"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No cached objects"));
    }
}
