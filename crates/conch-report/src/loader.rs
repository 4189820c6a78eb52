use crate::error::{ReportError, Result};
use crate::report::MantaReport;
use std::path::PathBuf;

impl MantaReport {
    /// Read the raw failure export from a local file. The path may be
    /// home-relative (`~/...`). No partial result survives a failure.
    pub fn load_file(&mut self, path: &str) -> Result<()> {
        let path = expand_tilde(path);
        let content = std::fs::read_to_string(&path).map_err(|source| ReportError::Io {
            path: path.display().to_string(),
            source,
        })?;
        self.raw = serde_json::from_str(&content)?;
        self.reset_processed();
        Ok(())
    }

    /// Fetch the raw failure export from a URL with a single blocking GET.
    /// Non-2xx and transport errors are not retried.
    pub fn load_url(&mut self, url: &str) -> Result<()> {
        let body = conch_client::fetch_body(url).map_err(ReportError::Fetch)?;
        self.raw = serde_json::from_str(&body)?;
        self.reset_processed();
        Ok(())
    }

    /// A fresh load must never leave stale aggregate state behind.
    fn reset_processed(&mut self) {
        self.processed.clear();
        self.been_processed = false;
    }
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(stripped);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"{
        "srv001": {
            "bios": {
                "first_fail": {
                    "created": "2020-01-01T00:00:00Z",
                    "validation_result": {"component_type": "BIOS", "component_name": "product_name"}
                },
                "first_pass": {"created": "2020-01-01T02:00:00Z"}
            }
        }
    }"#;

    #[test]
    fn load_file_fills_raw() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let mut report = MantaReport::new();
        report
            .load_file(file.path().to_str().unwrap())
            .expect("load should succeed");

        assert_eq!(report.raw.len(), 1);
        assert!(!report.been_processed);
    }

    #[test]
    fn load_file_missing_path_is_io_error() {
        let mut report = MantaReport::new();
        let err = report.load_file("/nonexistent/mbo.json").unwrap_err();
        assert!(matches!(err, ReportError::Io { .. }));
    }

    #[test]
    fn load_file_bad_json_is_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{not json").unwrap();

        let mut report = MantaReport::new();
        let err = report
            .load_file(file.path().to_str().unwrap())
            .unwrap_err();
        assert!(matches!(err, ReportError::Parse(_)));
    }

    #[test]
    fn reload_resets_processed_state() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let mut report = MantaReport::new();
        report.been_processed = true;
        report
            .processed
            .insert("stale".to_string(), Default::default());

        report.load_file(file.path().to_str().unwrap()).unwrap();
        assert!(report.processed.is_empty());
        assert!(!report.been_processed);
    }

    #[test]
    fn expand_tilde_uses_home() {
        unsafe { std::env::set_var("HOME", "/home/conch") };
        assert_eq!(
            expand_tilde("~/reports/mbo.json"),
            PathBuf::from("/home/conch/reports/mbo.json")
        );
        assert_eq!(expand_tilde("/abs/path"), PathBuf::from("/abs/path"));
    }
}
