//! Subprocess-backed validator: jing under a JVM.

use crate::{classify, Outcome, XmlValidator};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::io::Write;
use std::path::PathBuf;
use tempfile::{Builder, NamedTempFile};
use tokio::process::Command;
use tracing::debug;

/// Validates documents by running `<java> -jar <jing.jar> <schema> <staged file>`.
///
/// Arguments are passed as a discrete list; no shell is involved.
#[derive(Debug, Clone)]
pub struct JingValidator {
    java_bin: PathBuf,
    jar_path: PathBuf,
    schema_path: PathBuf,
    staging_dir: Option<PathBuf>,
}

impl JingValidator {
    pub fn new(
        java_bin: impl Into<PathBuf>,
        jar_path: impl Into<PathBuf>,
        schema_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            java_bin: java_bin.into(),
            jar_path: jar_path.into(),
            schema_path: schema_path.into(),
            staging_dir: None,
        }
    }

    /// Stage documents under `dir` instead of the system temp directory.
    pub fn with_staging_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.staging_dir = Some(dir.into());
        self
    }

    /// Write the document to a uniquely named temporary file. The returned
    /// guard unlinks the file when dropped, on every exit path.
    fn stage(&self, document: &str) -> Result<NamedTempFile> {
        let builder = {
            let mut b = Builder::new();
            b.prefix("upload-").suffix(".xml");
            b
        };
        let mut staged = match &self.staging_dir {
            Some(dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        }
        .context("Failed to create staging file")?;
        staged
            .write_all(document.as_bytes())
            .context("Failed to write staging file")?;
        Ok(staged)
    }
}

#[async_trait]
impl XmlValidator for JingValidator {
    async fn validate(&self, document: &str) -> Result<Outcome> {
        let staged = self.stage(document)?;

        debug!(staged = ?staged.path(), "Running external validator");

        let output = Command::new(&self.java_bin)
            .arg("-jar")
            .arg(&self.jar_path)
            .arg(&self.schema_path)
            .arg(staged.path())
            .output()
            .await;

        let outcome = match output {
            Ok(output) => {
                let stdout = String::from_utf8_lossy(&output.stdout);
                let stderr = String::from_utf8_lossy(&output.stderr);
                classify(true, output.status.success(), &stdout, &stderr)
            }
            Err(e) => {
                debug!("Validator process failed to start: {}", e);
                classify(false, false, "", "")
            }
        };

        Ok(outcome)
    }
}
