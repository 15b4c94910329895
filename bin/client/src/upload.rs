use anyhow::{Context, Result};
use common::HealthResponse;
use log::info;
use reqwest::blocking::{multipart, Client};
use std::path::Path;

const DOCUMENTS_ENDPOINT: &str = "/documents";
const HEALTH_ENDPOINT: &str = "/health";

/// Upload a file for validation. Prints the converted document on success,
/// fails with the server's diagnostic text on rejection.
pub fn validate_file(file: &Path, server: &str) -> Result<()> {
    let form = multipart::Form::new()
        .file("file", file)
        .with_context(|| format!("Failed to read file: {:?}", file))?;

    info!("Uploading {:?} to {}", file, server);

    let response = Client::new()
        .post(format!("{}{}", server, DOCUMENTS_ENDPOINT))
        .multipart(form)
        .send()
        .context("Failed to reach server")?;

    let status = response.status();
    let body = response.text().context("Failed to read server response")?;

    if status.is_success() {
        let document: serde_json::Value =
            serde_json::from_str(&body).context("Server returned a malformed document")?;
        println!("{}", serde_json::to_string_pretty(&document)?);
        Ok(())
    } else {
        anyhow::bail!("Validation rejected ({}): {}", status, body)
    }
}

/// Query the health endpoint
pub fn check_health(server: &str) -> Result<()> {
    let response: HealthResponse = Client::new()
        .get(format!("{}{}", server, HEALTH_ENDPOINT))
        .send()
        .context("Failed to reach server")?
        .json()
        .context("Malformed health response")?;
    println!("{}", response.status);
    Ok(())
}
