
use anyhow::{Context, Result};
use common::HealthResponse;
use reqwest::multipart::{Form, Part};
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use test_utils::*;

const SERVER_PORT: u16 = 8089;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("e2e_tests=debug,info")
        .init();

    let server_url = std::env::var("SERVER_URL")
        .unwrap_or_else(|_| format!("http://127.0.0.1:{}", SERVER_PORT));

    let test_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test_data");
    let script = write_stub_validator(&test_dir)?;

    println!("Server URL: {}", server_url);
    println!("Stub validator: {:?}", script);

    let _server = spawn_server(&test_dir, &script, SERVER_PORT)?;
    wait_for_server(&server_url).await?;

    println!("\n🩺 Testing health endpoint...");
    test_health(&server_url).await?;
    println!("✅ Health check passed");

    println!("\n📤 Testing a conforming document...");
    test_valid_upload(&server_url).await?;
    println!("✅ Conforming document accepted and converted");

    println!("\n🚫 Testing a non-conforming document...");
    test_invalid_upload(&server_url).await?;
    println!("✅ Non-conforming document rejected with diagnostics");

    println!("\n🔇 Testing stderr-only validator output...");
    test_stderr_only(&server_url).await?;
    println!("✅ Rejected without surfacing stderr");

    println!("\n📭 Testing a request with no file...");
    test_missing_file(&server_url).await?;
    println!("✅ Missing file rejected before validation");

    println!("\n🖥️  Testing the client binary...");
    test_client_binary(&test_dir, &server_url)?;
    println!("✅ Client binary round trip passed");

    println!("\n✅ All E2E tests passed!");

    Ok(())
}

async fn test_health(server_url: &str) -> Result<()> {
    let health: HealthResponse = reqwest::get(format!("{}/health", server_url))
        .await?
        .json()
        .await
        .context("Malformed health response")?;
    anyhow::ensure!(health.status == "ok", "unexpected status: {}", health.status);
    Ok(())
}

async fn post_document(server_url: &str, xml: &str) -> Result<(u16, String)> {
    let part = Part::bytes(xml.as_bytes().to_vec())
        .file_name("doc.xml")
        .mime_str("application/xml")?;
    let response = reqwest::Client::new()
        .post(format!("{}/documents", server_url))
        .multipart(Form::new().part("file", part))
        .send()
        .await?;
    let status = response.status().as_u16();
    let body = response.text().await?;
    Ok((status, body))
}

async fn test_valid_upload(server_url: &str) -> Result<()> {
    let (status, body) =
        post_document(server_url, "<note><to>Tove</to><body>Hi</body></note>").await?;
    anyhow::ensure!(status == 200, "expected 200, got {}: {}", status, body);

    let document: serde_json::Value = serde_json::from_str(&body)?;
    anyhow::ensure!(
        document == json!({"note": {"to": "Tove", "body": "Hi"}}),
        "unexpected conversion: {}",
        document
    );
    Ok(())
}

async fn test_invalid_upload(server_url: &str) -> Result<()> {
    let (status, body) = post_document(server_url, "<memo><to>Tove</to></memo>").await?;
    anyhow::ensure!(status == 400, "expected 400, got {}: {}", status, body);
    anyhow::ensure!(
        body.starts_with("XML Errors: "),
        "unexpected body: {}",
        body
    );
    anyhow::ensure!(
        body.contains("document does not match grammar"),
        "diagnostics missing from body: {}",
        body
    );
    Ok(())
}

async fn test_stderr_only(server_url: &str) -> Result<()> {
    let (status, body) =
        post_document(server_url, "<memo>stderr-trigger</memo>").await?;
    anyhow::ensure!(status == 400, "expected 400, got {}: {}", status, body);
    anyhow::ensure!(
        !body.contains("internal warning"),
        "stderr text leaked into body: {}",
        body
    );
    Ok(())
}

async fn test_missing_file(server_url: &str) -> Result<()> {
    let response = reqwest::Client::new()
        .post(format!("{}/documents", server_url))
        .multipart(Form::new().text("other", "value"))
        .send()
        .await?;
    let status = response.status().as_u16();
    let body = response.text().await?;
    anyhow::ensure!(status == 400, "expected 400, got {}: {}", status, body);
    anyhow::ensure!(
        body.contains("No file provided"),
        "unexpected body: {}",
        body
    );
    Ok(())
}

fn test_client_binary(test_dir: &std::path::Path, server_url: &str) -> Result<()> {
    let valid_file = test_dir.join("valid.xml");
    fs::write(&valid_file, "<note><to>Tove</to></note>")?;
    let (ok, stdout, stderr) = run_client_validate(&valid_file, server_url)?;
    anyhow::ensure!(ok, "client failed on a conforming document: {}", stderr);
    anyhow::ensure!(
        stdout.contains("\"note\""),
        "converted document missing from client output: {}",
        stdout
    );

    let invalid_file = test_dir.join("invalid.xml");
    fs::write(&invalid_file, "<memo/>")?;
    let (ok, _stdout, stderr) = run_client_validate(&invalid_file, server_url)?;
    anyhow::ensure!(!ok, "client accepted a non-conforming document");
    anyhow::ensure!(
        stderr.contains("XML Errors"),
        "diagnostics missing from client error: {}",
        stderr
    );

    Ok(())
}
