//! HTTP client for communicating with eventos-server

use anyhow::{Context, Result};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::process::Command;
use std::time::Duration;

use eventos_core::{EventPatch, EventRecord, EventosConfig, NewEvent};

const MAX_RETRIES: u32 = 10;
const RETRY_DELAY_MS: u64 = 200;

/// HTTP client for eventos-server
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

// Response types matching server API

#[derive(Deserialize)]
pub struct DeleteResponse {
    pub mensaje: String,
    pub evento: EventRecord,
}

#[derive(Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl Client {
    /// Connect to existing server or start one
    pub async fn connect(config: &EventosConfig) -> Result<Self> {
        let http = reqwest::Client::new();
        let client = Self {
            http,
            base_url: config.server_url(),
        };

        // Try to connect to existing server
        if client.health_check().await.is_ok() {
            return Ok(client);
        }

        // Server not running - start it
        tracing::info!(url = %client.base_url, "server not reachable, starting eventos-server");
        start_server()?;

        // Wait for server to be ready
        for _ in 0..MAX_RETRIES {
            tokio::time::sleep(Duration::from_millis(RETRY_DELAY_MS)).await;
            if client.health_check().await.is_ok() {
                return Ok(client);
            }
        }

        anyhow::bail!("Failed to connect to eventos-server after starting it")
    }

    async fn health_check(&self) -> Result<()> {
        self.http
            .get(self.url("/api/eventos"))
            .timeout(Duration::from_secs(2))
            .send()
            .await?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET /api/eventos
    pub async fn list_events(&self) -> Result<Vec<EventRecord>> {
        let resp = self
            .http
            .get(self.url("/api/eventos"))
            .send()
            .await
            .context("Failed to connect to server")?;

        parse_response(resp).await
    }

    /// GET /api/eventos/:id
    pub async fn get_event(&self, id: u64) -> Result<EventRecord> {
        let resp = self
            .http
            .get(self.url(&format!("/api/eventos/{id}")))
            .send()
            .await
            .context("Failed to connect to server")?;

        parse_response(resp).await
    }

    /// POST /api/eventos
    pub async fn create_event(&self, fields: &NewEvent) -> Result<EventRecord> {
        let resp = self
            .http
            .post(self.url("/api/eventos"))
            .json(fields)
            .send()
            .await
            .context("Failed to connect to server")?;

        parse_response(resp).await
    }

    /// PUT /api/eventos/:id
    pub async fn update_event(&self, id: u64, patch: &EventPatch) -> Result<EventRecord> {
        let resp = self
            .http
            .put(self.url(&format!("/api/eventos/{id}")))
            .json(patch)
            .send()
            .await
            .context("Failed to connect to server")?;

        parse_response(resp).await
    }

    /// DELETE /api/eventos/:id
    pub async fn delete_event(&self, id: u64) -> Result<DeleteResponse> {
        let resp = self
            .http
            .delete(self.url(&format!("/api/eventos/{id}")))
            .send()
            .await
            .context("Failed to connect to server")?;

        parse_response(resp).await
    }
}

async fn parse_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
    if !resp.status().is_success() {
        let status = resp.status();
        let err: ErrorResponse = resp
            .json()
            .await
            .with_context(|| format!("Server returned {status}"))?;
        anyhow::bail!("{}", err.error);
    }

    Ok(resp.json().await?)
}

/// Start the eventos-server process
fn start_server() -> Result<()> {
    Command::new("eventos-server")
        .spawn()
        .context("Failed to start eventos-server. Is it installed?")?;
    Ok(())
}
