use crate::domain::{error::ListError, token::TokenList};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
struct PinInfo {
    cid: String,
}

#[derive(Debug, Deserialize)]
struct PutObjectResponse {
    pin: PinInfo,
}

/// Uploads the serialized token list to the IPFS gateway and returns the
/// CID it was pinned under. Failures here are fatal; no retry.
pub struct IpfsUploader {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl IpfsUploader {
    pub fn new(api_url: &str, api_key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.to_string(),
            api_key: api_key.to_string(),
        }
    }

    pub async fn publish(&self, list: &TokenList) -> Result<String, ListError> {
        let body = serde_json::to_vec(list)
            .map_err(|e| ListError::Publish(format!("Failed to serialize token list: {e}")))?;
        let key = object_key();

        let form = Form::new()
            .part(
                "Body",
                Part::bytes(body)
                    .file_name(key.clone())
                    .mime_str("application/json")?,
            )
            .text("Key", key)
            .text("ContentType", "application/json");

        let response = self
            .client
            .post(&self.api_url)
            .header("x-api-key", &self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ListError::Publish(format!("IPFS upload failed: {e}")))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ListError::Publish(format!("Failed to read gateway response: {e}")))?;

        if !status.is_success() {
            return Err(ListError::Publish(format!(
                "IPFS gateway returned {status}: {text}"
            )));
        }

        extract_cid(&text)
    }
}

/// Collision-unlikely object key; only needs to be unique for one run.
fn object_key() -> String {
    format!("{}_tokenlist.json", Uuid::new_v4().simple())
}

fn extract_cid(body: &str) -> Result<String, ListError> {
    let parsed: PutObjectResponse = serde_json::from_str(body)
        .map_err(|_| ListError::Publish(format!("Unexpected gateway response: {body}")))?;
    Ok(parsed.pin.cid)
}
