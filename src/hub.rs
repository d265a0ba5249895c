//! Model registry (Hugging Face Hub) access.

use crate::{Error, Result};
use hf_hub::api::{RepoInfo, tokio::ApiBuilder};
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Clone, Deserialize)]
pub struct WhoAmI {
    pub name: String,
}

/// Authenticates against the registry and returns the account name.
pub async fn login(client: &Client, hub_url: &str, token: &str) -> Result<String> {
    let url = format!("{}/api/whoami-v2", hub_url.trim_end_matches('/'));
    debug!("Authenticating against {}", url);

    let response = client.get(&url).bearer_auth(token).send().await?;
    let whoami: WhoAmI = check_status(response).await?.json().await?;

    Ok(whoami.name)
}

/// Looks up a model on the registry, failing if it does not exist or is not
/// visible with the given credential.
pub async fn model_info(hub_url: &str, model: &str, token: Option<&str>) -> Result<RepoInfo> {
    debug!("Fetching model info for {} from {}", model, hub_url);

    let api = ApiBuilder::new()
        .with_endpoint(hub_url.trim_end_matches('/').to_string())
        .with_token(token.map(str::to_string))
        .with_progress(false)
        .build()
        .map_err(|e| Error::registry(e.to_string()))?;

    api.model(model.to_string())
        .info()
        .await
        .map_err(|e| Error::registry(e.to_string()))
}

pub(crate) fn with_token(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => request.bearer_auth(token),
        None => request,
    }
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(Error::registry(format!("{status}: {body}")))
}
