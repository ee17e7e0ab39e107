//! HTTP client for the content store mutation API

use crate::mutation::{MutateRequest, MutateResponse, Mutation};
use crate::{ClientError, ClientResult, Config};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use shared::Document;
use std::fmt;

/// HTTP client for writing documents to the content store
#[derive(Clone)]
pub struct SanityClient {
    client: Client,
    mutate_url: String,
    token: String,
}

impl fmt::Debug for SanityClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SanityClient")
            .field("mutate_url", &self.mutate_url)
            .field("token", &"<redacted>")
            .finish()
    }
}

impl SanityClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &Config) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            mutate_url: config.mutate_url(),
            token: config.token.clone(),
        })
    }

    /// Mutation endpoint this client writes to
    pub fn mutate_url(&self) -> &str {
        &self.mutate_url
    }

    /// Submit mutations as one transaction
    pub async fn mutate(&self, mutations: Vec<Mutation<'_>>) -> ClientResult<MutateResponse> {
        let body = MutateRequest { mutations };

        let response = self
            .client
            .post(&self.mutate_url)
            .query(&[("returnIds", "true")])
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?;

        Self::handle_response(response).await
    }

    /// Submit one mutation and return the id of the written document
    async fn mutate_one(&self, mutation: Mutation<'_>, doc: &Document) -> ClientResult<String> {
        let response = self.mutate(vec![mutation]).await?;

        response
            .results
            .into_iter()
            .next()
            .map(|r| r.id)
            .or_else(|| doc.id().map(str::to_string))
            .ok_or_else(|| {
                ClientError::InvalidResponse(format!(
                    "transaction {} returned no document id",
                    response.transaction_id
                ))
            })
    }

    /// Handle the HTTP response
    async fn handle_response(response: reqwest::Response) -> ClientResult<MutateResponse> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(text)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                StatusCode::BAD_REQUEST | StatusCode::CONFLICT => {
                    Err(ClientError::Validation(text))
                }
                _ => Err(ClientError::Internal(format!("{status}: {text}"))),
            };
        }

        let text = response.text().await?;
        serde_json::from_str(&text)
            .map_err(|e| ClientError::InvalidResponse(format!("{e}: {text}")))
    }
}

#[async_trait]
impl crate::ContentStore for SanityClient {
    async fn create(&self, doc: &Document) -> ClientResult<String> {
        self.mutate_one(Mutation::Create(doc), doc).await
    }

    async fn create_or_replace(&self, doc: &Document) -> ClientResult<String> {
        self.mutate_one(Mutation::CreateOrReplace(doc), doc).await
    }
}
