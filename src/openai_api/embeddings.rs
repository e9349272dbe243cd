use super::client::{Client, OpenAIRequest};
use super::error::Error;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use tower::BoxError;
use tower_service::Service;

/// Token accounting reported by the API.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Usage {
    pub prompt_tokens: i64,
    pub total_tokens: i64,
    pub completion_tokens: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Embedding {
    pub object: String,
    pub embedding: Vec<f32>,
    /// Position of the input this vector belongs to.
    pub index: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct EmbeddingResponse {
    pub object: String,
    pub data: Vec<Embedding>,
    pub model: String,
    pub usage: Usage,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct EmbeddingRequest {
    /// Embedding model, e.g. `text-embedding-3-small`.
    pub model: String,
    /// Text to embed.
    pub input: String,
}

impl EmbeddingRequest {
    pub fn new(model: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            input: input.into(),
        }
    }
}

impl OpenAIRequest for EmbeddingRequest {
    type Response = EmbeddingResponse;

    fn method() -> Method {
        Method::POST
    }

    fn path() -> &'static str {
        "/embeddings"
    }
}

impl<S> Client<S>
where
    S: Service<reqwest::Request, Response = reqwest::Response> + Clone,
    S::Error: Into<BoxError>,
{
    /// Creates an embedding vector for `req.input`.
    pub async fn create_embedding(
        &self,
        req: &EmbeddingRequest,
    ) -> Result<EmbeddingResponse, Error> {
        self.request(req).await
    }
}
