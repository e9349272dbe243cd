use super::client::{Client, OpenAIRequest};
use super::embeddings::Usage;
use super::error::Error;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use tower::BoxError;
use tower_service::Service;

/// A single turn of a conversation.
///
/// The role is passed through as-is; the API decides what is valid.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    /// Instructions and directives provided to the model
    pub fn system(content: impl Into<String>) -> Self {
        Self::new("system", content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new("assistant", content)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    /// Conversation history, oldest first.
    pub messages: Vec<Message>,
}

impl OpenAIRequest for CompletionRequest {
    type Response = CompletionResponse;

    fn method() -> Method {
        Method::POST
    }

    fn path() -> &'static str {
        "/chat/completions"
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Choice {
    pub index: i64,
    pub finish_reason: String,
    pub message: Message,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct CompletionResponse {
    pub id: String,
    pub object: String,
    pub model: String,
    /// Unix timestamp, seconds.
    pub created: i64,
    pub choices: Vec<Choice>,
    pub usage: Usage,
}

impl<S> Client<S>
where
    S: Service<reqwest::Request, Response = reqwest::Response> + Clone,
    S::Error: Into<BoxError>,
{
    /// Asks the model to continue the conversation in `req.messages`.
    pub async fn create_chat_completion(
        &self,
        req: &CompletionRequest,
    ) -> Result<CompletionResponse, Error> {
        self.request(req).await
    }
}
