//! Async client for the OpenAI embeddings and chat completions endpoints.
//!
//! ```no_run
//! use openai_client::{Client, CompletionRequest, Message};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_default_transport("sk-...")?;
//! let res = client
//!     .create_chat_completion(&CompletionRequest {
//!         model: "gpt-3.5-turbo".into(),
//!         messages: vec![Message::user("Hello")],
//!     })
//!     .await?;
//! println!("{}", res.choices[0].message.content);
//! # Ok(())
//! # }
//! ```

pub mod openai_api;

pub use openai_api::chat::{Choice, CompletionRequest, CompletionResponse, Message};
pub use openai_api::client::{Client, OpenAIRequest};
pub use openai_api::config::{Config, DEFAULT_BASE_URL};
pub use openai_api::embeddings::{Embedding, EmbeddingRequest, EmbeddingResponse, Usage};
pub use openai_api::error::{ClientBuildError, Error};
