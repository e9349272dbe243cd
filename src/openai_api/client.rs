use super::config::Config;
use super::error::{ClientBuildError, Error};
use eyre::WrapErr;
use reqwest::header::{HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode, Url};
use serde::Serialize;
use std::future::poll_fn;
use std::sync::Arc;
use tower::BoxError;
use tower_service::Service;
use tracing::{debug, warn};

const ORGANIZATION_HEADER: &str = "openai-organization";

/// OpenAI API client.
///
/// The transport is any tower service that turns a [`reqwest::Request`] into a
/// [`reqwest::Response`]. [`reqwest::Client`] is the production transport; tests
/// plug in `tower::service_fn` stubs. The client clones the transport for every
/// call, so it holds no per-call state and can be shared across tasks.
#[derive(Clone)]
pub struct Client<S = reqwest::Client> {
    api_key: Arc<str>,
    transport: S,
    config: Arc<Config>,
}

impl<S> std::fmt::Debug for Client<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("api_key", &"<redacted>")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Client<reqwest::Client> {
    /// Builds a client backed by a fresh [`reqwest::Client`].
    pub fn with_default_transport(api_key: impl AsRef<str>) -> Result<Self, ClientBuildError> {
        let transport = reqwest::Client::builder()
            .build()
            .wrap_err("Unable to build OpenAI client")?;

        Ok(Self::new(api_key, transport))
    }
}

impl<S> Client<S> {
    /// The key is not validated here. A bad key surfaces when the API rejects the call.
    pub fn new(api_key: impl AsRef<str>, transport: S) -> Self {
        Self::with_config(api_key, transport, Config::default())
    }

    pub fn with_config(api_key: impl AsRef<str>, transport: S, config: Config) -> Self {
        Self {
            api_key: Arc::from(api_key.as_ref()),
            transport,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn build_request<T: OpenAIRequest>(&self, body: Vec<u8>) -> eyre::Result<reqwest::Request> {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), T::path());
        let url = Url::parse(&url).wrap_err_with(|| format!("Invalid endpoint URL: {url}"))?;

        let mut request = reqwest::Request::new(T::method(), url);

        let mut authorization = HeaderValue::try_from(format!("Bearer {}", self.api_key))
            .wrap_err("Unable to convert access token to header value")?;
        authorization.set_sensitive(true);

        let headers = request.headers_mut();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(organization) = &self.config.organization {
            headers.insert(
                HeaderName::from_static(ORGANIZATION_HEADER),
                HeaderValue::from_str(organization).wrap_err_with(|| {
                    format!("Unable to parse organization id into {ORGANIZATION_HEADER} header")
                })?,
            );
        }

        *request.body_mut() = Some(body.into());
        // the transport enforces the deadline, not the client
        *request.timeout_mut() = self.config.timeout;

        Ok(request)
    }
}

impl<S> Client<S>
where
    S: Service<reqwest::Request, Response = reqwest::Response> + Clone,
    S::Error: Into<BoxError>,
{
    /// Sends `req` to its endpoint and decodes the response.
    ///
    /// Only a `200 OK` is decoded. Any other status fails with
    /// [`Error::UnexpectedStatus`] and the body is dropped unread.
    /// Dropping the returned future cancels the in-flight transport call.
    pub async fn request<T: OpenAIRequest>(&self, req: &T) -> Result<T::Response, Error> {
        let body = serde_json::to_vec(req).map_err(Error::Serialization)?;
        let request = self
            .build_request::<T>(body)
            .map_err(Error::RequestConstruction)?;

        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, "sending OpenAI request");

        let mut transport = self.transport.clone();
        poll_fn(|cx| transport.poll_ready(cx))
            .await
            .map_err(|e| Error::Transport(e.into()))?;

        let res = transport
            .call(request)
            .await
            .map_err(|e| Error::Transport(e.into()))?;

        let status = res.status();
        if status != StatusCode::OK {
            warn!(%method, %url, %status, "unexpected status from OpenAI");
            return Err(Error::UnexpectedStatus(status));
        }

        let output = res
            .bytes()
            .await
            .map_err(|e| Error::Transport(e.into()))?;

        let response = serde_json::from_slice(&output).map_err(Error::Decode)?;
        debug!(%method, %url, bytes = output.len(), "decoded OpenAI response");

        Ok(response)
    }
}

pub trait OpenAIRequest: Serialize {
    type Response: serde::de::DeserializeOwned;

    fn method() -> Method;

    /// Endpoint path relative to [`Config::base_url`], with a leading slash.
    fn path() -> &'static str;
}
