use reqwest::StatusCode;
use tower::BoxError;

#[derive(thiserror::Error, Debug)]
#[error("Failed to build OpenAI client")]
pub struct ClientBuildError(#[from] eyre::Report);

/// Everything that can go wrong during a single OpenAI call.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Unable to serialize request")]
    Serialization(#[source] serde_json::Error),

    #[error("Unable to build request")]
    RequestConstruction(#[source] eyre::Report),

    #[error("Unable to send request")]
    Transport(#[source] BoxError),

    /// The body of the response is never read, so provider error payloads are not surfaced.
    #[error("Unexpected status code: {}", .0.as_u16())]
    UnexpectedStatus(StatusCode),

    #[error("Unable to parse response as JSON")]
    Decode(#[source] serde_json::Error),
}

impl Error {
    /// The HTTP status, when the API answered with something other than `200 OK`.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::UnexpectedStatus(status) => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use eyre::WrapErr;

    #[test]
    fn status_code_is_kept() {
        let err = Error::UnexpectedStatus(StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(err.status(), Some(StatusCode::TOO_MANY_REQUESTS));
        assert_eq!(err.to_string(), "Unexpected status code: 429");
    }

    #[test]
    fn construction_error_keeps_context() {
        let report = "not a url"
            .parse::<reqwest::Url>()
            .wrap_err("Invalid endpoint URL: not a url")
            .unwrap_err();
        let err = Error::RequestConstruction(report);

        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "Unable to build request");

        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "Invalid endpoint URL: not a url");
    }

    #[test]
    fn chain_names_each_cause_once() {
        let json = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let cause = json.to_string();
        let chain = format!("{:#}", eyre::Report::new(Error::Decode(json)));

        assert!(chain.starts_with("Unable to parse response as JSON: "), "{chain}");
        assert_eq!(chain.matches(&cause).count(), 1, "{chain}");
    }
}
