use thiserror::Error;

/// Failure kinds for a statistics fetch. Every variant aborts the run;
/// there is no retry beyond the courtesy pacing delay between calls.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error calling {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} from {url}: {body}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("unexpected response shape from {url}: {detail}")]
    Parse { url: String, detail: String },

    #[error("invalid configuration: {0}")]
    Config(String),
}
