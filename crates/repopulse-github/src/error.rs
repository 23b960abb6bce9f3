use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("build http client")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { status: u16, url: String },

    #[error("decode response from {url}: {reason}")]
    Decode { url: String, reason: String },
}
