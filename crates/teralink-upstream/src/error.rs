use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientBuildError {
    #[error("invalid upstream base url {url}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("failed to build http client: {0}")]
    Http(#[from] reqwest::Error),
}
