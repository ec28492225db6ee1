use thiserror::Error;

#[derive(Debug, Error)]
pub enum UrlCheckError {
    #[error("url check transport error: {0}")]
    Transport(String),

    #[error("url check returned a malformed response: {0}")]
    MalformedResponse(String),
}

#[derive(Debug, Error)]
pub enum ContentStoreError {
    #[error("content store error: {0}")]
    Store(String),

    #[error("content store returned no entries")]
    EmptyResult,
}

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("gateway unreachable: {0}")]
    Unreachable(String),
}
