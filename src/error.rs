#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to initialize client: {0}")]
    InitializeClient(String),

    #[error("\"url\" must be a string representing the location of the file to load.")]
    InvalidUrlType,

    #[error("invalid url \"{url}\": {reason}")]
    MalformedUrl { url: String, reason: String },

    #[error("{status} {status_text}")]
    Status { status: u16, status_text: String },

    #[error("An unexpected error occured.")]
    Transport,
}
