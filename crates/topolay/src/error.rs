pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Malformed intent response: {message}")]
    MalformedResponse { message: String },
}
