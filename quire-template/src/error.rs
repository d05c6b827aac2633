use thiserror::Error;

/// Result type for template rendering.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to render template")]
    Render(#[from] minijinja::Error),
}
