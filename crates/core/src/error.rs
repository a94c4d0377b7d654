#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Missing required environment variable: {0}")]
    MissingEnv(&'static str),

    #[error("Invalid value for {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },

    #[error("Validation failed: {0}")]
    Validation(String),
}
