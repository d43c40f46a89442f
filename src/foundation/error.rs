pub type KeylineResult<T> = Result<T, KeylineError>;

#[derive(thiserror::Error, Debug)]
pub enum KeylineError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("animation error: {0}")]
    Animation(String),

    #[error("evaluation error: {0}")]
    Evaluation(String),

    #[error("invalid format: {0}")]
    InvalidFormat(String),

    #[error("invalid frame: {0}")]
    InvalidFrame(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl KeylineError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::InvalidFormat(msg.into())
    }

    pub fn invalid_frame(msg: impl Into<String>) -> Self {
        Self::InvalidFrame(msg.into())
    }
}
