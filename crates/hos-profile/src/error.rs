use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("profile parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid profile field `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProfileError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ProfileError::Invalid { field, reason: reason.into() }
    }
}

pub type ProfileResult<T> = Result<T, ProfileError>;
