use thiserror::Error;

pub type SandwichResult<T> = Result<T, SandwichError>;

#[derive(Error, Debug)]
pub enum SandwichError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Credential error: {0}")]
    Credentials(String),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Spreadsheet API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Spreadsheet not found: {0}")]
    SpreadsheetNotFound(String),

    #[error("Worksheet not found: {0}")]
    WorksheetNotFound(String),

    #[error("Worksheet '{0}' has no rows")]
    EmptyWorksheet(String),

    #[error("Invalid data: {0}")]
    InvalidData(#[from] ValidationError),

    #[error("Arithmetic overflow: {0}")]
    Overflow(String),

    #[error("Invalid cell in worksheet '{worksheet}': '{value}' is not an integer")]
    InvalidCell { worksheet: String, value: String },
}

/// Recoverable failure of user-entered sales data
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid literal for integer: '{0}'")]
    NotAnInteger(String),

    #[error("Exactly {expected} values required, you provided {provided}")]
    WrongCount { expected: usize, provided: usize },
}

impl From<jsonwebtoken::errors::Error> for SandwichError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        SandwichError::Credentials(err.to_string())
    }
}
