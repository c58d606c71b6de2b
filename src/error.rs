use std::fmt;

/// Unified error type for API, prompt, and I/O operations
#[derive(Debug)]
pub enum ExportError {
    /// HTTP request failed (network error, timeout, etc.)
    Network(reqwest::Error),
    /// Failed to parse JSON response
    Parse(serde_json::Error),
    /// API returned an error response
    ApiResponse { code: String, details: String },
    /// HTTP error status code
    HttpStatus(reqwest::StatusCode),
    /// Rate limiting persisted through all retry attempts
    RateLimited { attempts: u32 },
    /// File I/O error
    Io(std::io::Error),
    /// Interactive prompt failed or was cancelled
    Prompt(inquire::InquireError),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Network(e) => write!(f, "Network error: {}", e),
            ExportError::Parse(e) => write!(f, "Parse error: {}", e),
            ExportError::ApiResponse { code, details } => write!(f, "{}: {}", code, details),
            ExportError::HttpStatus(status) => write!(f, "HTTP error: {}", status),
            ExportError::RateLimited { attempts } => {
                write!(f, "Still rate limited after {} attempts", attempts)
            }
            ExportError::Io(e) => write!(f, "I/O error: {}", e),
            ExportError::Prompt(e) => write!(f, "Prompt error: {}", e),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Network(e) => Some(e),
            ExportError::Parse(e) => Some(e),
            ExportError::Io(e) => Some(e),
            ExportError::Prompt(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ExportError {
    fn from(err: reqwest::Error) -> Self {
        ExportError::Network(err)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::Parse(err)
    }
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::Io(err)
    }
}

impl From<inquire::InquireError> for ExportError {
    fn from(err: inquire::InquireError) -> Self {
        ExportError::Prompt(err)
    }
}

/// Result type alias for export operations
pub type ExportResult<T> = Result<T, ExportError>;
