use std::fmt;

/// Errors encountered while listing orders from the marketplace API.
#[derive(Debug)]
pub enum SpOrdersError {
    Http(reqwest::Error),
    Json(reqwest::Error),
    Status { status: u16, body: String },
    Api(String),
}

impl From<reqwest::Error> for SpOrdersError {
    fn from(err: reqwest::Error) -> Self {
        SpOrdersError::Http(err)
    }
}

impl fmt::Display for SpOrdersError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpOrdersError::Http(err) => write!(f, "listing request failed: {err}"),
            SpOrdersError::Json(err) => write!(f, "listing response decode failed: {err}"),
            SpOrdersError::Status { status, body } => {
                write!(f, "listing request returned status {status}: {body}")
            }
            SpOrdersError::Api(message) => write!(f, "listing response carried errors: {message}"),
        }
    }
}
