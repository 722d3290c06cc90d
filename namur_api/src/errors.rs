//! Error types for the API client.

/// Errors that can occur when talking to the Open Data Platform of Namur.
///
/// Every failure of the client is one of these variants, so matching on
/// [`Error`] as a whole handles all client failures at once.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The API answered with something unexpected (e.g. a non-JSON content type).
    #[error("{message}")]
    Generic {
        message: String,
        /// `Content-Type` header of the offending response, if any.
        content_type: Option<String>,
        /// Raw response body, if it could be read.
        body: Option<String>,
    },
    /// The API could not be reached: timeout, transport failure, or an error status.
    #[error("{message}")]
    Connection {
        message: String,
        /// HTTP status when the server answered with a non-success code.
        status: Option<u16>,
    },
    /// The numeric parking type code is not in the lookup table.
    #[error("The selected number {0} does not match the list of parking types")]
    UnknownParkingType(i64),
    /// The parking type name matches neither a slug nor an API label.
    #[error("Unknown parking type: {0}")]
    UnknownParkingName(String),
    /// The request succeeded but returned no parking locations.
    #[error("No parking locations were found")]
    NoResults,
    /// A record in the response is missing required fields or cannot be parsed.
    #[error("Malformed record: {0}")]
    MalformedRecord(String),
}

impl Error {
    pub(crate) fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
            status: None,
        }
    }

    /// HTTP status code attached to a [`Error::Connection`], if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Connection { status, .. } => *status,
            _ => None,
        }
    }

    /// Returns true for network, timeout, and HTTP status failures.
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection { .. })
    }
}
