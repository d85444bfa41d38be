use std::fmt;

use thiserror::Error;

/// The remote endpoint a request was issued against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `filter.php?i=`
    SearchByIngredient,
    /// `filter.php?a=`
    FilterByAlcoholic,
    /// `lookup.php?i=`
    DrinkById,
    /// `search.php?i=`
    IngredientByName,
}

impl Endpoint {
    /// Path of the endpoint relative to the API base URL
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::SearchByIngredient | Endpoint::FilterByAlcoholic => "filter.php",
            Endpoint::DrinkById => "lookup.php",
            Endpoint::IngredientByName => "search.php",
        }
    }

    /// Name of the query parameter carrying the request argument
    pub fn param(&self) -> &'static str {
        match self {
            Endpoint::FilterByAlcoholic => "a",
            _ => "i",
        }
    }

    /// User-facing message shown when the endpoint cannot be reached
    pub fn failure_message(&self) -> &'static str {
        match self {
            Endpoint::SearchByIngredient | Endpoint::FilterByAlcoholic => {
                "Failed to fetch drinks"
            }
            Endpoint::DrinkById => "Failed to fetch drink details",
            Endpoint::IngredientByName => "Failed to fetch ingredient",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}?{}=", self.path(), self.param())
    }
}

/// The single data-path error: the API could not deliver a usable response.
///
/// Views treat every `RequestFailure` the same way ("unable to retrieve data");
/// the status and message exist only for display and logging.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}: {message}", endpoint.failure_message())]
pub struct RequestFailure {
    pub endpoint: Endpoint,
    /// HTTP status, when the server answered at all
    pub status: Option<u16>,
    pub message: String,
}

impl RequestFailure {
    pub fn status(endpoint: Endpoint, status: reqwest::StatusCode) -> Self {
        Self {
            endpoint,
            status: Some(status.as_u16()),
            message: format!("server responded with {}", status),
        }
    }

    pub fn transport(endpoint: Endpoint, err: &reqwest::Error) -> Self {
        Self {
            endpoint,
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}

/// Errors that can occur outside the data path (setup, routing, output)
#[derive(Error, Debug)]
pub enum CocktailError {
    /// Failed to retrieve data from the API
    #[error(transparent)]
    Request(#[from] RequestFailure),

    /// Path did not match any known route
    #[error("No page at '{0}'")]
    UnknownRoute(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Invalid command line or shell argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Error writing output or reading input
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error serializing JSON output
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message_per_endpoint() {
        let failure = RequestFailure {
            endpoint: Endpoint::DrinkById,
            status: Some(500),
            message: "server responded with 500 Internal Server Error".to_string(),
        };
        assert_eq!(
            failure.to_string(),
            "Failed to fetch drink details: server responded with 500 Internal Server Error"
        );
    }

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(Endpoint::SearchByIngredient.to_string(), "filter.php?i=");
        assert_eq!(Endpoint::FilterByAlcoholic.to_string(), "filter.php?a=");
        assert_eq!(Endpoint::DrinkById.to_string(), "lookup.php?i=");
        assert_eq!(Endpoint::IngredientByName.to_string(), "search.php?i=");
    }

    #[test]
    fn test_request_failure_converts_into_crate_error() {
        let failure = RequestFailure {
            endpoint: Endpoint::SearchByIngredient,
            status: None,
            message: "connection refused".to_string(),
        };
        let err: CocktailError = failure.into();
        assert_eq!(err.to_string(), "Failed to fetch drinks: connection refused");
    }
}
