// Remote movie service client: two GET endpoints returning a JSON envelope.

use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://moviebackend.azurewebsites.net";

pub const SEARCH_FALLBACK: &str = "Error fetching search results. Please try again.";
pub const HISTORY_FALLBACK: &str = "Error fetching search history. Please try again.";
pub const NETWORK_ERROR: &str = "Network Error: Unable to reach the server.";
pub const GENERIC_ERROR: &str = "Error: Something went wrong. Please try again.";

/// One movie as returned by the search endpoint. Every field is a display string;
/// `id` is only used to tell cards apart.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MovieSummary {
    #[serde(rename = "imdbID", deserialize_with = "nullable")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub poster: String,
    #[serde(deserialize_with = "nullable")]
    pub plot: String,
    #[serde(rename = "imdbRating", deserialize_with = "nullable")]
    pub rating: String,
    #[serde(deserialize_with = "nullable")]
    pub awards: String,
    #[serde(deserialize_with = "nullable")]
    pub released: String,
    #[serde(deserialize_with = "nullable")]
    pub runtime: String,
    #[serde(deserialize_with = "nullable")]
    pub genre: String,
    #[serde(deserialize_with = "nullable")]
    pub director: String,
    #[serde(deserialize_with = "nullable")]
    pub writer: String,
    #[serde(deserialize_with = "nullable")]
    pub actors: String,
}

// null and missing both mean "nothing to show"
fn nullable<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(default)]
    succeeded: bool,
    data: Option<T>,
    message: Option<String>,
}

impl<T> Envelope<T> {
    fn into_result(self) -> Result<Option<T>, ApiError> {
        if self.succeeded {
            Ok(self.data)
        } else {
            Err(ApiError::Rejected {
                message: self.message,
            })
        }
    }
}

// Body of a non-2xx response; only the message is of interest.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// The two remote operations, used to pick fallback texts and log labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Search,
    History,
}

impl Operation {
    pub fn fallback(self) -> &'static str {
        match self {
            Operation::Search => SEARCH_FALLBACK,
            Operation::History => HISTORY_FALLBACK,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Operation::Search => "search",
            Operation::History => "history",
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered 2xx but reported `succeeded: false`.
    #[error("server rejected the request: {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { message: Option<String> },
    /// The server answered with an error status.
    #[error("server responded with {status}")]
    Server {
        status: StatusCode,
        message: Option<String>,
    },
    /// The request went out but no (complete) response came back.
    #[error("no response from server")]
    Network(#[source] reqwest::Error),
    /// The request could not be built.
    #[error("could not build request: {0}")]
    Request(String),
    /// A 2xx body that is not a valid envelope.
    #[error("malformed response body")]
    Malformed(#[source] serde_json::Error),
}

impl ApiError {
    /// The single line shown to the user for this failure.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected { message } => non_empty(message).unwrap_or(fallback).to_string(),
            ApiError::Malformed(_) => fallback.to_string(),
            ApiError::Server { message, .. } => {
                format!("Server Error: {}", non_empty(message).unwrap_or(fallback))
            }
            ApiError::Network(_) => NETWORK_ERROR.to_string(),
            ApiError::Request(_) => GENERIC_ERROR.to_string(),
        }
    }
}

fn non_empty(message: &Option<String>) -> Option<&str> {
    message.as_deref().filter(|m| !m.is_empty())
}

fn classify(err: reqwest::Error) -> ApiError {
    if err.is_builder() {
        ApiError::Request(err.to_string())
    } else {
        ApiError::Network(err)
    }
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Fails with `ApiError::Request` when the HTTP client (TLS backend
    /// included) cannot be initialised.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("moviesearch/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Request(format!("failed to initialise http client: {e}")))?;
        Ok(ApiClient {
            http,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // base URL with `segments` appended, each percent-encoded as one path segment
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ApiError::Request(format!("invalid base url {}: {e}", self.base_url)))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::Request(format!("base url {} cannot take a path", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub fn search_url(&self, title: &str) -> Result<Url, ApiError> {
        self.endpoint(&["api", "Movie", "search", title])
    }

    pub fn history_url(&self) -> Result<Url, ApiError> {
        self.endpoint(&["api", "Movie", "searchHistory"])
    }

    async fn get_envelope<T: DeserializeOwned>(&self, url: Url) -> Result<Envelope<T>, ApiError> {
        debug!(%url, "GET");
        let response = self.http.get(url).send().await.map_err(classify)?;
        let status = response.status();
        let body = response.bytes().await.map_err(ApiError::Network)?;
        debug!(%status, bytes = body.len(), "response received");
        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&body)
                .unwrap_or_default()
                .message;
            return Err(ApiError::Server { status, message });
        }
        serde_json::from_slice(&body).map_err(ApiError::Malformed)
    }

    /// Looks up a single movie by title. `Ok(None)` means the server reported
    /// success without a movie.
    #[tracing::instrument(skip(self))]
    pub async fn search(&self, title: &str) -> Result<Option<MovieSummary>, ApiError> {
        let url = self.search_url(title)?;
        self.get_envelope::<MovieSummary>(url).await?.into_result()
    }

    /// Prior search queries in server order.
    #[tracing::instrument(skip(self))]
    pub async fn search_history(&self) -> Result<Vec<String>, ApiError> {
        let url = self.history_url()?;
        Ok(self
            .get_envelope::<Vec<String>>(url)
            .await?
            .into_result()?
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    const INCEPTION: &str = r#"{
        "succeeded": true,
        "data": {
            "imdbID": "tt1375666",
            "title": "Inception",
            "poster": "https://example.com/inception.jpg",
            "plot": "A thief who steals corporate secrets through dream-sharing technology.",
            "imdbRating": "8.8",
            "awards": "Won 4 Oscars",
            "released": "16 Jul 2010",
            "runtime": "148 min",
            "genre": "Action, Adventure, Sci-Fi",
            "director": "Christopher Nolan",
            "writer": "Christopher Nolan",
            "actors": "Leonardo DiCaprio, Joseph Gordon-Levitt"
        },
        "message": null
    }"#;

    // a port nothing listens on
    fn closed_port_url() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        format!("http://127.0.0.1:{port}")
    }

    #[test]
    fn client_construction_reports_success_as_result() {
        let client = ApiClient::new(DEFAULT_BASE_URL).unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
        let err = ApiError::Request("failed to initialise http client: tls".to_string());
        assert_eq!(err.user_message(SEARCH_FALLBACK), GENERIC_ERROR);
    }

    #[test]
    fn search_url_encodes_title_as_one_segment() {
        let client = ApiClient::new("https://movies.example.com").unwrap();
        let url = client.search_url("Star Wars/IV?x#y").unwrap();
        assert_eq!(
            url.as_str(),
            "https://movies.example.com/api/Movie/search/Star%20Wars%2FIV%3Fx%23y"
        );
    }

    #[test]
    fn search_url_keeps_base_path_and_empty_title() {
        let client = ApiClient::new("http://localhost:8080/backend/").unwrap();
        let url = client.search_url("").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/backend/api/Movie/search/");
        let hist = client.history_url().unwrap();
        assert_eq!(hist.path(), "/backend/api/Movie/searchHistory");
    }

    #[test]
    fn invalid_base_url_is_a_request_error() {
        let client = ApiClient::new("not a url").unwrap();
        let err = client.search_url("Inception").unwrap_err();
        assert!(matches!(err, ApiError::Request(_)));
        assert_eq!(err.user_message(SEARCH_FALLBACK), GENERIC_ERROR);
    }

    #[test]
    fn movie_summary_tolerates_null_and_missing_fields() {
        let movie: MovieSummary =
            serde_json::from_str(r#"{"imdbID":"tt1","title":"X","awards":null}"#).unwrap();
        assert_eq!(movie.id, "tt1");
        assert_eq!(movie.title, "X");
        assert_eq!(movie.awards, "");
        assert_eq!(movie.plot, "");
    }

    #[test]
    fn user_message_follows_error_taxonomy() {
        let rejected = ApiError::Rejected {
            message: Some("Not found".to_string()),
        };
        assert_eq!(rejected.user_message(SEARCH_FALLBACK), "Not found");

        let silent = ApiError::Rejected {
            message: Some(String::new()),
        };
        assert_eq!(silent.user_message(HISTORY_FALLBACK), HISTORY_FALLBACK);

        let server = ApiError::Server {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: Some("database down".to_string()),
        };
        assert_eq!(
            server.user_message(SEARCH_FALLBACK),
            "Server Error: database down"
        );

        let bare = ApiError::Server {
            status: StatusCode::BAD_GATEWAY,
            message: None,
        };
        assert_eq!(
            bare.user_message(SEARCH_FALLBACK),
            format!("Server Error: {SEARCH_FALLBACK}")
        );
    }

    #[tokio::test]
    async fn search_decodes_success_envelope() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/Movie/search/Inception")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(INCEPTION)
            .create_async()
            .await;

        let client = ApiClient::new(server.url()).unwrap();
        let movie = client
            .search("Inception")
            .await
            .expect("search should succeed")
            .expect("movie should be present");

        mock.assert_async().await;
        assert_eq!(movie.id, "tt1375666");
        assert_eq!(movie.title, "Inception");
        assert_eq!(movie.rating, "8.8");
        assert_eq!(movie.director, "Christopher Nolan");
    }

    #[tokio::test]
    async fn search_reports_rejection_message() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/Movie/search/zzzznotfound")
            .with_status(200)
            .with_body(r#"{"succeeded":false,"data":null,"message":"Not found"}"#)
            .create_async()
            .await;

        let client = ApiClient::new(server.url()).unwrap();
        let err = client.search("zzzznotfound").await.unwrap_err();
        assert!(matches!(err, ApiError::Rejected { .. }));
        assert_eq!(err.user_message(SEARCH_FALLBACK), "Not found");
    }

    #[tokio::test]
    async fn error_status_carries_server_message() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/Movie/searchHistory")
            .with_status(500)
            .with_body(r#"{"message":"history store unavailable"}"#)
            .create_async()
            .await;

        let client = ApiClient::new(server.url()).unwrap();
        let err = client.search_history().await.unwrap_err();
        match &err {
            ApiError::Server { status, .. } => assert_eq!(*status, StatusCode::INTERNAL_SERVER_ERROR),
            other => panic!("expected server error, got {other:?}"),
        }
        assert_eq!(
            err.user_message(HISTORY_FALLBACK),
            "Server Error: history store unavailable"
        );
    }

    #[tokio::test]
    async fn error_status_with_plain_body_uses_fallback() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/Movie/search/Inception")
            .with_status(503)
            .with_body("Service Unavailable")
            .create_async()
            .await;

        let client = ApiClient::new(server.url()).unwrap();
        let err = client.search("Inception").await.unwrap_err();
        assert_eq!(
            err.user_message(SEARCH_FALLBACK),
            format!("Server Error: {SEARCH_FALLBACK}")
        );
    }

    #[tokio::test]
    async fn malformed_success_body_uses_fallback() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/Movie/search/Inception")
            .with_status(200)
            .with_body("<html>maintenance</html>")
            .create_async()
            .await;

        let client = ApiClient::new(server.url()).unwrap();
        let err = client.search("Inception").await.unwrap_err();
        assert!(matches!(err, ApiError::Malformed(_)));
        assert_eq!(err.user_message(SEARCH_FALLBACK), SEARCH_FALLBACK);
    }

    #[tokio::test]
    async fn history_keeps_server_order_and_maps_null_to_empty() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/Movie/searchHistory")
            .with_status(200)
            .with_body(r#"{"succeeded":true,"data":["Inception","Matrix"],"message":null}"#)
            .create_async()
            .await;

        let client = ApiClient::new(server.url()).unwrap();
        let history = client.search_history().await.unwrap();
        mock.assert_async().await;
        assert_eq!(history, vec!["Inception".to_string(), "Matrix".to_string()]);

        let mut empty_server = Server::new_async().await;
        let _empty = empty_server
            .mock("GET", "/api/Movie/searchHistory")
            .with_status(200)
            .with_body(r#"{"succeeded":true,"data":null}"#)
            .create_async()
            .await;
        let client = ApiClient::new(empty_server.url()).unwrap();
        assert!(client.search_history().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn connection_refused_is_a_network_error() {
        let client = ApiClient::new(closed_port_url()).unwrap();
        let err = client.search("Inception").await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)), "got {err:?}");
        assert_eq!(err.user_message(SEARCH_FALLBACK), NETWORK_ERROR);
    }
}
