//! In-process page client and a mock vehicle service for tests.
use std::fmt;
use std::sync::LazyLock;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, HOST};
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use regex::Regex;
use tower::ServiceExt;

use crate::constants::TEST_HOST;
use crate::error::VehicleError;
use crate::vehicles::{UserVehicleService, VehicleDetails};

mockall::mock! {
    pub UserVehicleService {}

    #[async_trait]
    impl UserVehicleService for UserVehicleService {
        async fn get_vehicle_details(&self, username: &str) -> Result<VehicleDetails, VehicleError>;
    }
}

static BODY_ELEMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<body[^>]*>(.*)</body>").expect("body regex"));
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").expect("tag regex"));

#[derive(Debug)]
pub(crate) enum WebClientError {
    Request(axum::http::Error),
    Body(axum::Error),
    FailingStatusCode { status: StatusCode, path: String },
}

impl fmt::Display for WebClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebClientError::Request(err) => write!(f, "could not build request: {err}"),
            WebClientError::Body(err) => write!(f, "could not read body: {err}"),
            WebClientError::FailingStatusCode { status, path } => {
                write!(f, "{status} for GET {path}")
            }
        }
    }
}

/// Drives requests straight through a router, no socket involved.
pub(crate) struct WebClient {
    router: Router,
}

impl WebClient {
    pub(crate) fn new(router: Router) -> Self {
        Self { router }
    }

    /// GETs `path`; anything other than a 2xx is an error.
    pub(crate) async fn get_page(&self, path: &str) -> Result<HtmlPage, WebClientError> {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .header(HOST, TEST_HOST)
            .body(Body::empty())
            .map_err(WebClientError::Request)?;
        let response = match self.router.clone().oneshot(request).await {
            Ok(response) => response,
            Err(never) => match never {},
        };

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let bytes = response
            .into_body()
            .collect()
            .await
            .map_err(WebClientError::Body)?
            .to_bytes();

        if !status.is_success() {
            return Err(WebClientError::FailingStatusCode {
                status,
                path: path.to_string(),
            });
        }

        Ok(HtmlPage {
            status,
            content_type,
            markup: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }
}

#[derive(Debug)]
pub(crate) struct HtmlPage {
    status: StatusCode,
    content_type: Option<String>,
    markup: String,
}

impl HtmlPage {
    pub(crate) fn status(&self) -> StatusCode {
        self.status
    }

    pub(crate) fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// The raw markup as served
    pub(crate) fn as_xml(&self) -> &str {
        &self.markup
    }

    /// Text inside `<body>`, tags dropped and entities decoded. Whitespace is left alone.
    pub(crate) fn body_text_content(&self) -> String {
        let inner = BODY_ELEMENT
            .captures(&self.markup)
            .and_then(|captures| captures.get(1))
            .map(|body| body.as_str())
            .unwrap_or_default();
        let text = TAG.replace_all(inner, "");
        html_escape::decode_html_entities(&text).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(markup: &str) -> HtmlPage {
        HtmlPage {
            status: StatusCode::OK,
            content_type: Some("text/html; charset=utf-8".to_string()),
            markup: markup.to_string(),
        }
    }

    #[test]
    fn body_text_skips_head_and_nested_tags() {
        let page = page(
            "<html><head><title>ignored</title></head><body class=\"x\"><p>Honda <b>Civic</b></p></body></html>",
        );
        assert_eq!(page.body_text_content(), "Honda Civic");
    }

    #[test]
    fn body_text_keeps_whitespace() {
        let page = page("<body>\n  Honda Civic\n</body>");
        assert_eq!(page.body_text_content(), "\n  Honda Civic\n");
    }

    #[test]
    fn missing_body_is_empty_text() {
        assert_eq!(page("<p>fragment</p>").body_text_content(), "");
    }
}
