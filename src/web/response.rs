//! HTTP responses for core outcomes and errors.

use crate::{
    core::{events::UiOutcome, notice::Notice},
    errors::Error,
};
use axum::{
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode, header},
    response::{Html, IntoResponse, Redirect, Response},
};
use tracing::{error, warn};

/// Header carrying notices that accompany redirects and downloads.
pub const NOTICE_HEADER: HeaderName = HeaderName::from_static("x-storefront-notice");

fn notice_headers<'a>(notices: impl IntoIterator<Item = &'a Notice>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for notice in notices {
        match HeaderValue::from_str(&notice.to_string()) {
            Ok(value) => {
                headers.append(NOTICE_HEADER, value);
            }
            Err(e) => warn!("Dropping notice that is not a valid header value: {e}"),
        }
    }
    headers
}

impl IntoResponse for UiOutcome {
    fn into_response(self) -> Response {
        match self {
            Self::Page { html } => Html(html).into_response(),
            Self::Compose(intent) => (
                notice_headers(&intent.notices),
                Redirect::to(&intent.url),
            )
                .into_response(),
            Self::Download { export, notice } => (
                notice_headers([&notice]),
                [
                    (header::CONTENT_TYPE, export.content_type.to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", export.file_name),
                    ),
                ],
                export.body,
            )
                .into_response(),
            Self::NoOp => Redirect::to("/").into_response(),
        }
    }
}

impl Error {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingField { .. } | Self::InvalidField { .. } | Self::EmptyMessage => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::InvalidFilter { .. } | Self::Import { .. } | Self::Upload { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::OcrBusy => StatusCode::CONFLICT,
            Self::Ocr { .. } => StatusCode::BAD_GATEWAY,
            Self::Config { .. }
            | Self::Io(_)
            | Self::Json(_)
            | Self::CatalogLoad { .. }
            | Self::AddrParse(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!("Request failed: {self}");
        } else {
            warn!("Request rejected: {self}");
        }
        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::{admin::CatalogExport, messaging::ComposeIntent};

    #[test]
    fn test_compose_redirects_with_notices() {
        let response = UiOutcome::Compose(ComposeIntent {
            url: "https://wa.me/2348112023440?text=Hi".to_string(),
            message: "Hi".to_string(),
            notices: vec![Notice::Truncated { limit: 600 }, Notice::MessageSent],
        })
        .into_response();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers()[header::LOCATION],
            "https://wa.me/2348112023440?text=Hi"
        );
        let notices: Vec<_> = response
            .headers()
            .get_all(NOTICE_HEADER)
            .iter()
            .map(|v| v.to_str().unwrap().to_string())
            .collect();
        assert_eq!(
            notices,
            [
                "Message was truncated to 600 characters.",
                "Message sent! Continue the conversation on WhatsApp."
            ]
        );
    }

    #[test]
    fn test_download_is_an_attachment() {
        let response = UiOutcome::Download {
            export: CatalogExport {
                file_name: "products.json".to_string(),
                content_type: "application/json",
                body: "[]".to_string(),
            },
            notice: Notice::info("products.json downloaded successfully!"),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"products.json\""
        );
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
    }

    #[test]
    fn test_noop_redirects_home() {
        let response = UiOutcome::NoOp.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");
    }

    #[test]
    fn test_error_statuses() {
        assert_eq!(Error::OcrBusy.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            Error::EmptyMessage.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            Error::Import {
                message: "eof".to_string()
            }
            .status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            Error::Upload {
                message: "no file".to_string()
            }
            .status_code(),
            StatusCode::BAD_REQUEST
        );
    }
}
