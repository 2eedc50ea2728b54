//! Invoice Service
//!
//! `GET {base}/invoices` with a bearer token.

use async_trait::async_trait;
use serde::Deserialize;

use super::FetchError;
use crate::models::Invoice;

/// Invoice list as returned by the service. `data: None` means no payload.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct InvoiceListResponse {
    #[serde(default)]
    pub data: Option<Vec<Invoice>>,
}

/// Accepted body shapes: a bare array or a `{ "data": [...] }` record
#[derive(Deserialize)]
#[serde(untagged)]
enum ListBody {
    Bare(Vec<Invoice>),
    Envelope(InvoiceListResponse),
}

impl InvoiceListResponse {
    /// Decode a response body. Empty and `null` bodies carry no payload.
    pub fn from_body(body: &str) -> Result<Self, FetchError> {
        let body = body.trim();
        if body.is_empty() {
            return Ok(Self::default());
        }
        let parsed: Option<ListBody> = serde_json::from_str(body)?;
        Ok(match parsed {
            None => Self::default(),
            Some(ListBody::Bare(invoices)) => Self { data: Some(invoices) },
            Some(ListBody::Envelope(response)) => response,
        })
    }

    /// Collection in service order; a missing payload is an empty list
    pub fn into_invoices(self) -> Vec<Invoice> {
        self.data.unwrap_or_default()
    }
}

/// Remote invoice collection
#[async_trait(?Send)]
pub trait InvoiceService {
    /// List the current user's invoices
    async fn list_invoices(
        &self,
        base_url: &str,
        token: &str,
    ) -> Result<InvoiceListResponse, FetchError>;
}

/// `reqwest`-backed service (browser fetch on wasm32)
#[derive(Clone)]
pub struct HttpInvoiceService {
    client: reqwest::Client,
}

impl HttpInvoiceService {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

pub fn invoices_url(base_url: &str) -> String {
    format!("{}/invoices", base_url.trim_end_matches('/'))
}

/// Build the list request: `GET {base}/invoices` with `Authorization: Bearer <token>`
pub fn list_request(
    client: &reqwest::Client,
    base_url: &str,
    token: &str,
) -> Result<reqwest::Request, FetchError> {
    Ok(client.get(invoices_url(base_url)).bearer_auth(token).build()?)
}

/// Any non-2xx status is a failure
pub fn check_status(status: reqwest::StatusCode) -> Result<(), FetchError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(FetchError::Status(status.as_u16()))
    }
}

#[async_trait(?Send)]
impl InvoiceService for HttpInvoiceService {
    async fn list_invoices(
        &self,
        base_url: &str,
        token: &str,
    ) -> Result<InvoiceListResponse, FetchError> {
        let request = list_request(&self.client, base_url, token)?;
        log::debug!("GET {}", request.url());

        let response = self.client.execute(request).await?;
        check_status(response.status())?;

        let body = response.text().await?;
        InvoiceListResponse::from_body(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoices_url() {
        assert_eq!(
            invoices_url("http://localhost:8080/api"),
            "http://localhost:8080/api/invoices"
        );
        assert_eq!(
            invoices_url("http://localhost:8080/api/"),
            "http://localhost:8080/api/invoices"
        );
    }

    #[test]
    fn test_list_request_carries_bearer_token() {
        let client = reqwest::Client::new();
        let request = list_request(&client, "http://localhost:8080/api/", "tok-1").unwrap();

        assert_eq!(request.method(), reqwest::Method::GET);
        assert_eq!(request.url().as_str(), "http://localhost:8080/api/invoices");
        let auth = request.headers().get(reqwest::header::AUTHORIZATION).unwrap();
        assert_eq!(auth.to_str().unwrap(), "Bearer tok-1");
    }

    #[test]
    fn test_list_request_rejects_bad_base_url() {
        let client = reqwest::Client::new();
        let err = list_request(&client, "not a url", "tok-1").unwrap_err();
        assert!(matches!(err, FetchError::Network(_)));
    }

    #[test]
    fn test_check_status() {
        use reqwest::StatusCode;

        assert!(check_status(StatusCode::OK).is_ok());
        assert!(check_status(StatusCode::NO_CONTENT).is_ok());
        assert!(matches!(
            check_status(StatusCode::UNAUTHORIZED),
            Err(FetchError::Status(401))
        ));
        assert!(matches!(
            check_status(StatusCode::INTERNAL_SERVER_ERROR),
            Err(FetchError::Status(500))
        ));
        assert!(matches!(
            check_status(StatusCode::MOVED_PERMANENTLY),
            Err(FetchError::Status(301))
        ));
    }

    #[test]
    fn test_malformed_record_keeps_the_list() {
        let body = r#"[{"title":42},{"title":"ok"},{"template":2,"thumbnailUrl":{"x":1}}]"#;
        let invoices = InvoiceListResponse::from_body(body).unwrap().into_invoices();

        assert_eq!(invoices.len(), 3);
        assert_eq!(invoices[0].title.as_deref(), Some("42"));
        assert_eq!(invoices[1].title.as_deref(), Some("ok"));
        assert_eq!(invoices[2].template.as_deref(), Some("2"));
        assert_eq!(invoices[2].thumbnail_url, None);
    }

    #[test]
    fn test_bare_array_body() {
        let response =
            InvoiceListResponse::from_body(r#"[{"title":"A"},{"title":"B"}]"#).unwrap();
        let invoices = response.into_invoices();
        assert_eq!(invoices.len(), 2);
        assert_eq!(invoices[1].title.as_deref(), Some("B"));
    }

    #[test]
    fn test_envelope_body() {
        let response = InvoiceListResponse::from_body(r#"{"data":[{"title":"A"}]}"#).unwrap();
        assert_eq!(response.data.map(|d| d.len()), Some(1));
    }

    #[test]
    fn test_missing_payload_is_empty() {
        for body in ["", "  ", "null", "{}", r#"{"data":null}"#] {
            let response = InvoiceListResponse::from_body(body).unwrap();
            assert!(response.into_invoices().is_empty(), "body: {:?}", body);
        }
    }

    #[test]
    fn test_garbage_body_is_decode_error() {
        let err = InvoiceListResponse::from_body("<html>oops</html>").unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));

        let err = InvoiceListResponse::from_body("42").unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
