//! Auth Token Provider
//!
//! Session tokens come from Clerk's browser SDK (`window.Clerk.session`).

use async_trait::async_trait;
use wasm_bindgen::prelude::*;

use super::FetchError;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "Clerk", "session"], js_name = getToken)]
    async fn clerk_session_token() -> Result<JsValue, JsValue>;
}

/// Source of short-lived bearer tokens. Called once per fetch.
#[async_trait(?Send)]
pub trait TokenProvider {
    async fn get_token(&self) -> Result<String, FetchError>;
}

/// Clerk session token provider
#[derive(Clone, Copy, Debug, Default)]
pub struct ClerkTokenProvider;

#[async_trait(?Send)]
impl TokenProvider for ClerkTokenProvider {
    async fn get_token(&self) -> Result<String, FetchError> {
        let value = clerk_session_token()
            .await
            .map_err(|e| FetchError::Auth(js_error_message(&e)))?;
        let token: Option<String> =
            serde_wasm_bindgen::from_value(value).map_err(|e| FetchError::Auth(e.to_string()))?;
        require_token(token)
    }
}

/// Signed-out sessions yield `null`
fn require_token(token: Option<String>) -> Result<String, FetchError> {
    token
        .filter(|t| !t.is_empty())
        .ok_or(FetchError::Unauthenticated)
}

fn js_error_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_token() {
        assert_eq!(require_token(Some("tok".to_string())).unwrap(), "tok");
        assert!(matches!(require_token(None), Err(FetchError::Unauthenticated)));
        assert!(matches!(
            require_token(Some(String::new())),
            Err(FetchError::Unauthenticated)
        ));
    }
}
