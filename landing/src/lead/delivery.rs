//! Lead delivery through the EmailJS REST API.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

use super::fields::EmailRequest;
use crate::error::LeadError;

/// Hands a finished lead to whatever sends the e-mail.
#[allow(async_fn_in_trait)]
pub trait LeadDelivery {
    async fn deliver(&self, request: &EmailRequest) -> Result<(), LeadError>;
}

#[derive(Debug, Clone, Copy)]
pub struct EmailJs {
    endpoint: &'static str,
}

impl EmailJs {
    pub fn new(endpoint: &'static str) -> Self {
        Self { endpoint }
    }
}

impl LeadDelivery for EmailJs {
    async fn deliver(&self, request: &EmailRequest) -> Result<(), LeadError> {
        let body = serde_json::to_string(request)?;

        let headers = Headers::new()?;
        headers.set("Content-Type", "application/json")?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_headers(&headers);
        opts.set_body(&JsValue::from_str(&body));

        let http_request = Request::new_with_str_and_init(self.endpoint, &opts)?;

        let window = web_sys::window().ok_or_else(|| LeadError::Transport("no window".into()))?;
        let resp: Response = JsFuture::from(window.fetch_with_request(&http_request))
            .await?
            .dyn_into()?;

        if resp.ok() {
            tracing::info!(status = resp.status(), "lead delivered");
            return Ok(());
        }

        let status = resp.status();
        let body = match resp.text() {
            Ok(promise) => JsFuture::from(promise)
                .await
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_default(),
            Err(_) => String::new(),
        };
        Err(LeadError::Delivery { status, body })
    }
}
