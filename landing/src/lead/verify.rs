//! Bot verification with reCAPTCHA v3.
//!
//! The provider script is injected once at startup; it defines
//! `window.grecaptcha` asynchronously, so readiness is checked per submission.

use js_sys::{Function, Object, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::error::LeadError;

const SCRIPT_ID: &str = "recaptcha-v3";
const SCRIPT_URL: &str = "https://www.google.com/recaptcha/api.js";

/// Issues one-time tokens proving the visitor is probably human.
#[allow(async_fn_in_trait)]
pub trait BotVerifier {
    fn is_ready(&self) -> bool;

    /// Token scoped to `action`. Tokens are single use.
    async fn token(&self, action: &str) -> Result<String, LeadError>;
}

#[derive(Debug, Clone, Copy)]
pub struct Recaptcha {
    site_key: &'static str,
}

impl Recaptcha {
    pub fn new(site_key: &'static str) -> Self {
        Self { site_key }
    }

    pub fn script_url(site_key: &str, language: &str) -> String {
        format!("{SCRIPT_URL}?render={site_key}&hl={language}")
    }

    /// Append the provider script to `<head>`. A second call is a no-op.
    pub fn install(site_key: &str, language: &str) -> Result<(), LeadError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| LeadError::Transport("no document".into()))?;

        if document.get_element_by_id(SCRIPT_ID).is_some() {
            return Ok(());
        }

        let script = document
            .create_element("script")?
            .dyn_into::<web_sys::HtmlScriptElement>()
            .map_err(|_| LeadError::Transport("<script> is not an HtmlScriptElement".into()))?;
        script.set_id(SCRIPT_ID);
        script.set_src(&Self::script_url(site_key, language));
        script.set_async(true);
        script.set_defer(true);

        let head = document
            .head()
            .ok_or_else(|| LeadError::Transport("document has no <head>".into()))?;
        head.append_child(&script)?;

        tracing::info!(language, "reCAPTCHA script injected");
        Ok(())
    }

    fn client() -> Option<JsValue> {
        let window = web_sys::window()?;
        Reflect::get(&window, &JsValue::from_str("grecaptcha"))
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
    }

    fn execute_fn(client: &JsValue) -> Option<Function> {
        Reflect::get(client, &JsValue::from_str("execute"))
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok())
    }
}

impl BotVerifier for Recaptcha {
    fn is_ready(&self) -> bool {
        Self::client().as_ref().and_then(Self::execute_fn).is_some()
    }

    async fn token(&self, action: &str) -> Result<String, LeadError> {
        let client = Self::client().ok_or(LeadError::VerifierNotReady)?;
        let execute = Self::execute_fn(&client).ok_or(LeadError::VerifierNotReady)?;

        let options = Object::new();
        Reflect::set(&options, &JsValue::from_str("action"), &JsValue::from_str(action))?;

        let thenable = execute
            .call2(&client, &JsValue::from_str(self.site_key), &options)
            .map_err(|e| LeadError::Verification(js_text(&e)))?;

        // grecaptcha hands back its own thenable; resolve it into a real Promise.
        let token = JsFuture::from(Promise::resolve(&thenable))
            .await
            .map_err(|e| LeadError::Verification(js_text(&e)))?;

        token
            .as_string()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| LeadError::Verification("empty token".into()))
    }
}

fn js_text(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_url_carries_key_and_language() {
        assert_eq!(
            Recaptcha::script_url("site-key", "fr"),
            "https://www.google.com/recaptcha/api.js?render=site-key&hl=fr"
        );
    }
}
