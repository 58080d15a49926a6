//! HTTP Transport
//!
//! `Transport` is the seam between the catalog client and the network.
//! `FetchTransport` uses the browser's `window.fetch`.

use async_trait::async_trait;
use serde_json::Value;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::error::{FetchError, FetchResult};

/// Issues a GET and returns the parsed JSON body.
///
/// Futures are `?Send`: everything runs on the browser's single thread.
#[async_trait(?Send)]
pub trait Transport {
    async fn get_json(&self, url: &str) -> FetchResult<Value>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn get_json(&self, url: &str) -> FetchResult<Value> {
        log::debug!("GET {}", url);
        let window = web_sys::window().ok_or_else(|| FetchError::Js("no window".to_string()))?;

        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::Cors);
        let request = Request::new_with_str_and_init(url, &opts).map_err(FetchError::from_js)?;
        request
            .headers()
            .set("Accept", "application/json")
            .map_err(FetchError::from_js)?;

        let response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| FetchError::Network(format!("{}: {:?}", url, e)))?;
        let response: Response = response.dyn_into().map_err(FetchError::from_js)?;

        if !response.ok() {
            return Err(FetchError::Status {
                status: response.status(),
                url: url.to_string(),
            });
        }

        let text = JsFuture::from(response.text().map_err(FetchError::from_js)?)
            .await
            .map_err(FetchError::from_js)?;
        let text = text
            .as_string()
            .ok_or_else(|| FetchError::Decode(format!("non-text body from {}", url)))?;
        Ok(serde_json::from_str(&text)?)
    }
}
