//! Document fetching.
//!
//! Wraps `fetch` for the site's static JSON documents. Requests use
//! `cache: "no-store"` so edits to the data files show up on the next load.

use async_trait::async_trait;
use ks_site_core::{DocumentSource, SiteError};
use serde_json::Value;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCache, RequestInit, Response};

/// `DocumentSource` backed by the browser's `fetch`, relative to the page.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchSource;

#[async_trait(?Send)]
impl DocumentSource for FetchSource {
    async fn fetch_document(&self, path: &str) -> Result<Value, SiteError> {
        let text = fetch_text(path).await?;
        serde_json::from_str(&text).map_err(|e| SiteError::parse(path, e))
    }
}

/// GET `url`, bypassing the HTTP cache, and return the body of a 2xx response.
pub async fn fetch_text(url: &str) -> Result<String, SiteError> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_cache(RequestCache::NoStore);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| SiteError::transport(url, format!("{:?}", e)))?;

    let window = gloo_utils::window();
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| SiteError::transport(url, format!("fetch error: {:?}", e)))?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| SiteError::transport(url, "response is not a Response"))?;

    if !resp.ok() {
        return Err(SiteError::Status {
            path: url.to_owned(),
            status: resp.status(),
        });
    }

    let body = resp
        .text()
        .map_err(|e| SiteError::transport(url, format!("{:?}", e)))?;
    let text = JsFuture::from(body)
        .await
        .map_err(|e| SiteError::transport(url, format!("text error: {:?}", e)))?;

    Ok(text.as_string().unwrap_or_default())
}
