// src/core/net.rs
// Single blocking HTTP GET. No retries: a non-2xx status is terminal.

use encoding_rs::Encoding;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, info};

use crate::config::consts::USER_AGENT;
use crate::config::options::ScrapeOptions;
use crate::core::encoding::{decode_body, declared_charset, host_tld};
use crate::error::{Error, Result};

/// A fetched and decoded page.
#[derive(Debug)]
pub struct Page {
    /// Final URL after redirects.
    pub url: String,
    pub status: u16,
    pub encoding: &'static Encoding,
    pub text: String,
}

/// Fetch `opts.url` and return the decoded body.
///
/// This function:
/// 1. Builds a client with the configured timeout and our User-Agent.
/// 2. Sends one GET and checks for a 2xx status.
/// 3. Reads the body as bytes and decodes it by content, not by header.
pub fn fetch_page(opts: &ScrapeOptions) -> Result<Page> {
    let url = opts.url.as_str();
    let transport = |source| Error::Transport { url: url.to_string(), source };

    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(opts.timeout)
        .build()
        .map_err(transport)?;

    info!(url, "fetching page");
    let resp = client.get(url).send().map_err(transport)?;

    let status = resp.status();
    if !status.is_success() {
        return Err(Error::Status { url: url.to_string(), status: status.as_u16() });
    }

    let final_url = resp.url().clone();
    let content_type = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let bytes = resp.bytes().map_err(transport)?;
    debug!(status = status.as_u16(), len = bytes.len(), ?content_type, "response received");

    let declared = content_type.as_deref().and_then(declared_charset);
    let tld = final_url.host_str().and_then(host_tld);
    let (text, encoding) = decode_body(&bytes, declared, tld);
    debug!(encoding = encoding.name(), "body decoded");

    Ok(Page {
        url: final_url.to_string(),
        status: status.as_u16(),
        encoding,
        text,
    })
}
