// src/core/net.rs
// Blocking HTTP GET for catalogue pages.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::Url;

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::error::ScrapeError;

pub fn client() -> Result<Client, ScrapeError> {
    Client::builder()
        .user_agent(USER_AGENT)
        .connect_timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .build()
        .map_err(|source| ScrapeError::Http { url: s!(), source })
}

/// GET `url` and return the body as text. Non-2xx is an error.
pub fn http_get(client: &Client, url: &Url) -> Result<String, ScrapeError> {
    let wrap = |source: reqwest::Error| ScrapeError::Http { url: url.to_string(), source };
    let resp = client.get(url.clone()).send().map_err(wrap)?;

    let status = resp.status();
    if !status.is_success() {
        return Err(ScrapeError::Status { url: url.to_string(), status: status.as_u16() });
    }
    resp.text().map_err(wrap)
}

pub fn parse_url(text: &str) -> Result<Url, ScrapeError> {
    Url::parse(text.trim()).map_err(|e| ScrapeError::BadUrl { url: s!(text), reason: e.to_string() })
}

/// Resolve an href found on `base` (relative or absolute).
pub fn resolve(base: &Url, href: &str) -> Result<Url, ScrapeError> {
    base.join(href.trim()).map_err(|e| ScrapeError::BadUrl { url: s!(href), reason: e.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_next_links() {
        let root = parse_url("https://books.toscrape.com/").unwrap();
        let p2 = resolve(&root, "catalogue/page-2.html").unwrap();
        assert_eq!(p2.as_str(), "https://books.toscrape.com/catalogue/page-2.html");
        let p3 = resolve(&p2, "page-3.html").unwrap();
        assert_eq!(p3.as_str(), "https://books.toscrape.com/catalogue/page-3.html");
        assert!(parse_url("not a url").is_err());
    }
}
