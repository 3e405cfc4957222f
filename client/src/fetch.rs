use std::time::Duration;

use models::{PageQuery, PageResponse};
use reqwest::{Client, StatusCode};
use tracing::debug;
use url::Url;

use crate::error::{ClientError, Result};

/// HTTP client for the asset inventory endpoint.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct AssetClient {
    http: Client,
    base: Url,
}

impl AssetClient {
    /// Create a client for the API rooted at `base_url`.
    ///
    /// No timeout is applied unless one is given.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base = Url::parse(base_url)?;
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self { http: builder.build()?, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// `<base>/assets?filter=..&maxAssets=..&assetOffset=..`
    pub fn assets_url(&self, query: &PageQuery) -> Url {
        let mut url = self.base.clone();
        let path = format!("{}/assets", self.base.path().trim_end_matches('/'));
        url.set_path(&path);
        url.query_pairs_mut()
            .clear()
            .append_pair("filter", &query.filter)
            .append_pair("maxAssets", &query.max_assets.to_string())
            .append_pair("assetOffset", &query.asset_offset.to_string());
        url
    }

    /// Issue a single GET for one page. No retries.
    pub async fn fetch_page(&self, query: &PageQuery) -> Result<PageResponse> {
        let url = self.assets_url(query);
        debug!(offset = query.asset_offset, filter = %query.filter, "fetching assets");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        decode_page(status, &body)
    }
}

/// Turn a raw HTTP response into a page, rejecting non-success statuses.
pub fn decode_page(status: StatusCode, body: &str) -> Result<PageResponse> {
    if !status.is_success() {
        return Err(ClientError::Status(status));
    }
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve exactly one canned HTTP response on a random local port.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
            }
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });
        format!("http://{addr}")
    }

    #[test]
    fn test_assets_url() {
        let client = AssetClient::new("http://localhost:8080", None).unwrap();
        let url = client.assets_url(&PageQuery::for_page("web", 3, 10));
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/assets?filter=web&maxAssets=10&assetOffset=20"
        );
    }

    #[test]
    fn test_assets_url_encodes_filter_and_keeps_prefix() {
        let client = AssetClient::new("http://inventory.local/api/", None).unwrap();
        let url = client.assets_url(&PageQuery::for_page("a&b c", 1, 5));
        assert_eq!(
            url.as_str(),
            "http://inventory.local/api/assets?filter=a%26b+c&maxAssets=5&assetOffset=0"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let err = AssetClient::new("not a url", None).unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_decode_page_status_error() {
        let err = decode_page(StatusCode::INTERNAL_SERVER_ERROR, "{\"error\":\"boom\"}").unwrap_err();
        assert!(matches!(err, ClientError::Status(s) if s == StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[test]
    fn test_decode_page_bad_json() {
        let err = decode_page(StatusCode::OK, "<html>").unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[tokio::test]
    async fn test_fetch_page_ok() {
        let base = serve_once(
            "200 OK",
            r#"{"assets":[{"ID":1,"Host":"alpha","Comment":"","Owner":"ops","IPs":null,"Ports":[{"Port":443}]}],"total_pages":3}"#,
        )
        .await;
        let client = AssetClient::new(&base, Some(Duration::from_secs(5))).unwrap();
        let page = client.fetch_page(&PageQuery::for_page("", 1, 10)).await.unwrap();
        assert_eq!(page.assets.len(), 1);
        assert_eq!(page.assets[0].host, "alpha");
        assert_eq!(page.total_pages, 3);
    }

    #[tokio::test]
    async fn test_fetch_page_server_error() {
        let base = serve_once("500 Internal Server Error", r#"{"error":"db down"}"#).await;
        let client = AssetClient::new(&base, Some(Duration::from_secs(5))).unwrap();
        let err = client.fetch_page(&PageQuery::for_page("", 1, 10)).await.unwrap_err();
        assert!(matches!(err, ClientError::Status(s) if s.as_u16() == 500));
    }
}
