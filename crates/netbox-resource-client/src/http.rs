//! HTTP client for the NetBox REST API

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use crate::error::{ClientError, Result};
use crate::models::{Device, Interface, Page, PaginatedList};
use crate::query::{DeviceQuery, InterfaceQuery};
use crate::traits::InventorySource;

const DEVICES_PATH: &str = "api/dcim/devices/";
const INTERFACES_PATH: &str = "api/dcim/interfaces/";

/// HTTP client for a single NetBox instance
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: Url,
    authorization: Option<HeaderValue>,
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    /// Create a new HTTP client
    ///
    /// An empty token sends unauthenticated requests.
    ///
    /// # Errors
    /// Returns an error if the base URL is invalid or the token is not a
    /// valid header value.
    ///
    /// # Example
    /// ```no_run
    /// use netbox_resource_client::HttpClient;
    ///
    /// let client = HttpClient::new("https://netbox.example.local", "api-token")?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(base_url: impl AsRef<str>, token: &str) -> Result<Self> {
        Self::with_client(base_url, token, Client::new())
    }

    /// Create a new HTTP client with custom `reqwest::Client`
    ///
    /// # Errors
    /// Returns an error if the base URL is invalid or the token is not a
    /// valid header value.
    pub fn with_client(base_url: impl AsRef<str>, token: &str, client: Client) -> Result<Self> {
        let mut base_url = Url::parse(base_url.as_ref())?;
        // Url::join replaces the last segment unless the path ends in '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let authorization = if token.is_empty() {
            None
        } else {
            let mut value = HeaderValue::from_str(&format!("Token {token}"))?;
            value.set_sensitive(true);
            Some(value)
        };

        Ok(Self {
            client,
            base_url,
            authorization,
        })
    }

    /// Build a full URL from an API path
    fn url(&self, path: &str) -> Result<Url> {
        self.base_url.join(path).map_err(ClientError::Url)
    }

    /// Build the URL of one page of a list endpoint
    fn list_url(&self, path: &str, pairs: &[(&'static str, String)], page: Page) -> Result<Url> {
        let mut url = self.url(path)?;
        {
            let mut query = url.query_pairs_mut();
            for (key, value) in pairs {
                query.append_pair(key, value);
            }
            query.append_pair("limit", &page.limit.to_string());
            query.append_pair("offset", &page.offset.to_string());
        }
        Ok(url)
    }

    /// Perform a GET request and deserialize the response
    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let mut request = self.client.get(url).header(ACCEPT, "application/json");
        if let Some(authorization) = &self.authorization {
            request = request.header(AUTHORIZATION, authorization.clone());
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Api { status, message });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl InventorySource for HttpClient {
    #[instrument(skip(self, query), fields(offset = page.offset))]
    async fn list_devices(
        &self,
        query: &DeviceQuery,
        page: Page,
    ) -> Result<PaginatedList<Device>> {
        let url = self.list_url(DEVICES_PATH, &query.query_pairs(), page)?;
        debug!(url = %url, "listing devices");
        self.get(url).await
    }

    #[instrument(skip(self, query), fields(offset = page.offset))]
    async fn list_interfaces(
        &self,
        query: &InterfaceQuery,
        device_id: i32,
        page: Page,
    ) -> Result<PaginatedList<Interface>> {
        let url = self.list_url(INTERFACES_PATH, &query.query_pairs(device_id), page)?;
        debug!(url = %url, "listing interfaces");
        self.get(url).await
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    use super::*;

    #[test]
    fn test_client_creation() {
        let client = HttpClient::new("https://netbox.example.local", "token");
        assert!(client.is_ok());
    }

    #[test]
    fn test_invalid_url() {
        let client = HttpClient::new("not a url", "token");
        assert!(matches!(client, Err(ClientError::Url(_))));
    }

    #[test]
    fn test_invalid_token() {
        let client = HttpClient::new("https://netbox.example.local", "bad\ntoken");
        assert!(matches!(client, Err(ClientError::Token(_))));
    }

    #[test]
    fn test_url_building() {
        let client = HttpClient::new("https://netbox.example.local", "").unwrap();
        let url = client.url(DEVICES_PATH).unwrap();
        assert_eq!(url.as_str(), "https://netbox.example.local/api/dcim/devices/");
    }

    #[test]
    fn test_url_building_keeps_base_path() {
        let client = HttpClient::new("https://example.local/netbox", "").unwrap();
        let url = client.url(INTERFACES_PATH).unwrap();
        assert_eq!(url.as_str(), "https://example.local/netbox/api/dcim/interfaces/");
    }

    #[test]
    fn test_device_list_url() {
        let client = HttpClient::new("https://netbox.example.local", "").unwrap();
        let query = DeviceQuery {
            role: vec!["server".into()],
            name_ic: vec!["srv-".into()],
            ..Default::default()
        };

        let url = client
            .list_url(DEVICES_PATH, &query.query_pairs(), Page::first(25).next())
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://netbox.example.local/api/dcim/devices/?role=server&name__ic=srv-&limit=25&offset=25"
        );
    }

    #[test]
    fn test_interface_list_url() {
        let client = HttpClient::new("https://netbox.example.local", "").unwrap();
        let query = InterfaceQuery {
            enabled: Some(true),
            ..Default::default()
        };

        let url = client
            .list_url(INTERFACES_PATH, &query.query_pairs(123), Page::first(25))
            .unwrap();
        let expected = url.as_str();
        assert!(expected.contains("enabled=true"));
        assert!(expected.contains("device_id=123"));
        assert!(expected.ends_with("limit=25&offset=0"));
    }

    // ------------------------------------------------------------------------
    // Transport against a loopback listener
    // ------------------------------------------------------------------------

    /// Answer one request with a canned response; yields the request head
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut head = Vec::new();
            let mut buf = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let read = stream.read(&mut buf).await.unwrap();
                if read == 0 {
                    break;
                }
                head.extend_from_slice(&buf[..read]);
            }

            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            let _ = stream.shutdown().await;
            String::from_utf8(head).unwrap()
        });

        (base_url, handle)
    }

    fn loopback_client(base_url: &str, token: &str) -> HttpClient {
        let client = Client::builder().no_proxy().build().unwrap();
        HttpClient::with_client(base_url, token, client).unwrap()
    }

    fn header<'a>(head: &'a str, name: &str) -> Option<&'a str> {
        head.lines().find_map(|line| {
            let (key, value) = line.split_once(':')?;
            key.eq_ignore_ascii_case(name).then(|| value.trim())
        })
    }

    const DEVICE_PAGE: &str = r#"{"count":1,"next":null,"previous":null,"results":[{"id":1,"name":"srv-1","role":{"id":8,"slug":"server"},"last_updated":"2023-10-02T00:00:00Z"}]}"#;

    #[tokio::test]
    async fn test_list_devices_sends_token_and_query() {
        let (base_url, server) = serve_once("200 OK", DEVICE_PAGE).await;
        let client = loopback_client(&base_url, "secret-token");
        let query = DeviceQuery {
            role: vec!["server".into()],
            ..Default::default()
        };

        let page = client.list_devices(&query, Page::first(25)).await.unwrap();
        assert_eq!(page.count, 1);
        assert!(!page.has_next());
        assert_eq!(page.results[0].name(), "srv-1");

        let head = server.await.unwrap();
        assert!(head.starts_with("GET /api/dcim/devices/?role=server&limit=25&offset=0 HTTP/1.1\r\n"));
        assert_eq!(header(&head, "authorization"), Some("Token secret-token"));
        assert_eq!(header(&head, "accept"), Some("application/json"));
    }

    #[tokio::test]
    async fn test_empty_token_sends_no_authorization() {
        let body = r#"{"count":0,"next":null,"previous":null,"results":[]}"#;
        let (base_url, server) = serve_once("200 OK", body).await;
        let client = loopback_client(&base_url, "");

        let page = client
            .list_interfaces(&InterfaceQuery::default(), 42, Page::first(25))
            .await
            .unwrap();
        assert!(page.results.is_empty());

        let head = server.await.unwrap();
        assert!(head.starts_with("GET /api/dcim/interfaces/?device_id=42&limit=25&offset=0 "));
        assert_eq!(header(&head, "authorization"), None);
    }

    #[tokio::test]
    async fn test_error_status_maps_to_api_error() {
        let body = r#"{"detail":"Invalid token"}"#;
        let (base_url, server) = serve_once("403 Forbidden", body).await;
        let client = loopback_client(&base_url, "wrong-token");

        let err = client
            .list_devices(&DeviceQuery::default(), Page::first(25))
            .await
            .unwrap_err();
        server.await.unwrap();

        match err {
            ClientError::Api { status, message } => {
                assert_eq!(status, 403);
                assert!(message.contains("Invalid token"));
            }
            other => panic!("expected API error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_undecodable_body_maps_to_json_error() {
        let (base_url, server) = serve_once("200 OK", "<html>not json</html>").await;
        let client = loopback_client(&base_url, "token");

        let err = client
            .list_devices(&DeviceQuery::default(), Page::first(25))
            .await
            .unwrap_err();
        server.await.unwrap();

        assert!(matches!(err, ClientError::Json(_)));
    }
}
