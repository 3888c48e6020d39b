use crate::config::Config;
use crate::headers;
use crate::r#trait::LibraryClient;
use crate::types::LibraryResponse;
use crate::{LibraryAlbum, LibraryError, LibraryPage, LibraryPlaylist, Result};
use async_trait::async_trait;
use http_client::{HttpClient, Request};
use http_types::{Method, Url};
use serde::de::DeserializeOwned;

const LIBRARY_ALBUMS_PATH: &str = "/v1/me/library/albums";
const LIBRARY_PLAYLISTS_PATH: &str = "/v1/me/library/playlists";

/// Build the URL of a library listing page.
pub fn listing_url(base_url: &str, path: &str, limit: u32, offset: u32) -> Result<Url> {
    let mut url = Url::parse(&format!("{base_url}{path}"))
        .map_err(|e| LibraryError::Http(format!("Invalid URL: {e}")))?;
    url.query_pairs_mut()
        .append_pair("limit", &limit.to_string())
        .append_pair("offset", &offset.to_string());
    Ok(url)
}

/// Client for the Apple Music library API.
///
/// Holds the transport and the tokens for one export run. Every request is a
/// read-only GET against a `/v1/me/library` listing.
///
/// # Examples
///
/// ```rust,no_run
/// use music_library_export::{AppleMusicClient, Config, LibraryClient, Result};
///
/// #[tokio::main]
/// async fn main() -> Result<()> {
///     let config = Config::from_env()?;
///     let http_client = http_client::native::NativeClient::new();
///     let client = AppleMusicClient::new(Box::new(http_client), config);
///
///     let page = client.get_library_albums_page(100, 0).await?;
///     println!("First page holds {} albums", page.items.len());
///     Ok(())
/// }
/// ```
pub struct AppleMusicClient {
    client: Box<dyn HttpClient>,
    config: Config,
}

impl AppleMusicClient {
    /// Create a new [`AppleMusicClient`].
    ///
    /// # Arguments
    ///
    /// * `client` - Any HTTP client implementation that implements [`HttpClient`]
    /// * `config` - Tokens and API host; see [`Config::from_env`]
    pub fn new(client: Box<dyn HttpClient>, config: Config) -> Self {
        Self { client, config }
    }

    /// Fetch one listing page and decode its `data` array.
    async fn get_listing<T: DeserializeOwned>(
        &self,
        path: &str,
        limit: u32,
        offset: u32,
    ) -> Result<LibraryPage<T>> {
        let url = listing_url(&self.config.base_url, path, limit, offset)?;
        let body = self.get(url).await?;

        let response: LibraryResponse<T> = serde_json::from_str(&body)
            .map_err(|e| LibraryError::Parse(format!("Invalid JSON from {path}: {e}")))?;

        log::debug!(
            "{path}: received {} items at offset {offset} (next: {:?})",
            response.data.len(),
            response.next
        );

        Ok(LibraryPage::new(response.data, offset, limit))
    }

    /// Make an authenticated GET request and return the body of a successful response.
    async fn get(&self, url: Url) -> Result<String> {
        log::debug!("GET {url}");

        let mut request = Request::new(Method::Get, url);
        headers::add_auth_headers(&mut request, &self.config);

        let mut response = self
            .client
            .send(request)
            .await
            .map_err(|e| LibraryError::Http(e.to_string()))?;

        let status = response.status();
        let body = response
            .body_string()
            .await
            .map_err(|e| LibraryError::Http(e.to_string()))?;

        if status.is_success() {
            return Ok(body);
        }

        let code: u16 = status.into();
        log::debug!("Request failed with status {code}: {body}");

        match code {
            401 | 403 => Err(LibraryError::Auth(format!(
                "{} {}",
                code,
                status.canonical_reason()
            ))),
            _ => Err(LibraryError::Api {
                status: code,
                message: if body.is_empty() {
                    status.canonical_reason().to_string()
                } else {
                    body
                },
            }),
        }
    }
}

#[async_trait(?Send)]
impl LibraryClient for AppleMusicClient {
    async fn get_library_albums_page(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<LibraryPage<LibraryAlbum>> {
        self.get_listing(LIBRARY_ALBUMS_PATH, limit, offset).await
    }

    async fn get_library_playlists_page(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<LibraryPage<LibraryPlaylist>> {
        self.get_listing(LIBRARY_PLAYLISTS_PATH, limit, offset).await
    }
}
