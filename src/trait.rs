use crate::{LibraryAlbum, LibraryPage, LibraryPlaylist, Result};
use async_trait::async_trait;

/// Trait for library API operations that can be mocked for testing.
///
/// The fetcher only ever needs "give me page N of this listing", so that is all
/// this trait exposes. [`AppleMusicClient`](crate::AppleMusicClient) implements it
/// over HTTP; tests supply in-memory implementations.
///
/// # Mocking Support
///
/// When the `mock` feature is enabled, this crate provides `MockLibraryClient`
/// that implements this trait using the `mockall` library.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait(?Send)]
pub trait LibraryClient {
    /// Fetch one page of albums saved in the user's library.
    async fn get_library_albums_page(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<LibraryPage<LibraryAlbum>>;

    /// Fetch one page of playlists saved in the user's library.
    async fn get_library_playlists_page(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<LibraryPage<LibraryPlaylist>>;
}
