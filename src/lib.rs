pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod headers;
pub mod iterator;
pub mod merge;
pub mod output;
pub mod parsing;
pub mod r#trait;
pub mod types;

pub use client::AppleMusicClient;
pub use config::Config;
pub use error::LibraryError;
pub use export::{
    export_albums, export_albums_with_progress, export_playlists, export_playlists_with_progress,
    ExportSummary,
};
pub use iterator::{
    fetch_all_albums, fetch_all_playlists, AsyncPaginatedIterator, LibraryAlbumsIterator,
    LibraryIterator, LibraryListing, LibraryPlaylistsIterator, PAGE_SIZE,
};
pub use merge::{artwork_key, merge_consecutive_duplicates};
pub use output::{project_album, project_playlist, save_json};
pub use r#trait::LibraryClient;
pub use types::{
    AlbumRecord, LibraryAlbum, LibraryItem, LibraryPage, LibraryPlaylist, PlaylistRecord,
};

#[cfg(feature = "mock")]
pub use r#trait::MockLibraryClient;

pub type Result<T> = std::result::Result<T, LibraryError>;
