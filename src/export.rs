use crate::iterator::{fetch_all, LibraryIterator};
use crate::merge::merge_consecutive_duplicates;
use crate::output::{project_album, project_playlist, save_json};
use crate::r#trait::LibraryClient;
use crate::{AlbumRecord, LibraryAlbum, LibraryPlaylist, PlaylistRecord, Result};
use std::path::{Path, PathBuf};

pub const DEFAULT_ALBUMS_FILE: &str = "albums.json";
pub const DEFAULT_PLAYLISTS_FILE: &str = "playlists.json";

/// Counts reported after an export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Items returned by the API (possibly fewer than the library holds if paging stopped early)
    pub fetched: usize,
    /// Items dropped as consecutive duplicates
    pub removed: usize,
    /// Records written to the output file
    pub written: usize,
    pub path: PathBuf,
}

/// Fetch, de-duplicate, project and save the user's library albums.
///
/// Paging failures do not fail the export: whatever was fetched is still written.
/// Only a failure to write `path` is returned as an error.
///
/// ```rust,no_run
/// # use music_library_export::{export_albums, AppleMusicClient, Config};
/// # use std::path::Path;
/// # tokio_test::block_on(async {
/// let config = Config::from_env()?;
/// let client = AppleMusicClient::new(Box::new(http_client::native::NativeClient::new()), config);
///
/// let summary = export_albums(&client, Path::new("albums.json")).await?;
/// println!("{} albums written, {} duplicates merged", summary.written, summary.removed);
/// # Ok::<(), music_library_export::LibraryError>(())
/// # });
/// ```
pub async fn export_albums<C: LibraryClient + ?Sized>(
    client: &C,
    path: &Path,
) -> Result<ExportSummary> {
    export_albums_with_progress(client, path, |_| {}).await
}

/// Like [`export_albums`], calling `on_page` with the running album count after each page.
pub async fn export_albums_with_progress<C: LibraryClient + ?Sized>(
    client: &C,
    path: &Path,
    on_page: impl FnMut(usize),
) -> Result<ExportSummary> {
    let mut albums_iter = LibraryIterator::<_, LibraryAlbum>::new(client).with_progress(on_page);
    let albums = fetch_all(&mut albums_iter).await;
    let fetched = albums.len();

    let (merged, removed) = merge_consecutive_duplicates(albums);
    log::info!(
        "Original albums: {fetched}, after merge: {}, duplicates removed: {removed}",
        merged.len()
    );

    let records: Vec<AlbumRecord> = merged.iter().map(project_album).collect();
    save_json(path, &records)?;
    log::info!("Saved {} albums to {}", records.len(), path.display());

    Ok(ExportSummary {
        fetched,
        removed,
        written: records.len(),
        path: path.to_path_buf(),
    })
}

/// Fetch, project and save the user's library playlists.
pub async fn export_playlists<C: LibraryClient + ?Sized>(
    client: &C,
    path: &Path,
) -> Result<ExportSummary> {
    export_playlists_with_progress(client, path, |_| {}).await
}

/// Like [`export_playlists`], with a per-page progress callback.
pub async fn export_playlists_with_progress<C: LibraryClient + ?Sized>(
    client: &C,
    path: &Path,
    on_page: impl FnMut(usize),
) -> Result<ExportSummary> {
    let mut playlists_iter =
        LibraryIterator::<_, LibraryPlaylist>::new(client).with_progress(on_page);
    let playlists = fetch_all(&mut playlists_iter).await;

    let records: Vec<PlaylistRecord> = playlists.iter().map(project_playlist).collect();
    save_json(path, &records)?;
    log::info!("Saved {} playlists to {}", records.len(), path.display());

    Ok(ExportSummary {
        fetched: playlists.len(),
        removed: 0,
        written: records.len(),
        path: path.to_path_buf(),
    })
}
