#![allow(dead_code)]
use async_trait::async_trait;
use music_library_export::types::{AlbumAttributes, Artwork, PlaylistAttributes};
use music_library_export::{
    LibraryAlbum, LibraryClient, LibraryError, LibraryPage, LibraryPlaylist, Result,
};
use std::cell::RefCell;
use std::collections::VecDeque;

/// Scripted response for one page request.
pub enum PageScript<T> {
    Items(Vec<T>),
    Fail,
}

/// In-memory [`LibraryClient`] that replays scripted pages and records every request.
pub struct FakeLibraryClient {
    album_pages: RefCell<VecDeque<PageScript<LibraryAlbum>>>,
    playlist_pages: RefCell<VecDeque<PageScript<LibraryPlaylist>>>,
    requests: RefCell<Vec<(&'static str, u32, u32)>>,
}

impl FakeLibraryClient {
    pub fn with_album_pages(pages: Vec<PageScript<LibraryAlbum>>) -> Self {
        Self {
            album_pages: RefCell::new(pages.into()),
            playlist_pages: RefCell::new(VecDeque::new()),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn with_playlist_pages(pages: Vec<PageScript<LibraryPlaylist>>) -> Self {
        Self {
            album_pages: RefCell::new(VecDeque::new()),
            playlist_pages: RefCell::new(pages.into()),
            requests: RefCell::new(Vec::new()),
        }
    }

    /// `(listing, limit, offset)` of every request made so far
    pub fn requests(&self) -> Vec<(&'static str, u32, u32)> {
        self.requests.borrow().clone()
    }

    fn next_page<T>(
        queue: &RefCell<VecDeque<PageScript<T>>>,
        limit: u32,
        offset: u32,
    ) -> Result<LibraryPage<T>> {
        match queue.borrow_mut().pop_front() {
            Some(PageScript::Items(items)) => Ok(LibraryPage::new(items, offset, limit)),
            Some(PageScript::Fail) => Err(LibraryError::Api {
                status: 500,
                message: "Internal Server Error".to_string(),
            }),
            None => Ok(LibraryPage::new(Vec::new(), offset, limit)),
        }
    }
}

#[async_trait(?Send)]
impl LibraryClient for FakeLibraryClient {
    async fn get_library_albums_page(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<LibraryPage<LibraryAlbum>> {
        self.requests.borrow_mut().push(("albums", limit, offset));
        Self::next_page(&self.album_pages, limit, offset)
    }

    async fn get_library_playlists_page(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<LibraryPage<LibraryPlaylist>> {
        self.requests.borrow_mut().push(("playlists", limit, offset));
        Self::next_page(&self.playlist_pages, limit, offset)
    }
}

pub fn album(name: &str, artwork: Option<&str>, date_added: Option<&str>) -> LibraryAlbum {
    LibraryAlbum {
        id: format!("l.{name}"),
        attributes: AlbumAttributes {
            name: Some(name.to_string()),
            artist_name: Some(format!("{name} artist")),
            artwork: artwork.map(|url| Artwork {
                url: Some(url.to_string()),
                ..Default::default()
            }),
            date_added: date_added.map(str::to_string),
            ..Default::default()
        },
    }
}

pub fn playlist(id: &str, name: &str, date_added: Option<&str>) -> LibraryPlaylist {
    LibraryPlaylist {
        id: id.to_string(),
        attributes: PlaylistAttributes {
            name: Some(name.to_string()),
            date_added: date_added.map(str::to_string),
            ..Default::default()
        },
    }
}

/// `count` albums with distinct artwork, dated one minute apart starting at `start_minute`.
pub fn album_page(prefix: &str, count: usize, start_minute: usize) -> Vec<LibraryAlbum> {
    (0..count)
        .map(|i| {
            let minute = start_minute + i;
            let date = format!(
                "2024-01-{:02}T{:02}:{:02}:00Z",
                1 + minute / 1440,
                (minute / 60) % 24,
                minute % 60
            );
            album(
                &format!("{prefix}{i}"),
                Some(&format!("https://art/{prefix}{i}/{{w}}x{{h}}bb.jpg")),
                Some(&date),
            )
        })
        .collect()
}

/// Unique scratch path for an output file.
pub fn scratch_path(test_name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join("music-library-export-tests");
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir.join(format!("{test_name}-{}.json", std::process::id()))
}
