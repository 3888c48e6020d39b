//! Collapsing of back-to-back re-additions of the same album.
//!
//! After sorting by `dateAdded`, an album that was removed and re-added (or added
//! once per edition) shows up as a run of adjacent entries sharing the same cover.
//! Only such adjacent runs are merged; identical covers further apart are kept.

use crate::types::{LibraryAlbum, LibraryItem};
use regex::Regex;
use std::sync::OnceLock;

fn size_token() -> &'static Regex {
    static SIZE_TOKEN: OnceLock<Regex> = OnceLock::new();
    SIZE_TOKEN.get_or_init(|| {
        Regex::new(r"(?:\{w\}|\d+)x(?:\{h\}|\d+)").expect("size token pattern is valid")
    })
}

/// Normalize an artwork URL into an identity key.
///
/// The `{w}`/`{h}` placeholders are removed, as is the `<W>x<H>` size token of the
/// last path segment, so a template URL and an already-sized rendition of the same
/// image produce the same key. Empty input gives an empty key.
pub fn artwork_key(url: Option<&str>) -> String {
    let url = match url.map(str::trim) {
        Some(url) if !url.is_empty() => url,
        _ => return String::new(),
    };

    let (prefix, file) = match url.rfind('/') {
        Some(idx) => url.split_at(idx + 1),
        None => ("", url),
    };
    let file = size_token().replace_all(file, "");

    format!("{prefix}{file}")
        .replace("{w}", "")
        .replace("{h}", "")
}

fn album_artwork_key(album: &LibraryAlbum) -> String {
    artwork_key(album.artwork_url())
}

/// Merge runs of adjacent albums that share a non-empty artwork key.
///
/// The first album of each run (the most recently added one, given a newest-first
/// sort) is kept. Returns the surviving albums in their original relative order and
/// the number of albums dropped.
pub fn merge_consecutive_duplicates(albums: Vec<LibraryAlbum>) -> (Vec<LibraryAlbum>, usize) {
    let mut merged: Vec<LibraryAlbum> = Vec::with_capacity(albums.len());
    let mut removed = 0;

    let mut iter = albums.into_iter().peekable();
    while let Some(current) = iter.next() {
        let key = album_artwork_key(&current);
        let mut run_removed = 0;

        if !key.is_empty() {
            while iter
                .next_if(|next| album_artwork_key(next) == key)
                .is_some()
            {
                run_removed += 1;
            }
        }

        if run_removed > 0 {
            log::info!(
                "Merged duplicate album \"{}\" - {} (removed {} duplicates)",
                current.name(),
                current.attributes.artist_name.as_deref().unwrap_or_default(),
                run_removed
            );
        }

        removed += run_removed;
        merged.push(current);
    }

    (merged, removed)
}
