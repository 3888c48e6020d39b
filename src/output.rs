use crate::types::{AlbumRecord, LibraryAlbum, LibraryItem, LibraryPlaylist, PlaylistRecord};
use crate::{LibraryError, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Pixel size substituted into artwork templates for thumbnails.
pub const THUMBNAIL_SIZE: &str = "300";

/// Render an artwork template at thumbnail size. Empty when there is no artwork.
pub fn thumbnail_url(template: Option<&str>) -> String {
    match template {
        Some(url) if !url.is_empty() => url
            .replace("{w}", THUMBNAIL_SIZE)
            .replace("{h}", THUMBNAIL_SIZE),
        _ => String::new(),
    }
}

/// The first four characters of a release date, i.e. the year.
pub fn release_year(release_date: Option<&str>) -> String {
    release_date
        .map(|date| date.chars().take(4).collect())
        .unwrap_or_default()
}

pub fn join_genres(genres: &[String]) -> String {
    genres.join(", ")
}

/// Project a library album onto the flat export shape. Never fails.
pub fn project_album(album: &LibraryAlbum) -> AlbumRecord {
    let attributes = &album.attributes;
    AlbumRecord {
        album_name: attributes.name.clone().unwrap_or_default(),
        album_thumbnail: thumbnail_url(album.artwork_url()),
        artist_name: attributes.artist_name.clone().unwrap_or_default(),
        url: attributes.url.clone().unwrap_or_default(),
        year: release_year(attributes.release_date.as_deref()),
        genres: join_genres(&attributes.genre_names),
    }
}

pub fn project_playlist(playlist: &LibraryPlaylist) -> PlaylistRecord {
    PlaylistRecord {
        playlist_name: playlist.name().to_string(),
        playlist_id: playlist.id.clone(),
    }
}

/// Serialize records as a JSON array with four-space indentation.
///
/// Non-ASCII text is written as-is (UTF-8), not escaped.
pub fn write_json<W: Write, T: Serialize>(writer: W, records: &[T]) -> Result<()> {
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(writer, formatter);
    records.serialize(&mut serializer).map_err(|e| {
        if e.is_io() {
            LibraryError::Io(e.into())
        } else {
            LibraryError::Parse(format!("Failed to serialize records: {e}"))
        }
    })
}

/// Create (or truncate) `path` and write the records to it.
pub fn save_json<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_json(&mut writer, records)?;
    writer.flush()?;

    log::debug!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AlbumAttributes, Artwork, PlaylistAttributes};

    #[test]
    fn test_project_full_album() {
        let album = LibraryAlbum {
            id: "l.1".to_string(),
            attributes: AlbumAttributes {
                name: Some("Yellow Submarine".to_string()),
                artist_name: Some("The Beatles".to_string()),
                artwork: Some(Artwork {
                    url: Some("https://a/img/{w}x{h}bb.jpg".to_string()),
                    ..Default::default()
                }),
                url: Some("https://music.apple.com/album/1".to_string()),
                release_date: Some("1995-06-01".to_string()),
                genre_names: vec!["Rock".to_string(), "Pop".to_string()],
                ..Default::default()
            },
        };

        let record = project_album(&album);

        assert_eq!(
            record,
            AlbumRecord {
                album_name: "Yellow Submarine".to_string(),
                album_thumbnail: "https://a/img/300x300bb.jpg".to_string(),
                artist_name: "The Beatles".to_string(),
                url: "https://music.apple.com/album/1".to_string(),
                year: "1995".to_string(),
                genres: "Rock, Pop".to_string(),
            }
        );
    }

    #[test]
    fn test_project_empty_album_defaults() {
        let record = project_album(&LibraryAlbum::default());
        assert_eq!(record, AlbumRecord::default());
    }

    #[test]
    fn test_release_year() {
        assert_eq!(release_year(Some("1995-06-01")), "1995");
        assert_eq!(release_year(Some("88")), "88");
        assert_eq!(release_year(None), "");
    }

    #[test]
    fn test_project_playlist() {
        let playlist = LibraryPlaylist {
            id: "p.abc".to_string(),
            attributes: PlaylistAttributes {
                name: Some("Road trip".to_string()),
                ..Default::default()
            },
        };

        assert_eq!(
            project_playlist(&playlist),
            PlaylistRecord {
                playlist_name: "Road trip".to_string(),
                playlist_id: "p.abc".to_string(),
            }
        );
    }

    #[test]
    fn test_write_json_indents_and_keeps_unicode() {
        let records = vec![AlbumRecord {
            album_name: "東京".to_string(),
            artist_name: "Björk".to_string(),
            ..Default::default()
        }];

        let mut buffer = Vec::new();
        write_json(&mut buffer, &records).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("[\n    {\n        \"album_name\": \"東京\","));
        assert!(text.contains("\"artist_name\": \"Björk\""));
        assert!(!text.contains("\\u"));
    }

    #[test]
    fn test_write_json_empty() {
        let mut buffer = Vec::new();
        write_json::<_, AlbumRecord>(&mut buffer, &[]).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "[]");
    }
}
