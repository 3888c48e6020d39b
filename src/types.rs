//! Data types for library items and export records.
//!
//! The `Library*` types mirror the JSON returned by the `/v1/me/library` endpoints.
//! Every field is read leniently: a missing key, a `null`, or a value of the wrong
//! type all fall back to the field's default, so one odd record never rejects the
//! page it arrived in. The projection layer turns absent values into empty strings.
//! The `*Record` types are the flat shapes written to the export files.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ================================================================================================
// LENIENT FIELD DECODING
// ================================================================================================

/// Decode a field, using its default when the JSON value has an unexpected shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Decode a list of strings, skipping non-string entries.
fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(values) => values
            .into_iter()
            .filter_map(|value| match value {
                Value::String(text) => Some(text),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// Decode a listing's `data` array, dropping entries that are not records at all.
fn lenient_items<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let values = match Value::deserialize(deserializer)? {
        Value::Array(values) => values,
        _ => return Ok(Vec::new()),
    };

    Ok(values
        .into_iter()
        .filter_map(|value| match T::deserialize(value) {
            Ok(item) => Some(item),
            Err(e) => {
                log::warn!("Skipping unreadable library item: {e}");
                None
            }
        })
        .collect())
}

// ================================================================================================
// RAW LIBRARY ITEMS
// ================================================================================================

/// Artwork reference as returned by the API.
///
/// `url` is a template such as `https://is1-ssl.mzstatic.com/image/thumb/.../{w}x{h}bb.jpg`
/// where `{w}` and `{h}` must be substituted with the desired pixel size.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Artwork {
    #[serde(default, deserialize_with = "lenient")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub width: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub height: Option<u32>,
}

/// Attributes of an album saved in the user's library.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AlbumAttributes {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub artist_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub artwork: Option<Artwork>,
    /// Catalog URL of the album, when the library item is matched to the catalog
    #[serde(default, deserialize_with = "lenient")]
    pub url: Option<String>,
    /// `YYYY-MM-DD` (sometimes only `YYYY`)
    #[serde(default, deserialize_with = "lenient")]
    pub release_date: Option<String>,
    /// ISO-8601 timestamp of when the album was added to the library
    #[serde(default, deserialize_with = "lenient")]
    pub date_added: Option<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub genre_names: Vec<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub track_count: Option<u32>,
}

/// An album from `/v1/me/library/albums`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryAlbum {
    /// Library identifier, starts with `l.`
    #[serde(default, deserialize_with = "lenient")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient")]
    pub attributes: AlbumAttributes,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaylistDescription {
    #[serde(default, deserialize_with = "lenient")]
    pub standard: Option<String>,
}

/// Attributes of a playlist saved in the user's library.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlaylistAttributes {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<PlaylistDescription>,
    #[serde(default, deserialize_with = "lenient")]
    pub artwork: Option<Artwork>,
    #[serde(default, deserialize_with = "lenient")]
    pub date_added: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub can_edit: bool,
}

/// A playlist from `/v1/me/library/playlists`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryPlaylist {
    /// Library identifier, starts with `p.`
    #[serde(default, deserialize_with = "lenient")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient")]
    pub attributes: PlaylistAttributes,
}

/// Common accessors the fetcher and merger need from any library item.
pub trait LibraryItem {
    /// Raw `dateAdded` attribute, if present.
    fn date_added(&self) -> Option<&str>;

    /// Artwork template URL, if present.
    fn artwork_url(&self) -> Option<&str>;

    /// Display name of the item.
    fn name(&self) -> &str;
}

impl LibraryItem for LibraryAlbum {
    fn date_added(&self) -> Option<&str> {
        self.attributes.date_added.as_deref()
    }

    fn artwork_url(&self) -> Option<&str> {
        self.attributes
            .artwork
            .as_ref()
            .and_then(|artwork| artwork.url.as_deref())
    }

    fn name(&self) -> &str {
        self.attributes.name.as_deref().unwrap_or_default()
    }
}

impl LibraryItem for LibraryPlaylist {
    fn date_added(&self) -> Option<&str> {
        self.attributes.date_added.as_deref()
    }

    fn artwork_url(&self) -> Option<&str> {
        self.attributes
            .artwork
            .as_ref()
            .and_then(|artwork| artwork.url.as_deref())
    }

    fn name(&self) -> &str {
        self.attributes.name.as_deref().unwrap_or_default()
    }
}

/// Envelope of a library listing response: `{ "data": [...], "next": "..." }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct LibraryResponse<T> {
    #[serde(default = "Vec::new", deserialize_with = "lenient_items")]
    pub data: Vec<T>,
    #[serde(default, deserialize_with = "lenient")]
    pub next: Option<String>,
}

/// One page of library items together with the paging parameters that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryPage<T> {
    pub items: Vec<T>,
    pub offset: u32,
    pub limit: u32,
}

impl<T> LibraryPage<T> {
    pub fn new(items: Vec<T>, offset: u32, limit: u32) -> Self {
        Self {
            items,
            offset,
            limit,
        }
    }

    /// A full page means there may be more; a short or empty page ends the listing.
    pub fn has_next_page(&self) -> bool {
        !self.items.is_empty() && self.items.len() == self.limit as usize
    }
}

// ================================================================================================
// EXPORT RECORDS
// ================================================================================================

/// Flat album shape written to `albums.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumRecord {
    pub album_name: String,
    pub album_thumbnail: String,
    pub artist_name: String,
    pub url: String,
    pub year: String,
    pub genres: String,
}

/// Flat playlist shape written to `playlists.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistRecord {
    pub playlist_name: String,
    pub playlist_id: String,
}

impl std::fmt::Display for AlbumRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.artist_name, self.album_name)?;
        if !self.year.is_empty() {
            write!(f, " ({})", self.year)?;
        }
        Ok(())
    }
}
