use crate::parsing::sort_by_date_added_desc;
use crate::r#trait::LibraryClient;
use crate::types::LibraryItem;
use crate::{LibraryAlbum, LibraryPage, LibraryPlaylist, Result};

use async_trait::async_trait;

/// Number of items requested per page; the largest value the library endpoints accept.
pub const PAGE_SIZE: u32 = 100;

/// Async iterator trait for paginated library data.
///
/// This trait provides a common interface for iterating over offset-paged listings
/// such as library albums and playlists. Pages are fetched lazily, one request at
/// a time, as the buffered items run out.
#[async_trait(?Send)]
pub trait AsyncPaginatedIterator<T> {
    /// Fetch the next item from the iterator.
    ///
    /// This method automatically handles pagination, fetching new pages as needed.
    /// Returns `None` when there are no more items available.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(item))` - Next item in the sequence
    /// - `Ok(None)` - No more items available
    /// - `Err(...)` - Network or parsing error occurred
    async fn next(&mut self) -> Result<Option<T>>;

    /// Collect all remaining items into a Vec.
    ///
    /// The first failed page request aborts the collection and its error is returned.
    /// See [`collect_partial`](Self::collect_partial) for the lenient variant.
    async fn collect_all(&mut self) -> Result<Vec<T>> {
        let mut items = Vec::new();
        while let Some(item) = self.next().await? {
            items.push(item);
        }
        Ok(items)
    }

    /// Collect all remaining items, stopping quietly at the first failed request.
    ///
    /// Whatever was gathered before the failure is returned; the error itself is
    /// logged and dropped.
    async fn collect_partial(&mut self) -> Vec<T> {
        let mut items = Vec::new();
        loop {
            match self.next().await {
                Ok(Some(item)) => items.push(item),
                Ok(None) => break,
                Err(e) => {
                    log::warn!(
                        "Stopping pagination after {} items: {e}",
                        items.len()
                    );
                    break;
                }
            }
        }
        items
    }

    /// Take up to n items from the iterator.
    ///
    /// # Arguments
    ///
    /// * `n` - Maximum number of items to collect
    async fn take(&mut self, n: usize) -> Result<Vec<T>> {
        let mut items = Vec::new();
        for _ in 0..n {
            match self.next().await? {
                Some(item) => items.push(item),
                None => break,
            }
        }
        Ok(items)
    }

    /// Number of pages fetched so far.
    fn current_page(&self) -> u32;
}

/// Offset bookkeeping for a library iterator.
#[derive(Debug, Clone)]
struct PageCursor {
    limit: u32,
    offset: u32,
    has_more: bool,
    pages_fetched: u32,
    items_fetched: usize,
}

impl PageCursor {
    fn new(limit: u32) -> Self {
        Self {
            limit,
            offset: 0,
            has_more: true,
            pages_fetched: 0,
            items_fetched: 0,
        }
    }

    fn advance<T>(&mut self, page: &LibraryPage<T>) {
        self.has_more = page.has_next_page();
        self.offset += self.limit;
        self.pages_fetched += 1;
        self.items_fetched += page.items.len();
    }
}

/// A kind of library item that has its own paged listing endpoint.
#[async_trait(?Send)]
pub trait LibraryListing: LibraryItem + Sized {
    /// Plural noun used in progress messages, e.g. "albums".
    const KIND: &'static str;

    /// Fetch one page of this listing.
    async fn fetch_page<C: LibraryClient + ?Sized>(
        client: &C,
        limit: u32,
        offset: u32,
    ) -> Result<LibraryPage<Self>>;
}

#[async_trait(?Send)]
impl LibraryListing for LibraryAlbum {
    const KIND: &'static str = "albums";

    async fn fetch_page<C: LibraryClient + ?Sized>(
        client: &C,
        limit: u32,
        offset: u32,
    ) -> Result<LibraryPage<Self>> {
        client.get_library_albums_page(limit, offset).await
    }
}

#[async_trait(?Send)]
impl LibraryListing for LibraryPlaylist {
    const KIND: &'static str = "playlists";

    async fn fetch_page<C: LibraryClient + ?Sized>(
        client: &C,
        limit: u32,
        offset: u32,
    ) -> Result<LibraryPage<Self>> {
        client.get_library_playlists_page(limit, offset).await
    }
}

/// Iterator over one of the user's library listings, in API order.
///
/// An optional progress callback receives the running item count after every page.
pub struct LibraryIterator<'a, C: LibraryClient + ?Sized, T: LibraryListing> {
    client: &'a C,
    cursor: PageCursor,
    buffer: Vec<T>,
    on_page: Option<Box<dyn FnMut(usize) + 'a>>,
}

pub type LibraryAlbumsIterator<'a, C> = LibraryIterator<'a, C, LibraryAlbum>;
pub type LibraryPlaylistsIterator<'a, C> = LibraryIterator<'a, C, LibraryPlaylist>;

#[async_trait(?Send)]
impl<'a, C: LibraryClient + ?Sized, T: LibraryListing> AsyncPaginatedIterator<T>
    for LibraryIterator<'a, C, T>
{
    async fn next(&mut self) -> Result<Option<T>> {
        // If buffer is empty, try to load next page
        if self.buffer.is_empty() {
            if let Some(page) = self.next_page().await? {
                self.buffer = page.items;
                self.buffer.reverse(); // Reverse so we can pop from end efficiently
            }
        }

        Ok(self.buffer.pop())
    }

    fn current_page(&self) -> u32 {
        self.cursor.pages_fetched
    }
}

impl<'a, C: LibraryClient + ?Sized, T: LibraryListing> LibraryIterator<'a, C, T> {
    pub fn new(client: &'a C) -> Self {
        Self::with_page_size(client, PAGE_SIZE)
    }

    pub fn with_page_size(client: &'a C, limit: u32) -> Self {
        Self {
            client,
            cursor: PageCursor::new(limit),
            buffer: Vec::new(),
            on_page: None,
        }
    }

    /// Call `on_page` with the total number of items fetched after each page.
    pub fn with_progress(mut self, on_page: impl FnMut(usize) + 'a) -> Self {
        self.on_page = Some(Box::new(on_page));
        self
    }

    /// Fetch the next page.
    ///
    /// Returns `Ok(None)` once a short or empty page has been seen.
    pub async fn next_page(&mut self) -> Result<Option<LibraryPage<T>>> {
        if !self.cursor.has_more {
            return Ok(None);
        }

        log::debug!(
            "Fetching library {} page {} (offset {})",
            T::KIND,
            self.cursor.pages_fetched + 1,
            self.cursor.offset
        );

        let page = T::fetch_page(self.client, self.cursor.limit, self.cursor.offset).await?;

        self.cursor.advance(&page);
        log::debug!("Fetched {} {} so far", self.cursor.items_fetched, T::KIND);
        if let Some(on_page) = self.on_page.as_mut() {
            on_page(self.cursor.items_fetched);
        }

        Ok(Some(page))
    }
}

/// Drain an iterator with the partial-result policy and sort newest-added first.
pub async fn fetch_all<T, I>(iterator: &mut I) -> Vec<T>
where
    T: LibraryItem,
    I: AsyncPaginatedIterator<T>,
{
    let mut items = iterator.collect_partial().await;
    sort_by_date_added_desc(&mut items);
    items
}

/// Fetch every album in the library, newest-added first.
///
/// A failed page request ends paging early; albums from earlier pages are still returned.
pub async fn fetch_all_albums<C: LibraryClient + ?Sized>(client: &C) -> Vec<LibraryAlbum> {
    fetch_all(&mut LibraryIterator::<_, LibraryAlbum>::new(client)).await
}

/// Fetch every playlist in the library, newest-added first.
pub async fn fetch_all_playlists<C: LibraryClient + ?Sized>(client: &C) -> Vec<LibraryPlaylist> {
    fetch_all(&mut LibraryIterator::<_, LibraryPlaylist>::new(client)).await
}
