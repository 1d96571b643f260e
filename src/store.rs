use futures_util::future::join_all;
use log::{error, warn};

use crate::fetch::{Fetch, FetchError};
use crate::models::Item;
use crate::sections;

/// One content directory: where to fetch from and the category label its
/// items are tagged with.
#[derive(Debug, Clone, Copy)]
pub struct DirSource {
    pub path: &'static str,
    pub label: &'static str,
}

/// Content types that get a session-lifetime cache, because the view
/// toggles re-render them without re-fetching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Food,
    Nightlife,
}

async fn load_one<F: Fetch>(fetch: &F, path: &str, filename: &str, label: &str) -> Option<Item> {
    let file_path = format!("{}/{}", path, filename);
    let value = match fetch.get_json(&file_path).await {
        Ok(v) => v,
        Err(e) => {
            warn!("Failed to load {}: {}", file_path, e);
            return None;
        }
    };
    match serde_json::from_value::<Item>(value) {
        Ok(mut item) => {
            item.source_label = Some(label.to_string());
            Some(item)
        }
        Err(e) => {
            warn!("Skipping {}: {}", file_path, e);
            None
        }
    }
}

/// Load every item listed in `{path}/index.json`, tagged with `label`.
///
/// The item files are fetched concurrently and awaited jointly; the result
/// keeps the index-file order, not completion order. A single bad item file
/// is dropped with a warning and does not fail the directory.
pub async fn load_directory<F: Fetch>(
    fetch: &F,
    path: &str,
    label: &str,
) -> Result<Vec<Item>, FetchError> {
    let index_path = format!("{}/index.json", path);
    let index = fetch.get_json(&index_path).await?;
    let files: Vec<String> = serde_json::from_value(index)
        .map_err(|e| FetchError(format!("{} is not a file list: {}", index_path, e)))?;

    let loaded = join_all(files.iter().map(|name| load_one(fetch, path, name, label))).await;
    Ok(loaded.into_iter().flatten().collect())
}

/// Load the concatenation of several content directories, in order.
///
/// Directories are fetched sequentially relative to each other, which
/// bounds the in-flight requests per content type. A failed directory
/// contributes zero items and never aborts the others.
pub async fn load_directories<F: Fetch>(fetch: &F, sources: &[DirSource]) -> Vec<Item> {
    let mut all = Vec::new();
    for source in sources {
        match load_directory(fetch, source.path, source.label).await {
            Ok(mut items) => all.append(&mut items),
            Err(e) => error!("Error loading from {}: {}", source.path, e),
        }
    }
    all
}

/// Session-scoped owner of the loaded list content.
///
/// Each content type is fetched at most once per session; the `Option` is
/// the loaded flag. Toggle-driven re-renders read the cache through
/// [`ContentService::cached`] and never touch the network.
pub struct ContentService<F> {
    fetch: F,
    food: Option<Vec<Item>>,
    nightlife: Option<Vec<Item>>,
}

impl<F> ContentService<F> {
    pub fn new(fetch: F) -> Self {
        ContentService {
            fetch,
            food: None,
            nightlife: None,
        }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetch
    }

    /// Already-loaded items for a content type, if any.
    pub fn cached(&self, kind: ContentKind) -> Option<&[Item]> {
        match kind {
            ContentKind::Food => self.food.as_deref(),
            ContentKind::Nightlife => self.nightlife.as_deref(),
        }
    }
}

impl<F: Fetch> ContentService<F> {
    /// Items for a content type, loading them on first use.
    pub async fn items(&mut self, kind: ContentKind) -> &[Item] {
        let ContentService {
            fetch,
            food,
            nightlife,
        } = self;
        let slot = match kind {
            ContentKind::Food => food,
            ContentKind::Nightlife => nightlife,
        };
        if slot.is_none() {
            *slot = Some(load_directories(fetch, sections::sources_for(kind)).await);
        }
        slot.as_deref().unwrap_or_default()
    }
}
