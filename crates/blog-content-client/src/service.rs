//! Blog access: manifest listing, metadata lookup and post assembly

use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::cache::MetadataCache;
use crate::error::{BlogError, Result};
use crate::store::ContentStore;
use crate::types::{BlogMetadata, BlogPost};

/// Prefix under which the manifest and all post bodies live
pub const CONTENT_ROOT: &str = "blogging/";
/// Manifest file name inside [`CONTENT_ROOT`]
pub const MANIFEST_FILE: &str = "blogs.json";

/// Path of a post body for a manifest `location`.
///
/// Locations are relative to [`CONTENT_ROOT`]; one starting with `/` is
/// rooted at the host and returned unchanged.
pub fn content_path(location: &str) -> String {
    if location.starts_with('/') {
        location.to_string()
    } else {
        format!("{}{}", CONTENT_ROOT, location)
    }
}

/// Read access to the blog, with the manifest cached for the lifetime of
/// the service.
///
/// The service only issues relative requests; base address, headers and
/// timeouts belong to the injected [`ContentStore`].
pub struct BlogService<S> {
    store: S,
    cache: MetadataCache,
}

impl<S: ContentStore> BlogService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            cache: MetadataCache::new(),
        }
    }

    /// All metadata records, in manifest order.
    ///
    /// The first successful call fetches the manifest; every later call
    /// returns the same list without I/O, even if the manifest changes.
    pub async fn list_all_metadata(&self) -> Result<Arc<[BlogMetadata]>> {
        self.cache
            .get_or_try_populate(|| self.fetch_manifest())
            .await
    }

    /// The first record whose id matches, or `None`
    pub async fn get_metadata_by_id(&self, id: Uuid) -> Result<Option<BlogMetadata>> {
        let entries = self.list_all_metadata().await?;
        Ok(entries.iter().find(|meta| meta.id == id).cloned())
    }

    /// Metadata plus body for `id`.
    ///
    /// `Ok(None)` means no such id. A failed body fetch is reported as
    /// [`BlogError::PostFetch`]; manifest failures propagate as-is.
    pub async fn try_get_post_by_id(&self, id: Uuid) -> Result<Option<BlogPost>> {
        let Some(metadata) = self.get_metadata_by_id(id).await? else {
            debug!(%id, "No blog post with this id");
            return Ok(None);
        };

        let path = content_path(&metadata.location);
        match self.store.get_text(&path).await {
            Ok(body) => {
                debug!(%id, path = %path, size = body.len(), "Loaded blog post");
                Ok(Some(BlogPost::new(body, metadata)))
            }
            Err(err) => Err(BlogError::PostFetch {
                id,
                location: metadata.location,
                source: Box::new(err),
            }),
        }
    }

    /// Metadata plus body for `id`, or `None` if it cannot be produced.
    ///
    /// Unknown ids and fetch failures both give `None`; failures are logged.
    /// Use [`Self::try_get_post_by_id`] to tell them apart.
    pub async fn get_post_by_id(&self, id: Uuid) -> Option<BlogPost> {
        match self.try_get_post_by_id(id).await {
            Ok(post) => post,
            Err(err) => {
                warn!(%id, error = %err, "Failed to load blog post");
                None
            }
        }
    }

    pub async fn is_cache_populated(&self) -> bool {
        self.cache.is_populated().await
    }

    async fn fetch_manifest(&self) -> Result<Vec<BlogMetadata>> {
        let path = format!("{}{}", CONTENT_ROOT, MANIFEST_FILE);
        let body = self.store.get_text(&path).await?;

        let entries = parse_manifest(&body).map_err(|err| {
            warn!(path = %path, error = %err, "Malformed blog manifest");
            err
        })?;

        info!(count = entries.len(), "Loaded blog manifest");
        Ok(entries)
    }
}

/// An empty body or a JSON `null` is an empty manifest
fn parse_manifest(body: &str) -> Result<Vec<BlogMetadata>> {
    let body = body.trim_start_matches('\u{feff}').trim();
    if body.is_empty() {
        return Ok(Vec::new());
    }

    let entries: Option<Vec<BlogMetadata>> = serde_json::from_str(body)?;
    Ok(entries.unwrap_or_default())
}
