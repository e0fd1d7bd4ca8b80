//! Blog Content Client
//!
//! Reads a static blog content store over HTTP: a JSON manifest of post
//! metadata at `blogging/blogs.json` and one markdown body per post at
//! `blogging/{location}`. The manifest is fetched once per [`BlogService`]
//! and kept in memory; post bodies are fetched on every request.
//!
//! # Example
//!
//! ```no_run
//! use blog_content_client::{BlogService, HttpContentStore, StoreConfig};
//!
//! # async fn example() -> Result<(), blog_content_client::BlogError> {
//! let store = HttpContentStore::from_config(&StoreConfig::from_env())?;
//! let blog = BlogService::new(store);
//!
//! for meta in blog.list_all_metadata().await?.iter() {
//!     println!("{} by {}", meta.title, meta.author);
//! }
//!
//! if let Some(first) = blog.list_all_metadata().await?.first() {
//!     if let Some(post) = blog.get_post_by_id(first.id).await {
//!         println!("{}", post.body);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod cache;
pub mod config;
mod error;
mod service;
pub mod store;
mod types;

pub use cache::MetadataCache;
pub use config::StoreConfig;
pub use error::{BlogError, Result};
pub use service::{content_path, BlogService, CONTENT_ROOT, MANIFEST_FILE};
pub use store::{ContentStore, HttpContentStore};
pub use types::{BlogMetadata, BlogPost};
