//! Pluggable blob storage for Storyreel.
//!
//! Story records and rendered slides are stored as opaque bytes under
//! relative [`StorageKey`]s. The [`BlobStore`] trait keeps the narration and
//! slide layers independent of where those bytes live.
//!
//! # Features
//!
//! - **Validated keys**: keys cannot be absolute or escape the storage root
//! - **Atomic writes**: the filesystem backend writes a temp file and renames it
//! - **In-memory backend**: for tests and throwaway runs
//!
//! # Example
//!
//! ```rust
//! use storyreel_storage::{BlobStore, FileSystemStorage, StorageKey};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let storage = FileSystemStorage::new("/tmp/storyreel")?;
//! let key: StorageKey = "stories/lost_city.json".parse()?;
//!
//! storage.put(&key, br#"{"title":"Lost City"}"#).await?;
//! let keys = storage.list(&StorageKey::new("stories")?).await?;
//! assert!(keys.contains(&key));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod filesystem;
mod key;
mod memory;
mod store;

pub use filesystem::FileSystemStorage;
pub use key::StorageKey;
pub use memory::InMemoryStorage;
pub use storyreel_error::{StorageError, StorageErrorKind};
pub use store::BlobStore;
