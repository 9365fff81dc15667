//! In-memory image storage.
//!
//! The store is deliberately behind a trait so the serving layer decides
//! lifetime and concurrency policy. The default `MemoryStore` keeps every
//! upload for the life of the process with no eviction; a bounded or
//! evicting implementation is a drop-in replacement.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::types::{ImageId, StoredImage};

/// Keyed storage for normalized uploads.
///
/// Implementations must be safe to share across request handlers.
pub trait ImageStore: Send + Sync {
    /// Insert an image under its identifier. Identifiers are minted fresh
    /// at ingest, so collisions are not expected; a duplicate insert
    /// replaces the previous entry.
    fn put(&self, image: StoredImage);

    /// Fetch a copy of the image under `id`, if present.
    fn get(&self, id: &ImageId) -> Option<StoredImage>;

    /// Number of stored images.
    fn len(&self) -> usize;

    /// Whether the store holds no images.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Process-lifetime in-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    images: RwLock<HashMap<ImageId, StoredImage>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ImageStore for MemoryStore {
    fn put(&self, image: StoredImage) {
        let mut images = self.images.write().unwrap_or_else(|e| e.into_inner());
        images.insert(image.id.clone(), image);
    }

    fn get(&self, id: &ImageId) -> Option<StoredImage> {
        let images = self.images.read().unwrap_or_else(|e| e.into_inner());
        images.get(id).cloned()
    }

    fn len(&self) -> usize {
        let images = self.images.read().unwrap_or_else(|e| e.into_inner());
        images.len()
    }
}
