//! Core data types shared across the store, pipeline, and HTTP boundary.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque unique token naming a stored image.
///
/// Freshly minted identifiers are UUID v4, but the type accepts any string
/// so lookups with client-supplied values never fail to parse — an unknown
/// identifier is simply absent from the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageId(String);

impl ImageId {
    /// Mint a new unique identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// View the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ImageId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ImageId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A normalized image held in the store.
///
/// Created on upload, immutable thereafter. The payload is always the
/// canonical encoding (RGB8 re-encoded as JPEG), so it decodes cleanly
/// before any filter runs.
#[derive(Debug, Clone)]
pub struct StoredImage {
    /// Identifier assigned at ingest
    pub id: ImageId,

    /// Canonical JPEG payload
    pub bytes: Vec<u8>,

    /// Pixel width after normalization
    pub width: u32,

    /// Pixel height after normalization
    pub height: u32,
}

/// The transient result of one filter application.
///
/// Returned directly to the caller and never persisted.
#[derive(Debug, Clone)]
pub struct FilterOutcome {
    /// Filtered image, JPEG-encoded
    pub bytes: Vec<u8>,

    /// Display label of the filter that produced it
    pub label: String,
}
