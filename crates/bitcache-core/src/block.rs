//! Content blocks: a payload paired with its (possibly lazy) identifier.
//!
//! A block is built from content, from an identifier, or from both. When
//! only content is given, the identifier is computed on first request and
//! published exactly once, even under concurrent first access. A given
//! identifier is trusted as-is and never recomputed.

use bytes::Bytes;
use std::borrow::Cow;
use std::fmt;
use std::sync::OnceLock;
use subtle::ConstantTimeEq;

use crate::algorithm::Algorithm;
use crate::error::{IdError, Result};
use crate::id::Identifier;

/// The default media type for block payloads.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Computes identifiers for block content.
pub trait Identify {
    /// Identify `content`.
    fn identify(&self, content: &[u8]) -> Identifier;
}

impl Identify for Algorithm {
    fn identify(&self, content: &[u8]) -> Identifier {
        Identifier::digest(*self, content)
    }
}

impl<T: Identify + ?Sized> Identify for &T {
    fn identify(&self, content: &[u8]) -> Identifier {
        (**self).identify(content)
    }
}

impl<T: Identify + ?Sized> Identify for std::sync::Arc<T> {
    fn identify(&self, content: &[u8]) -> Identifier {
        (**self).identify(content)
    }
}

/// Descriptive attributes a cache attaches to a block's payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockMetadata {
    /// MIME type of the payload.
    pub media_type: Cow<'static, str>,
    /// Whether the payload is stored compressed.
    pub compressed: bool,
    /// Whether the payload is stored encrypted.
    pub encrypted: bool,
}

impl Default for BlockMetadata {
    fn default() -> Self {
        Self {
            media_type: Cow::Borrowed(OCTET_STREAM),
            compressed: false,
            encrypted: false,
        }
    }
}

/// A payload addressed by its identifier.
pub struct ContentBlock<H: Identify = Algorithm> {
    hasher: H,
    id: OnceLock<Identifier>,
    content: Option<Bytes>,
    metadata: BlockMetadata,
}

impl<H: Identify> ContentBlock<H> {
    /// A block whose identifier is computed from `content` when first needed.
    pub fn new(hasher: H, content: impl Into<Bytes>) -> Self {
        Self {
            hasher,
            id: OnceLock::new(),
            content: Some(content.into()),
            metadata: BlockMetadata::default(),
        }
    }

    /// A block that knows only its identifier.
    pub fn identified(hasher: H, id: Identifier) -> Self {
        Self {
            hasher,
            id: OnceLock::from(id),
            content: None,
            metadata: BlockMetadata::default(),
        }
    }

    /// A block with both an identifier and content.
    ///
    /// The identifier is trusted; see [`ContentBlock::verify`].
    pub fn with_identifier(hasher: H, id: Identifier, content: impl Into<Bytes>) -> Self {
        Self {
            hasher,
            id: OnceLock::from(id),
            content: Some(content.into()),
            metadata: BlockMetadata::default(),
        }
    }

    /// Replace the payload metadata.
    pub fn with_metadata(mut self, metadata: BlockMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// The block's identifier, computing and caching it on first call.
    ///
    /// An identifier-only block always has its identifier set, so the
    /// content is never consulted for it.
    pub fn identifier(&self) -> &Identifier {
        self.id.get_or_init(|| {
            // Constructors guarantee content whenever the id is unset.
            let content = self.content.as_deref().unwrap_or_default();
            let id = self.hasher.identify(content);
            tracing::trace!(id = %id, size = content.len(), "computed block identifier");
            id
        })
    }

    /// Whether the identifier has been given or computed yet.
    pub fn is_identified(&self) -> bool {
        self.id.get().is_some()
    }

    /// Whether the block carries its payload.
    pub fn has_content(&self) -> bool {
        self.content.is_some()
    }

    /// The payload.
    ///
    /// Fails with [`IdError::MissingContent`] on identifier-only blocks.
    pub fn content(&self) -> Result<&Bytes> {
        self.content
            .as_ref()
            .ok_or_else(|| IdError::MissingContent(self.identifier().to_hex()))
    }

    /// Payload length in bytes, with the same failure mode as
    /// [`ContentBlock::content`].
    pub fn size(&self) -> Result<usize> {
        self.content().map(Bytes::len)
    }

    /// Recompute the identifier from the content and compare it, in constant
    /// time, with the one this block carries.
    pub fn verify(&self) -> Result<bool> {
        let content = self.content()?;
        let recomputed = self.hasher.identify(content);
        Ok(recomputed
            .as_bytes()
            .ct_eq(self.identifier().as_bytes())
            .into())
    }

    /// The payload metadata.
    pub fn metadata(&self) -> &BlockMetadata {
        &self.metadata
    }

    /// MIME type of the payload.
    pub fn media_type(&self) -> &str {
        &self.metadata.media_type
    }

    pub fn is_compressed(&self) -> bool {
        self.metadata.compressed
    }

    pub fn is_encrypted(&self) -> bool {
        self.metadata.encrypted
    }
}

impl<H: Identify> fmt::Debug for ContentBlock<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentBlock")
            .field("id", &self.id.get())
            .field("size", &self.content.as_ref().map(Bytes::len))
            .field("metadata", &self.metadata)
            .finish()
    }
}
