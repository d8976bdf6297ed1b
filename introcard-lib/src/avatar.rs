//! Avatar images and the capability that decodes them.
//!
//! The image picker hands back an [`AvatarSelection`]. Turning it into pixels is an
//! asynchronous job behind the [`ImageDecoder`] trait so callers (and tests) can supply
//! their own. [`FileDecoder`] reads the file and decodes it off the async runtime.

use std::{
    fmt::{self, Debug, Formatter},
    future::Future,
    path::PathBuf,
};

use bytes::Bytes;
use derive_more::From;
use getset::{CopyGetters, Getters};
use tokio::task::spawn_blocking;
use tracing::debug;

use crate::Result;

/// A decoded image in straight RGBA8, row major.
#[derive(Clone, PartialEq, Eq, Getters, CopyGetters)]
pub struct Avatar {
    #[getset(get_copy = "pub")]
    width: u32,
    #[getset(get_copy = "pub")]
    height: u32,
    #[getset(get = "pub")]
    pixels: Bytes,
}

impl Avatar {
    /// Decode an encoded image (PNG, JPEG, GIF, WebP or BMP).
    pub fn from_encoded(bytes: &[u8]) -> Result<Self> {
        let rgba = image::load_from_memory(bytes)?.to_rgba8();
        let (width, height) = rgba.dimensions();

        Ok(Self {
            width,
            height,
            pixels: Bytes::from(rgba.into_raw()),
        })
    }
}

impl Debug for Avatar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Avatar")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.pixels.len())
            .finish()
    }
}

/// What the image picker resolved to, before decoding.
#[derive(Debug, Clone, PartialEq, Eq, From)]
pub struct AvatarSelection {
    path: PathBuf,
}

impl AvatarSelection {
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

/// Ticket for one decode started by [`Form::select_avatar`](crate::Form::select_avatar).
///
/// Tickets increase with every selection, so picking the same file twice still gives
/// two distinct requests.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AvatarRequest(u64);

impl AvatarRequest {
    pub(crate) fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Resolves a picker selection into an [`Avatar`].
pub trait ImageDecoder {
    fn decode(
        &self,
        selection: AvatarSelection,
    ) -> impl Future<Output = Result<Avatar>> + Send + 'static;
}

/// Decodes the selected file from disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileDecoder;

impl ImageDecoder for FileDecoder {
    fn decode(
        &self,
        selection: AvatarSelection,
    ) -> impl Future<Output = Result<Avatar>> + Send + 'static {
        async move {
            let bytes = tokio::fs::read(&selection.path).await?;
            let avatar = spawn_blocking(move || Avatar::from_encoded(&bytes)).await??;

            debug!(
                "Decoded avatar {} ({}x{})",
                selection.path.display(),
                avatar.width,
                avatar.height
            );

            Ok(avatar)
        }
    }
}
