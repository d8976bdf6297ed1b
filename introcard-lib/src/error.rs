use thiserror::Error;

use crate::id::LinkId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Position {position} is out of bounds for a list of {len} social links")]
    PositionOutOfBounds { position: usize, len: usize },
    #[error("No social link with id {0}")]
    UnknownLink(LinkId),
    #[error("$HOME must exist to locate the configuration directory")]
    MissingHome,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("Background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
