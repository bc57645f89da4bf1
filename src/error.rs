//! The store's single failure mode.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, KVError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum KVError {
    /// Get, Update and Delete need the key to be present.
    #[error("the key doesn't exist")]
    NotFound,
}
