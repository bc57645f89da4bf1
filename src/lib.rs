pub mod capabilities;
pub mod config;
pub mod error;
pub mod http;
pub mod kv_store;

pub use capabilities::{store_things, Deleter, Exister, Getter, Setter, Updater};
pub use config::{ConfigError, Settings};
pub use error::{KVError, Result};
pub use kv_store::KVStore;
