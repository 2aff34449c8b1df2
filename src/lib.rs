//! Load a text resource over HTTP and await its contents.

pub mod cache;
pub mod config;
pub mod error;
pub mod record;
pub mod repository;
pub mod use_case;

pub use crate::config::LoaderConfig;
pub use crate::error::Error;
pub use crate::use_case::loader::Loader;
