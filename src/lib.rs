// src/lib.rs

pub mod c_api;
pub mod clipboard;
pub mod config;
pub mod core;
pub mod error;
pub mod export;
pub mod logging;
pub mod session;
pub mod view;

pub use crate::core::engine::KeywordGenerator;
pub use crate::core::types::{KeywordClass, ScoredKeyword, SortOrder};
pub use crate::core::wordlists::WordLists;
pub use crate::error::{KeywordError, Result};
pub use crate::session::Session;
