//! Error types for navmenu
//!
//! Uses `thiserror` for library errors. Menu building itself is infallible;
//! only parent cycles, absurd nesting and definition loading can fail.

use std::path::PathBuf;
use thiserror::Error;

use crate::item::ItemId;

/// Result type alias for navmenu operations
pub type MenuResult<T> = Result<T, MenuError>;

/// Main error type for navmenu operations
#[derive(Error, Debug)]
pub enum MenuError {
    /// An item's parent chain loops back onto itself
    #[error("parent cycle detected at item '{id}'")]
    ParentCycle { id: ItemId },

    /// Parent chain nests deeper than the renderer allows
    #[error("menu tree deeper than {max} levels at item '{id}'")]
    TooDeep { id: ItemId, max: usize },

    /// Menu lookup by name failed
    #[error("menu not found: {name}")]
    MenuNotFound { name: String },

    /// Definition file has an extension we cannot parse
    #[error("unsupported menu definition format: {path} (expected .toml, .yaml, .yml or .json)")]
    UnsupportedFormat { path: PathBuf },

    /// Definition file parsed but its content is not a valid menu
    #[error("invalid menu definition in {file}: {message}")]
    InvalidDefinition { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}
