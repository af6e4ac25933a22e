//! Declarative menu definitions
//!
//! Menus can be described in TOML, YAML or JSON files. Settings resolve in
//! this order:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (NAVMENU_*)
//! 3. The definition file
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{parse_with_warnings, DefinitionFormat, DefinitionWarning};
pub use types::{
    BadgeDefinition, ItemDefinition, ItemKindDefinition, MenuDefinition, MenuSettings, SortKey,
    TagRuleDefinition,
};
