//! navmenu - hierarchical HTML navigation menus
//!
//! Build a [`Menu`] from flat, parent-referencing items, shape its markup
//! with hooks and tag rules, and render it as nested `<ul>`/`<li>` lists.
//! Menus can also be described declaratively in TOML, YAML or JSON files
//! (see [`config`]).

pub mod config;
pub mod error;
pub mod icons;
pub mod item;
pub mod markup;
pub mod menu;
pub mod registry;
pub mod tree;

// Re-exports for convenience
pub use config::{DefinitionWarning, MenuDefinition};
pub use error::{MenuError, MenuResult};
pub use icons::{icon_hook, Icon, Icons, InMemoryIcons, LabelPosition};
pub use item::{Item, ItemId, ItemKind};
pub use markup::{AttrValue, Attributes, Tag};
pub use menu::{ItemHook, Menu, ICON_POSITION_LEFT, ICON_POSITION_RIGHT};
pub use registry::{DefaultMenuFactory, IconsMenuFactory, MenuFactory, Menus};
pub use tree::{Tree, TreeDirective, TreeNode};
