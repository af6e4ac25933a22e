//! Menu definition types

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::MenuResult;
use crate::icons::InMemoryIcons;
use crate::item::{Item, ItemId};
use crate::markup::{AttrValue, Attributes};
use crate::menu::{Menu, ICON_POSITION_LEFT};
use crate::registry::{DefaultMenuFactory, IconsMenuFactory, MenuFactory};

use super::loader::{self, DefinitionWarning};

/// A declarative menu: settings, items, tag rules and icons.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuDefinition {
    #[serde(default)]
    pub menu: MenuSettings,

    #[serde(default)]
    pub items: Vec<ItemDefinition>,

    #[serde(default)]
    pub tags: Vec<TagRuleDefinition>,

    /// Icon name to markup
    #[serde(default)]
    pub icons: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortKey>,
}

/// `[menu]` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuSettings {
    #[serde(default = "default_menu_name")]
    pub name: String,

    #[serde(default = "default_true")]
    pub subitems: bool,

    #[serde(default)]
    pub only_icons: bool,

    #[serde(default = "default_icon_position")]
    pub icon_position: String,

    /// Accepts a single id or a list
    #[serde(default, deserialize_with = "one_or_many")]
    pub active: Vec<ItemId>,
}

impl Default for MenuSettings {
    fn default() -> Self {
        Self {
            name: default_menu_name(),
            subitems: true,
            only_icons: false,
            icon_position: default_icon_position(),
            active: Vec::new(),
        }
    }
}

fn default_menu_name() -> String {
    "main".to_string()
}

fn default_true() -> bool {
    true
}

fn default_icon_position() -> String {
    ICON_POSITION_LEFT.to_string()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(value) => vec![value],
        OneOrMany::Many(values) => values,
    })
}

/// Item variant in a definition file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItemKindDefinition {
    #[default]
    Text,
    Link,
    Html,
}

/// `[[items]]` entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemDefinition {
    #[serde(default)]
    pub kind: ItemKindDefinition,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ItemId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<ItemId>,

    #[serde(default)]
    pub active: bool,

    #[serde(default)]
    pub disabled: bool,

    #[serde(default)]
    pub order: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<BadgeDefinition>,
}

/// `badge = { text = "new", attributes = { title = "New" } }`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BadgeDefinition {
    pub text: String,

    #[serde(default)]
    pub attributes: BTreeMap<String, AttrValue>,
}

/// `[[tags]]` entry, a rule applied to every tag of that name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TagRuleDefinition {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<usize>,

    #[serde(default, deserialize_with = "one_or_many")]
    pub class: Vec<String>,

    #[serde(default)]
    pub attributes: BTreeMap<String, AttrValue>,

    /// Attributes rendered without a value
    #[serde(default)]
    pub boolean: Vec<String>,
}

/// Item ordering applied after all items are registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Order,
    Text,
}

impl ItemDefinition {
    /// Problems that make this entry unusable, if any.
    pub(crate) fn problem(&self) -> Option<String> {
        let missing = |field: &Option<String>| field.as_deref().map_or(true, str::is_empty);
        match self.kind {
            ItemKindDefinition::Text if missing(&self.text) => {
                Some("text item requires `text`".to_string())
            }
            ItemKindDefinition::Link if missing(&self.url) => {
                Some("link item requires `url`".to_string())
            }
            ItemKindDefinition::Link if missing(&self.text) => {
                Some("link item requires `text`".to_string())
            }
            ItemKindDefinition::Html if missing(&self.html) => {
                Some("html item requires `html`".to_string())
            }
            _ => None,
        }
    }

    pub fn to_item(&self) -> Item {
        let text = self.text.clone().unwrap_or_default();
        let mut item = match self.kind {
            ItemKindDefinition::Text => Item::new(text),
            ItemKindDefinition::Link => Item::link(self.url.clone().unwrap_or_default(), text),
            ItemKindDefinition::Html => Item::html(self.html.clone().unwrap_or_default()),
        };

        if let Some(id) = &self.id {
            item.id(id);
        }
        if let Some(parent) = &self.parent {
            item.parent(parent);
        }
        item.active(self.active)
            .disabled(self.disabled)
            .order(self.order);
        if let Some(icon) = &self.icon {
            item.icon(icon.as_str());
        }
        if let Some(badge) = &self.badge {
            item.badge(&badge.text, attributes(&badge.attributes));
        }
        item
    }
}

fn attributes(map: &BTreeMap<String, AttrValue>) -> Attributes {
    map.iter()
        .map(|(name, value)| (name.as_str(), value.clone()))
        .collect()
}

impl MenuDefinition {
    /// Load a definition file, detecting the format from its extension.
    pub fn load(path: &Path) -> MenuResult<Self> {
        let (definition, warnings) = loader::load_with_warnings(path)?;
        for warning in &warnings {
            tracing::warn!(
                key = %warning.key,
                file = %warning.file.display(),
                line = ?warning.line,
                suggestion = ?warning.suggestion,
                "ignoring unknown key in menu definition"
            );
        }
        Ok(definition)
    }

    /// Load a definition file and collect non-fatal warnings (unknown keys).
    pub fn load_with_warnings(path: &Path) -> MenuResult<(Self, Vec<DefinitionWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (NAVMENU_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Build a menu from this definition.
    ///
    /// Menus with icons are created by the icon factory so items carrying an
    /// icon name render it.
    pub fn build(&self) -> Menu {
        let mut menu = if self.icons.is_empty() {
            DefaultMenuFactory.create_menu(&self.menu.name)
        } else {
            IconsMenuFactory::new(self.icons.iter().collect::<InMemoryIcons>())
                .create_menu(&self.menu.name)
        };

        menu.subitems(self.menu.subitems)
            .only_icons(self.menu.only_icons)
            .icon_position(self.menu.icon_position.as_str());
        for id in &self.menu.active {
            menu.active(id);
        }

        menu.extend(self.items.iter().map(ItemDefinition::to_item));

        for rule in &self.tags {
            let tag = menu.tag(rule.name.as_str());
            if let Some(level) = rule.level {
                tag.level(level);
            }
            for class in &rule.class {
                tag.class(class.as_str());
            }
            tag.attributes_mut().merge(&attributes(&rule.attributes));
            for name in &rule.boolean {
                tag.boolean_attr(name.as_str());
            }
        }

        match self.sort {
            Some(SortKey::Order) => {
                menu.sort(|a, b| a.get_order().cmp(&b.get_order()));
            }
            Some(SortKey::Text) => {
                menu.sort(|a, b| a.text().cmp(b.text()));
            }
            None => {}
        }

        tracing::debug!(
            menu = %self.menu.name,
            items = self.items.len(),
            rules = self.tags.len(),
            "built menu from definition"
        );
        menu
    }
}
