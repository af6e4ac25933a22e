//! Menu engine
//!
//! A [`Menu`] owns a flat, ordered set of items plus everything that shapes
//! how they render: hooks, tag rules, tree directives and icon settings.
//!
//! # Module Structure
//!
//! - `mod` - registration, ordering, hook and rule registries
//! - `render` - tree emission and tag rule application

mod render;

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use crate::error::MenuResult;
use crate::item::{Item, ItemId};
use crate::markup::Tag;
use crate::tree::{Tree, TreeDirective};

/// Render-time callback.
///
/// Receives the item being rendered and the menu. Returning `false` drops
/// the item, and its subtree, from the output.
pub type ItemHook = Box<dyn Fn(&mut Item, &Menu) -> bool>;

/// Icon placement relative to the label.
pub const ICON_POSITION_LEFT: &str = "left";
pub const ICON_POSITION_RIGHT: &str = "right";

/// A named, renderable menu.
pub struct Menu {
    name: String,
    items: Vec<Item>,
    index: HashMap<ItemId, usize>,
    /// Most recently created item, committed before any read
    pending: Option<Item>,
    tags: HashMap<String, Vec<Tag>>,
    each: Vec<ItemHook>,
    on: HashMap<ItemId, Vec<ItemHook>>,
    on_parents: HashMap<ItemId, Vec<ItemHook>>,
    directives: Vec<TreeDirective>,
    only_icons: bool,
    icon_position: String,
}

impl Menu {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
            index: HashMap::new(),
            pending: None,
            tags: HashMap::new(),
            each: Vec::new(),
            on: HashMap::new(),
            on_parents: HashMap::new(),
            directives: Vec::new(),
            only_icons: false,
            icon_position: ICON_POSITION_LEFT.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register an item. Disabled items are ignored; an item with an
    /// identity that is already present replaces it in place.
    pub fn add(&mut self, item: Item) -> &mut Self {
        self.commit_pending();
        self.insert(item);
        self
    }

    /// Feed `entries` through `callback`, which registers items as it likes.
    pub fn many<T>(
        &mut self,
        entries: impl IntoIterator<Item = T>,
        mut callback: impl FnMut(&mut Menu, T),
    ) -> &mut Self {
        for entry in entries {
            callback(self, entry);
        }
        self
    }

    /// Start a text item. It is registered on the next read or registration.
    pub fn item(&mut self, text: impl Into<String>) -> &mut Item {
        self.stage(Item::new(text))
    }

    pub fn link(&mut self, url: impl Into<String>, text: impl Into<String>) -> &mut Item {
        self.stage(Item::link(url, text))
    }

    pub fn html(&mut self, html: impl Into<String>) -> &mut Item {
        self.stage(Item::html(html))
    }

    pub fn get(&mut self, id: impl Into<ItemId>) -> Option<&Item> {
        self.commit_pending();
        let idx = self.index.get(&id.into()).copied()?;
        self.items.get(idx)
    }

    pub fn get_mut(&mut self, id: impl Into<ItemId>) -> Option<&mut Item> {
        self.commit_pending();
        let idx = self.index.get(&id.into()).copied()?;
        self.items.get_mut(idx)
    }

    /// Look up a committed item without touching the pending buffer.
    ///
    /// Hooks only see `&Menu`; by the time they run every item is committed.
    pub fn find(&self, id: impl Into<ItemId>) -> Option<&Item> {
        let idx = self.index.get(&id.into()).copied()?;
        self.items.get(idx)
    }

    /// All registered items in order.
    pub fn all(&mut self) -> &[Item] {
        self.commit_pending();
        &self.items
    }

    pub fn has_items(&mut self) -> bool {
        !self.all().is_empty()
    }

    /// Reorder the items. The sort is stable, ties keep registration order.
    pub fn sort(&mut self, compare: impl FnMut(&Item, &Item) -> Ordering) -> &mut Self {
        self.commit_pending();
        self.items.sort_by(compare);
        self.reindex();
        self
    }

    /// Keep only the items for which `keep` returns true.
    pub fn filter(&mut self, keep: impl FnMut(&Item) -> bool) -> &mut Self {
        self.commit_pending();
        self.items.retain(keep);
        self.reindex();
        self
    }

    /// Run `hook` on every item during each render.
    pub fn each(&mut self, hook: impl Fn(&mut Item, &Menu) -> bool + 'static) -> &mut Self {
        self.each.push(Box::new(hook));
        self
    }

    /// Run `hook` on the item `id` during each render.
    pub fn on(
        &mut self,
        id: impl Into<ItemId>,
        hook: impl Fn(&mut Item, &Menu) -> bool + 'static,
    ) -> &mut Self {
        self.on.entry(id.into()).or_default().push(Box::new(hook));
        self
    }

    /// Run `hook` on the item `id` and on each of its ancestors. The
    /// returned flag is ignored.
    pub fn on_parents(
        &mut self,
        id: impl Into<ItemId>,
        hook: impl Fn(&mut Item, &Menu) -> bool + 'static,
    ) -> &mut Self {
        self.on_parents
            .entry(id.into())
            .or_default()
            .push(Box::new(hook));
        self
    }

    /// Register a tag rule for every tag named `name` and return it for
    /// configuration (`level`, `handle`, `class`, `attr`).
    pub fn tag(&mut self, name: impl Into<String>) -> &mut Tag {
        let name = name.into();
        let rules = self.tags.entry(name.clone()).or_default();
        rules.push(Tag::new(name));
        let last = rules.len() - 1;
        &mut rules[last]
    }

    /// Mark the item `id` and its ancestors active on every render.
    pub fn active(&mut self, id: impl Into<ItemId>) -> &mut Self {
        let directive = TreeDirective::MarkActive(id.into());
        if !self.directives.contains(&directive) {
            self.directives.push(directive);
        }
        self
    }

    /// With `false`, only the children of active items are rendered.
    pub fn subitems(&mut self, with_subitems: bool) -> &mut Self {
        let directive = TreeDirective::HideInactiveSubitems;
        if with_subitems {
            self.directives.retain(|d| d != &directive);
        } else if !self.directives.contains(&directive) {
            self.directives.push(directive);
        }
        self
    }

    pub fn only_icons(&mut self, only_icons: bool) -> &mut Self {
        self.only_icons = only_icons;
        self
    }

    pub fn get_only_icons(&self) -> bool {
        self.only_icons
    }

    /// Any value other than `"right"` places icons on the left.
    pub fn icon_position(&mut self, position: impl Into<String>) -> &mut Self {
        self.icon_position = position.into();
        self
    }

    pub fn get_icon_position(&self) -> &str {
        &self.icon_position
    }

    /// Build the tree for the current items and apply the tree directives.
    ///
    /// Activation marks are written to the stored items.
    pub fn create(&mut self) -> MenuResult<Tree> {
        self.commit_pending();
        let mut tree = Tree::build(&self.items)?;
        tree.apply(&self.directives, &mut self.items);
        Ok(tree)
    }

    /// Render the menu to markup. An empty menu renders to `""`.
    pub fn render(&mut self) -> MenuResult<String> {
        let tree = self.create()?;
        let working = self.items.clone();
        let output = render::emit(self, &tree, working);

        for item in &mut self.items {
            item.item_tag = None;
            item.parent_tag = None;
        }

        tracing::debug!(
            menu = %self.name,
            items = self.items.len(),
            bytes = output.len(),
            "rendered menu"
        );
        Ok(output)
    }

    fn stage(&mut self, item: Item) -> &mut Item {
        self.commit_pending();
        self.pending.insert(item)
    }

    fn commit_pending(&mut self) {
        if let Some(item) = self.pending.take() {
            self.insert(item);
        }
    }

    fn insert(&mut self, item: Item) {
        if item.is_disabled() {
            tracing::debug!(menu = %self.name, item = %item.key(), "skipping disabled item");
            return;
        }
        let key = item.key();
        match self.index.get(&key) {
            Some(&idx) => self.items[idx] = item,
            None => {
                self.index.insert(key, self.items.len());
                self.items.push(item);
            }
        }
    }

    fn reindex(&mut self) {
        self.index = self
            .items
            .iter()
            .enumerate()
            .map(|(idx, item)| (item.key(), idx))
            .collect();
    }
}

impl Extend<Item> for Menu {
    fn extend<I: IntoIterator<Item = Item>>(&mut self, items: I) {
        for item in items {
            self.add(item);
        }
    }
}

impl fmt::Debug for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Menu")
            .field("name", &self.name)
            .field("items", &self.items)
            .field("pending", &self.pending)
            .field("tags", &self.tags)
            .field("each", &self.each.len())
            .field("on", &self.on.len())
            .field("on_parents", &self.on_parents.len())
            .field("directives", &self.directives)
            .field("only_icons", &self.only_icons)
            .field("icon_position", &self.icon_position)
            .finish()
    }
}
