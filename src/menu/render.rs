//! Tree emission.
//!
//! Walks the tree depth-first, wraps every level in a container tag and every
//! item in an item tag, applying tag rules and running hooks on the way.

use crate::item::{Item, TreeContext};
use crate::markup::Tag;
use crate::tree::Tree;

use super::Menu;

const CONTAINER_TAG: &str = "ul";
const ITEM_TAG: &str = "li";

/// Render `items` (a working copy of the menu items, in tree index order).
pub(super) fn emit(menu: &Menu, tree: &Tree, items: Vec<Item>) -> String {
    let mut emitter = Emitter {
        menu,
        tree,
        slots: items.into_iter().map(Some).collect(),
        ancestors: Vec::new(),
    };
    emitter.level(tree.roots(), 0)
}

struct Emitter<'a> {
    menu: &'a Menu,
    tree: &'a Tree,
    slots: Vec<Option<Item>>,
    /// Items whose subtree is being rendered, root first
    ancestors: Vec<Item>,
}

impl Emitter<'_> {
    fn level(&mut self, nodes: &[usize], level: usize) -> String {
        let tree = self.tree;
        let mut container = self
            .menu
            .handle_tag(Tag::new(CONTAINER_TAG).with_level(level));

        for &idx in nodes {
            let Some(mut item) = self.slots.get_mut(idx).and_then(Option::take) else {
                continue;
            };
            let Some(node) = tree.node(idx) else {
                continue;
            };

            item.tree = TreeContext {
                level: node.level,
                parent: node
                    .parent
                    .and_then(|p| tree.node(p))
                    .map(|p| p.key.clone()),
                children: node
                    .children
                    .iter()
                    .filter_map(|&c| tree.node(c))
                    .map(|c| c.key.clone())
                    .collect(),
            };

            item.parent_tag = Some(std::mem::take(&mut container));
            let item_tag = item.item_tag.take().unwrap_or_else(|| Tag::new(ITEM_TAG));
            item.item_tag = Some(self.menu.handle_tag(item_tag.with_level(level)));
            let content = std::mem::take(item.tag_mut());
            item.set_tag(self.menu.handle_tag(content.with_level(node.level)));

            if !self.run_hooks(&mut item) {
                if let Some(tag) = item.parent_tag.take() {
                    container = tag;
                }
                tracing::trace!(item = %item.key(), "hook dropped item");
                continue;
            }

            // The container stays on the item while its subtree renders so
            // descendant `on_parents` hooks can still reach it.
            let nested = if node.children.is_empty() {
                String::new()
            } else {
                self.ancestors.push(item);
                let nested = self.level(&node.children, level + 1);
                let Some(parent) = self.ancestors.pop() else {
                    continue;
                };
                item = parent;
                nested
            };
            if let Some(tag) = item.parent_tag.take() {
                container = tag;
            }

            let mut item_tag = item.item_tag.take().unwrap_or_else(|| Tag::new(ITEM_TAG));
            item_tag.append(&nested);
            item_tag.prepend(&item.render());
            container.append(&item_tag.render());
        }

        container.render()
    }

    /// `each` hooks in order, then the per-id dispatch.
    fn run_hooks(&mut self, item: &mut Item) -> bool {
        let menu = self.menu;
        for hook in &menu.each {
            if !hook(&mut *item, menu) {
                return false;
            }
        }

        let key = item.key();
        if let Some(hooks) = menu.on.get(&key) {
            for hook in hooks {
                if !hook(&mut *item, menu) {
                    return false;
                }
            }
        }

        if let Some(hooks) = menu.on_parents.get(&key) {
            for hook in hooks {
                hook(&mut *item, menu);
                for ancestor in self.ancestors.iter_mut().rev() {
                    hook(ancestor, menu);
                }
            }
        }

        true
    }
}

impl Menu {
    /// Apply every tag rule registered for `tag`'s name whose level is unset
    /// or equal to the tag's level: handler first, then attribute merge.
    pub(super) fn handle_tag(&self, tag: Tag) -> Tag {
        let Some(rules) = self.tags.get(tag.name()) else {
            return tag;
        };

        let mut tag = tag;
        for rule in rules {
            let matches = match rule.get_level() {
                None => true,
                level => level == tag.get_level(),
            };
            if !matches {
                continue;
            }
            if let Some(handler) = rule.get_handler() {
                tag = handler(tag);
            }
            tag.attributes_mut().merge(rule.attributes());
        }
        tag
    }
}
