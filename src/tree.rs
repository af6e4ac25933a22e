//! Tree construction from parent-referencing items.
//!
//! Items stay in a flat, ordered slice; the tree is an index over it. Node
//! `i` always wraps item `i`, parents and children are referenced by index,
//! so no node owns another.

use std::collections::HashMap;

use crate::error::{MenuError, MenuResult};
use crate::item::{Item, ItemId};

/// Deepest level a tree may reach. Rendering recurses once per level.
pub const MAX_DEPTH: usize = 128;

/// One node per item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub key: ItemId,
    /// Depth, root = 0
    pub level: usize,
    pub parent: Option<usize>,
    /// Child node indices in item order
    pub children: Vec<usize>,
}

/// A mutation recorded on the menu and applied to every freshly built tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeDirective {
    /// Mark the item and all of its ancestors active
    MarkActive(ItemId),
    /// Drop the children of every inactive node
    HideInactiveSubitems,
}

/// Forest built from a flat item list.
#[derive(Debug, Clone, Default)]
pub struct Tree {
    nodes: Vec<TreeNode>,
    roots: Vec<usize>,
    index: HashMap<ItemId, usize>,
}

impl Tree {
    /// Build the forest for `items`.
    ///
    /// Items whose parent is unset or unknown become roots. Siblings keep
    /// the order of `items`. Items that can not be reached from a root sit
    /// on a parent cycle and are reported as [`MenuError::ParentCycle`].
    /// Chains deeper than [`MAX_DEPTH`] fail with [`MenuError::TooDeep`].
    pub fn build(items: &[Item]) -> MenuResult<Self> {
        let mut index = HashMap::with_capacity(items.len());
        for (idx, item) in items.iter().enumerate() {
            index.insert(item.key(), idx);
        }

        let mut nodes: Vec<TreeNode> = items
            .iter()
            .map(|item| TreeNode {
                key: item.key(),
                level: 0,
                parent: None,
                children: Vec::new(),
            })
            .collect();

        let mut roots = Vec::new();
        for (idx, item) in items.iter().enumerate() {
            match item.parent_id().and_then(|parent| index.get(parent)).copied() {
                Some(parent) => {
                    nodes[idx].parent = Some(parent);
                    nodes[parent].children.push(idx);
                }
                None => roots.push(idx),
            }
        }

        // Assign levels top-down; whatever stays unvisited is cyclic.
        let mut visited = vec![false; nodes.len()];
        let mut stack: Vec<(usize, usize)> = roots.iter().rev().map(|&r| (r, 0)).collect();
        while let Some((idx, level)) = stack.pop() {
            if level >= MAX_DEPTH {
                return Err(MenuError::TooDeep {
                    id: nodes[idx].key.clone(),
                    max: MAX_DEPTH,
                });
            }
            visited[idx] = true;
            nodes[idx].level = level;
            for &child in nodes[idx].children.iter().rev() {
                stack.push((child, level + 1));
            }
        }

        if let Some(idx) = visited.iter().position(|seen| !seen) {
            return Err(MenuError::ParentCycle {
                id: nodes[idx].key.clone(),
            });
        }

        tracing::debug!(
            items = nodes.len(),
            roots = roots.len(),
            "built menu tree"
        );

        Ok(Self {
            nodes,
            roots,
            index,
        })
    }

    pub fn roots(&self) -> &[usize] {
        &self.roots
    }

    pub fn node(&self, idx: usize) -> Option<&TreeNode> {
        self.nodes.get(idx)
    }

    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn find(&self, key: &ItemId) -> Option<usize> {
        self.index.get(key).copied()
    }

    /// Indices of `idx` and its ancestors, nearest first.
    pub fn ancestors(&self, idx: usize) -> Vec<usize> {
        let mut chain = Vec::new();
        let mut current = Some(idx);
        while let Some(i) = current {
            chain.push(i);
            current = self.nodes.get(i).and_then(|node| node.parent);
        }
        chain
    }

    /// Mark the item `key` and every ancestor active. Unknown keys are ignored.
    pub fn mark_active_ancestors(&self, key: &ItemId, items: &mut [Item]) {
        let Some(idx) = self.find(key) else {
            return;
        };
        for i in self.ancestors(idx) {
            if let Some(item) = items.get_mut(i) {
                item.active(true);
            }
        }
    }

    /// Drop the children of every node whose item is not active.
    ///
    /// Only the tree changes; `items` is left alone.
    pub fn prune_inactive_subtrees(&mut self, items: &[Item]) {
        let mut pruned = 0;
        for (idx, node) in self.nodes.iter_mut().enumerate() {
            let active = items.get(idx).is_some_and(Item::is_active);
            if !active && !node.children.is_empty() {
                pruned += node.children.len();
                node.children.clear();
            }
        }
        tracing::debug!(pruned, "pruned inactive subitems");
    }

    /// Apply `directives`: activation marks in order, then pruning.
    pub fn apply(&mut self, directives: &[TreeDirective], items: &mut [Item]) {
        for directive in directives {
            if let TreeDirective::MarkActive(key) = directive {
                self.mark_active_ancestors(key, items);
            }
        }
        if directives.contains(&TreeDirective::HideInactiveSubitems) {
            self.prune_inactive_subtrees(items);
        }
    }
}
