//! Menu items
//!
//! An [`Item`] is one menu entry. All variants share the same record
//! (identity, parent reference, state, icon, badge) and differ only in how
//! their content tag is built and rendered, see [`ItemKind`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::markup::{esc, strip_tags, Attributes, Tag};

/// Item identity.
///
/// Integer ids are stored in their decimal form, so `1` and `"1"` name the
/// same item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawId", into = "String")]
pub struct ItemId(String);

impl ItemId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        ItemId(id.to_string())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        ItemId(id)
    }
}

impl From<&String> for ItemId {
    fn from(id: &String) -> Self {
        ItemId(id.clone())
    }
}

impl From<&ItemId> for ItemId {
    fn from(id: &ItemId) -> Self {
        id.clone()
    }
}

macro_rules! item_id_from_int {
    ($($ty:ty),*) => {
        $(impl From<$ty> for ItemId {
            fn from(id: $ty) -> Self {
                ItemId(id.to_string())
            }
        })*
    };
}

item_id_from_int!(i32, i64, u32, u64, usize);

impl From<ItemId> for String {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

impl PartialEq<str> for ItemId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ItemId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(i64),
    Str(String),
}

impl From<RawId> for ItemId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Int(id) => id.into(),
            RawId::Str(id) => id.into(),
        }
    }
}

/// Item variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKind {
    /// Escaped text
    Text,
    /// Anchor pointing at `url`; no `href` is emitted for an empty url
    Link { url: String },
    /// Trusted markup, rendered unescaped
    Html { html: String },
}

/// Where an item sits in the tree of the render pass that is running.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct TreeContext {
    pub(crate) level: usize,
    pub(crate) parent: Option<ItemId>,
    pub(crate) children: Vec<ItemId>,
}

/// A menu entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    kind: ItemKind,
    text: String,
    id: Option<ItemId>,
    parent: Option<ItemId>,
    active: bool,
    disabled: bool,
    order: i64,
    icon: Option<String>,
    badge: Option<Tag>,
    tag: Tag,
    pub(crate) item_tag: Option<Tag>,
    pub(crate) parent_tag: Option<Tag>,
    pub(crate) tree: TreeContext,
}

impl Item {
    fn with_kind(kind: ItemKind, text: String, tag: Tag) -> Self {
        Self {
            kind,
            text,
            id: None,
            parent: None,
            active: false,
            disabled: false,
            order: 0,
            icon: None,
            badge: None,
            tag,
            item_tag: None,
            parent_tag: None,
            tree: TreeContext::default(),
        }
    }

    /// Plain text item.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let tag = Tag::with_content("", esc(&text));
        Self::with_kind(ItemKind::Text, text, tag)
    }

    pub fn link(url: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let tag = Tag::with_content("a", esc(&text));
        Self::with_kind(ItemKind::Link { url: url.into() }, text, tag)
    }

    /// Raw markup item. Its text is the markup with tags stripped.
    pub fn html(html: impl Into<String>) -> Self {
        let html = html.into();
        let tag = Tag::with_content("", &html);
        Self::with_kind(ItemKind::Html { html: html.clone() }, strip_tags(&html), tag)
    }

    pub fn with_id(mut self, id: impl Into<ItemId>) -> Self {
        self.id(id);
        self
    }

    pub fn with_parent(mut self, parent: impl Into<ItemId>) -> Self {
        self.parent(parent);
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Copy of a link item pointing at another url. Other variants are
    /// returned unchanged.
    pub fn with_url(&self, url: impl Into<String>) -> Self {
        let mut item = self.clone();
        if let ItemKind::Link { url: current } = &mut item.kind {
            *current = url.into();
        }
        item
    }

    pub fn id(&mut self, id: impl Into<ItemId>) -> &mut Self {
        self.id = Some(id.into());
        self
    }

    pub fn parent(&mut self, parent: impl Into<ItemId>) -> &mut Self {
        self.parent = Some(parent.into());
        self
    }

    /// Set or clear the parent reference.
    pub fn set_parent(&mut self, parent: Option<ItemId>) -> &mut Self {
        self.parent = parent;
        self
    }

    pub fn active(&mut self, active: bool) -> &mut Self {
        self.active = active;
        self
    }

    pub fn disabled(&mut self, disabled: bool) -> &mut Self {
        self.disabled = disabled;
        self
    }

    pub fn order(&mut self, order: i64) -> &mut Self {
        self.order = order;
        self
    }

    /// Store an icon name. Resolution happens in an icon hook at render time.
    pub fn icon(&mut self, name: impl Into<String>) -> &mut Self {
        self.icon = Some(name.into());
        self
    }

    /// Attach a `<span class="badge">` holding `text`.
    pub fn badge(&mut self, text: impl AsRef<str>, attributes: Attributes) -> &mut Self {
        let mut tag = Tag::with_content("span", esc(text.as_ref())).with_attributes(attributes);
        tag.class("badge");
        self.badge = Some(tag);
        self
    }

    pub fn badge_if(
        &mut self,
        condition: bool,
        text: impl AsRef<str>,
        attributes: Attributes,
    ) -> &mut Self {
        if condition {
            self.badge(text, attributes);
        }
        self
    }

    pub fn remove_badge(&mut self) -> &mut Self {
        self.badge = None;
        self
    }

    pub fn set_tag(&mut self, tag: Tag) -> &mut Self {
        self.tag = tag;
        self
    }

    /// Identity: the explicit id, or the text when no id is set.
    pub fn key(&self) -> ItemId {
        match &self.id {
            Some(id) if !id.as_str().is_empty() => id.clone(),
            _ => ItemId::from(self.text.as_str()),
        }
    }

    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Link target, empty for non-link items.
    pub fn url(&self) -> &str {
        match &self.kind {
            ItemKind::Link { url } => url,
            _ => "",
        }
    }

    pub fn get_id(&self) -> Option<&ItemId> {
        self.id.as_ref()
    }

    pub fn parent_id(&self) -> Option<&ItemId> {
        self.parent.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn get_order(&self) -> i64 {
        self.order
    }

    pub fn get_icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn get_badge(&self) -> Option<&Tag> {
        self.badge.as_ref()
    }

    /// The content tag (`a` for links, a null tag otherwise).
    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    pub fn tag_mut(&mut self) -> &mut Tag {
        &mut self.tag
    }

    pub fn item_tag(&self) -> Option<&Tag> {
        self.item_tag.as_ref()
    }

    /// The wrapping `li`, issued on first access.
    pub fn item_tag_mut(&mut self) -> &mut Tag {
        self.item_tag.get_or_insert_with(|| Tag::new("li"))
    }

    /// The container the item is rendered into. Only set during a render.
    pub fn parent_tag(&self) -> Option<&Tag> {
        self.parent_tag.as_ref()
    }

    pub fn parent_tag_mut(&mut self) -> Option<&mut Tag> {
        self.parent_tag.as_mut()
    }

    /// Depth in the tree being rendered, root = 0.
    pub fn tree_level(&self) -> usize {
        self.tree.level
    }

    /// Parent identity as resolved in the tree being rendered.
    pub fn tree_parent(&self) -> Option<&ItemId> {
        self.tree.parent.as_ref()
    }

    pub fn tree_children(&self) -> &[ItemId] {
        &self.tree.children
    }

    /// Render the item body and drop its cached item tag.
    pub fn render(&mut self) -> String {
        self.item_tag = None;

        let mut tag = self.tag.clone();
        if let ItemKind::Link { url } = &self.kind {
            if !url.is_empty() {
                tag.attr("href", url.as_str());
            }
        }
        if let Some(badge) = &self.badge {
            tag.append(&badge.render());
        }
        tag.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title() -> Attributes {
        [("title", "Title")].into_iter().collect()
    }

    #[test]
    fn key_falls_back_to_text() {
        assert_eq!(Item::new("about us").key(), "about us");
        assert_eq!(Item::new("about us").with_id("about").key(), "about");
        assert_eq!(Item::new("about us").with_id("").key(), "about us");
    }

    #[test]
    fn integer_ids_match_strings() {
        assert_eq!(ItemId::from(7), ItemId::from("7"));
    }

    #[test]
    fn text_is_escaped() {
        let mut item = Item::new("Tom & Jerry");
        assert_eq!(item.render(), "Tom &amp; Jerry");
        assert_eq!(item.text(), "Tom & Jerry");
    }

    #[test]
    fn link_with_empty_url_has_no_href() {
        assert_eq!(Item::link("", "Home").render(), "<a>Home</a>");
        assert_eq!(Item::link("/", "Home").render(), "<a href=\"/\">Home</a>");
    }

    #[test]
    fn html_is_trusted_and_text_stripped() {
        let mut item = Item::html("<span>foo</span>");
        assert_eq!(item.text(), "foo");
        assert_eq!(item.key(), "foo");
        assert_eq!(item.render(), "<span>foo</span>");
    }

    #[test]
    fn badge_is_appended() {
        let mut item = Item::new("foo");
        item.badge("new", title());
        assert_eq!(
            item.render(),
            "foo<span title=\"Title\" class=\"badge\">new</span>"
        );

        let mut link = Item::link("/foo", "Foo");
        link.badge("new", title());
        assert_eq!(
            link.render(),
            "<a href=\"/foo\">Foo<span title=\"Title\" class=\"badge\">new</span></a>"
        );
    }

    #[test]
    fn badge_if_and_remove() {
        let mut item = Item::new("bar");
        item.badge_if(false, "new", title());
        assert!(item.get_badge().is_none());

        item.badge_if(true, "new", title());
        assert!(item.get_badge().is_some());

        item.remove_badge();
        assert_eq!(item.render(), "bar");
    }

    #[test]
    fn render_is_repeatable_and_resets_item_tag() {
        let mut item = Item::link("/a", "A");
        item.badge("1", Attributes::new());
        item.item_tag_mut().class("active");

        let first = item.render();
        assert!(item.item_tag().is_none());
        assert_eq!(first, item.render());
    }

    #[test]
    fn with_url_only_changes_links() {
        let link = Item::link("/a", "A").with_url("/b");
        assert_eq!(link.url(), "/b");

        let text = Item::new("A").with_url("/b");
        assert_eq!(text.url(), "");
    }

    #[test]
    fn item_id_deserializes_from_int_or_string() {
        let ids: Vec<ItemId> = serde_json::from_str("[1, \"team\"]").unwrap();
        assert_eq!(ids, vec![ItemId::from("1"), ItemId::from("team")]);
    }
}
