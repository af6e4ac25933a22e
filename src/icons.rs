//! Icon lookup and the render hook that decorates items with icons.

use std::collections::HashMap;
use std::rc::Rc;

use crate::item::Item;
use crate::markup::{esc, Tag};
use crate::menu::{Menu, ICON_POSITION_RIGHT};

/// Side of the icon the label is placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelPosition {
    Left,
    Right,
}

/// A resolved icon, optionally labelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    name: String,
    html: String,
    label: Option<(String, LabelPosition)>,
}

impl Icon {
    pub fn new(name: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            html: html.into(),
            label: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(mut self, text: impl Into<String>, position: LabelPosition) -> Self {
        self.label = Some((text.into(), position));
        self
    }

    /// `<span class="icon icon-NAME">HTML<span class="icon-label">LABEL</span></span>`
    pub fn render(&self) -> String {
        let mut wrapper = Tag::new("span");
        wrapper.class("icon").class(format!("icon-{}", self.name));

        let label = self.label.as_ref().map(|(text, position)| {
            let mut tag = Tag::with_content("span", esc(text));
            tag.class("icon-label");
            (tag.render(), *position)
        });

        let mut inner = String::new();
        if let Some((label, LabelPosition::Left)) = &label {
            inner.push_str(label);
        }
        inner.push_str(&self.html);
        if let Some((label, LabelPosition::Right)) = &label {
            inner.push_str(label);
        }

        // An icon without markup or label still renders its wrapper.
        format!("{}{}{}", wrapper.open(), inner, wrapper.close())
    }
}

/// Icon lookup by name.
pub trait Icons {
    /// Resolve `name`. Unknown names still produce an icon.
    fn get(&self, name: &str) -> Icon;
}

/// Icons held in memory as `name -> markup`. Unknown names resolve to an
/// icon without markup.
#[derive(Debug, Clone, Default)]
pub struct InMemoryIcons {
    icons: HashMap<String, String>,
}

impl InMemoryIcons {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_icon(mut self, name: impl Into<String>, html: impl Into<String>) -> Self {
        self.icons.insert(name.into(), html.into());
        self
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for InMemoryIcons {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            icons: iter
                .into_iter()
                .map(|(name, html)| (name.into(), html.into()))
                .collect(),
        }
    }
}

impl Icons for InMemoryIcons {
    fn get(&self, name: &str) -> Icon {
        match self.icons.get(name) {
            Some(html) => Icon::new(name, html.as_str()),
            None => {
                tracing::debug!(icon = name, "icon not found, rendering empty icon");
                Icon::new(name, "")
            }
        }
    }
}

/// Build an `each` hook that replaces the content of items carrying an icon
/// name with the resolved icon, labelled with the item text unless the menu
/// renders icons only.
pub fn icon_hook(icons: Rc<dyn Icons>) -> impl Fn(&mut Item, &Menu) -> bool + 'static {
    move |item, menu| {
        let Some(name) = item.get_icon() else {
            return true;
        };
        let mut icon = icons.get(name);

        if !menu.get_only_icons() {
            let position = if menu.get_icon_position() == ICON_POSITION_RIGHT {
                LabelPosition::Left
            } else {
                LabelPosition::Right
            };
            icon = icon.label(item.text(), position);
        }

        let tag = std::mem::take(item.tag_mut()).with_html(icon.render());
        item.set_tag(tag);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_renders_label_on_either_side() {
        let icon = Icon::new("foo", "FooIcon");

        assert_eq!(
            icon.clone().label("foo", LabelPosition::Right).render(),
            "<span class=\"icon icon-foo\">FooIcon<span class=\"icon-label\">foo</span></span>"
        );
        assert_eq!(
            icon.label("foo", LabelPosition::Left).render(),
            "<span class=\"icon icon-foo\"><span class=\"icon-label\">foo</span>FooIcon</span>"
        );
    }

    #[test]
    fn empty_icon_keeps_wrapper() {
        assert_eq!(
            Icon::new("baz", "").render(),
            "<span class=\"icon icon-baz\"></span>"
        );
    }

    #[test]
    fn unknown_icon_has_no_markup() {
        let icons = InMemoryIcons::new().with_icon("foo", "FooIcon");

        assert_eq!(icons.get("foo"), Icon::new("foo", "FooIcon"));
        assert_eq!(icons.get("nope"), Icon::new("nope", ""));
    }

    #[test]
    fn label_text_is_escaped() {
        let icon = Icon::new("x", "").label("a & b", LabelPosition::Right);
        assert!(icon.render().contains("a &amp; b"));
    }

    #[test]
    fn hook_skips_items_without_icon() {
        let hook = icon_hook(Rc::new(InMemoryIcons::new()));
        let menu = Menu::new("header");
        let mut item = Item::new("plain");

        assert!(hook(&mut item, &menu));
        assert_eq!(item.render(), "plain");
    }
}
