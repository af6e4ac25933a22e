//! Markup tag with content buffers, attributes and an optional depth level.

use std::fmt;
use std::rc::Rc;

use super::attributes::{AttrValue, Attributes};
use super::escape::esc;

/// Replacement handler: receives the current tag and returns the tag to use.
pub type TagHandler = Rc<dyn Fn(Tag) -> Tag>;

/// A named element such as `ul`, `li` or `a`.
///
/// A tag with an empty name is a null tag: it renders its content without
/// any surrounding element.
#[derive(Clone, Default)]
pub struct Tag {
    name: String,
    content: String,
    prepend: String,
    append: String,
    attributes: Attributes,
    level: Option<usize>,
    handler: Option<TagHandler>,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// A tag that renders only its content.
    pub fn null() -> Self {
        Self::default()
    }

    /// Create a tag holding `html` as its content.
    pub fn with_content(name: impl Into<String>, html: impl AsRef<str>) -> Self {
        let mut tag = Self::new(name);
        tag.content(html.as_ref());
        tag
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_null(&self) -> bool {
        self.name.is_empty()
    }

    pub fn get_level(&self) -> Option<usize> {
        self.level
    }

    pub fn get_handler(&self) -> Option<&TagHandler> {
        self.handler.as_ref()
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    /// Append html to the content buffer.
    pub fn content(&mut self, html: &str) -> &mut Self {
        self.content.push_str(html);
        self
    }

    /// Append html to the prepend buffer.
    pub fn prepend(&mut self, html: &str) -> &mut Self {
        self.prepend.push_str(html);
        self
    }

    pub fn append(&mut self, html: &str) -> &mut Self {
        self.append.push_str(html);
        self
    }

    /// Returns the tag with its content replaced by `html`.
    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.content = html.into();
        self
    }

    pub fn level(&mut self, level: usize) -> &mut Self {
        self.level = Some(level);
        self
    }

    pub fn with_level(mut self, level: usize) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn attr(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> &mut Self {
        self.attributes.set(name, value);
        self
    }

    /// Set a valueless attribute such as `disabled`.
    pub fn boolean_attr(&mut self, name: impl Into<String>) -> &mut Self {
        self.attributes.set(name, AttrValue::Bare);
        self
    }

    pub fn class(&mut self, value: impl Into<String>) -> &mut Self {
        self.attributes.add("class", AttrValue::Text(value.into()));
        self
    }

    /// Install a replacement handler, used when this tag acts as a rule.
    pub fn handle(&mut self, handler: impl Fn(Tag) -> Tag + 'static) -> &mut Self {
        self.handler = Some(Rc::new(handler));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.prepend.is_empty() && self.content.is_empty() && self.append.is_empty()
    }

    pub fn open(&self) -> String {
        if self.is_null() {
            return String::new();
        }
        let name = esc(&self.name);
        if self.attributes.is_empty() {
            format!("<{}>", name)
        } else {
            format!("<{} {}>", name, self.attributes)
        }
    }

    pub fn close(&self) -> String {
        if self.is_null() {
            return String::new();
        }
        format!("</{}>", esc(&self.name))
    }

    /// Render the tag, or an empty string when it has no content.
    pub fn render(&self) -> String {
        if self.is_empty() {
            return String::new();
        }
        let mut out = self.open();
        out.push_str(&self.prepend);
        out.push_str(&self.content);
        out.push_str(&self.append);
        out.push_str(&self.close());
        out
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tag")
            .field("name", &self.name)
            .field("content", &self.content)
            .field("prepend", &self.prepend)
            .field("append", &self.append)
            .field("attributes", &self.attributes)
            .field("level", &self.level)
            .field("handler", &self.handler.is_some())
            .finish()
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.content == other.content
            && self.prepend == other.prepend
            && self.append == other.append
            && self.attributes == other.attributes
            && self.level == other.level
            && self.handler.is_some() == other.handler.is_some()
    }
}
