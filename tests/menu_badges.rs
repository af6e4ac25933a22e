use navmenu::{Attributes, Menu};

fn title(value: &str) -> Attributes {
    [("title", value)].into_iter().collect()
}

#[test]
fn test_item_badge() {
    let mut menu = Menu::new("header");
    menu.item("foo").badge("new", title("Title"));

    assert_eq!(
        menu.render().unwrap(),
        r#"<ul><li>foo<span title="Title" class="badge">new</span></li></ul>"#
    );
}

#[test]
fn test_item_badge_if() {
    let mut menu = Menu::new("header");
    menu.item("foo").badge_if(true, "new", title("Title"));
    menu.item("bar").badge_if(false, "new bar", title("Title Bar"));

    assert_eq!(
        menu.render().unwrap(),
        r#"<ul><li>foo<span title="Title" class="badge">new</span></li><li>bar</li></ul>"#
    );
}

#[test]
fn test_link_badge() {
    let mut menu = Menu::new("header");
    menu.link("/foo", "Foo").badge("new", title("Title"));

    assert_eq!(
        menu.render().unwrap(),
        r#"<ul><li><a href="/foo">Foo<span title="Title" class="badge">new</span></a></li></ul>"#
    );
}

#[test]
fn test_link_badge_if() {
    let mut menu = Menu::new("header");
    menu.link("/foo", "Foo").badge_if(true, "new", title("Title"));
    menu.link("/bar", "Bar").badge_if(false, "new bar", title("Title Bar"));

    assert_eq!(
        menu.render().unwrap(),
        r#"<ul><li><a href="/foo">Foo<span title="Title" class="badge">new</span></a></li><li><a href="/bar">Bar</a></li></ul>"#
    );
}

#[test]
fn test_html_badge() {
    let mut menu = Menu::new("header");
    menu.html("foo").badge("new", title("Title"));

    assert_eq!(
        menu.render().unwrap(),
        r#"<ul><li>foo<span title="Title" class="badge">new</span></li></ul>"#
    );
}

#[test]
fn test_html_badge_if() {
    let mut menu = Menu::new("header");
    menu.html("foo").badge_if(true, "new", title("Title"));
    menu.html("bar").badge_if(false, "new bar", title("Title Bar"));

    assert_eq!(
        menu.render().unwrap(),
        r#"<ul><li>foo<span title="Title" class="badge">new</span></li><li>bar</li></ul>"#
    );
}

#[test]
fn test_badge_text_is_escaped_and_removable() {
    let mut menu = Menu::new("header");
    menu.item("foo").badge("<3", Attributes::new());

    assert_eq!(
        menu.render().unwrap(),
        r#"<ul><li>foo<span class="badge">&lt;3</span></li></ul>"#
    );

    menu.get_mut("foo").unwrap().remove_badge();
    assert_eq!(menu.render().unwrap(), "<ul><li>foo</li></ul>");
}
