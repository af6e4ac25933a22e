use navmenu::{IconsMenuFactory, InMemoryIcons, Menu, MenuFactory};

fn icons_factory() -> IconsMenuFactory {
    IconsMenuFactory::new(
        InMemoryIcons::new()
            .with_icon("foo", "FooIcon")
            .with_icon("bar", "BarIcon"),
    )
}

fn with_icons(menu: &mut Menu) {
    menu.item("foo").icon("foo");
    menu.link("/bar", "bar").icon("bar");
    menu.html("baz").icon("baz");
}

#[test]
fn test_icons_are_not_rendered_by_default() {
    let mut menu = Menu::new("footer");
    with_icons(&mut menu);

    assert_eq!(
        menu.render().unwrap(),
        r#"<ul><li>foo</li><li><a href="/bar">bar</a></li><li>baz</li></ul>"#
    );
}

#[test]
fn test_icons_rendered() {
    let mut menu = icons_factory().create_menu("header");
    with_icons(&mut menu);

    insta::assert_snapshot!(
        menu.render().unwrap(),
        @r#"<ul><li><span class="icon icon-foo">FooIcon<span class="icon-label">foo</span></span></li><li><a href="/bar"><span class="icon icon-bar">BarIcon<span class="icon-label">bar</span></span></a></li><li><span class="icon icon-baz"><span class="icon-label">baz</span></span></li></ul>"#
    );
}

#[test]
fn test_icons_positioned_left() {
    let mut menu = icons_factory().create_menu("header");
    menu.item("foo").icon("foo");
    menu.icon_position("left");

    assert_eq!(
        menu.render().unwrap(),
        r#"<ul><li><span class="icon icon-foo">FooIcon<span class="icon-label">foo</span></span></li></ul>"#
    );
}

#[test]
fn test_icons_positioned_right() {
    let mut menu = icons_factory().create_menu("header");
    menu.item("foo").icon("foo");
    menu.icon_position("right");

    assert_eq!(
        menu.render().unwrap(),
        r#"<ul><li><span class="icon icon-foo"><span class="icon-label">foo</span>FooIcon</span></li></ul>"#
    );
}

#[test]
fn test_unknown_position_is_left() {
    let mut menu = icons_factory().create_menu("header");
    menu.item("foo").icon("foo");
    menu.icon_position("center");

    assert_eq!(
        menu.render().unwrap(),
        r#"<ul><li><span class="icon icon-foo">FooIcon<span class="icon-label">foo</span></span></li></ul>"#
    );
}

#[test]
fn test_items_without_icon_are_untouched() {
    let mut menu = icons_factory().create_menu("header");
    menu.item("foo");

    assert_eq!(menu.render().unwrap(), "<ul><li>foo</li></ul>");
}

#[test]
fn test_only_icons() {
    let mut menu = icons_factory().create_menu("header");
    with_icons(&mut menu);
    menu.link("/noicon", "noicon");
    menu.only_icons(true);

    insta::assert_snapshot!(
        menu.render().unwrap(),
        @r#"<ul><li><span class="icon icon-foo">FooIcon</span></li><li><a href="/bar"><span class="icon icon-bar">BarIcon</span></a></li><li><span class="icon icon-baz"></span></li><li><a href="/noicon">noicon</a></li></ul>"#
    );
}

#[test]
fn test_icon_with_badge() {
    let mut menu = icons_factory().create_menu("header");
    menu.item("foo")
        .icon("foo")
        .badge("3", navmenu::Attributes::new());
    menu.only_icons(true);

    assert_eq!(
        menu.render().unwrap(),
        r#"<ul><li><span class="icon icon-foo">FooIcon</span><span class="badge">3</span></li></ul>"#
    );
}

#[test]
fn test_icons_render_repeatedly() {
    let mut menu = icons_factory().create_menu("header");
    menu.item("foo").icon("foo");

    let first = menu.render().unwrap();
    assert_eq!(menu.render().unwrap(), first);
}
