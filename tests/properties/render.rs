//! Property tests for tree rendering.

use proptest::prelude::*;

use navmenu::{Menu, MenuError};

/// Parent index for each item, always pointing at an earlier item so the
/// generated forest is acyclic.
fn forest() -> impl Strategy<Value = Vec<Option<usize>>> {
    proptest::collection::vec(any::<Option<prop::sample::Index>>(), 0..=24).prop_map(|parents| {
        parents
            .into_iter()
            .enumerate()
            .map(|(i, parent)| match parent {
                Some(index) if i > 0 => Some(index.index(i)),
                _ => None,
            })
            .collect()
    })
}

fn build(parents: &[Option<usize>]) -> Menu {
    let mut menu = Menu::new("prop");
    for (i, parent) in parents.iter().enumerate() {
        let item = menu.item(format!("item{i}"));
        if let Some(parent) = parent {
            item.parent(format!("item{parent}"));
        }
    }
    menu
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Rendering the same menu twice yields identical markup.
    #[test]
    fn property_render_is_idempotent(parents in forest()) {
        let mut menu = build(&parents);
        menu.tag("li").class("entry");
        menu.on_parents("item0", |item, _| {
            item.item_tag_mut().class("trail");
            true
        });

        let first = menu.render().unwrap();
        let second = menu.render().unwrap();
        prop_assert_eq!(first, second);
    }

    /// PROPERTY: Every item of an acyclic menu is rendered exactly once.
    #[test]
    fn property_every_item_rendered_once(parents in forest()) {
        let mut menu = build(&parents);
        let html = menu.render().unwrap();

        prop_assert_eq!(html.matches("<li>").count(), parents.len());
        prop_assert_eq!(html.matches("</ul>").count(), html.matches("<ul>").count());
    }

    /// PROPERTY: Without subitems and without an active item only roots render.
    #[test]
    fn property_hidden_subitems_leave_roots(parents in forest()) {
        let mut menu = build(&parents);
        menu.subitems(false);
        let html = menu.render().unwrap();

        let roots = parents.iter().filter(|p| p.is_none()).count();
        prop_assert_eq!(html.matches("<li>").count(), roots);
    }

    /// PROPERTY: Arbitrary parent references either render or report a cycle.
    #[test]
    fn property_arbitrary_parents_never_panic(
        parents in proptest::collection::vec(proptest::option::of(0usize..16), 0..16)
    ) {
        let mut menu = Menu::new("prop");
        for (i, parent) in parents.iter().enumerate() {
            let item = menu.item(format!("item{i}"));
            if let Some(parent) = parent {
                item.parent(format!("item{parent}"));
            }
        }

        match menu.render() {
            Ok(_) | Err(MenuError::ParentCycle { .. }) => {}
            Err(other) => prop_assert!(false, "unexpected error: {other}"),
        }
    }
}
