//! Property tests for item identity.

use std::collections::HashSet;

use proptest::prelude::*;

use navmenu::{Item, ItemId, Menu};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A menu never holds two items with the same identity.
    #[test]
    fn property_identities_are_unique(
        texts in proptest::collection::vec("[a-d]{1,2}", 0..32),
        ids in proptest::collection::vec(proptest::option::of(0u32..4), 0..32),
    ) {
        let mut menu = Menu::new("prop");
        for (i, text) in texts.iter().enumerate() {
            let mut item = Item::new(text.as_str());
            if let Some(Some(id)) = ids.get(i) {
                item.id(*id);
            }
            menu.add(item);
        }

        let keys: Vec<ItemId> = menu.all().iter().map(Item::key).collect();
        let distinct: HashSet<&ItemId> = keys.iter().collect();
        prop_assert_eq!(distinct.len(), keys.len());
    }

    /// PROPERTY: Integer ids and their decimal strings name the same item.
    #[test]
    fn property_integer_ids_match_strings(id in any::<i64>()) {
        prop_assert_eq!(ItemId::from(id), ItemId::from(id.to_string()));
    }

    /// PROPERTY: The last registration of an identity wins.
    #[test]
    fn property_last_registration_wins(orders in proptest::collection::vec(any::<i64>(), 1..8)) {
        let mut menu = Menu::new("prop");
        for order in &orders {
            menu.item("same").order(*order);
        }

        prop_assert_eq!(menu.all().len(), 1);
        prop_assert_eq!(menu.get("same").map(Item::get_order), orders.last().copied());
    }
}
