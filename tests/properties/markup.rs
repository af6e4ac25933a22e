//! Property tests for escaping and tag stripping.

use proptest::prelude::*;

use navmenu::markup::{esc, strip_tags};
use navmenu::Item;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Escaped text carries no markup-significant characters.
    #[test]
    fn property_esc_removes_markup(text in "(?s).{0,128}") {
        let escaped = esc(&text);
        prop_assert!(!escaped.contains(['<', '>', '"', '\'']));
    }

    /// PROPERTY: Stripped markup has no tag openers left.
    #[test]
    fn property_strip_tags_removes_openers(html in "(?s).{0,128}") {
        prop_assert!(!strip_tags(&html).contains('<'));
    }

    /// PROPERTY: Text without angle brackets survives stripping unchanged.
    #[test]
    fn property_strip_tags_keeps_plain_text(text in "[^<>]{0,64}") {
        prop_assert_eq!(strip_tags(&text), text);
    }

    /// PROPERTY: Text items always render escaped text.
    #[test]
    fn property_text_items_render_escaped(text in "(?s).{0,64}") {
        let mut item = Item::new(text.as_str());
        prop_assert_eq!(item.render(), esc(&text).into_owned());
    }
}
