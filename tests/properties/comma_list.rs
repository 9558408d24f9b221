//! Property tests for the comma-separated list codec.

use proptest::prelude::*;

use docent::CommaList;

fn item() -> impl Strategy<Value = String> {
    // Printable, comma-free, no surrounding whitespace
    proptest::string::string_regex("[A-Za-z0-9:\\-][A-Za-z0-9 :\\-]{0,15}")
        .unwrap()
        .prop_map(|s| s.trim().to_string())
        .prop_filter("non-empty", |s| !s.is_empty())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: joining canonical items and parsing them back is lossless.
    #[test]
    fn property_join_then_parse_round_trips(items in proptest::collection::vec(item(), 0..=8)) {
        let text = CommaList::join(&items);
        let parsed = CommaList::parse(&text);

        prop_assert_eq!(parsed.as_slice(), items.as_slice());
        prop_assert_eq!(CommaList::join(parsed.as_slice()), text);
    }

    /// PROPERTY: parsing is insensitive to padding around separators.
    #[test]
    fn property_padding_is_ignored(
        items in proptest::collection::vec(item(), 1..=6),
        pad in "[ \t]{0,3}",
    ) {
        let padded = items
            .iter()
            .map(|i| format!("{pad}{i}{pad}"))
            .collect::<Vec<_>>()
            .join(",");

        prop_assert_eq!(CommaList::parse(&padded).into_vec(), items);
    }

    /// PROPERTY: parsed items are never empty and never carry outer whitespace.
    #[test]
    fn property_parsed_items_are_trimmed(text in "[A-Za-z ,]{0,40}") {
        for part in CommaList::parse(&text).as_slice() {
            prop_assert!(!part.is_empty());
            prop_assert_eq!(part.trim(), part.as_str());
        }
    }
}
