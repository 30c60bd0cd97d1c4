//! Property-based tests - pragmatic approach testing core guarantees
//!
//! These tests complement the scenario tests by verifying properties
//! across a wide range of generated inputs: the counting contract holds
//! for arbitrary text, and serialize/parse round-trips hold for entries
//! whose text needs no quoting.

use optlex::{count, parse, to_string, Entry, OptList};
use proptest::prelude::*;

/// Entries built from a quote-free alphabet round-trip exactly; anything
/// needing quoting is not restorable verbatim (quotes are consumed on
/// parse and never re-emitted).
fn safe_entry() -> impl Strategy<Value = Entry> {
    (
        "[a-z][a-z0-9_]{0,8}",
        proptest::option::of("[a-z0-9_]{0,8}"),
    )
        .prop_map(|(tag, arg)| match arg {
            Some(arg) => Entry::with_arg(tag, arg),
            None => Entry::new(tag),
        })
}

proptest! {
    #[test]
    fn prop_count_at_least_one(input in ".*") {
        prop_assert!(count(&input) >= 1);
    }

    #[test]
    fn prop_count_is_parse_len_plus_sentinel(input in ".*") {
        prop_assert_eq!(count(&input), parse(&input).len() + 1);
    }

    #[test]
    fn prop_parse_never_emits_more_text_than_input(input in ".*") {
        let emitted: usize = parse(&input)
            .iter()
            .map(|e| e.tag.text().map_or(0, str::len) + e.arg.as_deref().map_or(0, str::len))
            .sum();
        prop_assert!(emitted <= input.len());
    }

    #[test]
    fn prop_safe_entries_roundtrip(entries in prop::collection::vec(safe_entry(), 0..12)) {
        let list = OptList::from(entries);
        let text = to_string(&list, ',', Some('='));
        prop_assert_eq!(parse(&text), list);
    }

    #[test]
    fn prop_deleting_equals_removing(
        entries in prop::collection::vec((safe_entry(), any::<bool>()), 0..12)
    ) {
        let mut with_deleted = OptList::new();
        let mut removed = OptList::new();
        for (entry, keep) in entries {
            if keep {
                removed.push(entry.clone());
                with_deleted.push(entry);
            } else {
                with_deleted.push(entry);
                let last = with_deleted.len() - 1;
                with_deleted.delete(last);
            }
        }
        prop_assert_eq!(
            to_string(&with_deleted, ',', Some('=')),
            to_string(&removed, ',', Some('='))
        );
    }

    #[test]
    fn prop_newline_joined_output_is_line_terminated(
        entries in prop::collection::vec(safe_entry(), 1..8)
    ) {
        let list = OptList::from(entries);
        let text = to_string(&list, '\n', Some('='));
        prop_assert!(text.ends_with('\n'));

        let comma = to_string(&list, ',', Some('='));
        prop_assert!(!comma.ends_with(','));
    }
}
