use proptest::prelude::*;
use std::collections::BTreeSet;
use word_trie_core::Trie;

fn word_list(max_words: usize) -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-dé]{0,8}", 0..max_words)
}

proptest! {
    #[test]
    fn inserted_words_are_contained(words in word_list(50), others in word_list(20)) {
        let mut trie = Trie::new();
        for word in &words {
            trie.insert(word);
            prop_assert!(trie.contains(word));
        }

        trie.extend(&others);
        for word in words.iter().chain(&others) {
            prop_assert!(trie.contains(word));
        }
    }

    #[test]
    fn queries_do_not_modify_the_trie(words in word_list(50), queries in word_list(50)) {
        let trie: Trie = words.iter().collect();
        let all_words: Vec<String> = trie.all_words().into_iter().map(String::from).collect();
        let nb_nodes = trie.node_count();

        for query in &queries {
            prop_assert_eq!(trie.contains(query), words.contains(query));
            trie.node_at(query);
            trie.words_containing(query);
            trie.words_with_prefix(query);
        }

        prop_assert_eq!(trie.all_words(), all_words);
        prop_assert_eq!(trie.node_count(), nb_nodes);
    }

    #[test]
    fn all_words_is_sorted_and_deduplicated(words in word_list(50)) {
        let trie: Trie = words.iter().collect();
        let expected: BTreeSet<&str> = words.iter().map(String::as_str).collect();

        // Siblings are visited by ascending character, and a word is visited
        // before its extensions: this is exactly the lexicographic order.
        prop_assert_eq!(trie.all_words(), expected.into_iter().collect::<Vec<_>>());
        prop_assert_eq!(trie.len(), trie.all_words().len());
    }

    #[test]
    fn words_containing_filters_all_words(words in word_list(50), substring in "[a-dé]{0,3}") {
        let trie: Trie = words.iter().collect();
        let expected: Vec<&str> = trie
            .all_words()
            .into_iter()
            .filter(|word| word.contains(substring.as_str()))
            .collect();

        prop_assert_eq!(trie.words_containing(&substring), expected);
    }

    #[test]
    fn words_with_prefix_filters_all_words(words in word_list(50), prefix in "[a-dé]{0,3}") {
        let trie: Trie = words.iter().collect();
        let expected: Vec<&str> = trie
            .all_words()
            .into_iter()
            .filter(|word| word.starts_with(prefix.as_str()))
            .collect();

        prop_assert_eq!(trie.words_with_prefix(&prefix), expected);
    }
}

#[test]
fn empty_substring_matches_every_word() {
    let trie: Trie = vec!["isaiat", "", "isaia", "isaias"].into_iter().collect();

    assert_eq!(trie.words_containing(""), trie.all_words());
    assert_eq!(trie.all_words(), vec!["", "isaia", "isaias", "isaiat"]);
}
