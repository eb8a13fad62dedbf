//! Keyword -> method name inverted index.

use indexmap::IndexMap;

use crate::model::MethodDescriptor;
use crate::rules::keywords_for;

/// Keyword to method names, both in first-seen order. A name appears at most
/// once per keyword.
pub type KeywordIndex = IndexMap<String, Vec<String>>;

/// Build the keyword index for an ordered method list.
///
/// Deterministic: the same list always yields the same keys, lists and order.
pub fn build_keyword_index(methods: &[MethodDescriptor]) -> KeywordIndex {
    methods.iter().fold(KeywordIndex::new(), |mut index, method| {
        for keyword in keywords_for(&method.name) {
            insert_unique(&mut index, keyword, &method.name);
        }
        index
    })
}

fn insert_unique(index: &mut KeywordIndex, keyword: &str, name: &str) {
    let names = index.entry(keyword.to_string()).or_default();
    if !names.iter().any(|existing| existing == name) {
        names.push(name.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    fn method(name: &str) -> MethodDescriptor {
        MethodDescriptor::new(name, Category::General, 1)
    }

    #[test]
    fn test_multiple_rules_fire_for_one_name() {
        let index = build_keyword_index(&[method("deleteMember")]);
        assert_eq!(index["remove"], vec!["deleteMember"]);
        assert_eq!(index["user"], vec!["deleteMember"]);
    }

    #[test]
    fn test_repeated_method_name_not_duplicated() {
        let index = build_keyword_index(&[method("getPlans"), method("getPlans")]);
        assert_eq!(index["get"], vec!["getPlans"]);
        assert_eq!(index["pricing"], vec!["getPlans"]);
    }

    #[test]
    fn test_first_seen_order() {
        let index = build_keyword_index(&[method("updateMember"), method("getMember")]);
        assert_eq!(index["member"], vec!["updateMember", "getMember"]);
        let keys: Vec<_> = index.keys().take(3).cloned().collect();
        assert_eq!(keys, vec!["member", "user", "profile"]);
    }
}
