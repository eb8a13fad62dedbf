//! Rule tables for heading classification and keyword derivation.
//!
//! Both tables are ordered data. Category rules are evaluated top to bottom
//! and the first match wins; keyword rules all fire independently.

use crate::model::Category;

/// How a trigger is matched against lowercased text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Matches anywhere in the text.
    Substring(&'static str),
    /// Matches a whole alphanumeric word only. Used for short triggers like
    /// `ui` or `auth` that would otherwise hit "guide" or "author".
    Word(&'static str),
}

impl Trigger {
    pub fn matches(&self, lowered: &str) -> bool {
        match self {
            Trigger::Substring(needle) => lowered.contains(needle),
            Trigger::Word(word) => lowered
                .split(|c: char| !c.is_alphanumeric())
                .any(|token| token == *word),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    pub triggers: &'static [Trigger],
    pub category: Category,
}

/// Heading classification, highest priority first.
pub const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        triggers: &[Trigger::Substring("authentication"), Trigger::Word("auth")],
        category: Category::Authentication,
    },
    CategoryRule {
        triggers: &[Trigger::Substring("member")],
        category: Category::Members,
    },
    CategoryRule {
        triggers: &[Trigger::Substring("plan"), Trigger::Substring("subscription")],
        category: Category::Plans,
    },
    CategoryRule {
        triggers: &[Trigger::Word("ui"), Trigger::Substring("component")],
        category: Category::Ui,
    },
    CategoryRule {
        triggers: &[Trigger::Substring("advanced")],
        category: Category::Advanced,
    },
];

/// Classify heading text. `None` means the heading is not a category
/// heading and the current category should stand.
pub fn classify_heading(text: &str) -> Option<Category> {
    let lowered = text.to_lowercase();
    CATEGORY_RULES
        .iter()
        .find(|rule| rule.triggers.iter().any(|t| t.matches(&lowered)))
        .map(|rule| rule.category)
}

#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    /// Substring of the lowercased method name.
    pub trigger: &'static str,
    pub keywords: &'static [&'static str],
}

pub const KEYWORD_RULES: &[KeywordRule] = &[
    KeywordRule {
        trigger: "login",
        keywords: &["login", "signin", "authenticate"],
    },
    KeywordRule {
        trigger: "signup",
        keywords: &["signup", "register", "create account"],
    },
    KeywordRule {
        trigger: "member",
        keywords: &["member", "user", "profile"],
    },
    KeywordRule {
        trigger: "plan",
        keywords: &["plan", "subscription", "pricing"],
    },
    KeywordRule {
        trigger: "update",
        keywords: &["update", "modify", "change"],
    },
    KeywordRule {
        trigger: "delete",
        keywords: &["delete", "remove"],
    },
    KeywordRule {
        trigger: "get",
        keywords: &["get", "fetch", "retrieve"],
    },
    KeywordRule {
        trigger: "modal",
        keywords: &["modal", "ui", "dialog"],
    },
    KeywordRule {
        trigger: "password",
        keywords: &["password", "reset", "credentials"],
    },
    KeywordRule {
        trigger: "email",
        keywords: &["email", "verification", "contact"],
    },
    KeywordRule {
        trigger: "social",
        keywords: &["social", "oauth", "provider"],
    },
    KeywordRule {
        trigger: "payment",
        keywords: &["payment", "checkout", "billing"],
    },
];

/// Every keyword fired by a method name, in table order. May repeat a
/// keyword when two rules share it.
pub fn keywords_for(method_name: &str) -> impl Iterator<Item = &'static str> {
    let lowered = method_name.to_lowercase();
    KEYWORD_RULES
        .iter()
        .filter(move |rule| lowered.contains(rule.trigger))
        .flat_map(|rule| rule.keywords.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Authentication", Some(Category::Authentication))]
    #[case("Member Management", Some(Category::Members))]
    #[case("Plans & Subscriptions", Some(Category::Plans))]
    #[case("Subscription billing", Some(Category::Plans))]
    #[case("UI Components", Some(Category::Ui))]
    #[case("Pre-built component library", Some(Category::Ui))]
    #[case("Advanced Features", Some(Category::Advanced))]
    #[case("Quick Start Guide", None)]
    #[case("Build output", None)]
    #[case("Auth", Some(Category::Authentication))]
    #[case("Auth & sessions", Some(Category::Authentication))]
    #[case("Author notes", None)]
    #[case("OAuth providers (advanced)", Some(Category::Advanced))]
    fn test_classify_heading(#[case] heading: &str, #[case] expected: Option<Category>) {
        assert_eq!(classify_heading(heading), expected);
    }

    #[test]
    fn test_priority_auth_over_member() {
        assert_eq!(
            classify_heading("Member Authentication"),
            Some(Category::Authentication)
        );
    }

    #[test]
    fn test_keywords_multiple_rules_fire() {
        let fired: Vec<_> = keywords_for("signupMemberEmailPassword").collect();
        assert!(fired.contains(&"register"));
        assert!(fired.contains(&"profile"));
        assert!(fired.contains(&"verification"));
        assert!(fired.contains(&"credentials"));
        assert!(!fired.contains(&"signin"));
    }

    #[test]
    fn test_keywords_none_fire() {
        assert_eq!(keywords_for("logout").count(), 0);
    }
}
