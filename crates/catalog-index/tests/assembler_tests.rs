//! Integration tests for index assembly.

use catalog_index::{
    Error, IndexAssembler, IndexDocument, MethodScanner, QuickReference, compile_file,
};
use chrono::{DateTime, TimeZone, Utc};
use pretty_assertions::assert_eq;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

fn quick_reference(groups: &[(&str, &[&str])]) -> QuickReference {
    groups
        .iter()
        .map(|(group, names)| {
            (
                group.to_string(),
                names.iter().map(|n| n.to_string()).collect(),
            )
        })
        .collect()
}

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../test-fixtures/catalog/METHODS.md")
}

fn compile_fixture() -> IndexDocument {
    let scanner = MethodScanner::new("$memberstackDom").unwrap();
    let assembler = IndexAssembler::new("2.0.0")
        .with_doc_location("METHODS.md")
        .with_quick_reference(quick_reference(&[
            ("auth", &["loginMemberEmailPassword", "logout", "loginWithMagicLink"]),
            ("members", &["getCurrentMember", "getCurrentMember", "updateMember"]),
            ("legacy", &["getMemberJSON"]),
        ]));
    compile_file(&fixture_path(), &scanner, &assembler, fixed_time()).unwrap()
}

#[test]
fn test_scenario_json_shape() {
    let source = "# Authentication\n### login()\n...await ns.login(email)...\nPromise<Member>\n### logout()\n";
    let methods = MethodScanner::new("ns").unwrap().scan(source);
    let index = IndexAssembler::new("1.0.0")
        .with_doc_location("METHODS.md")
        .with_quick_reference(quick_reference(&[("auth", &["login", "signup"])]))
        .assemble(methods, fixed_time());

    insta::assert_snapshot!(index.to_json_pretty().unwrap(), @r#"
    {
      "version": "1.0.0",
      "totalMethods": 2,
      "lastUpdated": "2024-01-01T00:00:00Z",
      "categories": {
        "authentication": [
          {
            "name": "login",
            "category": "authentication",
            "lineNumber": 2,
            "signature": "login(email)",
            "description": "",
            "returns": "Promise<Member>",
            "parameters": [
              "email"
            ]
          },
          {
            "name": "logout",
            "category": "authentication",
            "lineNumber": 5,
            "signature": "",
            "description": "",
            "returns": "",
            "parameters": []
          }
        ]
      },
      "searchKeywords": {
        "login": [
          "login"
        ],
        "signin": [
          "login"
        ],
        "authenticate": [
          "login"
        ]
      },
      "quickReference": {
        "auth": [
          "login"
        ]
      },
      "allMethods": [
        {
          "name": "login",
          "category": "authentication",
          "lineNumber": 2,
          "signature": "login(email)",
          "description": "",
          "returns": "Promise<Member>",
          "parameters": [
            "email"
          ],
          "docLocation": "METHODS.md#L2"
        },
        {
          "name": "logout",
          "category": "authentication",
          "lineNumber": 5,
          "signature": "",
          "description": "",
          "returns": "",
          "parameters": [],
          "docLocation": "METHODS.md#L5"
        }
      ]
    }
    "#);
}

#[test]
fn test_fixture_totals_and_categories() {
    let index = compile_fixture();

    assert_eq!(index.total_methods, 15);
    assert_eq!(index.total_methods, index.all_methods.len());

    let categories: Vec<&str> = index.categories.keys().map(|k| k.as_str()).collect();
    assert_eq!(
        categories,
        vec!["general", "authentication", "members", "plans", "ui", "advanced"]
    );
    assert_eq!(index.categories["authentication"].len(), 4);
    assert_eq!(index.categories["members"].len(), 4);
}

#[test]
fn test_quick_reference_drops_unknown_names() {
    let index = compile_fixture();

    assert_eq!(
        index.quick_reference["auth"],
        vec!["loginMemberEmailPassword", "logout"]
    );
    assert_eq!(
        index.quick_reference["members"],
        vec!["getCurrentMember", "updateMember"]
    );
    assert!(index.quick_reference["legacy"].is_empty());

    for names in index.quick_reference.values() {
        for name in names {
            assert!(index.method(name).is_some(), "{name} not in allMethods");
        }
    }
}

#[test]
fn test_fixture_search_keywords() {
    let index = compile_fixture();

    assert_eq!(
        index.search_keywords["get"],
        vec!["getApp", "getCurrentMember", "getPlans"]
    );
    assert_eq!(index.search_keywords["dialog"], vec!["openModal", "hideModal"]);
    assert_eq!(
        index.search_keywords["pricing"],
        vec!["getPlans", "purchasePlansWithCheckout"]
    );
    assert_eq!(
        index.search_keywords["modify"],
        vec!["updateMember", "updateMemberAuth"]
    );
}

#[test]
fn test_json_round_trip_is_lossless() {
    let index = compile_fixture();
    let json = index.to_json_pretty().unwrap();
    let parsed: IndexDocument = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, index);
}

#[test]
fn test_doc_location_uses_heading_line() {
    let index = compile_fixture();
    let logout = index.method("logout").unwrap();
    assert_eq!(logout.doc_location, format!("METHODS.md#L{}", logout.method.line_number));
}

#[test]
fn test_missing_source_propagates() {
    let temp = TempDir::new().unwrap();
    let scanner = MethodScanner::new("ns").unwrap();
    let result = compile_file(
        &temp.path().join("missing.md"),
        &scanner,
        &IndexAssembler::new("1"),
        fixed_time(),
    );
    assert!(matches!(result, Err(Error::SourceNotFound { .. })));
}
