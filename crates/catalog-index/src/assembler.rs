//! Index document assembly.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::keywords::{KeywordIndex, build_keyword_index};
use crate::model::MethodDescriptor;

/// Curated group name -> well-known method names.
pub type QuickReference = IndexMap<String, Vec<String>>;

/// A method in the flattened `allMethods` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodEntry {
    #[serde(flatten)]
    pub method: MethodDescriptor,
    /// Pointer back into the catalog, e.g. `METHODS.md#L42`.
    pub doc_location: String,
}

/// The compiled catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexDocument {
    pub version: String,
    pub total_methods: usize,
    pub last_updated: DateTime<Utc>,
    pub categories: IndexMap<String, Vec<MethodDescriptor>>,
    pub search_keywords: KeywordIndex,
    pub quick_reference: QuickReference,
    pub all_methods: Vec<MethodEntry>,
}

impl IndexDocument {
    /// Serialize as indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn method(&self, name: &str) -> Option<&MethodEntry> {
        self.all_methods.iter().find(|entry| entry.method.name == name)
    }
}

/// Combines scanned methods into an [`IndexDocument`].
#[derive(Debug, Clone)]
pub struct IndexAssembler {
    version: String,
    doc_location: String,
    quick_reference: QuickReference,
}

impl IndexAssembler {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            doc_location: String::new(),
            quick_reference: QuickReference::new(),
        }
    }

    /// Document name used in `docLocation` pointers.
    pub fn with_doc_location(mut self, doc: impl Into<String>) -> Self {
        self.doc_location = doc.into();
        self
    }

    /// Curated groups. Names missing from the scanned corpus are dropped at
    /// assembly time.
    pub fn with_quick_reference(mut self, quick_reference: QuickReference) -> Self {
        self.quick_reference = quick_reference;
        self
    }

    pub fn assemble(&self, methods: Vec<MethodDescriptor>, generated_at: DateTime<Utc>) -> IndexDocument {
        let categories = group_by_category(&methods);
        let search_keywords = build_keyword_index(&methods);
        let quick_reference = self.filter_quick_reference(&methods);

        let all_methods: Vec<MethodEntry> = methods
            .into_iter()
            .map(|method| MethodEntry {
                doc_location: self.location_of(&method),
                method,
            })
            .collect();

        tracing::debug!(
            methods = all_methods.len(),
            categories = categories.len(),
            keywords = search_keywords.len(),
            "assembled index"
        );

        IndexDocument {
            version: self.version.clone(),
            total_methods: all_methods.len(),
            last_updated: generated_at,
            categories,
            search_keywords,
            quick_reference,
            all_methods,
        }
    }

    fn location_of(&self, method: &MethodDescriptor) -> String {
        format!("{}#L{}", self.doc_location, method.line_number)
    }

    fn filter_quick_reference(&self, methods: &[MethodDescriptor]) -> QuickReference {
        let known: HashSet<&str> = methods.iter().map(|m| m.name.as_str()).collect();

        self.quick_reference
            .iter()
            .map(|(group, names)| {
                let mut present: Vec<String> = Vec::new();
                for name in names {
                    if !known.contains(name.as_str()) {
                        tracing::trace!(group = %group, name = %name, "quick reference name not in catalog");
                        continue;
                    }
                    if !present.contains(name) {
                        present.push(name.clone());
                    }
                }
                (group.clone(), present)
            })
            .collect()
    }
}

/// Category name -> methods, categories in first-seen order.
fn group_by_category(methods: &[MethodDescriptor]) -> IndexMap<String, Vec<MethodDescriptor>> {
    methods.iter().fold(IndexMap::new(), |mut groups, method| {
        groups
            .entry(method.category.to_string())
            .or_insert_with(Vec::new)
            .push(method.clone());
        groups
    })
}
