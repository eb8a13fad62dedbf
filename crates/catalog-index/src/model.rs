//! Method descriptor types

use std::fmt;

use serde::{Deserialize, Serialize};

/// Catalog section a method belongs to.
///
/// Decided by the most recent recognised heading above the method, not by
/// heading nesting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Authentication,
    Members,
    Plans,
    Ui,
    Advanced,
    #[default]
    General,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Authentication => "authentication",
            Category::Members => "members",
            Category::Plans => "plans",
            Category::Ui => "ui",
            Category::Advanced => "advanced",
            Category::General => "general",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One documented API method.
///
/// Fields the scanner could not find stay empty; a sparse descriptor is not
/// an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodDescriptor {
    pub name: String,
    pub category: Category,
    /// 1-based line of the `### name()` heading.
    pub line_number: usize,
    /// Invocation without the namespace prefix, e.g. `login(email)`.
    pub signature: String,
    pub description: String,
    /// Typed return annotation, e.g. `Promise<Member>`.
    pub returns: String,
    pub parameters: Vec<String>,
}

impl MethodDescriptor {
    pub fn new(name: impl Into<String>, category: Category, line_number: usize) -> Self {
        Self {
            name: name.into(),
            category,
            line_number,
            ..Default::default()
        }
    }
}

/// Split the argument list of a signature on top-level commas.
///
/// `login({ email, password }, opts)` yields `["{ email, password }", "opts"]`.
/// Returns an empty list when the signature has no parenthesised arguments.
pub fn signature_parameters(signature: &str) -> Vec<String> {
    let Some(open) = signature.find('(') else {
        return Vec::new();
    };
    let Some(close) = signature.rfind(')') else {
        return Vec::new();
    };
    if close <= open {
        return Vec::new();
    }

    let mut params = Vec::new();
    let mut depth = 0usize;
    let mut current = String::new();
    for ch in signature[open + 1..close].chars() {
        match ch {
            '(' | '{' | '[' | '<' => {
                depth += 1;
                current.push(ch);
            }
            // `=>` is an arrow, not a closing generic.
            '>' if current.ends_with('=') => current.push(ch),
            ')' | '}' | ']' | '>' => {
                depth = depth.saturating_sub(1);
                current.push(ch);
            }
            ',' if depth == 0 => {
                params.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }
    params.push(current);

    params
        .into_iter()
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&Category::Ui).unwrap();
        assert_eq!(json, "\"ui\"");
        assert_eq!(Category::default(), Category::General);
    }

    #[test]
    fn test_parameters_simple() {
        assert_eq!(signature_parameters("login(email, password)"), vec!["email", "password"]);
    }

    #[test]
    fn test_parameters_nested_object() {
        assert_eq!(
            signature_parameters("signup({ email, password }, { redirect: true })"),
            vec!["{ email, password }", "{ redirect: true }"]
        );
    }

    #[test]
    fn test_parameters_arrow_inside_object() {
        assert_eq!(
            signature_parameters("openModal({ onClose: () => done, type: 1 }, opts)"),
            vec!["{ onClose: () => done, type: 1 }", "opts"]
        );
        assert_eq!(
            signature_parameters("on(Map<string, (e) => void>, cb)"),
            vec!["Map<string, (e) => void>", "cb"]
        );
    }

    #[test]
    fn test_parameters_empty() {
        assert!(signature_parameters("logout()").is_empty());
        assert!(signature_parameters("").is_empty());
    }
}
