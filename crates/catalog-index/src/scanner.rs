//! Line-oriented method scanner.
//!
//! The scanner is a fold over `(line_number, line)` pairs. [`ScanState`]
//! carries the current category, the method currently being filled and
//! whether the cursor sits inside a code fence; [`MethodScanner::step`] maps
//! one state to the next without touching anything else.
//!
//! ```text
//! # Authentication          -> category = authentication
//! ### login()               -> open "login"
//! await ns.login(email)     -> signature (first match only)
//! Promise<Member>           -> returns   (first match only)
//! ### logout()              -> flush "login", open "logout"
//! <eof>                     -> flush "logout"
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::model::{Category, MethodDescriptor, signature_parameters};
use crate::rules::classify_heading;

/// ATX heading: level and text.
static HEADING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.*?)\s*$").expect("Invalid heading regex"));

/// Method heading text: `name()` or `name(args)`, optionally in backticks.
static METHOD_HEADING_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^`?([A-Za-z_$][\w$]*)\s*\([^)]*\)`?").expect("Invalid method heading regex")
});

/// Prefix of a typed return annotation.
const RETURNS_PREFIX: &str = "Promise<";

/// A method heading has been seen and its body is being read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenMethod {
    /// The exact heading line that opened this method.
    pub heading: String,
    pub descriptor: MethodDescriptor,
}

/// Scanner state threaded through the fold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanState {
    pub category: Category,
    pub open: Option<OpenMethod>,
    pub in_fence: bool,
    /// Methods already flushed, in source order.
    pub methods: Vec<MethodDescriptor>,
}

impl ScanState {
    /// Move the open method, if any, into the output list.
    fn flush(mut self) -> Self {
        if let Some(open) = self.open.take() {
            let mut descriptor = open.descriptor;
            descriptor.parameters = signature_parameters(&descriptor.signature);
            self.methods.push(descriptor);
        }
        self
    }

    /// Flush any open method and return the output list.
    pub fn finish(self) -> Vec<MethodDescriptor> {
        self.flush().methods
    }
}

/// Scans markdown for `### name()` method sections.
#[derive(Debug, Clone)]
pub struct MethodScanner {
    namespace: String,
    invocation: Regex,
}

impl MethodScanner {
    /// Create a scanner recognising invocations on `namespace`, e.g.
    /// `$memberstackDom` matches `$memberstackDom.getCurrentMember()`.
    pub fn new(namespace: &str) -> Result<Self> {
        let pattern = format!(r"{}\.([A-Za-z_$][\w$]*)\s*\(", regex::escape(namespace));
        let invocation = Regex::new(&pattern).map_err(|source| Error::Pattern {
            namespace: namespace.to_string(),
            source,
        })?;

        Ok(Self {
            namespace: namespace.to_string(),
            invocation,
        })
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Scan a whole document.
    pub fn scan(&self, text: &str) -> Vec<MethodDescriptor> {
        let methods = text
            .lines()
            .enumerate()
            .fold(ScanState::default(), |state, (idx, line)| {
                self.step(state, idx + 1, line)
            })
            .finish();

        tracing::debug!(
            namespace = %self.namespace,
            methods = methods.len(),
            "scanned method catalog"
        );
        methods
    }

    /// Advance the state by one line.
    pub fn step(&self, mut state: ScanState, line_number: usize, line: &str) -> ScanState {
        let line = line.trim_end_matches('\r');

        if is_fence(line) {
            state.in_fence = !state.in_fence;
            return state;
        }

        if !state.in_fence
            && let Some(caps) = HEADING_REGEX.captures(line)
        {
            let level = caps[1].len();
            let text = caps.get(2).map_or("", |m| m.as_str());
            return self.on_heading(state, line_number, line, level, text);
        }

        if let Some(open) = state.open.as_mut() {
            self.observe(&mut open.descriptor, line, state.in_fence);
        }
        state
    }

    fn on_heading(
        &self,
        state: ScanState,
        line_number: usize,
        line: &str,
        level: usize,
        text: &str,
    ) -> ScanState {
        if level == 3
            && let Some(caps) = METHOD_HEADING_REGEX.captures(text)
        {
            // A repeat of the heading that opened the current method is ignored.
            if state.open.as_ref().is_some_and(|open| open.heading == line) {
                return state;
            }

            let mut state = state.flush();
            let descriptor = MethodDescriptor::new(&caps[1], state.category, line_number);
            state.open = Some(OpenMethod {
                heading: line.to_string(),
                descriptor,
            });
            return state;
        }

        if level <= 2 {
            let mut state = state.flush();
            if let Some(category) = classify_heading(text) {
                state.category = category;
            }
            return state;
        }

        state
    }

    fn observe(&self, descriptor: &mut MethodDescriptor, line: &str, in_fence: bool) {
        let invocation = self.find_invocation(line);
        let returns = find_returns(line);

        if descriptor.description.is_empty()
            && !in_fence
            && invocation.is_none()
            && returns.is_none()
            && is_prose(line)
        {
            descriptor.description = line.trim().to_string();
        }

        if descriptor.signature.is_empty()
            && let Some(signature) = invocation
        {
            descriptor.signature = signature;
        }

        if descriptor.returns.is_empty()
            && let Some(returns) = returns
        {
            descriptor.returns = returns.to_string();
        }
    }

    /// First `namespace.ident(...)` call on the line with a balanced
    /// argument list, without the namespace prefix.
    fn find_invocation(&self, line: &str) -> Option<String> {
        self.invocation.captures_iter(line).find_map(|caps| {
            let whole = caps.get(0)?;
            let name = caps.get(1)?;
            // `dns.lookup(` is not an invocation on `ns`.
            if line[..whole.start()]
                .chars()
                .next_back()
                .is_some_and(continues_identifier)
            {
                return None;
            }
            let close = matching_paren(line, whole.end() - 1)?;
            let args = &line[whole.end()..close];
            Some(format!("{}({})", name.as_str(), args))
        })
    }
}

/// Byte index of the `)` matching the `(` at `open`, on the same line.
fn matching_paren(line: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (idx, ch) in line[open..].char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + idx);
                }
            }
            _ => {}
        }
    }
    None
}

/// Characters that make the namespace part of a longer expression.
fn continues_identifier(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '_' | '$' | '.')
}

/// First `Promise<...>` annotation on the line, up to its matching `>`.
/// The `>` of an arrow `=>` does not close a generic.
fn find_returns(line: &str) -> Option<&str> {
    let start = line.find(RETURNS_PREFIX)?;
    let open = start + RETURNS_PREFIX.len() - 1;
    let mut depth = 0usize;
    let mut prev = None;
    for (idx, ch) in line[open..].char_indices() {
        match ch {
            '<' => depth += 1,
            '>' if prev != Some('=') => {
                depth -= 1;
                if depth == 0 {
                    return Some(&line[start..=open + idx]);
                }
            }
            _ => {}
        }
        prev = Some(ch);
    }
    None
}

fn is_fence(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with("```") || trimmed.starts_with("~~~")
}

/// Plain text worth keeping as a description.
fn is_prose(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty()
        && !trimmed.starts_with('|')
        && !trimmed.starts_with("<!--")
        && !trimmed.starts_with("---")
        && !trimmed.starts_with("**Returns")
}
