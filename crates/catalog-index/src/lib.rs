//! Method catalog compiler.
//!
//! Turns a markdown catalog of API methods into a queryable [`IndexDocument`].
//!
//! # Pipeline
//!
//! ```text
//! markdown text
//!   -> MethodScanner   (line fold, one MethodDescriptor per `### name()` heading)
//!   -> keyword index   (substring triggers on method names)
//!   -> IndexAssembler  (categories, quick reference, flattened list)
//!   -> IndexDocument   (serialized as pretty JSON)
//! ```
//!
//! The scanner is not a markdown parser. It recognises ATX headings, code
//! fences, invocation lines against one namespace and `Promise<..>` return
//! annotations; everything else is prose.
//!
//! # Example
//!
//! ```
//! use catalog_index::{IndexAssembler, MethodScanner};
//!
//! let scanner = MethodScanner::new("ns").unwrap();
//! let methods = scanner.scan("# Authentication\n### login()\nawait ns.login(email)\n");
//! assert_eq!(methods[0].signature, "login(email)");
//!
//! let index = IndexAssembler::new("1.0.0").assemble(methods, chrono::Utc::now());
//! assert_eq!(index.total_methods, 1);
//! ```

pub mod assembler;
pub mod error;
pub mod keywords;
pub mod model;
pub mod rules;
pub mod scanner;
pub mod source;

pub use assembler::{IndexAssembler, IndexDocument, MethodEntry, QuickReference};
pub use error::{Error, Result};
pub use keywords::{KeywordIndex, build_keyword_index};
pub use model::{Category, MethodDescriptor};
pub use scanner::{MethodScanner, ScanState};
pub use source::{compile_file, load_source};
