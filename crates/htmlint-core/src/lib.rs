//! # htmlint-core
//!
//! Core framework for linting HTML documents and templates.
//!
//! This crate provides the foundational types for building an HTML linter:
//!
//! - [`Rule`] trait for per-document rules
//! - [`config`] for `.htmlvalidate.json` discovery, presets and `extends`
//! - [`ignore`] for `.htmlvalidateignore` patterns
//! - [`Linter`] for running rules over files
//! - [`Finding`] for representing lint findings
//!
//! ## Example
//!
//! ```ignore
//! use htmlint_core::{config, Linter};
//!
//! let (config, _path) = config::resolve(".".as_ref())?.unwrap_or_default();
//! let linter = Linter::builder()
//!     .config(config)
//!     .rules(htmlint_rules::all_rules())
//!     .build();
//!
//! let result = linter.run(&["templates".into()])?;
//! std::process::exit(i32::from(result.error_count() > 0));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
mod context;
pub mod ignore;
mod linter;
mod rule;
mod types;

pub use config::{EffectiveConfig, FrameworkOptions, HtmxVersion};
pub use context::FileContext;
pub use linter::{Linter, LinterBuilder, LinterError, TEMPLATE_EXTENSIONS};
pub use rule::{Rule, RuleBox};
pub use types::{Finding, FindingDiagnostic, LintResult, Location, Severity, Suggestion};

pub use htmlint_parser as parser;
