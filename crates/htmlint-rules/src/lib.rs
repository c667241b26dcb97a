//! # htmlint-rules
//!
//! Built-in lint rules for htmlint.
//!
//! ## Available Rules
//!
//! | Name | Severity | Description |
//! |------|----------|-------------|
//! | `img-alt` | error | `<img>` must have `alt` |
//! | `button-type` | warning | `<button>` should declare `type` |
//! | `duplicate-id` | error | `id` values must be unique |
//! | `no-dup-attr` | error | no attribute twice on one element |
//! | `no-inline-style` | info | avoid `style` attributes |
//! | `require-lang` | error | `<html>` must have a non-empty `lang` |
//! | `htmx-attributes` | mixed | htmx attribute names and values |
//! | `template-syntax-valid` | error | Go template delimiters and blocks |
//!
//! ## Usage
//!
//! ```ignore
//! use htmlint_core::{EffectiveConfig, Linter};
//!
//! let linter = Linter::builder()
//!     .config(EffectiveConfig::default())
//!     .rules(htmlint_rules::all_rules())
//!     .build();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod button_type;
mod duplicate_id;
mod htmx;
mod img_alt;
mod no_dup_attr;
mod no_inline_style;
mod registry;
mod require_lang;
mod template_syntax_valid;

pub use button_type::ButtonType;
pub use duplicate_id::DuplicateId;
pub use htmx::HtmxAttributes;
pub use img_alt::ImgAlt;
pub use no_dup_attr::NoDupAttr;
pub use no_inline_style::NoInlineStyle;
pub use registry::{all_rules, rule_names};
pub use require_lang::RequireLang;
pub use template_syntax_valid::TemplateSyntaxValid;

/// Re-export core types for convenience.
pub use htmlint_core::{Finding, Rule, Severity};
