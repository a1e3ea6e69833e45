//! Rule engine deciding which variant of a content block a viewer sees.
//!
//! Rules are written in a compact grammar (`editor`, `editor:!edit_posts`,
//! `:manage_options`, `userid:42`, ...) and compiled into an ordered list of
//! predicates. Each predicate is a [`Specification`](specification::Specification)
//! over a [`ViewerContext`](context::ViewerContext), so it composes with the
//! rest of the specification algebra.
//!
//! # Example
//!
//! ```
//! use hidethis_rules::prelude::*;
//!
//! let viewer = ViewerContext::logged_in("42", "alice", "alice@example.com").with_role("editor");
//!
//! let rules = RuleSet::parse("administrator, editor");
//! assert_eq!(rules.resolve("shown", "hidden", &viewer), "shown");
//! ```

pub mod context;
pub mod error;
pub mod operators;
pub mod parser;
pub mod resolver;
pub mod rules;
pub mod specification;

/// Prelude module - import everything you need with `use hidethis_rules::prelude::*`
pub mod prelude {
    pub use crate::context::{CapabilityCheck, ViewerContext};
    pub use crate::error::RuleError;
    pub use crate::operators::Spec;
    pub use crate::parser::{
        Predicate, PredicateKind, UserKey, expected_value, is_negative, parse_attr_list,
        parse_predicates, parse_rule_spec, real_name,
    };
    pub use crate::resolver::{
        ResolutionRequest, RuleSet, first_match, resolve_pass, resolve_predicates,
    };
    pub use crate::rules::*;
    pub use crate::specification::{AlwaysTrue, And, BoxedSpec, Not, Specification};
}
