//! Rule-set resolution.
//!
//! A rule set is either one of the absolute values (`all`, `logged`, `!logged`)
//! or an ordered predicate list. A predicate list is an OR-scan where the first
//! matching predicate wins; an empty list never matches.

use crate::context::ViewerContext;
use crate::parser::{parse_rule_spec, Predicate};
use crate::rules::IsLoggedIn;
use crate::specification::{AlwaysTrue, Not, Specification};

pub const ALL: &str = "all";
pub const LOGGED: &str = "logged";
pub const NOT_LOGGED: &str = "!logged";

/// A parsed rule attribute.
///
/// `none` has no dedicated variant: it is a rule list holding the role `none`,
/// which no viewer is expected to have.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleSet {
    All,
    Logged,
    NotLogged,
    Rules(Vec<Predicate>),
}

impl RuleSet {
    pub fn parse(spec: &str) -> Self {
        Self::from_parts(spec, parse_rule_spec(spec))
    }

    /// Pick the absolute variant from `spec`, falling back to `predicates`.
    ///
    /// Hosts that rewrite the predicate list before resolution build the rule
    /// set through this.
    pub fn from_parts(spec: &str, predicates: Vec<Predicate>) -> Self {
        match spec {
            ALL => RuleSet::All,
            LOGGED => RuleSet::Logged,
            NOT_LOGGED => RuleSet::NotLogged,
            _ => RuleSet::Rules(predicates),
        }
    }

    /// Whether the viewer satisfies this rule set.
    pub fn matches(&self, ctx: &ViewerContext) -> bool {
        match self {
            RuleSet::All => AlwaysTrue.is_satisfied_by(ctx),
            RuleSet::Logged => IsLoggedIn.is_satisfied_by(ctx),
            RuleSet::NotLogged => Not(IsLoggedIn).is_satisfied_by(ctx),
            RuleSet::Rules(predicates) => first_match(predicates, ctx).is_some(),
        }
    }

    /// `on_match` when the viewer satisfies the rule set, else `on_miss`.
    pub fn resolve<'a>(&self, on_match: &'a str, on_miss: &'a str, ctx: &ViewerContext) -> &'a str {
        match self {
            RuleSet::Rules(predicates) => resolve_predicates(predicates, on_match, on_miss, ctx),
            absolute => {
                let matched = absolute.matches(ctx);
                tracing::debug!(rule_set = ?absolute, matched, "absolute rule resolved");
                if matched { on_match } else { on_miss }
            }
        }
    }
}

/// Index of the first predicate the viewer satisfies.
pub fn first_match(predicates: &[Predicate], ctx: &ViewerContext) -> Option<usize> {
    predicates.iter().position(|p| p.is_satisfied_by(ctx))
}

/// Linear first-match-wins scan over `predicates`.
///
/// Returns `matched` as soon as one predicate is satisfied, `unmatched` when
/// none is (including the empty list).
pub fn resolve_predicates<'a>(
    predicates: &[Predicate],
    matched: &'a str,
    unmatched: &'a str,
    ctx: &ViewerContext,
) -> &'a str {
    match first_match(predicates, ctx) {
        Some(index) => {
            tracing::debug!(predicate = %predicates[index], index, "rule matched");
            matched
        }
        None => {
            tracing::debug!(count = predicates.len(), "no rule matched");
            unmatched
        }
    }
}

/// One resolution pass: a rule set and the two content variants it chooses
/// between.
#[derive(Debug, Clone)]
pub struct ResolutionRequest<'a> {
    pub rules: RuleSet,
    /// Returned when the rule set matches.
    pub default_content: &'a str,
    /// Returned otherwise.
    pub alternative_content: &'a str,
}

impl<'a> ResolutionRequest<'a> {
    pub fn new(rule_spec: &str, default_content: &'a str, alternative_content: &'a str) -> Self {
        Self {
            rules: RuleSet::parse(rule_spec),
            default_content,
            alternative_content,
        }
    }

    pub fn resolve(&self, ctx: &ViewerContext) -> &'a str {
        self.rules
            .resolve(self.default_content, self.alternative_content, ctx)
    }
}

/// Resolve one pass of an attribute: parse `spec` and pick a side.
pub fn resolve_pass<'a>(spec: &str, on_match: &'a str, on_miss: &'a str, ctx: &ViewerContext) -> &'a str {
    ResolutionRequest::new(spec, on_match, on_miss).resolve(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subscriber() -> ViewerContext {
        ViewerContext::logged_in("7", "sam", "sam@example.com").with_role("subscriber")
    }

    #[test]
    fn test_rule_set_parse() {
        assert_eq!(RuleSet::parse("all"), RuleSet::All);
        assert_eq!(RuleSet::parse("logged"), RuleSet::Logged);
        assert_eq!(RuleSet::parse("!logged"), RuleSet::NotLogged);
        assert_eq!(
            RuleSet::parse("none"),
            RuleSet::Rules(vec![Predicate::new("none", "")])
        );
        assert_eq!(RuleSet::parse(""), RuleSet::Rules(vec![]));
    }

    #[test]
    fn test_absolute_values_are_exact() {
        // Padded or combined absolutes are ordinary rule lists.
        assert!(matches!(RuleSet::parse(" all"), RuleSet::Rules(_)));
        assert!(matches!(RuleSet::parse("logged,editor"), RuleSet::Rules(_)));
    }

    #[test]
    fn test_resolve_predicates_first_match() {
        let ctx = subscriber();
        let predicates = parse_rule_spec("editor, subscriber, :read");
        assert_eq!(first_match(&predicates, &ctx), Some(1));
        assert_eq!(resolve_predicates(&predicates, "yes", "no", &ctx), "yes");
    }

    #[test]
    fn test_resolve_predicates_no_match() {
        let ctx = subscriber();
        let predicates = parse_rule_spec("editor, administrator");
        assert_eq!(resolve_predicates(&predicates, "yes", "no", &ctx), "no");
        assert_eq!(resolve_predicates(&[], "yes", "no", &ctx), "no");
    }

    #[test]
    fn test_resolve_pass_logged() {
        let ctx = subscriber();
        let anon = ViewerContext::anonymous();
        assert_eq!(resolve_pass("logged", "yes", "no", &ctx), "yes");
        assert_eq!(resolve_pass("logged", "yes", "no", &anon), "no");
        assert_eq!(resolve_pass("!logged", "yes", "no", &ctx), "no");
        assert_eq!(resolve_pass("!logged", "yes", "no", &anon), "yes");
    }

    #[test]
    fn test_resolve_pass_all_and_none() {
        let ctx = subscriber();
        assert_eq!(resolve_pass("all", "yes", "no", &ctx), "yes");
        assert_eq!(resolve_pass("none", "yes", "no", &ctx), "no");
    }

    #[test]
    fn test_resolution_request() {
        let request = ResolutionRequest::new("userid:7", "SECRET", "");
        assert_eq!(request.resolve(&subscriber()), "SECRET");
        assert_eq!(request.resolve(&ViewerContext::anonymous()), "");
    }

    #[test]
    fn test_from_parts_uses_rewritten_predicates() {
        let ctx = subscriber();
        let rule_set = RuleSet::from_parts("editor", vec![Predicate::new("subscriber", "")]);
        assert_eq!(rule_set.resolve("yes", "no", &ctx), "yes");
    }
}
