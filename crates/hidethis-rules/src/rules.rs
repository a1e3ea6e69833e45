//! Predicate evaluation against a viewer.
//!
//! Every segment check follows the same shape: run the underlying check on the
//! segment's real name, then compare the raw result with the segment's
//! expected value. A negated segment therefore matches when the check fails.

use crate::context::ViewerContext;
use crate::operators::Spec;
use crate::parser::{expected_value, real_name, Predicate, PredicateKind, UserKey};
use crate::specification::Specification;

/// `check_user_role(real_name(role)) == expected_value(role)`.
pub fn evaluate_role(role: &str, ctx: &ViewerContext) -> bool {
    check_user_role(&real_name(role), ctx) == expected_value(role)
}

/// `has_capability(real_name(capability)) == expected_value(capability)`.
pub fn evaluate_capability(capability: &str, ctx: &ViewerContext) -> bool {
    ctx.has_capability(&real_name(capability)) == expected_value(capability)
}

/// Compare a viewer identity field against `value`.
///
/// Keys other than `userid`, `username` and `useremail` never match.
pub fn evaluate_user(key: &str, value: &str, ctx: &ViewerContext) -> bool {
    match key.parse::<UserKey>() {
        Ok(key) => evaluate_user_key(key, value, ctx),
        Err(err) => {
            tracing::warn!(error = %err, "user predicate with unsupported key");
            false
        }
    }
}

pub fn evaluate_user_key(key: UserKey, value: &str, ctx: &ViewerContext) -> bool {
    let actual = match key {
        UserKey::Id => &ctx.user_id,
        UserKey::Name => &ctx.username,
        UserKey::Email => &ctx.user_email,
    };
    (*actual == real_name(value)) == expected_value(value)
}

/// True iff the viewer holds `role`.
pub fn check_user_role(role: &str, ctx: &ViewerContext) -> bool {
    !ctx.roles.is_empty() && ctx.has_role(role)
}

/// Viewer holds (or, negated, lacks) a role.
#[derive(Debug, Clone)]
pub struct HasRole {
    pub segment: String,
}

impl HasRole {
    pub fn new(segment: impl Into<String>) -> Self {
        Self {
            segment: segment.into(),
        }
    }
}

impl Specification<ViewerContext> for HasRole {
    fn is_satisfied_by(&self, ctx: &ViewerContext) -> bool {
        evaluate_role(&self.segment, ctx)
    }
}

/// Viewer has (or, negated, lacks) a capability.
#[derive(Debug, Clone)]
pub struct HasCapability {
    pub segment: String,
}

impl HasCapability {
    pub fn new(segment: impl Into<String>) -> Self {
        Self {
            segment: segment.into(),
        }
    }
}

impl Specification<ViewerContext> for HasCapability {
    fn is_satisfied_by(&self, ctx: &ViewerContext) -> bool {
        evaluate_capability(&self.segment, ctx)
    }
}

/// Viewer identity field equals (or, negated, differs from) a value.
#[derive(Debug, Clone)]
pub struct MatchesUser {
    pub key: UserKey,
    pub value: String,
}

impl MatchesUser {
    pub fn new(key: UserKey, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

impl Specification<ViewerContext> for MatchesUser {
    fn is_satisfied_by(&self, ctx: &ViewerContext) -> bool {
        evaluate_user_key(self.key, &self.value, ctx)
    }
}

/// Viewer is logged in.
#[derive(Debug, Clone, Copy)]
pub struct IsLoggedIn;

impl Specification<ViewerContext> for IsLoggedIn {
    fn is_satisfied_by(&self, ctx: &ViewerContext) -> bool {
        ctx.is_logged_in
    }
}

impl Specification<ViewerContext> for Predicate {
    fn is_satisfied_by(&self, ctx: &ViewerContext) -> bool {
        if let PredicateKind::User(key) = self.kind() {
            return MatchesUser::new(key, self.capability.as_str()).is_satisfied_by(ctx);
        }

        match (self.role.is_empty(), self.capability.is_empty()) {
            (false, false) => (Spec(HasRole::new(self.role.as_str()))
                & Spec(HasCapability::new(self.capability.as_str())))
            .is_satisfied_by(ctx),
            (true, false) => HasCapability::new(self.capability.as_str()).is_satisfied_by(ctx),
            (false, true) => HasRole::new(self.role.as_str()).is_satisfied_by(ctx),
            (true, true) => false,
        }
    }
}
