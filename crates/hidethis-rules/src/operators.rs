//! Operator overloading for specification combinators.
//!
//! This module provides `BitAnd` (&) and `Not` (!) for specifications, so a
//! `role:capability` rule reads as:
//!
//! ```ignore
//! let rule = Spec(HasRole::new("editor")) & Spec(HasCapability::new("edit_posts"));
//! ```

use crate::specification::{And, Not, Specification};
use std::ops::{BitAnd, Not as StdNot};

/// Wrapper struct to enable operator overloading on specifications.
#[derive(Debug, Clone)]
pub struct Spec<S>(pub S);

impl<A, B> BitAnd<Spec<B>> for Spec<A> {
    type Output = Spec<And<A, B>>;

    fn bitand(self, rhs: Spec<B>) -> Self::Output {
        Spec(And(self.0, rhs.0))
    }
}

impl<A> StdNot for Spec<A> {
    type Output = Spec<Not<A>>;

    fn not(self) -> Self::Output {
        Spec(Not(self.0))
    }
}

impl<Ctx, S> Specification<Ctx> for Spec<S>
where
    S: Specification<Ctx>,
{
    fn is_satisfied_by(&self, ctx: &Ctx) -> bool {
        self.0.is_satisfied_by(ctx)
    }
}
