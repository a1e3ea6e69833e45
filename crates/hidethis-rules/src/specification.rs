//! Core Specification trait and combinators.

use std::sync::Arc;

/// A boolean rule evaluated against a context.
///
/// Visibility checks are pure functions of the viewer snapshot, so evaluation
/// is synchronous and never fails.
pub trait Specification<Ctx>: Send + Sync {
    /// Check if the specification is satisfied by the given context.
    fn is_satisfied_by(&self, ctx: &Ctx) -> bool;

    /// Combine this specification with another using AND logic.
    fn and<S: Specification<Ctx>>(self, other: S) -> And<Self, S>
    where
        Self: Sized,
    {
        And(self, other)
    }

    /// Negate this specification.
    fn not(self) -> Not<Self>
    where
        Self: Sized,
    {
        Not(self)
    }
}

/// AND combinator for specifications.
#[derive(Debug, Clone)]
pub struct And<A, B>(pub A, pub B);

impl<Ctx, A, B> Specification<Ctx> for And<A, B>
where
    A: Specification<Ctx>,
    B: Specification<Ctx>,
{
    fn is_satisfied_by(&self, ctx: &Ctx) -> bool {
        self.0.is_satisfied_by(ctx) && self.1.is_satisfied_by(ctx)
    }
}

/// NOT combinator for specifications.
#[derive(Debug, Clone)]
pub struct Not<A>(pub A);

impl<Ctx, A> Specification<Ctx> for Not<A>
where
    A: Specification<Ctx>,
{
    fn is_satisfied_by(&self, ctx: &Ctx) -> bool {
        !self.0.is_satisfied_by(ctx)
    }
}

/// A specification that always returns true.
#[derive(Debug, Clone, Copy)]
pub struct AlwaysTrue;

impl<Ctx> Specification<Ctx> for AlwaysTrue {
    fn is_satisfied_by(&self, _ctx: &Ctx) -> bool {
        true
    }
}

/// A boxed specification for dynamic dispatch.
pub type BoxedSpec<Ctx> = Arc<dyn Specification<Ctx>>;

impl<Ctx> Specification<Ctx> for BoxedSpec<Ctx> {
    fn is_satisfied_by(&self, ctx: &Ctx) -> bool {
        self.as_ref().is_satisfied_by(ctx)
    }
}
