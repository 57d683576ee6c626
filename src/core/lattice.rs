//! Contracts for the semantic lattice and the assembly it lives in.
//!
//! The solver never inspects a lattice value. It only combines values with
//! `and`/`or`, pushes them through the two transform operators, and compares
//! them for equality. Everything else is up to the implementor.

use super::guard::Guard;
use super::ids::{AssemblyId, EventId, SubmachineId, TransitionId};
use std::fmt::Debug;

/// A bounded join-semilattice of symbolic configuration sets.
///
/// # Laws
///
/// The solver terminates and converges monotonically only if:
///
/// - `bottom().or(x) == x` for every `x`
/// - `or` is commutative, associative and idempotent
/// - the transforms and `and` are monotone with respect to `or`
///
/// These laws are not checked. A lattice that breaks them is still driven
/// until the configured iteration cap.
///
/// # Example
///
/// ```rust
/// use reactive_semantics::core::{AssemblyId, EventId, Lattice, SubmachineId, TransitionId};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Flags(u8);
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("unsupported")]
/// struct Unsupported;
///
/// impl Lattice for Flags {
///     type Context = ();
///     type Error = Unsupported;
///
///     fn bottom(_assembly: &AssemblyId) -> Self {
///         Flags(0)
///     }
///     fn and(&self, other: &Self) -> Self {
///         Flags(self.0 & other.0)
///     }
///     fn or(&self, other: &Self) -> Self {
///         Flags(self.0 | other.0)
///     }
///     fn transform_by_transition(
///         &self,
///         _submachine: &SubmachineId,
///         _transition: &TransitionId,
///         _context: &(),
///     ) -> Result<Self, Unsupported> {
///         Ok(Flags(self.0 << 1))
///     }
///     fn transform_by_event(
///         &self,
///         _submachine: &SubmachineId,
///         _event: &EventId,
///         _context: &(),
///     ) -> Result<Self, Unsupported> {
///         Err(Unsupported)
///     }
/// }
///
/// let a = Flags(0b01);
/// let b = Flags(0b11);
/// assert!(a.leq(&b));
/// assert!(!b.leq(&a));
/// ```
pub trait Lattice: Clone + PartialEq + Debug {
    /// The context transforms are evaluated in (usually the assembly).
    type Context;

    /// Failure raised by a transform the lattice cannot perform.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The empty configuration set for an assembly.
    fn bottom(assembly: &AssemblyId) -> Self;

    /// Meet: configurations present in both values.
    fn and(&self, other: &Self) -> Self;

    /// Join: configurations present in either value.
    fn or(&self, other: &Self) -> Self;

    /// Fire `transition` of `submachine` on every configuration in `self`.
    fn transform_by_transition(
        &self,
        submachine: &SubmachineId,
        transition: &TransitionId,
        context: &Self::Context,
    ) -> Result<Self, Self::Error>;

    /// Deliver `event` to `submachine` for every configuration in `self`.
    fn transform_by_event(
        &self,
        submachine: &SubmachineId,
        event: &EventId,
        context: &Self::Context,
    ) -> Result<Self, Self::Error>;

    /// Join ordering: `self <= other` iff `self OR other == other`.
    fn leq(&self, other: &Self) -> bool {
        self.or(other) == *other
    }
}

/// The composition context a machine's semantics are computed in.
///
/// An assembly owns the lattice's context, knows how to turn guard
/// predicates into lattice values, and computes the value the seed state
/// is pinned to.
pub trait Assembly {
    /// Lattice values evaluated in this assembly.
    type Semantics: Lattice<Context = Self>;

    /// Guard predicate representation. Only compared for equality.
    type Predicate: Clone + PartialEq + Debug;

    /// Identifier passed to `Lattice::bottom`.
    fn id(&self) -> &AssemblyId;

    /// Value the seed state is pinned to for the whole solve.
    fn initial_semantics(&self) -> Result<Self::Semantics, SemanticsError<Self>>;

    /// Value of the always-true guard.
    fn top(&self) -> Self::Semantics;

    /// Value of a guard predicate.
    fn predicate_semantics(
        &self,
        predicate: &Self::Predicate,
    ) -> Result<Self::Semantics, SemanticsError<Self>>;

    /// Convert a guard into a lattice value.
    fn guard_semantics(
        &self,
        guard: &Guard<Self::Predicate>,
    ) -> Result<Self::Semantics, SemanticsError<Self>> {
        match guard {
            Guard::Always => Ok(self.top()),
            Guard::Predicate(predicate) => self.predicate_semantics(predicate),
        }
    }
}

/// Lattice value type of an assembly.
pub type SemanticsOf<A> = <A as Assembly>::Semantics;

/// Error type raised by an assembly's lattice.
pub type SemanticsError<A> = <<A as Assembly>::Semantics as Lattice>::Error;
