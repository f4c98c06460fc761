//! First-class invariants over the turn controller.
//!
//! Each invariant is a logical property the controller must preserve
//! across every accepted move. They are checked as a set in debug
//! builds and testable independently.

mod alternating_turn;
mod history_consistent;
mod mark_balance;

pub use alternating_turn::AlternatingTurn;
pub use history_consistent::HistoryConsistent;
pub use mark_balance::MarkBalance;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Whether the invariant holds for the state.
    fn holds(state: &S) -> bool;

    /// Human-readable statement of the invariant.
    fn description() -> &'static str;
}

/// A group of invariants checked together.
pub trait InvariantSet<S> {
    /// Checks every invariant, collecting the descriptions of any that
    /// fail.
    fn check(state: &S) -> Result<(), Vec<&'static str>>;
}

impl<S, A, B, C> InvariantSet<S> for (A, B, C)
where
    A: Invariant<S>,
    B: Invariant<S>,
    C: Invariant<S>,
{
    fn check(state: &S) -> Result<(), Vec<&'static str>> {
        let mut violations = Vec::new();
        if !A::holds(state) {
            violations.push(A::description());
        }
        if !B::holds(state) {
            violations.push(B::description());
        }
        if !C::holds(state) {
            violations.push(C::description());
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Every controller invariant as one composable set.
pub type ControllerInvariants = (MarkBalance, AlternatingTurn, HistoryConsistent);
