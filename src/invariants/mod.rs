//! First-class invariants for the game engine.
//!
//! Invariants are logical properties that must hold at every reachable
//! state. They are checked in debug builds after each transition and
//! are testable independently.

use crate::engine::GameState;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns `Ok(())` if all invariants hold, or the list of
    /// violations otherwise.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod history_consistent;
pub mod step_in_range;
pub mod turn_balance;

pub use history_consistent::HistoryConsistentInvariant;
pub use step_in_range::StepInRangeInvariant;
pub use turn_balance::TurnBalanceInvariant;

/// All engine invariants as a composable set.
pub type GameStateInvariants = (
    TurnBalanceInvariant,
    StepInRangeInvariant,
    HistoryConsistentInvariant,
);

/// Asserts that all engine invariants hold (debug builds only).
pub(crate) fn assert_invariants(state: &GameState) {
    debug_assert!(
        TurnBalanceInvariant::holds(state),
        "{}",
        TurnBalanceInvariant::description()
    );
    debug_assert!(
        StepInRangeInvariant::holds(state),
        "{}",
        StepInRangeInvariant::description()
    );
    debug_assert!(
        HistoryConsistentInvariant::holds(state),
        "{}",
        HistoryConsistentInvariant::description()
    );
}
