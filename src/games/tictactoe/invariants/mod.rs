//! First-class invariants for tic-tac-toe timelines.
//!
//! Invariants are logical properties that must hold for every reachable
//! [`GameState`](super::GameState). They are checked after each transition
//! in debug builds, when a state is deserialized, and by the tests.

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
///
/// Implementations are provided for tuples of up to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

/// Joins violation descriptions into one message.
pub fn describe_violations(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(|v| v.description.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

pub mod alternating_turn;
pub mod closed_after_win;
pub mod cursor_at_tip;
pub mod monotonic_board;

pub use alternating_turn::AlternatingTurnInvariant;
pub use closed_after_win::ClosedAfterWinInvariant;
pub use cursor_at_tip::CursorAtTipInvariant;
pub use monotonic_board::MonotonicBoardInvariant;

/// All timeline invariants as a composable set.
pub type TimelineInvariants = (
    CursorAtTipInvariant,
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
    ClosedAfterWinInvariant,
);
