//! Candidate pairings: the unit of exchange between callers and the solver.

/// A proposed character-task pairing with its composed cost.
///
/// IDs are dense small integers assigned by the caller (external keys such as
/// strings are mapped to compact integers upstream); they index directly into
/// the solver's working arrays. `f64::INFINITY` marks a pairing that must
/// never be chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub character: usize,
    pub task: usize,
    pub cost: f64,
}

impl Candidate {
    /// Create a candidate pairing.
    ///
    /// Cost must be non-negative and not NaN; violations are caller errors and
    /// only checked in debug builds.
    pub fn new(character: usize, task: usize, cost: f64) -> Self {
        debug_assert!(!cost.is_nan(), "candidate cost must not be NaN");
        debug_assert!(cost >= 0.0, "candidate cost must be non-negative");
        Self {
            character,
            task,
            cost,
        }
    }

    /// Whether the pairing can ever be selected.
    pub fn is_feasible(&self) -> bool {
        self.cost.is_finite()
    }
}

/// Largest character and task IDs present, or `None` for an empty set.
pub(crate) fn max_ids(candidates: &[Candidate]) -> Option<(usize, usize)> {
    let mut ids: Option<(usize, usize)> = None;
    for candidate in candidates {
        let (max_char, max_task) = ids.unwrap_or((0, 0));
        ids = Some((
            max_char.max(candidate.character),
            max_task.max(candidate.task),
        ));
    }
    ids
}
