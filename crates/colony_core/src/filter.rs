//! Candidate pruning: cap the pairings per character and per task before solving.

use crate::candidate::{max_ids, Candidate};

/// Reduce `candidates` to at most `per_character` pairings per character and
/// at most `per_task` pairings per task, keeping the cheapest.
///
/// Candidates are ranked by ascending cost, ties broken by character then task
/// ID so the outcome does not depend on input order. Output order is
/// unspecified.
///
/// Capping the candidate count bounds the solver's effective problem density,
/// but can leave the reduced graph without a perfect matching; the solver
/// tolerates that and simply leaves some characters or tasks unassigned.
pub fn limit_assignments(candidates: &mut Vec<Candidate>, per_character: usize, per_task: usize) {
    debug_assert!(per_character > 0, "per_character cap must be positive");
    debug_assert!(per_task > 0, "per_task cap must be positive");
    let Some((max_char, max_task)) = max_ids(candidates) else {
        return;
    };

    candidates.sort_unstable_by(|a, b| {
        a.cost
            .total_cmp(&b.cost)
            .then(a.character.cmp(&b.character))
            .then(a.task.cmp(&b.task))
    });

    let mut character_counts = vec![0usize; max_char + 1];
    let mut task_counts = vec![0usize; max_task + 1];
    candidates.retain(|candidate| {
        let retained = character_counts[candidate.character] < per_character
            && task_counts[candidate.task] < per_task;
        if retained {
            character_counts[candidate.character] += 1;
            task_counts[candidate.task] += 1;
        }
        retained
    });
}
