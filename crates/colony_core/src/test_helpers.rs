//! Test helpers for common setup and verification across test files.

use crate::candidate::Candidate;

/// Shorthand candidate constructor.
pub fn cand(character: usize, task: usize, cost: f64) -> Candidate {
    Candidate::new(character, task, cost)
}

/// Sum of retained costs.
pub fn total_cost(candidates: &[Candidate]) -> f64 {
    candidates.iter().map(|candidate| candidate.cost).sum()
}

/// Assert that `result` is a matching drawn from `input`: no character or task
/// ID appears twice, and every retained triple was supplied by the caller.
pub fn assert_valid_matching(result: &[Candidate], input: &[Candidate]) {
    let mut characters = std::collections::HashSet::new();
    let mut tasks = std::collections::HashSet::new();
    for candidate in result {
        assert!(
            characters.insert(candidate.character),
            "character {} appears twice in the result",
            candidate.character
        );
        assert!(
            tasks.insert(candidate.task),
            "task {} appears twice in the result",
            candidate.task
        );
        assert!(
            input.iter().any(|original| original == candidate),
            "result contains {:?} which was not in the input",
            candidate
        );
    }
}

/// Score of a matching under the solver's objective: every matched pairing
/// earns a fixed bonus of `C_max + 1` (the value the cost transform assigns a
/// zero-margin pairing) against its cost. Dropping a pairing is only ever
/// worth it when the costs saved exceed that bonus.
pub fn matching_score(size: usize, cost: f64, max_finite_cost: f64) -> f64 {
    size as f64 * (max_finite_cost + 1.0) - cost
}

/// Largest finite cost in the input, the `C_max` of the cost transform.
pub fn max_finite_cost(candidates: &[Candidate]) -> f64 {
    candidates
        .iter()
        .filter(|candidate| candidate.cost.is_finite())
        .map(|candidate| candidate.cost)
        .fold(0.0, f64::max)
}

/// Best matching over the finite-cost `candidates` by exhaustive enumeration,
/// scored with [`matching_score`]. Returns `(size, cost)` of the best-scoring
/// matching.
///
/// Exponential; intended for inputs with at most ~8 characters and tasks.
pub fn brute_force_best(candidates: &[Candidate]) -> (usize, f64) {
    let max_char = candidates
        .iter()
        .map(|candidate| candidate.character)
        .max()
        .unwrap_or(0);
    let max_task = candidates
        .iter()
        .map(|candidate| candidate.task)
        .max()
        .unwrap_or(0);
    debug_assert!(
        max_char < 64 && max_task < 64,
        "brute force supports small IDs only"
    );
    let bonus = max_finite_cost(candidates) + 1.0;

    // (score, size, cost) of the best matching over characters >= `character`.
    fn explore(
        candidates: &[Candidate],
        character: usize,
        max_char: usize,
        used_tasks: u64,
        bonus: f64,
    ) -> (f64, usize, f64) {
        if character > max_char {
            return (0.0, 0, 0.0);
        }
        // Leave this character unassigned.
        let mut best = explore(candidates, character + 1, max_char, used_tasks, bonus);
        for candidate in candidates {
            if candidate.character != character
                || !candidate.cost.is_finite()
                || used_tasks & (1 << candidate.task) != 0
            {
                continue;
            }
            let (score, size, cost) = explore(
                candidates,
                character + 1,
                max_char,
                used_tasks | (1 << candidate.task),
                bonus,
            );
            let scored = (score + bonus - candidate.cost, size + 1, cost + candidate.cost);
            if scored.0 > best.0 {
                best = scored;
            }
        }
        best
    }

    let (_, size, cost) = explore(candidates, 0, max_char, 0, bonus);
    (size, cost)
}

/// Greedy baseline: characters in ID order each take their cheapest feasible
/// task that is still free. Returns the total cost of the greedy matching.
pub fn greedy_total_cost(candidates: &[Candidate]) -> f64 {
    let max_char = candidates
        .iter()
        .map(|candidate| candidate.character)
        .max()
        .unwrap_or(0);
    let mut used_tasks = std::collections::HashSet::new();
    let mut total = 0.0;
    for character in 0..=max_char {
        let best = candidates
            .iter()
            .filter(|candidate| {
                candidate.character == character
                    && candidate.cost.is_finite()
                    && !used_tasks.contains(&candidate.task)
            })
            .min_by(|a, b| a.cost.total_cmp(&b.cost));
        if let Some(candidate) = best {
            used_tasks.insert(candidate.task);
            total += candidate.cost;
        }
    }
    total
}
