//! Property tests for the assignment solver: validity, optimality against two
//! independent oracles, and the behavioral invariants callers rely on.

mod support;

use colony_core::candidate::Candidate;
use colony_core::solver::{optimize, AssignmentSolver};
use colony_core::test_helpers::{
    assert_valid_matching, brute_force_best, cand, matching_score, max_finite_cost, total_cost,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random sparse candidate set with costs quantized to 0.1.
fn random_candidates(
    rng: &mut StdRng,
    characters: usize,
    tasks: usize,
    density: f64,
) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    for character in 0..characters {
        for task in 0..tasks {
            if rng.gen_bool(density) {
                let cost = rng.gen_range(0..1000) as f64 / 10.0;
                candidates.push(cand(character, task, cost));
            }
        }
    }
    candidates
}

#[test]
fn matches_brute_force_on_small_random_inputs() {
    for seed in 0..80 {
        let mut rng = StdRng::seed_from_u64(seed);
        let characters = rng.gen_range(1..=6);
        let tasks = rng.gen_range(1..=6);
        let density = rng.gen_range(0.3..=1.0);
        let input = random_candidates(&mut rng, characters, tasks, density);
        if input.is_empty() {
            continue;
        }

        let mut result = input.clone();
        optimize(&mut result);
        assert_valid_matching(&result, &input);

        let c_max = max_finite_cost(&input);
        let (best_size, best_cost) = brute_force_best(&input);
        let solver_score = matching_score(result.len(), total_cost(&result), c_max);
        let best_score = matching_score(best_size, best_cost, c_max);
        assert!(
            (solver_score - best_score).abs() < 1e-6,
            "seed {}: solver found {} pairings costing {}, oracle {} costing {}",
            seed,
            result.len(),
            total_cost(&result),
            best_size,
            best_cost
        );
    }
}

#[test]
fn matches_reference_solver_on_mid_size_inputs() {
    for seed in 0..6 {
        let mut rng = StdRng::seed_from_u64(seed);
        // Alternate which side is larger so both partition orientations run.
        let (characters, tasks) = if seed % 2 == 0 { (15, 25) } else { (25, 15) };
        let mut input = Vec::new();
        for character in 0..characters {
            for task in 0..tasks {
                if rng.gen_bool(0.8) {
                    // Multiples of 1e-3, exact under the reference scaling.
                    let cost = rng.gen_range(0..100_000) as f64 / 1000.0;
                    input.push(cand(character, task, cost));
                }
            }
        }

        let mut result = input.clone();
        optimize(&mut result);
        assert_valid_matching(&result, &input);

        let c_max = max_finite_cost(&input);
        let (reference_size, reference_cost) = support::reference_best(&input);
        let solver_score = matching_score(result.len(), total_cost(&result), c_max);
        let reference_score = matching_score(reference_size, reference_cost, c_max);
        assert!(
            (solver_score - reference_score).abs() < 1e-6,
            "seed {}: solver {} pairings costing {:.3}, reference {} costing {:.3}",
            seed,
            result.len(),
            total_cost(&result),
            reference_size,
            reference_cost
        );
    }
}

#[test]
fn adding_an_expensive_candidate_cannot_raise_the_total() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let input = random_candidates(&mut rng, 5, 5, 1.0);

        let mut result = input.clone();
        optimize(&mut result);
        let base_total = total_cost(&result);

        let worst = result
            .iter()
            .map(|candidate| candidate.cost)
            .fold(0.0, f64::max);
        let mut extended = input.clone();
        extended.push(cand(rng.gen_range(0..5), 5, worst + 10.0));
        optimize(&mut extended);

        assert!(
            total_cost(&extended) <= base_total + 1e-9,
            "seed {}: total went from {} to {}",
            seed,
            base_total,
            total_cost(&extended)
        );
    }
}

#[test]
fn infinite_pairings_are_avoided_when_a_finite_matching_exists() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let size = rng.gen_range(2..=8);
        let mut input = Vec::new();
        for character in 0..size {
            for task in 0..size {
                // The diagonal stays finite, so a finite perfect matching
                // always exists.
                let cost = if character != task && rng.gen_bool(0.4) {
                    f64::INFINITY
                } else {
                    rng.gen_range(0..1000) as f64 / 10.0
                };
                input.push(cand(character, task, cost));
            }
        }

        let mut result = input.clone();
        optimize(&mut result);
        assert_valid_matching(&result, &input);
        assert!(
            result.iter().all(|candidate| candidate.cost.is_finite()),
            "seed {}: result contains an infinite pairing",
            seed
        );
    }
}

#[test]
fn optimize_is_idempotent() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut result = random_candidates(&mut rng, 8, 12, 0.6);
        optimize(&mut result);

        let mut again = result.clone();
        optimize(&mut again);

        let key = |candidate: &Candidate| (candidate.character, candidate.task);
        let mut first = result.clone();
        first.sort_unstable_by_key(key);
        again.sort_unstable_by_key(key);
        assert_eq!(first, again, "seed {}", seed);
    }
}

#[test]
fn identical_inputs_yield_identical_outputs() {
    let mut rng = StdRng::seed_from_u64(99);
    let input = random_candidates(&mut rng, 10, 10, 0.7);

    let mut solver = AssignmentSolver::new();
    let mut first = input.clone();
    solver.optimize(&mut first);
    let mut second = input.clone();
    solver.optimize(&mut second);

    assert_eq!(first, second);
}

#[test]
fn output_is_always_a_submatching_of_the_input() {
    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let characters = rng.gen_range(1..=40);
        let tasks = rng.gen_range(1..=40);
        let input = random_candidates(&mut rng, characters, tasks, 0.5);

        let mut result = input.clone();
        optimize(&mut result);
        assert_valid_matching(&result, &input);
        assert!(result.len() <= characters.min(tasks));
    }
}
