#![allow(dead_code)]

use std::collections::HashMap;

use colony_core::candidate::Candidate;
use pathfinding::kuhn_munkres::{kuhn_munkres, Weights};

/// Scale factor to convert f64 values to i64 weights for the reference solver.
const SCALE: f64 = 1_000_000.0;

/// Weight for supplied pairings with infinite cost. Must be worse than any
/// real weight but not so extreme that negating and summing overflows i64.
const INFEASIBLE: i64 = -1_000_000_000_000_i64;

/// Dense matrix implementing pathfinding's Weights for i64.
struct MatrixWeights {
    rows: usize,
    cols: usize,
    data: Vec<i64>,
}

impl Weights<i64> for MatrixWeights {
    fn rows(&self) -> usize {
        self.rows
    }

    fn columns(&self) -> usize {
        self.cols
    }

    fn at(&self, row: usize, col: usize) -> i64 {
        self.data[row * self.cols + col]
    }

    fn neg(&self) -> Self {
        MatrixWeights {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&w| w.saturating_neg()).collect(),
        }
    }
}

/// Matching size and total cost according to the pathfinding crate's
/// Kuhn-Munkres, under the same value transform as the solver under test.
/// Costs should be multiples of 1e-3 so the integer scaling is exact.
pub fn reference_best(candidates: &[Candidate]) -> (usize, f64) {
    if candidates.is_empty() {
        return (0, 0.0);
    }
    let max_char = candidates.iter().map(|c| c.character).max().unwrap_or(0);
    let max_task = candidates.iter().map(|c| c.task).max().unwrap_or(0);
    // kuhn_munkres requires rows <= columns.
    let transpose = max_char > max_task;
    let (rows, cols) = if transpose {
        (max_task + 1, max_char + 1)
    } else {
        (max_char + 1, max_task + 1)
    };

    let max_finite_cost = candidates
        .iter()
        .filter(|c| c.cost.is_finite())
        .map(|c| c.cost)
        .fold(0.0, f64::max);

    let mut cheapest: HashMap<(usize, usize), f64> = HashMap::new();
    for candidate in candidates.iter().filter(|c| c.cost.is_finite()) {
        let cost = cheapest
            .entry((candidate.character, candidate.task))
            .or_insert(candidate.cost);
        if candidate.cost < *cost {
            *cost = candidate.cost;
        }
    }

    let mut data = vec![0i64; rows * cols];
    for (&(character, task), &cost) in &cheapest {
        let (row, col) = if transpose {
            (task, character)
        } else {
            (character, task)
        };
        data[row * cols + col] = ((max_finite_cost - cost + 1.0) * SCALE).round() as i64;
    }
    for candidate in candidates.iter().filter(|c| !c.cost.is_finite()) {
        let (row, col) = if transpose {
            (candidate.task, candidate.character)
        } else {
            (candidate.character, candidate.task)
        };
        let cell = &mut data[row * cols + col];
        if *cell == 0 {
            *cell = INFEASIBLE;
        }
    }

    let weights = MatrixWeights { rows, cols, data };
    let (_total, assignment) = kuhn_munkres(&weights);

    let mut size = 0;
    let mut total = 0.0;
    for (row, &col) in assignment.iter().enumerate() {
        let pair = if transpose { (col, row) } else { (row, col) };
        if let Some(&cost) = cheapest.get(&pair) {
            size += 1;
            total += cost;
        }
    }
    (size, total)
}
