//! Workload generation: seeded candidate sets for demos, benches, and load tests.
//!
//! Two canonical shapes are provided. The travel workload scatters characters
//! and tasks on a square map and composes costs from Chebyshev travel distance
//! plus per-task work time, retry risk, and priority, which is the shape a
//! simulation tick feeds the solver. The random workload draws unstructured
//! costs and is the density stress case.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::candidate::Candidate;
use crate::cost::compute_cost;

/// Parameters for generated workloads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkloadParams {
    pub num_characters: usize,
    pub num_tasks: usize,
    /// Side length of the square map positions are drawn from.
    pub map_size: i32,
    /// Work time range sampled per task (simulation seconds).
    pub min_work_time: f64,
    pub max_work_time: f64,
    /// Retry risk sampled per task from `[0, max_retry_risk]`.
    pub max_retry_risk: f64,
    /// Priority sampled per task from `1..=max_priority`.
    pub max_priority: u32,
    /// Seed for RNG (for reproducibility).
    pub seed: u64,
}

impl Default for WorkloadParams {
    fn default() -> Self {
        Self {
            num_characters: 100,
            num_tasks: 400,
            map_size: 256,
            min_work_time: 1.0,
            max_work_time: 30.0,
            max_retry_risk: 0.5,
            max_priority: 3,
            seed: 0,
        }
    }
}

impl WorkloadParams {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_counts(mut self, num_characters: usize, num_tasks: usize) -> Self {
        self.num_characters = num_characters;
        self.num_tasks = num_tasks;
        self
    }

    pub fn with_map_size(mut self, map_size: i32) -> Self {
        self.map_size = map_size;
        self
    }
}

/// One move per tick, diagonals allowed: travel time between two grid points
/// is their Chebyshev distance.
pub fn chebyshev_distance(a: (i32, i32), b: (i32, i32)) -> i32 {
    (a.0 - b.0).abs().max((a.1 - b.1).abs())
}

/// Scatter characters and tasks on the map and build the full
/// characters x tasks candidate set through the cost kernel.
pub fn build_travel_workload(params: &WorkloadParams) -> Vec<Candidate> {
    let mut rng = StdRng::seed_from_u64(params.seed);

    let character_positions: Vec<(i32, i32)> = (0..params.num_characters)
        .map(|_| random_position(&mut rng, params.map_size))
        .collect();

    struct TaskSpec {
        position: (i32, i32),
        work_time: f64,
        retry_risk: f64,
        priority: f64,
    }
    let tasks: Vec<TaskSpec> = (0..params.num_tasks)
        .map(|_| TaskSpec {
            position: random_position(&mut rng, params.map_size),
            work_time: rng.gen_range(params.min_work_time..=params.max_work_time),
            retry_risk: rng.gen_range(0.0..=params.max_retry_risk),
            priority: rng.gen_range(1..=params.max_priority) as f64,
        })
        .collect();

    let mut candidates = Vec::with_capacity(params.num_characters * params.num_tasks);
    for (character, &position) in character_positions.iter().enumerate() {
        for (task, spec) in tasks.iter().enumerate() {
            let travel_time = chebyshev_distance(position, spec.position) as f64;
            candidates.push(Candidate::new(
                character,
                task,
                compute_cost(travel_time, spec.work_time, spec.retry_risk, spec.priority),
            ));
        }
    }
    candidates
}

/// The "single shared goal" cluster: a crowd of characters in the base, one
/// straggler a single step short of the goal line, and every task on it.
/// Travel to the goal is the whole cost; the straggler is the extra character
/// with ID `num_characters`.
pub fn build_shared_goal_workload(
    num_characters: usize,
    num_tasks: usize,
    goal_x: i32,
) -> Vec<Candidate> {
    let base_travel = chebyshev_distance((0, 0), (goal_x, 0)) as f64;
    let straggler_travel = chebyshev_distance((goal_x - 1, 0), (goal_x, 0)) as f64;
    let straggler = num_characters;

    let mut candidates = Vec::with_capacity((num_characters + 1) * num_tasks);
    for task in 0..num_tasks {
        for character in 0..num_characters {
            candidates.push(Candidate::new(character, task, base_travel));
        }
        candidates.push(Candidate::new(straggler, task, straggler_travel));
    }
    candidates
}

/// Full characters x tasks candidate set with unstructured costs in
/// `[0, max_cost)`.
pub fn build_random_workload(params: &WorkloadParams, max_cost: f64) -> Vec<Candidate> {
    let mut rng = StdRng::seed_from_u64(params.seed);
    let mut candidates = Vec::with_capacity(params.num_characters * params.num_tasks);
    for character in 0..params.num_characters {
        for task in 0..params.num_tasks {
            candidates.push(Candidate::new(character, task, rng.gen_range(0.0..max_cost)));
        }
    }
    candidates
}

fn random_position(rng: &mut StdRng, map_size: i32) -> (i32, i32) {
    (rng.gen_range(0..map_size), rng.gen_range(0..map_size))
}
