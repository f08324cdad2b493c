//! Run a colony-sized assignment tick and print the outcome.
//!
//! Run with: cargo run -p colony_core --example assignment_run --release

use colony_core::filter::limit_assignments;
use colony_core::profiling::SolverTimings;
use colony_core::solver::AssignmentSolver;
use colony_core::workload::{build_travel_workload, WorkloadParams};

fn main() {
    const NUM_CHARACTERS: usize = 150;
    const NUM_TASKS: usize = 600;
    const TICKS: u64 = 20;
    const CAP: usize = 8;

    let mut solver = AssignmentSolver::new();
    let mut filtered_timings = SolverTimings::new();
    let mut dense_timings = SolverTimings::new();
    let mut assigned = 0usize;
    let mut total_cost = 0.0;

    for tick in 0..TICKS {
        let params = WorkloadParams::default()
            .with_counts(NUM_CHARACTERS, NUM_TASKS)
            .with_seed(tick);
        let candidates = build_travel_workload(&params);

        // The per-frame path: prune, then solve.
        let mut pruned = candidates.clone();
        limit_assignments(&mut pruned, CAP, CAP);
        filtered_timings.time(|| solver.optimize(&mut pruned));
        assigned += pruned.len();
        total_cost += pruned.iter().map(|c| c.cost).sum::<f64>();

        // The dense path, for comparison.
        let mut dense = candidates;
        dense_timings.time(|| solver.optimize(&mut dense));
    }

    println!(
        "--- Assignment run ({} characters, {} tasks, {} ticks, cap {}) ---",
        NUM_CHARACTERS, NUM_TASKS, TICKS, CAP
    );
    println!("Assignments made: {}", assigned);
    println!(
        "Average assignments per tick: {:.1}",
        assigned as f64 / TICKS as f64
    );
    println!(
        "Average cost per assignment: {:.2}",
        total_cost / assigned as f64
    );
    println!();
    filtered_timings.print_summary(&format!("optimize (cap {})", CAP));
    dense_timings.print_summary("optimize (dense)");
}
