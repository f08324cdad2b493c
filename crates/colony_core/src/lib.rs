//! # Colony Assignment Core
//!
//! Optimal character-task assignment for colony-simulation AI.
//!
//! ## Overview
//!
//! This crate provides the assignment core a colony simulation calls every
//! animation frame:
//!
//! - **Cost Kernel**: Fold travel time, work time, retry risk, and priority
//!   into a single scalar cost
//! - **Candidate Filter**: Cap the candidate pairings per character and per
//!   task to bound solver cost
//! - **Assignment Solver**: Kuhn-Munkres optimal matching that reduces a
//!   candidate list in place to the selected pairings
//!
//! ## Key Concepts
//!
//! - **Candidates In, Matching Out**: The caller proposes (character, task,
//!   cost) pairings; the solver keeps the minimum-cost subset with no
//!   character or task repeated
//! - **Infinity Is Infeasible**: `f64::INFINITY` marks pairings that must
//!   never be chosen; infeasibility is data, not an error
//! - **No Heap Churn**: A long-lived [`solver::AssignmentSolver`] reuses its
//!   working buffers across ticks
//! - **Deterministic**: Identical input order yields identical output
//!
//! ## Example
//!
//! ```rust
//! use colony_core::candidate::Candidate;
//! use colony_core::cost::compute_cost;
//! use colony_core::filter::limit_assignments;
//! use colony_core::solver::AssignmentSolver;
//!
//! let mut candidates = vec![
//!     Candidate::new(0, 0, compute_cost(10.0, 5.0, 0.0, 1.0)),
//!     Candidate::new(0, 1, compute_cost(20.0, 5.0, 0.0, 1.0)),
//!     Candidate::new(1, 0, compute_cost(15.0, 5.0, 0.0, 1.0)),
//!     Candidate::new(1, 1, compute_cost(10.0, 5.0, 0.0, 1.0)),
//! ];
//! limit_assignments(&mut candidates, 2, 2);
//!
//! let mut solver = AssignmentSolver::new();
//! solver.optimize(&mut candidates);
//! assert_eq!(candidates.len(), 2);
//! ```

pub mod candidate;
pub mod cost;
pub mod filter;
pub mod profiling;
pub mod solver;
pub mod workload;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;
