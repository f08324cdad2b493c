//! Cost composition: fold travel, work, retry risk, and priority into one scalar.

/// Compose a pairing cost from its contributing factors.
///
/// `travel_time + work_time` is the raw effort. Dividing by `1 - retry_risk`
/// yields the expected effort under geometric retry; dividing by `priority`
/// makes important tasks cheaper, so a priority-2 task costs half as much as
/// an identical priority-1 task.
///
/// A risk of 1 or more, or a non-positive priority, returns `f64::INFINITY`:
/// the pairing is infeasible, not an error.
pub fn compute_cost(travel_time: f64, work_time: f64, retry_risk: f64, priority: f64) -> f64 {
    debug_assert!(travel_time >= 0.0, "travel_time must be non-negative");
    debug_assert!(work_time >= 0.0, "work_time must be non-negative");
    debug_assert!(retry_risk >= 0.0, "retry_risk must be non-negative");
    if retry_risk >= 1.0 || priority <= 0.0 {
        return f64::INFINITY;
    }
    (travel_time + work_time) / ((1.0 - retry_risk) * priority)
}

/// Cost factors with their defaults, for call sites that only set some of them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostFactors {
    /// Time to reach the task site (simulation seconds).
    pub travel_time: f64,
    /// Time to perform the task once there.
    pub work_time: f64,
    /// Probability that an attempt fails and must be redone. 1.0 = infeasible.
    pub retry_risk: f64,
    /// Positive multiplier making important tasks cheaper.
    pub priority: f64,
}

impl Default for CostFactors {
    fn default() -> Self {
        Self {
            travel_time: 0.0,
            work_time: 0.0,
            retry_risk: 0.0,
            priority: 1.0,
        }
    }
}

impl CostFactors {
    pub fn with_travel_time(mut self, travel_time: f64) -> Self {
        self.travel_time = travel_time;
        self
    }

    pub fn with_work_time(mut self, work_time: f64) -> Self {
        self.work_time = work_time;
        self
    }

    pub fn with_retry_risk(mut self, retry_risk: f64) -> Self {
        self.retry_risk = retry_risk;
        self
    }

    pub fn with_priority(mut self, priority: f64) -> Self {
        self.priority = priority;
        self
    }

    /// Compose the scalar cost from these factors.
    pub fn cost(&self) -> f64 {
        compute_cost(
            self.travel_time,
            self.work_time,
            self.retry_risk,
            self.priority,
        )
    }
}
