// Recommendations: title strategy for the best keyword of a run.

pub mod title;
