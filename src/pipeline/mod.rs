// Pipeline: per-submission orchestration of parse, score and rank.

pub mod analysis;
