// kwscout: keyword competition scoring from pasted search data
//
// This is the library root. Each module corresponds to one stage of a run:
// input parsing, scoring, recommendation, orchestration and output.

pub mod config;
pub mod input;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod recommend;
pub mod scoring;
