//! The weighted-scoring career quiz: question definitions, scoring, and the
//! two-phase (main + specialization) flow endpoints.

pub mod handlers;
pub mod models;
pub mod scoring;
