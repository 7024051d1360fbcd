//! Career roadmaps: fixed career/degree/exam/MOOC reference tables and the
//! college filter-and-rank that turns a chosen career into an actionable
//! plan.

pub mod data;
pub mod handlers;
pub mod matcher;
