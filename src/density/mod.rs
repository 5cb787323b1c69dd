//! Exact shot-count distributions via forward density evolution.
//!
//! Instead of sampling holes, push the transient-state probability vector
//! forward shot by shot and collect the mass absorbed at each step. The
//! result is a truncated pmf with zero sampling variance.
//!
//! - [`forward::completion_pmf`]: shots to reach or exceed par (both
//!   boundaries merged into one absorbing class)
//! - [`forward::first_passage_pmf`]: shots to first reach one chosen
//!   boundary — landing exactly on par vs. overshooting to par+1 — with
//!   mass absorbed at the other boundary discarded

pub mod forward;

pub use forward::{completion_pmf, first_passage_pmf, CompletionPmf, FirstPassagePmf};
