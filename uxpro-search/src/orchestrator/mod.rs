//! Search orchestrator: resolve table, load rows, score, boost, merge, project.
//!
//! [`rank`] runs the ranking pipeline over rows already in memory;
//! [`search`] wraps it with registry lookup, domain classification and the
//! table source.

pub mod rank;
pub mod search;
