//! CLI command implementations.

pub(crate) mod rates;
pub(crate) mod serve;
