//! CLI subcommand modules.

pub(crate) mod factors;
pub(crate) mod score;
