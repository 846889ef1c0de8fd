//! CLI subcommand modules.

pub(crate) mod analyze;
pub(crate) mod checklist;
pub(crate) mod report;
