// Job scoring: categorization, effort, score, tags and proposal generation.
// Everything except `handlers` is pure and synchronous; I/O stays in `store` and `sources`.

pub mod categorizer;
pub mod effort;
pub mod filters;
pub mod handlers;
pub mod keywords;
pub mod pipeline;
pub mod proposal;
pub mod scorer;
pub mod tags;
pub mod templates;
