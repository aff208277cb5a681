// Tailoring pipeline: job text + source résumé → model → normalization →
// rendering → upload. Each request runs the steps in order; nothing is retried.

pub mod dispatch;
pub mod handlers;
pub mod normalize;
pub mod pipeline;
