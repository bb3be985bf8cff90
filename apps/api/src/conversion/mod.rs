// Upload → BRF document pipeline and its HTTP handlers.
// The pipeline is CPU-bound and runs inside tokio::task::spawn_blocking.

pub mod handlers;
pub mod pipeline;
