mod cancellation;
mod pipeline_error;
mod pipeline_orchestrator;
mod retry;

pub use cancellation::{CancellationHandle, CancellationSignal, cancellation_pair};
pub use pipeline_error::{PipelineError, PipelineErrorKind};
pub use pipeline_orchestrator::{
    DEFAULT_MAX_WAIT, DEFAULT_POLL_INTERVAL, PipelineOrchestrator, PipelineSettings,
};
pub use retry::RetryPolicy;
