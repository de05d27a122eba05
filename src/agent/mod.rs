//! The agent: composition root and the tick loop that drives it

pub mod context;
pub mod runner;
pub mod sink;
pub mod telemetry;

pub use context::AgentContext;
pub use runner::{Agent, ReflectionReport, StepOutcome, TickReport};
pub use sink::{ActionSink, RecordingActionSink, TracingActionSink};
pub use telemetry::{TelemetryEntry, TelemetryLogger};
