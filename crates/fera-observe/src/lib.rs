//! Observability setup for FERA Mentor: tracing subscriber installation with
//! optional OpenTelemetry span export.

pub mod tracing_setup;
