//! OpenTelemetry tracing exported to a local OTLP JSON file.
//!
//! The plugin runs inside the Zellij sandbox without network access, so spans
//! produced by `tracing` are bridged into OpenTelemetry and written as OTLP
//! JSON lines to a size-rotated file in the plugin data directory:
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK TracerProvider → OtlpFileExporter → rollcall-otlp.json
//! ```
//!
//! Initialization never fails loudly: if the data directory cannot be created
//! the plugin simply runs without a subscriber.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup and level resolution
//! - [`exporter`]: `SpanExporter` implementation and provider construction
//! - [`otlp`]: OTLP JSON encoding of span batches
//! - [`rotating`]: Append-only file with size-based rotation

pub mod exporter;
pub mod init;
pub mod otlp;
pub mod rotating;

pub use init::{init_tracing, TRACE_FILE_NAME};
