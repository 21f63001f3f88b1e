//! File-backed OpenTelemetry span exporter.
//!
//! [`OtlpFileExporter`] writes every batch handed to it by the SDK as a single
//! OTLP JSON line into a [`RotatingFile`]. The provider uses the simple span
//! processor, so each span is written as soon as it ends.

use super::otlp;
use super::rotating::{RotatingFile, RotationPolicy};
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;

/// Instrumentation scope name written into every batch.
pub const SCOPE_NAME: &str = "Rollcall";

/// Span exporter appending OTLP JSON lines to a rotating file.
#[derive(Debug)]
pub struct OtlpFileExporter {
    file: RotatingFile,
    resource: Resource,
    shut_down: bool,
}

impl OtlpFileExporter {
    #[must_use]
    pub fn new(path: PathBuf, resource: Resource) -> Self {
        Self {
            file: RotatingFile::new(path, RotationPolicy::default()),
            resource,
            shut_down: false,
        }
    }

    fn write_batch(&self, batch: &[SpanData]) -> ExportResult {
        if self.shut_down {
            return Err(TraceError::from("exporter is shut down"));
        }

        let line = otlp::encode_batch(&self.resource, SCOPE_NAME, batch).to_string();
        self.file
            .append_line(&line)
            .map_err(|e| TraceError::from(e.to_string()))
    }
}

impl SpanExporter for OtlpFileExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = self.write_batch(&batch);
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.shut_down = true;
    }

    fn set_resource(&mut self, resource: &Resource) {
        self.resource = resource.clone();
    }
}

/// Builds a tracer provider exporting synchronously to `path`.
#[must_use]
pub fn file_tracer_provider(path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = OtlpFileExporter::new(path, resource.clone());

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::KeyValue;

    fn resource() -> Resource {
        Resource::new(vec![KeyValue::new("service.name", "Rollcall")])
    }

    #[test]
    fn export_writes_one_line_per_batch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rollcall-otlp.json");
        let exporter = OtlpFileExporter::new(path.clone(), resource());

        exporter.write_batch(&[]).unwrap();
        exporter.write_batch(&[]).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        let document: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(document["resourceSpans"][0]["scopeSpans"][0]["scope"]["name"], SCOPE_NAME);
    }

    #[test]
    fn shut_down_exporter_rejects_batches() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rollcall-otlp.json");
        let mut exporter = OtlpFileExporter::new(path.clone(), resource());

        exporter.shutdown();

        assert!(exporter.write_batch(&[]).is_err());
        assert!(!path.exists());
    }
}
