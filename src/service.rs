//! Generation service: build → emit → persist for one request.

use crate::persist::{DocumentSink, FileSink, PersistenceError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rowgen_core::GenerationRequest;
use rowgen_emit::{Document, EmitError, EmitOptions};
use rowgen_generator::{FieldRegistry, GeneratorError, IdCounter, RecordBuilder};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Errors that can occur while processing a request.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// Generator error.
    #[error("Generator error: {0}")]
    Generator(#[from] GeneratorError),

    /// Emit error.
    #[error("Emit error: {0}")]
    Emit(#[from] EmitError),

    /// Persistence error.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// Metrics from a generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerateMetrics {
    /// Number of rows generated.
    pub rows_written: u64,
    /// Document size in bytes.
    pub document_bytes: u64,
    /// Time spent generating rows.
    pub generation_duration: Duration,
    /// Time spent serializing the document.
    pub emit_duration: Duration,
    /// Time spent writing the document.
    pub write_duration: Duration,
    /// Total time taken.
    pub total_duration: Duration,
}

impl GenerateMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Result of a persisted generation run.
#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    /// Absolute path of the written document.
    pub path: PathBuf,
    pub metrics: GenerateMetrics,
}

/// Processes generation requests.
///
/// Each request gets its own [`RecordBuilder`] and random source; the
/// identifier counter is the only state shared between requests, so
/// concurrent calls never interleave random draws and always receive
/// disjoint identifiers.
pub struct GenerationService<S = FileSink> {
    registry: FieldRegistry,
    ids: Arc<IdCounter>,
    options: EmitOptions,
    sink: S,
}

impl<S: DocumentSink> GenerationService<S> {
    /// Service using the standard registry, the process-wide identifier
    /// counter and default emit options.
    pub fn new(sink: S) -> Self {
        Self {
            registry: FieldRegistry::standard(),
            ids: IdCounter::global(),
            options: EmitOptions::default(),
            sink,
        }
    }

    /// Use a different identifier counter.
    pub fn with_ids(mut self, ids: Arc<IdCounter>) -> Self {
        self.ids = ids;
        self
    }

    pub fn with_options(mut self, options: EmitOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_registry(mut self, registry: FieldRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn ids(&self) -> &Arc<IdCounter> {
        &self.ids
    }

    pub fn options(&self) -> &EmitOptions {
        &self.options
    }

    /// Build and emit the document without persisting it.
    pub fn render(
        &self,
        request: &GenerationRequest,
    ) -> Result<(Document, GenerateMetrics), GenerateError> {
        let start_time = Instant::now();
        let mut metrics = GenerateMetrics::default();

        info!(
            "Generating {} rows with {} fields as {}",
            request.row_count(),
            request.fields().len(),
            request.format()
        );

        let rng = match request.seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut builder = RecordBuilder::new(self.registry.clone(), Arc::clone(&self.ids), rng);

        let gen_start = Instant::now();
        let rows = builder.build(request.fields(), request.row_count())?;
        metrics.generation_duration = gen_start.elapsed();
        metrics.rows_written = builder.rows_built();
        debug!(
            "Generated {} rows in {:?} (last id {})",
            metrics.rows_written,
            metrics.generation_duration,
            self.ids.last_issued()
        );

        let emit_start = Instant::now();
        let document = rowgen_emit::emit(request.format(), &rows, request.fields(), &self.options)?;
        metrics.emit_duration = emit_start.elapsed();
        metrics.document_bytes = document.len() as u64;
        debug!(
            "Emitted {} bytes of {} in {:?}",
            metrics.document_bytes,
            document.format(),
            metrics.emit_duration
        );

        metrics.total_duration = start_time.elapsed();
        Ok((document, metrics))
    }

    /// Build, emit and persist the document.
    pub fn process(&self, request: &GenerationRequest) -> Result<GenerateOutcome, GenerateError> {
        let start_time = Instant::now();
        let (document, mut metrics) = self.render(request)?;

        let write_start = Instant::now();
        let path = self.sink.write(&request.file_name(), &document)?;
        metrics.write_duration = write_start.elapsed();
        metrics.total_duration = start_time.elapsed();

        info!(
            "Generation complete: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
            metrics.rows_written,
            metrics.document_bytes,
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(GenerateOutcome { path, metrics })
    }
}
