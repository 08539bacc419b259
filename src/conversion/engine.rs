//! Runs one operation against one input source

use std::time::Instant;

use tracing::debug;

use crate::conversion::config::ConversionConfig;
use crate::conversion::Operation;
use crate::error::ConversionResult;
use crate::input::InputSource;

/// Core conversion result
#[derive(Debug, Clone)]
pub struct ConversionOutput {
    pub content: String,
    pub metadata: ConversionMetadata,
}

impl ConversionOutput {
    /// Get the converted text
    pub fn as_str(&self) -> &str {
        &self.content
    }
}

/// Metadata about the conversion process
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionMetadata {
    pub operation: Operation,
    pub input_size: u64,
    pub output_size: u64,
    pub processing_time_us: u64,
}

/// Main conversion engine
#[derive(Debug, Clone, Default)]
pub struct ConversionEngine {
    config: ConversionConfig,
}

impl ConversionEngine {
    /// Create a new conversion engine
    pub fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Read `source` and convert it
    pub fn convert_source(
        &self,
        operation: Operation,
        source: &InputSource,
    ) -> ConversionResult<ConversionOutput> {
        debug!(source = %source.description(), %operation, "reading input");
        let content = source.read_content(self.config.max_input_size)?;
        self.convert_str(operation, &content)
    }

    /// Convert text that is already in memory
    pub fn convert_str(
        &self,
        operation: Operation,
        input: &str,
    ) -> ConversionResult<ConversionOutput> {
        let start_time = Instant::now();

        let prepared = if self.config.trim_input && operation.trims_input() {
            input.trim()
        } else {
            input
        };

        let content = operation.apply(prepared)?;
        let elapsed = start_time.elapsed();

        let metadata = ConversionMetadata {
            operation,
            input_size: prepared.len() as u64,
            output_size: content.len() as u64,
            processing_time_us: elapsed.as_micros() as u64,
        };
        debug!(
            %operation,
            input_bytes = metadata.input_size,
            output_bytes = metadata.output_size,
            elapsed_us = metadata.processing_time_us,
            "conversion finished"
        );

        Ok(ConversionOutput { content, metadata })
    }
}
