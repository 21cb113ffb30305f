use crate::core::{Pipeline, ResourceKind};
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Run one full extract/transform/load pass per resource kind, in order.
    /// Each kind is processed to completion before the next begins.
    pub fn run(&self) -> Result<Vec<String>> {
        let mut outputs = Vec::with_capacity(ResourceKind::ALL.len());

        for kind in ResourceKind::ALL {
            tracing::info!("Processing {}", kind.name());

            let raw = self.pipeline.extract(kind)?;
            tracing::info!("Extracted {} records", raw.len());

            let result = self.pipeline.transform(kind, raw)?;
            tracing::info!("Projected {} rows", result.rows.len());
            if result.skipped > 0 {
                tracing::warn!("Skipped {} invalid {} records", result.skipped, kind.name());
            }

            let path = self.pipeline.load(kind, result)?;
            tracing::info!("Output saved to {}", path);
            outputs.push(path);
        }

        Ok(outputs)
    }
}
