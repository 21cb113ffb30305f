use serde_json::Value;

use crate::core::normalize::normalize;
use crate::core::{ConfigProvider, InvalidPolicy, Pipeline, RawRecord, ResourceKind, Storage, TransformResult};
use crate::utils::error::{ExportError, Result};

pub struct ExportPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ExportPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn input_path(&self, kind: ResourceKind) -> String {
        format!(
            "{}/{}/{}",
            self.config.data_root(),
            self.config.dataset(),
            kind.input_file()
        )
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for ExportPipeline<S, C> {
    fn extract(&self, kind: ResourceKind) -> Result<Vec<RawRecord>> {
        let path = self.input_path(kind);
        tracing::debug!("Reading {}", path);

        let bytes = self.storage.read_file(&path)?;
        let text = String::from_utf8(bytes)
            .map_err(|_| ExportError::EncodingError { file: path.clone() })?;

        let mut records = Vec::new();
        for (idx, line) in text.lines().enumerate() {
            let line_no = idx as u64 + 1;
            if line.trim().is_empty() {
                continue;
            }

            let value: Value =
                serde_json::from_str(line).map_err(|e| ExportError::ParseError {
                    file: path.clone(),
                    line: line_no,
                    message: e.to_string(),
                })?;
            match value {
                Value::Object(data) => records.push(RawRecord { line: line_no, data }),
                _ => {
                    return Err(ExportError::ParseError {
                        file: path.clone(),
                        line: line_no,
                        message: "expected a JSON object".to_string(),
                    });
                }
            }
        }

        Ok(records)
    }

    fn transform(&self, kind: ResourceKind, records: Vec<RawRecord>) -> Result<TransformResult> {
        let headers = kind.headers();
        let mut rows = Vec::with_capacity(records.len());
        let mut skipped = 0;

        for record in records {
            let line = record.line;
            let normalized = normalize(kind, record.data);

            match kind.project(Value::Object(normalized)) {
                Ok(row) => {
                    // the one invariant enforced here: a projector that
                    // disagrees with its declared headers is a defect
                    assert_eq!(
                        row.len(),
                        headers.len(),
                        "{} projection does not match its declared headers",
                        kind.name()
                    );
                    rows.push(row);
                }
                Err(e) => {
                    let err = ExportError::ValidationError {
                        resource: kind.name(),
                        line,
                        message: e.to_string(),
                    };
                    match self.config.on_invalid() {
                        InvalidPolicy::Abort => return Err(err),
                        InvalidPolicy::Skip => {
                            tracing::warn!("Skipping record: {}", err);
                            skipped += 1;
                        }
                    }
                }
            }
        }

        Ok(TransformResult { rows, skipped })
    }

    fn load(&self, kind: ResourceKind, result: TransformResult) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(kind.headers())?;
        for row in &result.rows {
            writer.write_record(row)?;
        }
        let data = writer.into_inner().map_err(|e| e.into_error())?;

        let path = format!("{}/{}", self.config.output_path(), kind.output_file());
        tracing::debug!("Writing {} rows to {}", result.rows.len(), path);
        self.storage.write_file(&path, &data)?;

        Ok(path)
    }
}
