pub mod cli;

use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::core::ConfigProvider;
use crate::domain::model::InvalidPolicy;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "fhir2csv")]
#[command(about = "Export FHIR NDJSON resources to per-type CSV files")]
pub struct CliConfig {
    /// Directory holding one dataset directory per export
    #[arg(long, default_value = "data/fhir")]
    pub data_root: String,

    /// Dataset directory name under the data root
    #[arg(long, default_value = "cosri-demo")]
    pub dataset: String,

    #[arg(long, default_value = "output")]
    pub output_path: String,

    /// What to do with records that fail validation
    #[arg(long, value_enum, default_value = "abort")]
    pub on_invalid: InvalidPolicy,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn data_root(&self) -> &str {
        &self.data_root
    }

    fn dataset(&self) -> &str {
        &self.dataset
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn on_invalid(&self) -> InvalidPolicy {
        self.on_invalid
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("data_root", &self.data_root)?;
        validate_path("output_path", &self.output_path)?;
        validate_non_empty_string("dataset", &self.dataset)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CliConfig {
        CliConfig {
            data_root: "data/fhir".to_string(),
            dataset: "cosri-demo".to_string(),
            output_path: "output".to_string(),
            on_invalid: InvalidPolicy::Abort,
            verbose: false,
        }
    }

    #[test]
    fn test_default_config_validates() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_empty_dataset_is_rejected() {
        let mut config = config();
        config.dataset = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_output_path_is_rejected() {
        let mut config = config();
        config.output_path = String::new();
        assert!(config.validate().is_err());
    }
}
