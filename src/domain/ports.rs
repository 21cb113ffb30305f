use crate::domain::model::{InvalidPolicy, RawRecord, ResourceKind, TransformResult};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn data_root(&self) -> &str;
    fn dataset(&self) -> &str;
    fn output_path(&self) -> &str;
    fn on_invalid(&self) -> InvalidPolicy;
}

pub trait Pipeline {
    fn extract(&self, kind: ResourceKind) -> Result<Vec<RawRecord>>;
    fn transform(&self, kind: ResourceKind, records: Vec<RawRecord>) -> Result<TransformResult>;
    fn load(&self, kind: ResourceKind, result: TransformResult) -> Result<String>;
}
