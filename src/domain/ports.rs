use crate::domain::model::{DefangReport, InputLine, LoadOutcome, Mode};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn addresses(&self) -> &[String];
    fn input_files(&self) -> &[String];
    fn output_path(&self) -> Option<&str>;
    fn output_format(&self) -> &str;
    fn mode(&self) -> Mode;
    fn strict(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<InputLine>>;
    async fn transform(&self, lines: Vec<InputLine>) -> Result<DefangReport>;
    async fn load(&self, report: &DefangReport) -> Result<LoadOutcome>;
}
