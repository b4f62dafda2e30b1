use crate::core::{DefangReport, LoadOutcome, Pipeline};
use crate::utils::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub report: DefangReport,
    pub output: LoadOutcome,
}

pub struct DefangEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> DefangEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<RunOutcome> {
        tracing::debug!("Extracting addresses...");
        let lines = self.pipeline.extract().await?;
        tracing::info!("Read {} addresses", lines.len());

        let report = self.pipeline.transform(lines).await?;
        tracing::info!(
            "{} done: {} addresses, {} replacements",
            report.mode,
            report.addresses.len(),
            report.total_replacements
        );

        let output = self.pipeline.load(&report).await?;
        if let LoadOutcome::Written(path) = &output {
            tracing::info!("📁 Output saved to: {}", path);
        }

        Ok(RunOutcome { report, output })
    }
}
