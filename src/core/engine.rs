use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct GradeEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> GradeEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs extract → transform → load and returns the rendered JSON report.
    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting grading process...");

        tracing::info!("Extracting inputs...");
        let input = self.pipeline.extract().await?;
        tracing::info!(
            "Extracted {} bytes of HTML and {} checks",
            input.html.len(),
            input.suite.selectors.len()
        );

        tracing::info!("Evaluating selectors...");
        let report = self.pipeline.transform(input).await?;
        tracing::info!("Evaluated {} distinct selectors", report.entries.len());

        tracing::info!("Rendering report...");
        let rendered = self.pipeline.load(report).await?;

        Ok(rendered)
    }
}
