use crate::core::checker::check_document;
use crate::core::{CheckSuite, ConfigProvider, GradeInput, Pipeline, PresenceReport, Storage};
use crate::utils::error::{GradeError, Result};
use reqwest::Client;

pub struct GradePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> GradePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
        }
    }

    async fn fetch_html(&self, url: &str) -> Result<Vec<u8>> {
        tracing::debug!("Fetching HTML from: {}", url);
        let response = self.client.get(url).send().await?;

        tracing::debug!("HTML response status: {}", response.status());
        let response = response.error_for_status()?;

        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for GradePipeline<S, C> {
    async fn extract(&self) -> Result<GradeInput> {
        let checks_path = self.config.checks_path();
        tracing::debug!("Loading checks from: {}", checks_path);
        let raw_checks = self.storage.read_file(checks_path).await?;
        let suite = CheckSuite::from_json(&raw_checks)?;

        let html = if let Some(url) = self.config.html_url() {
            self.fetch_html(url).await?
        } else if let Some(file) = self.config.html_file() {
            tracing::debug!("Reading HTML from: {}", file);
            self.storage.read_file(file).await?
        } else {
            return Err(GradeError::MissingConfigError {
                field: "--file or --url".to_string(),
            });
        };

        Ok(GradeInput { html, suite })
    }

    async fn transform(&self, input: GradeInput) -> Result<PresenceReport> {
        check_document(&input.html, &input.suite.selectors)
    }

    async fn load(&self, report: PresenceReport) -> Result<String> {
        let rendered = report.to_pretty_json()?;

        if let Some(output) = self.config.output_path() {
            tracing::debug!("Writing report to: {}", output);
            self.storage.write_file(output, rendered.as_bytes()).await?;
        }

        Ok(rendered)
    }
}
