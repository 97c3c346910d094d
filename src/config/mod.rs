pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::{GradeError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "html-grader")]
#[command(about = "Checks an HTML document for the presence of CSS selectors")]
pub struct CliConfig {
    #[arg(
        short,
        long,
        default_value = "checks.json",
        help = "Path to a JSON file holding an array of CSS selectors"
    )]
    pub checks: String,

    #[arg(short, long, help = "Path to a local HTML file to grade")]
    pub file: Option<String>,

    #[arg(short, long, help = "URL of an HTML document to grade")]
    pub url: Option<String>,

    #[arg(short, long, help = "Also write the report to this path")]
    pub output: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn checks_path(&self) -> &str {
        &self.checks
    }

    fn html_file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    fn html_url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("checks", &self.checks)?;

        match (&self.file, &self.url) {
            (Some(_), Some(_)) => Err(GradeError::ConfigError {
                message: "Only one of --file or --url should be provided".to_string(),
            }),
            (None, None) => Err(GradeError::MissingConfigError {
                field: "--file or --url".to_string(),
            }),
            (Some(file), None) => validate_path("file", file),
            (None, Some(url)) => validate_url("url", url),
        }
    }
}
