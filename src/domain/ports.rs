use crate::domain::model::{GradeInput, PresenceReport};
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
    fn checks_path(&self) -> &str;
    fn html_file(&self) -> Option<&str>;
    fn html_url(&self) -> Option<&str>;
    fn output_path(&self) -> Option<&str>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<GradeInput>;
    async fn transform(&self, input: GradeInput) -> Result<PresenceReport>;
    async fn load(&self, report: PresenceReport) -> Result<String>;
}
