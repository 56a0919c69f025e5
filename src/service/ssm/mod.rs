#[cfg(test)]
pub use MockParameterStoreClient as ParameterStore;
#[cfg(not(test))]
pub use ParameterStoreClient as ParameterStore;
use aws_sdk_ssm as ssm;
#[allow(unused_imports)]
use mockall::automock;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct ParameterStoreClient {
    inner: ssm::Client,
}

#[derive(Debug, Error)]
pub enum ParameterErr {
    #[error("{0:?}")]
    AwsErr(#[from] aws_sdk_ssm::Error),
    #[error("the parameter exists but carries no value")]
    NotPresent,
}

#[cfg_attr(test, automock)]
impl ParameterStoreClient {
    pub fn new(inner: ssm::Client) -> Self {
        Self { inner }
    }

    /// Fetches a single parameter value by name.
    #[tracing::instrument(skip(self))]
    pub async fn get_parameter(&self, name: &str) -> Result<String, ParameterErr> {
        let result = self
            .inner
            .get_parameter()
            .name(name)
            .send()
            .await
            .map_err(aws_sdk_ssm::Error::from)?;

        if let Some(value) = result.parameter().and_then(|p| p.value()) {
            return Ok(value.to_string());
        }

        Err(ParameterErr::NotPresent)
    }
}
