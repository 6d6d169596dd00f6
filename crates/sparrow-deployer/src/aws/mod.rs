//! AWS backends: S3 for storage, ACM for certificates, CloudFront for delivery.

mod acm;
mod cloudfront;
mod s3;

pub use acm::AcmCertificateRegistry;
pub use cloudfront::{CloudFrontDelivery, distribution_config};
pub use s3::S3Storage;

use aws_config::{BehaviorVersion, SdkConfig};
use aws_smithy_types::error::display::DisplayErrorContext;
use sparrow_core::Error;
use sparrow_core::certificate::CERTIFICATE_REGION;
use sparrow_core::site::ProvisionSettings;
use std::sync::Arc;
use tracing::debug;

/// The three AWS clients a site needs.
pub struct AwsBackends {
    pub storage: Arc<S3Storage>,
    pub certificates: Arc<AcmCertificateRegistry>,
    pub cdn: Arc<CloudFrontDelivery>,
}

impl AwsBackends {
    /// Build clients from the ambient AWS environment.
    ///
    /// Credentials come from the default provider chain. Every client is
    /// pinned to a region, so an environment without one still works.
    pub async fn from_env(settings: &ProvisionSettings) -> Self {
        let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        Self::from_config(&config, settings)
    }

    /// S3 uses the bucket region. ACM and CloudFront use `us-east-1`, the
    /// only region CloudFront reads certificates from and signs requests in.
    pub fn from_config(config: &SdkConfig, settings: &ProvisionSettings) -> Self {
        let backends = Self {
            storage: Arc::new(S3Storage::new(config, &settings.bucket_region)),
            certificates: Arc::new(AcmCertificateRegistry::new(config, CERTIFICATE_REGION)),
            cdn: Arc::new(CloudFrontDelivery::new(config, CERTIFICATE_REGION)),
        };
        debug!(
            ambient_region = ?config.region(),
            storage_region = ?backends.storage.region(),
            certificate_region = ?backends.certificates.region(),
            cdn_region = ?backends.cdn.region(),
            "Built AWS clients"
        );
        backends
    }
}

/// Map an SDK failure to a remote error, keeping the full source chain.
fn remote_error<E>(operation: &str, err: E) -> Error
where
    E: std::error::Error,
{
    Error::remote(operation, DisplayErrorContext(err).to_string())
}

/// Map a request builder failure; these never reach the network.
fn build_error(what: &str, err: impl std::fmt::Display) -> Error {
    Error::InvalidInput(format!("invalid {} request: {}", what, err))
}
