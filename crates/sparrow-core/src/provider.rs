//! Provider traits for the remote services a site is built on.
//!
//! Each service is injected separately so the provisioning sequence can run
//! against any backend (AWS, or in-process fakes).

use async_trait::async_trait;

use crate::Result;
use crate::certificate::CertificateSummary;
use crate::distribution::{DistributionSpec, DistributionSummary};
use crate::policy::BucketPolicy;
use crate::site::{PublicAccessBlock, SiteObject, WebsiteConfig};

/// Object storage holding the site content.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Name of this backend.
    fn name(&self) -> &'static str;

    /// Create a bucket. Fails if the name is already taken.
    ///
    /// `location_constraint` is `None` for the default region.
    async fn create_bucket(&self, bucket: &str, location_constraint: Option<&str>) -> Result<()>;

    /// Turn on static website hosting.
    async fn put_bucket_website(&self, bucket: &str, website: &WebsiteConfig) -> Result<()>;

    /// Upload an object, replacing any existing object at the same key.
    async fn put_object(&self, bucket: &str, object: &SiteObject) -> Result<()>;

    /// Replace the bucket's public access block.
    async fn put_public_access_block(&self, bucket: &str, block: &PublicAccessBlock) -> Result<()>;

    /// Attach a bucket policy.
    async fn put_bucket_policy(&self, bucket: &str, policy: &BucketPolicy) -> Result<()>;
}

/// Registry of issued TLS certificates.
#[async_trait]
pub trait CertificateRegistry: Send + Sync {
    fn name(&self) -> &'static str;

    /// Every issued certificate, in registry order.
    async fn list_certificates(&self) -> Result<Vec<CertificateSummary>>;
}

/// Content delivery network fronting the bucket.
#[async_trait]
pub trait ContentDelivery: Send + Sync {
    fn name(&self) -> &'static str;

    /// Create a distribution. Returns without waiting for deployment.
    async fn create_distribution(&self, spec: &DistributionSpec) -> Result<DistributionSummary>;
}
