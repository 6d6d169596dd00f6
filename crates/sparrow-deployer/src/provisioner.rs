//! Site provisioner - builds a public static site step by step.

use chrono::Utc;
use sparrow_core::certificate::{CERTIFICATE_REGION, select_certificate};
use sparrow_core::distribution::{DistributionSpec, caller_reference};
use sparrow_core::policy::BucketPolicy;
use sparrow_core::provider::{CertificateRegistry, ContentDelivery, ObjectStorage};
use sparrow_core::site::{ProvisionSettings, PublicAccessBlock};
use sparrow_core::{Domain, Result};
use std::sync::Arc;
use tracing::{debug, info};

/// Creates the bucket, content, policy and distribution for a site.
///
/// Steps run strictly in order and the first failure aborts the rest.
/// Nothing already created is cleaned up.
pub struct SiteProvisioner {
    storage: Arc<dyn ObjectStorage>,
    certificates: Arc<dyn CertificateRegistry>,
    cdn: Arc<dyn ContentDelivery>,
    settings: ProvisionSettings,
}

impl SiteProvisioner {
    pub fn new(
        storage: Arc<dyn ObjectStorage>,
        certificates: Arc<dyn CertificateRegistry>,
        cdn: Arc<dyn ContentDelivery>,
    ) -> Self {
        Self::with_settings(storage, certificates, cdn, ProvisionSettings::default())
    }

    pub fn with_settings(
        storage: Arc<dyn ObjectStorage>,
        certificates: Arc<dyn CertificateRegistry>,
        cdn: Arc<dyn ContentDelivery>,
        settings: ProvisionSettings,
    ) -> Self {
        Self {
            storage,
            certificates,
            cdn,
            settings,
        }
    }

    /// Provision the site for `domain`.
    pub async fn provision(&self, domain: &str) -> Result<()> {
        let domain = Domain::parse(domain)?;
        let bucket = domain.bucket_name();

        info!(
            domain = %domain,
            region = %self.settings.bucket_region,
            storage = self.storage.name(),
            cdn = self.cdn.name(),
            "Provisioning static site"
        );

        self.storage
            .create_bucket(bucket, self.settings.location_constraint())
            .await?;
        info!(bucket, "Bucket created");

        self.storage
            .put_bucket_website(bucket, &self.settings.website())
            .await?;
        debug!(bucket, "Website hosting enabled");

        let placeholder = self.settings.placeholder();
        self.storage.put_object(bucket, &placeholder).await?;
        debug!(bucket, key = %placeholder.key, "Placeholder uploaded");

        self.storage
            .put_public_access_block(bucket, &PublicAccessBlock::disabled())
            .await?;
        debug!(bucket, "Public access block disabled");

        self.storage
            .put_bucket_policy(bucket, &BucketPolicy::public_read(&domain))
            .await?;
        info!(bucket, "Public read policy attached");

        let certificates = self.certificates.list_certificates().await?;
        debug!(
            count = certificates.len(),
            region = CERTIFICATE_REGION,
            registry = self.certificates.name(),
            "Listed certificates"
        );
        let certificate = select_certificate(&certificates, &domain)?;
        info!(
            arn = %certificate.arn,
            certificate_domain = %certificate.domain_name,
            "Using certificate"
        );

        let spec = DistributionSpec::for_site(
            &domain,
            &self.settings,
            &certificate.arn,
            caller_reference(&domain, Utc::now().timestamp_millis()),
        );
        let distribution = self.cdn.create_distribution(&spec).await?;
        info!(
            id = %distribution.id,
            domain_name = %distribution.domain_name,
            "Distribution created"
        );

        Ok(())
    }
}
