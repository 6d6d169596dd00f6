//! ACM certificate registry backend.

use super::remote_error;
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_acm::Client;
use aws_sdk_acm::config::Region;
use aws_sdk_acm::types::{CertificateStatus, Filters, KeyAlgorithm};
use sparrow_core::Result;
use sparrow_core::certificate::CertificateSummary;
use sparrow_core::provider::CertificateRegistry;
use tracing::{debug, warn};

/// Lists issued certificates from ACM in a single region.
pub struct AcmCertificateRegistry {
    client: Client,
}

impl AcmCertificateRegistry {
    pub fn new(config: &SdkConfig, region: &str) -> Self {
        let acm_config = aws_sdk_acm::config::Builder::from(config)
            .region(Region::new(region.to_string()))
            .build();
        Self::with_client(Client::from_conf(acm_config))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    pub fn region(&self) -> Option<&str> {
        self.client.config().region().map(|r| r.as_ref())
    }
}

/// ACM only lists RSA-2048 certificates unless key types are named, so ask
/// for every algorithm it knows.
fn certificate_filters() -> Filters {
    Filters::builder()
        .set_key_types(Some(
            KeyAlgorithm::values()
                .iter()
                .map(|value| KeyAlgorithm::from(*value))
                .collect(),
        ))
        .build()
}

#[async_trait]
impl CertificateRegistry for AcmCertificateRegistry {
    fn name(&self) -> &'static str {
        "acm"
    }

    async fn list_certificates(&self) -> Result<Vec<CertificateSummary>> {
        let mut certificates = Vec::new();
        let mut next_token: Option<String> = None;

        loop {
            let page = self
                .client
                .list_certificates()
                .certificate_statuses(CertificateStatus::Issued)
                .includes(certificate_filters())
                .set_next_token(next_token.take())
                .send()
                .await
                .map_err(|e| remote_error("ListCertificates", e))?;

            for summary in page.certificate_summary_list() {
                match (summary.certificate_arn(), summary.domain_name()) {
                    (Some(arn), Some(domain_name)) => {
                        certificates.push(CertificateSummary::new(arn, domain_name));
                    }
                    _ => warn!(?summary, "Skipping certificate without ARN or domain name"),
                }
            }

            next_token = page.next_token().map(str::to_string);
            if next_token.is_none() {
                break;
            }
            debug!(fetched = certificates.len(), "Fetching next certificate page");
        }

        Ok(certificates)
    }
}
