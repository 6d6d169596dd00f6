//! Certificate lookup.

use serde::{Deserialize, Serialize};

use crate::{Domain, Error, Result};

/// Region CloudFront reads viewer certificates from.
pub const CERTIFICATE_REGION: &str = "us-east-1";

/// An issued certificate as reported by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateSummary {
    pub arn: String,
    pub domain_name: String,
}

impl CertificateSummary {
    pub fn new(arn: impl Into<String>, domain_name: impl Into<String>) -> Self {
        Self {
            arn: arn.into(),
            domain_name: domain_name.into(),
        }
    }
}

/// Pick the first certificate whose domain name contains `domain`.
///
/// List order decides ties: `a.example.com` wins over `example.com` when it
/// comes first.
pub fn select_certificate<'a>(
    certificates: &'a [CertificateSummary],
    domain: &Domain,
) -> Result<&'a CertificateSummary> {
    certificates
        .iter()
        .find(|cert| cert.domain_name.contains(domain.as_str()))
        .ok_or_else(|| Error::NoMatchingCertificate(domain.to_string()))
}
