//! Static site provisioning for Sparrow.
//!
//! Provides:
//! - `SiteProvisioner`, the ordered bucket/certificate/distribution sequence
//! - AWS backends (S3, ACM, CloudFront) for the provider traits

pub mod aws;
pub mod provisioner;

pub use provisioner::SiteProvisioner;
pub use sparrow_core::provider::{CertificateRegistry, ContentDelivery, ObjectStorage};
