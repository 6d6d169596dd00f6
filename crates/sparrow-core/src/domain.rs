//! Site domain identifier.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// The domain a site is served under.
///
/// Used verbatim as the bucket name, the distribution alias and the origin id.
/// Only emptiness is checked here; the remote services enforce the rest of the
/// naming rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct Domain(String);

impl Domain {
    pub fn parse(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(Error::InvalidInput("domain must not be empty".to_string()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name of the bucket that stores the site.
    pub fn bucket_name(&self) -> &str {
        &self.0
    }

    /// ARN pattern covering every object in the site bucket.
    pub fn objects_arn(&self) -> String {
        format!("arn:aws:s3:::{}/*", self.0)
    }

    /// Regional S3 endpoint the distribution pulls from.
    pub fn origin_domain_name(&self, region: &str) -> String {
        format!("{}.s3.{}.amazonaws.com", self.0, region)
    }
}

impl std::str::FromStr for Domain {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}
