//! Bucket payloads and provisioning settings.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_INDEX_DOCUMENT: &str = "index.html";
pub const DEFAULT_PLACEHOLDER_BODY: &str = "<p>Hello, world!</p>";
pub const DEFAULT_CONTENT_TYPE: &str = "text/html";

/// Tunables read by the provisioner. Defaults produce the standard site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvisionSettings {
    /// Region the bucket is created in; also names the origin endpoint.
    pub bucket_region: String,
    pub index_document: String,
    pub error_document: String,
    /// Body uploaded as the index document.
    pub placeholder_body: String,
    pub placeholder_content_type: String,
    pub price_class: PriceClass,
    pub comment: String,
}

impl Default for ProvisionSettings {
    fn default() -> Self {
        Self {
            bucket_region: DEFAULT_REGION.to_string(),
            index_document: DEFAULT_INDEX_DOCUMENT.to_string(),
            error_document: DEFAULT_INDEX_DOCUMENT.to_string(),
            placeholder_body: DEFAULT_PLACEHOLDER_BODY.to_string(),
            placeholder_content_type: DEFAULT_CONTENT_TYPE.to_string(),
            price_class: PriceClass::default(),
            comment: String::new(),
        }
    }
}

impl ProvisionSettings {
    /// Location constraint to send with `CreateBucket`, if any.
    ///
    /// `us-east-1` is the one region that must not carry a constraint.
    pub fn location_constraint(&self) -> Option<&str> {
        if self.bucket_region == DEFAULT_REGION {
            None
        } else {
            Some(&self.bucket_region)
        }
    }

    pub fn website(&self) -> WebsiteConfig {
        WebsiteConfig {
            index_suffix: self.index_document.clone(),
            error_key: self.error_document.clone(),
        }
    }

    pub fn placeholder(&self) -> SiteObject {
        SiteObject {
            key: self.index_document.clone(),
            body: self.placeholder_body.as_bytes().to_vec(),
            content_type: self.placeholder_content_type.clone(),
        }
    }
}

/// Static website hosting configuration for a bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebsiteConfig {
    pub index_suffix: String,
    pub error_key: String,
}

/// An object uploaded into the site bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteObject {
    pub key: String,
    pub body: Vec<u8>,
    pub content_type: String,
}

/// Bucket-level public access block flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicAccessBlock {
    pub block_public_acls: bool,
    pub ignore_public_acls: bool,
    pub block_public_policy: bool,
    pub restrict_public_buckets: bool,
}

impl PublicAccessBlock {
    /// Every flag disabled, so a public-read policy can be attached.
    pub fn disabled() -> Self {
        Self {
            block_public_acls: false,
            ignore_public_acls: false,
            block_public_policy: false,
            restrict_public_buckets: false,
        }
    }

    pub fn is_fully_disabled(&self) -> bool {
        !(self.block_public_acls
            || self.ignore_public_acls
            || self.block_public_policy
            || self.restrict_public_buckets)
    }
}

/// Edge location tier for a distribution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceClass {
    /// North America and Europe only; the cheapest tier.
    #[default]
    PriceClass100,
    PriceClass200,
    PriceClassAll,
}

impl PriceClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceClass::PriceClass100 => "PriceClass_100",
            PriceClass::PriceClass200 => "PriceClass_200",
            PriceClass::PriceClassAll => "PriceClass_All",
        }
    }
}

impl std::str::FromStr for PriceClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "PriceClass_100" | "100" => Ok(PriceClass::PriceClass100),
            "PriceClass_200" | "200" => Ok(PriceClass::PriceClass200),
            "PriceClass_All" | "all" => Ok(PriceClass::PriceClassAll),
            other => Err(Error::InvalidInput(format!("unknown price class: {}", other))),
        }
    }
}

impl std::fmt::Display for PriceClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
