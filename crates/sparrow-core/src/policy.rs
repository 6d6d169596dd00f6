//! Bucket policy documents.

use serde::{Deserialize, Serialize};

use crate::{Domain, Error, Result};

pub const POLICY_VERSION: &str = "2012-10-17";

/// An IAM-style bucket policy document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BucketPolicy {
    pub version: String,
    pub statement: Vec<PolicyStatement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyStatement {
    pub sid: String,
    pub effect: String,
    pub principal: String,
    pub action: Vec<String>,
    pub resource: Vec<String>,
}

impl BucketPolicy {
    /// Anonymous read access to every object in the site bucket.
    pub fn public_read(domain: &Domain) -> Self {
        Self {
            version: POLICY_VERSION.to_string(),
            statement: vec![PolicyStatement {
                sid: "PublicReadGetObject".to_string(),
                effect: "Allow".to_string(),
                principal: "*".to_string(),
                action: vec!["s3:GetObject".to_string()],
                resource: vec![domain.objects_arn()],
            }],
        }
    }

    /// Render as the pretty-printed JSON sent to `PutBucketPolicy`.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::InvalidInput(format!("unserializable bucket policy: {}", e)))
    }
}
