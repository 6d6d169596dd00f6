//! Distribution specification.
//!
//! A distribution fronts the site bucket with HTTPS under the site's domain.

use serde::{Deserialize, Serialize};

use crate::Domain;
use crate::site::{PriceClass, ProvisionSettings};

/// Full configuration for a new distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionSpec {
    /// Request token the CDN uses to deduplicate creates.
    pub caller_reference: String,
    /// Alternate domain names served by the distribution.
    pub aliases: Vec<String>,
    /// Object returned for requests to the root URL.
    pub default_root_object: String,
    /// Origins; the site always has exactly one.
    pub origins: Vec<OriginSpec>,
    pub default_cache_behavior: CacheBehaviorSpec,
    pub comment: String,
    pub price_class: PriceClass,
    /// Web ACL to associate. Empty means none.
    pub web_acl_id: String,
    pub enabled: bool,
    pub viewer_certificate: ViewerCertificateSpec,
}

/// A bucket origin reachable without an origin access identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginSpec {
    pub id: String,
    pub domain_name: String,
    /// Empty for a publicly readable bucket.
    pub origin_access_identity: String,
}

/// Default cache behavior for the distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheBehaviorSpec {
    pub target_origin_id: String,
    pub viewer_protocol_policy: ViewerProtocolPolicy,
    pub allowed_methods: Vec<HttpMethod>,
    pub forward_query_string: bool,
    pub forward_cookies: CookieForwarding,
    pub min_ttl: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewerProtocolPolicy {
    RedirectToHttps,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Head,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CookieForwarding {
    None,
}

/// TLS certificate served to viewers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerCertificateSpec {
    pub acm_certificate_arn: String,
    pub ssl_support_method: SslSupportMethod,
    pub cloudfront_default_certificate: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SslSupportMethod {
    SniOnly,
}

/// What the CDN reported back after creating a distribution.
///
/// Both fields are empty when the CDN accepted the request without echoing
/// the distribution back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionSummary {
    pub id: String,
    pub domain_name: String,
}

impl DistributionSpec {
    /// Build the distribution for a site bucket.
    pub fn for_site(
        domain: &Domain,
        settings: &ProvisionSettings,
        certificate_arn: impl Into<String>,
        caller_reference: impl Into<String>,
    ) -> Self {
        let origin_id = domain.bucket_name().to_string();

        Self {
            caller_reference: caller_reference.into(),
            aliases: vec![domain.to_string()],
            default_root_object: settings.index_document.clone(),
            origins: vec![OriginSpec {
                id: origin_id.clone(),
                domain_name: domain.origin_domain_name(&settings.bucket_region),
                origin_access_identity: String::new(),
            }],
            default_cache_behavior: CacheBehaviorSpec {
                target_origin_id: origin_id,
                viewer_protocol_policy: ViewerProtocolPolicy::RedirectToHttps,
                allowed_methods: vec![HttpMethod::Get, HttpMethod::Head],
                forward_query_string: false,
                forward_cookies: CookieForwarding::None,
                min_ttl: 0,
            },
            comment: settings.comment.clone(),
            price_class: settings.price_class,
            web_acl_id: String::new(),
            enabled: true,
            viewer_certificate: ViewerCertificateSpec {
                acm_certificate_arn: certificate_arn.into(),
                ssl_support_method: SslSupportMethod::SniOnly,
                cloudfront_default_certificate: false,
            },
        }
    }
}

/// Caller reference combining the domain with a timestamp.
pub fn caller_reference(domain: &Domain, unix_millis: i64) -> String {
    format!("{}-{}", domain, unix_millis)
}
