//! CloudFront content delivery backend.

use super::{build_error, remote_error};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_cloudfront::Client;
use aws_sdk_cloudfront::config::Region;
use aws_sdk_cloudfront::types::{
    Aliases, AllowedMethods, CookiePreference, DefaultCacheBehavior, DistributionConfig,
    ForwardedValues, ItemSelection, Method, Origin, Origins, PriceClass, S3OriginConfig,
    SslSupportMethod, ViewerCertificate, ViewerProtocolPolicy,
};
use sparrow_core::distribution::{
    CacheBehaviorSpec, CookieForwarding, DistributionSpec, DistributionSummary, HttpMethod,
    OriginSpec,
};
use sparrow_core::provider::ContentDelivery;
use sparrow_core::{Result, distribution, site};
use tracing::warn;

/// CloudFront-backed delivery.
pub struct CloudFrontDelivery {
    client: Client,
}

impl CloudFrontDelivery {
    /// CloudFront is a global service; `region` only selects where requests
    /// are signed.
    pub fn new(config: &SdkConfig, region: &str) -> Self {
        let cloudfront_config = aws_sdk_cloudfront::config::Builder::from(config)
            .region(Region::new(region.to_string()))
            .build();
        Self::with_client(Client::from_conf(cloudfront_config))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    pub fn region(&self) -> Option<&str> {
        self.client.config().region().map(|r| r.as_ref())
    }
}

#[async_trait]
impl ContentDelivery for CloudFrontDelivery {
    fn name(&self) -> &'static str {
        "cloudfront"
    }

    async fn create_distribution(&self, spec: &DistributionSpec) -> Result<DistributionSummary> {
        let output = self
            .client
            .create_distribution()
            .distribution_config(distribution_config(spec)?)
            .send()
            .await
            .map_err(|e| remote_error("CreateDistribution", e))?;

        // The create was accepted; a missing echo is not a failure.
        let Some(distribution) = output.distribution() else {
            warn!(
                caller_reference = %spec.caller_reference,
                "CreateDistribution response did not include the distribution"
            );
            return Ok(DistributionSummary::default());
        };

        Ok(DistributionSummary {
            id: distribution.id().to_string(),
            domain_name: distribution.domain_name().to_string(),
        })
    }
}

/// Translate a distribution spec into the CloudFront request payload.
pub fn distribution_config(spec: &DistributionSpec) -> Result<DistributionConfig> {
    let aliases = Aliases::builder()
        .quantity(spec.aliases.len() as i32)
        .set_items(Some(spec.aliases.clone()))
        .build()
        .map_err(|e| build_error("aliases", e))?;

    let origins = spec
        .origins
        .iter()
        .map(origin)
        .collect::<Result<Vec<_>>>()?;
    let origins = Origins::builder()
        .quantity(origins.len() as i32)
        .set_items(Some(origins))
        .build()
        .map_err(|e| build_error("origins", e))?;

    let viewer_certificate = ViewerCertificate::builder()
        .acm_certificate_arn(&spec.viewer_certificate.acm_certificate_arn)
        .ssl_support_method(ssl_support_method(
            spec.viewer_certificate.ssl_support_method,
        ))
        .cloud_front_default_certificate(spec.viewer_certificate.cloudfront_default_certificate)
        .build();

    DistributionConfig::builder()
        .caller_reference(&spec.caller_reference)
        .aliases(aliases)
        .default_root_object(&spec.default_root_object)
        .origins(origins)
        .default_cache_behavior(cache_behavior(&spec.default_cache_behavior)?)
        .comment(&spec.comment)
        .price_class(price_class(spec.price_class))
        .web_acl_id(&spec.web_acl_id)
        .enabled(spec.enabled)
        .viewer_certificate(viewer_certificate)
        .build()
        .map_err(|e| build_error("distribution", e))
}

fn origin(spec: &OriginSpec) -> Result<Origin> {
    let s3_origin = S3OriginConfig::builder()
        .origin_access_identity(&spec.origin_access_identity)
        .build();

    Origin::builder()
        .id(&spec.id)
        .domain_name(&spec.domain_name)
        .s3_origin_config(s3_origin)
        .build()
        .map_err(|e| build_error("origin", e))
}

fn cache_behavior(spec: &CacheBehaviorSpec) -> Result<DefaultCacheBehavior> {
    let methods: Vec<Method> = spec
        .allowed_methods
        .iter()
        .map(|method| match method {
            HttpMethod::Get => Method::Get,
            HttpMethod::Head => Method::Head,
        })
        .collect();
    let allowed_methods = AllowedMethods::builder()
        .quantity(methods.len() as i32)
        .set_items(Some(methods))
        .build()
        .map_err(|e| build_error("allowed methods", e))?;

    let cookies = CookiePreference::builder()
        .forward(match spec.forward_cookies {
            CookieForwarding::None => ItemSelection::None,
        })
        .build()
        .map_err(|e| build_error("cookie preference", e))?;
    let forwarded_values = ForwardedValues::builder()
        .query_string(spec.forward_query_string)
        .cookies(cookies)
        .build()
        .map_err(|e| build_error("forwarded values", e))?;

    DefaultCacheBehavior::builder()
        .target_origin_id(&spec.target_origin_id)
        .viewer_protocol_policy(viewer_protocol_policy(spec.viewer_protocol_policy))
        .allowed_methods(allowed_methods)
        .forwarded_values(forwarded_values)
        .min_ttl(spec.min_ttl)
        .build()
        .map_err(|e| build_error("default cache behavior", e))
}

fn viewer_protocol_policy(policy: distribution::ViewerProtocolPolicy) -> ViewerProtocolPolicy {
    match policy {
        distribution::ViewerProtocolPolicy::RedirectToHttps => {
            ViewerProtocolPolicy::RedirectToHttps
        }
    }
}

fn ssl_support_method(method: distribution::SslSupportMethod) -> SslSupportMethod {
    match method {
        distribution::SslSupportMethod::SniOnly => SslSupportMethod::SniOnly,
    }
}

fn price_class(class: site::PriceClass) -> PriceClass {
    match class {
        site::PriceClass::PriceClass100 => PriceClass::PriceClass100,
        site::PriceClass::PriceClass200 => PriceClass::PriceClass200,
        site::PriceClass::PriceClassAll => PriceClass::PriceClassAll,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_cloudfront::operation::create_distribution::{
        CreateDistributionError, CreateDistributionOutput,
    };
    use aws_sdk_cloudfront::types::Distribution;
    use aws_sdk_cloudfront::types::error::DistributionAlreadyExists;
    use aws_smithy_mocks::{RuleMode, mock, mock_client};
    use aws_smithy_types::DateTime;
    use sparrow_core::distribution::caller_reference;
    use sparrow_core::site::ProvisionSettings;
    use sparrow_core::{Domain, Error};

    fn site_spec() -> DistributionSpec {
        let domain = Domain::parse("site.example").unwrap();
        DistributionSpec::for_site(
            &domain,
            &ProvisionSettings::default(),
            "arn:aws:acm:us-east-1:123456789012:certificate/abc",
            caller_reference(&domain, 1_700_000_000_000),
        )
    }

    #[test]
    fn test_distribution_config_top_level_fields() {
        let config = distribution_config(&site_spec()).unwrap();

        assert_eq!(config.caller_reference(), "site.example-1700000000000");
        assert_eq!(config.default_root_object(), Some("index.html"));
        assert_eq!(config.comment(), "");
        assert_eq!(config.web_acl_id(), Some(""));
        assert_eq!(config.price_class(), Some(&PriceClass::PriceClass100));
    }

    #[test]
    fn test_enum_mappings() {
        assert_eq!(
            viewer_protocol_policy(distribution::ViewerProtocolPolicy::RedirectToHttps),
            ViewerProtocolPolicy::RedirectToHttps
        );
        assert_eq!(
            ssl_support_method(distribution::SslSupportMethod::SniOnly),
            SslSupportMethod::SniOnly
        );
        assert_eq!(
            price_class(site::PriceClass::PriceClassAll),
            PriceClass::PriceClassAll
        );
    }

    #[test]
    fn test_origin_payload_builds() {
        let spec = site_spec();
        assert!(origin(&spec.origins[0]).is_ok());
        assert!(cache_behavior(&spec.default_cache_behavior).is_ok());
    }

    #[tokio::test]
    async fn test_create_distribution_returns_summary() {
        let rule = mock!(aws_sdk_cloudfront::Client::create_distribution)
            .match_requests(|req| {
                req.distribution_config()
                    .is_some_and(|c| c.caller_reference() == "site.example-1700000000000")
            })
            .then_output(|| {
                let distribution = Distribution::builder()
                    .id("E2EXAMPLE")
                    .arn("arn:aws:cloudfront::123456789012:distribution/E2EXAMPLE")
                    .status("InProgress")
                    .last_modified_time(DateTime::from_secs(0))
                    .in_progress_invalidation_batches(0)
                    .domain_name("d111111abcdef8.cloudfront.net")
                    .distribution_config(distribution_config(&site_spec()).unwrap())
                    .build()
                    .unwrap();
                CreateDistributionOutput::builder()
                    .distribution(distribution)
                    .build()
            });
        let cdn =
            CloudFrontDelivery::with_client(mock_client!(aws_sdk_cloudfront, RuleMode::MatchAny, [&rule]));

        let summary = cdn.create_distribution(&site_spec()).await.unwrap();

        assert_eq!(summary.id, "E2EXAMPLE");
        assert_eq!(summary.domain_name, "d111111abcdef8.cloudfront.net");
        assert_eq!(rule.num_calls(), 1);
    }

    #[tokio::test]
    async fn test_create_distribution_without_echo_is_success() {
        let rule = mock!(aws_sdk_cloudfront::Client::create_distribution)
            .then_output(|| CreateDistributionOutput::builder().build());
        let cdn =
            CloudFrontDelivery::with_client(mock_client!(aws_sdk_cloudfront, RuleMode::MatchAny, [&rule]));

        let summary = cdn.create_distribution(&site_spec()).await.unwrap();

        assert_eq!(summary, DistributionSummary::default());
        assert_eq!(rule.num_calls(), 1);
    }

    #[tokio::test]
    async fn test_create_distribution_failure_is_remote_error() {
        let rule = mock!(aws_sdk_cloudfront::Client::create_distribution).then_error(|| {
            CreateDistributionError::DistributionAlreadyExists(
                DistributionAlreadyExists::builder().build(),
            )
        });
        let cdn =
            CloudFrontDelivery::with_client(mock_client!(aws_sdk_cloudfront, RuleMode::MatchAny, [&rule]));

        let err = cdn.create_distribution(&site_spec()).await.unwrap_err();

        assert!(matches!(
            err,
            Error::Remote { ref operation, .. } if operation == "CreateDistribution"
        ));
    }
}
