//! S3 object storage backend.

use super::{build_error, remote_error};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::{
    BucketLocationConstraint, CreateBucketConfiguration, ErrorDocument, IndexDocument,
    PublicAccessBlockConfiguration, WebsiteConfiguration,
};
use sparrow_core::Result;
use sparrow_core::policy::BucketPolicy;
use sparrow_core::provider::ObjectStorage;
use sparrow_core::site::{PublicAccessBlock, SiteObject, WebsiteConfig};

/// S3-backed site storage.
pub struct S3Storage {
    client: Client,
}

impl S3Storage {
    pub fn new(config: &SdkConfig, region: &str) -> Self {
        let s3_config = aws_sdk_s3::config::Builder::from(config)
            .region(Region::new(region.to_string()))
            .build();
        Self::with_client(Client::from_conf(s3_config))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    pub fn region(&self) -> Option<&str> {
        self.client.config().region().map(|r| r.as_ref())
    }
}

#[async_trait]
impl ObjectStorage for S3Storage {
    fn name(&self) -> &'static str {
        "s3"
    }

    async fn create_bucket(&self, bucket: &str, location_constraint: Option<&str>) -> Result<()> {
        let mut request = self.client.create_bucket().bucket(bucket);
        if let Some(region) = location_constraint {
            request = request.create_bucket_configuration(
                CreateBucketConfiguration::builder()
                    .location_constraint(BucketLocationConstraint::from(region))
                    .build(),
            );
        }
        request
            .send()
            .await
            .map_err(|e| remote_error("CreateBucket", e))?;
        Ok(())
    }

    async fn put_bucket_website(&self, bucket: &str, website: &WebsiteConfig) -> Result<()> {
        let index = IndexDocument::builder()
            .suffix(&website.index_suffix)
            .build()
            .map_err(|e| build_error("index document", e))?;
        let error = ErrorDocument::builder()
            .key(&website.error_key)
            .build()
            .map_err(|e| build_error("error document", e))?;

        self.client
            .put_bucket_website()
            .bucket(bucket)
            .website_configuration(
                WebsiteConfiguration::builder()
                    .index_document(index)
                    .error_document(error)
                    .build(),
            )
            .send()
            .await
            .map_err(|e| remote_error("PutBucketWebsite", e))?;
        Ok(())
    }

    async fn put_object(&self, bucket: &str, object: &SiteObject) -> Result<()> {
        self.client
            .put_object()
            .bucket(bucket)
            .key(&object.key)
            .body(ByteStream::from(object.body.clone()))
            .content_type(&object.content_type)
            .send()
            .await
            .map_err(|e| remote_error("PutObject", e))?;
        Ok(())
    }

    async fn put_public_access_block(&self, bucket: &str, block: &PublicAccessBlock) -> Result<()> {
        self.client
            .put_public_access_block()
            .bucket(bucket)
            .public_access_block_configuration(
                PublicAccessBlockConfiguration::builder()
                    .block_public_acls(block.block_public_acls)
                    .ignore_public_acls(block.ignore_public_acls)
                    .block_public_policy(block.block_public_policy)
                    .restrict_public_buckets(block.restrict_public_buckets)
                    .build(),
            )
            .send()
            .await
            .map_err(|e| remote_error("PutPublicAccessBlock", e))?;
        Ok(())
    }

    async fn put_bucket_policy(&self, bucket: &str, policy: &BucketPolicy) -> Result<()> {
        self.client
            .put_bucket_policy()
            .bucket(bucket)
            .policy(policy.to_json()?)
            .send()
            .await
            .map_err(|e| remote_error("PutBucketPolicy", e))?;
        Ok(())
    }
}
