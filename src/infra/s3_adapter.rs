use crate::config::Config;
use crate::errors::{CloudPhotoError, Result};
use crate::ports::ObjectStore;
use crate::utils::log_utils::Logger;
use aws_config::retry::RetryConfig;
use aws_credential_types::Credentials;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::{BehaviorVersion, Region};
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Output;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::{
    BucketCannedAcl, Delete, ErrorDocument, IndexDocument, ObjectIdentifier,
    WebsiteConfiguration,
};
use std::future::Future;
use std::path::Path;
use tempfile::NamedTempFile;
use tokio::io::AsyncWriteExt;

/// Upper bound of keys accepted by one DeleteObjects request
const DELETE_BATCH_SIZE: usize = 1000;

/// Blocking client for an S3-compatible object store
pub struct S3ObjectStore {
    client: Client,
    runtime: tokio::runtime::Runtime,
    logger: Logger,
}

fn storage_error<E>(context: &str, e: E) -> CloudPhotoError
where
    E: std::error::Error,
{
    CloudPhotoError::Storage(format!("{context}: {}", DisplayErrorContext(&e)))
}

/// Continuation token of a truncated listing page
fn next_page_token(page: &ListObjectsV2Output) -> Option<String> {
    if page.is_truncated().unwrap_or(false) {
        page.next_continuation_token().map(str::to_string)
    } else {
        None
    }
}

/// Keys of every listing page, requesting the next page until one is not truncated
async fn collect_pages<F, Fut>(mut fetch_page: F) -> Result<Vec<String>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<ListObjectsV2Output>>,
{
    let mut keys = Vec::new();
    let mut token = None;
    loop {
        let page = fetch_page(token.take()).await?;
        keys.extend(
            page.contents()
                .iter()
                .filter_map(|object| object.key().map(str::to_string)),
        );
        token = next_page_token(&page);
        if token.is_none() {
            return Ok(keys);
        }
    }
}

/// One DeleteObjects payload per `DELETE_BATCH_SIZE` keys
fn delete_batches(keys: &[String]) -> Result<Vec<Delete>> {
    keys.chunks(DELETE_BATCH_SIZE)
        .map(|batch| {
            let objects = batch
                .iter()
                .map(|key| ObjectIdentifier::builder().key(key).build())
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(|e| storage_error("Invalid object identifier", e))?;
            Delete::builder()
                .set_objects(Some(objects))
                .build()
                .map_err(|e| storage_error("Invalid delete request", e))
        })
        .collect()
}

/// Stream `body` into a temporary file next to `local_path`, then move it into place.
///
/// A failed transfer leaves nothing at `local_path`.
async fn write_body(mut body: ByteStream, local_path: &Path, key: &str) -> Result<usize> {
    let dir = match local_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let partial = NamedTempFile::new_in(dir)?;
    let mut file = tokio::fs::File::from_std(partial.reopen()?);

    let mut written = 0;
    while let Some(chunk) = body
        .try_next()
        .await
        .map_err(|e| storage_error(&format!("Error when download file {key}"), e))?
    {
        file.write_all(&chunk).await?;
        written += chunk.len();
    }
    file.flush().await?;
    drop(file);

    partial
        .persist(local_path)
        .map_err(|e| CloudPhotoError::Io(e.error))?;
    Ok(written)
}

impl S3ObjectStore {
    /// Create a client from the static credentials, region and endpoint in `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the async runtime cannot be created.
    pub fn new(config: &Config, logger: Logger) -> Result<Self> {
        // Reused for every call
        let runtime = tokio::runtime::Runtime::new().map_err(|e| {
            CloudPhotoError::Storage(format!("Failed to create runtime: {e}"))
        })?;

        logger.debug(&format!(
            "Creating S3 client: endpoint {}, region {}, key id {}****",
            config.endpoint_url,
            config.region,
            config.access_key_id.chars().take(4).collect::<String>()
        ));

        let credentials = Credentials::new(
            config.access_key_id.clone(),
            config.secret_access_key.clone(),
            None, // No session token
            None, // No expiry
            "CloudPhotoStaticCredentials",
        );

        let s3_config = aws_sdk_s3::Config::builder()
            .region(Region::new(config.region.clone()))
            .endpoint_url(config.endpoint_url.clone())
            .credentials_provider(credentials)
            .retry_config(RetryConfig::disabled())
            .behavior_version(BehaviorVersion::latest())
            .build();

        Ok(Self {
            client: Client::from_conf(s3_config),
            runtime,
            logger,
        })
    }
}

impl ObjectStore for S3ObjectStore {
    fn list_buckets(&self) -> Result<Vec<String>> {
        self.runtime.block_on(async {
            let resp = self
                .client
                .list_buckets()
                .send()
                .await
                .map_err(|e| storage_error("Failed to list buckets", e))?;

            Ok::<_, CloudPhotoError>(
                resp.buckets()
                    .iter()
                    .filter_map(|b| b.name().map(str::to_string))
                    .collect(),
            )
        })
    }

    fn create_bucket(&self, bucket: &str) -> Result<()> {
        self.logger.info(&format!("Creating bucket '{bucket}'"));
        self.runtime.block_on(async {
            self.client
                .create_bucket()
                .bucket(bucket)
                .send()
                .await
                .map_err(|e| storage_error(&format!("Can not create bucket {bucket}"), e))?;
            Ok::<(), CloudPhotoError>(())
        })
    }

    fn list_objects(&self, bucket: &str, prefix: &str) -> Result<Vec<String>> {
        let keys = self.runtime.block_on(collect_pages(|token| {
            let mut request = self.client.list_objects_v2().bucket(bucket);
            if !prefix.is_empty() {
                request = request.prefix(prefix);
            }
            if let Some(token) = token {
                self.logger.debug("Listing truncated, requesting next page");
                request = request.continuation_token(token);
            }
            async move {
                request.send().await.map_err(|e| {
                    storage_error(&format!("Failed to list objects with prefix '{prefix}'"), e)
                })
            }
        }))?;

        self.logger.debug(&format!(
            "Found {} objects with prefix '{prefix}' in bucket '{bucket}'",
            keys.len()
        ));
        Ok(keys)
    }

    fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<()> {
        self.logger
            .debug(&format!("Putting {} bytes at '{key}'", body.len()));
        self.runtime.block_on(async {
            self.client
                .put_object()
                .bucket(bucket)
                .key(key)
                .content_type(content_type)
                .body(ByteStream::from(body))
                .send()
                .await
                .map_err(|e| storage_error(&format!("Failed to put object {key}"), e))?;
            Ok::<(), CloudPhotoError>(())
        })
    }

    fn upload_file(&self, bucket: &str, key: &str, local_path: &Path) -> Result<()> {
        self.logger
            .info(&format!("Uploading {} to '{key}'", local_path.display()));
        self.runtime.block_on(async {
            // Streamed from disk, not loaded into memory
            let body = ByteStream::from_path(local_path).await.map_err(|e| {
                CloudPhotoError::Storage(format!(
                    "Failed to read {}: {e}",
                    local_path.display()
                ))
            })?;

            self.client
                .put_object()
                .bucket(bucket)
                .key(key)
                .content_type("image/jpeg")
                .body(body)
                .send()
                .await
                .map_err(|e| storage_error(&format!("Failed to upload {key}"), e))?;
            Ok::<(), CloudPhotoError>(())
        })
    }

    fn download_file(&self, bucket: &str, key: &str, local_path: &Path) -> Result<()> {
        self.logger
            .info(&format!("Downloading '{key}' to {}", local_path.display()));
        self.runtime.block_on(async {
            let resp = self
                .client
                .get_object()
                .bucket(bucket)
                .key(key)
                .send()
                .await
                .map_err(|e| storage_error(&format!("Error when download file {key}"), e))?;

            let written = write_body(resp.body, local_path, key).await?;
            self.logger
                .debug(&format!("Wrote {written} bytes to {}", local_path.display()));
            Ok::<(), CloudPhotoError>(())
        })
    }

    fn delete_object(&self, bucket: &str, key: &str) -> Result<()> {
        self.runtime.block_on(async {
            self.client
                .delete_object()
                .bucket(bucket)
                .key(key)
                .send()
                .await
                .map_err(|e| storage_error(&format!("Failed to delete {key}"), e))?;
            Ok::<(), CloudPhotoError>(())
        })
    }

    fn delete_objects(&self, bucket: &str, keys: &[String]) -> Result<()> {
        for delete in delete_batches(keys)? {
            self.logger
                .debug(&format!("Deleting a batch of {} objects", delete.objects().len()));
            self.runtime.block_on(async {
                let resp = self
                    .client
                    .delete_objects()
                    .bucket(bucket)
                    .delete(delete)
                    .send()
                    .await
                    .map_err(|e| storage_error("Failed to delete objects", e))?;

                if let Some(failed) = resp.errors().first() {
                    return Err(CloudPhotoError::Storage(format!(
                        "Failed to delete {}: {}",
                        failed.key().unwrap_or("object"),
                        failed.message().unwrap_or("unknown error")
                    )));
                }
                Ok::<(), CloudPhotoError>(())
            })?;
        }
        Ok(())
    }

    fn set_public_read(&self, bucket: &str) -> Result<()> {
        self.runtime.block_on(async {
            self.client
                .put_bucket_acl()
                .bucket(bucket)
                .acl(BucketCannedAcl::PublicRead)
                .send()
                .await
                .map_err(|e| storage_error("Failed to set bucket ACL", e))?;
            Ok::<(), CloudPhotoError>(())
        })
    }

    fn configure_website(
        &self,
        bucket: &str,
        index_document: &str,
        error_document: &str,
    ) -> Result<()> {
        let website = WebsiteConfiguration::builder()
            .index_document(
                IndexDocument::builder()
                    .suffix(index_document)
                    .build()
                    .map_err(|e| storage_error("Invalid index document", e))?,
            )
            .error_document(
                ErrorDocument::builder()
                    .key(error_document)
                    .build()
                    .map_err(|e| storage_error("Invalid error document", e))?,
            )
            .build();

        self.runtime.block_on(async {
            self.client
                .put_bucket_website()
                .bucket(bucket)
                .website_configuration(website)
                .send()
                .await
                .map_err(|e| storage_error("Failed to configure website", e))?;
            Ok::<(), CloudPhotoError>(())
        })
    }
}
