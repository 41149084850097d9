//! S3 bucket ARN helpers.

/// Build the ARN of a bucket, e.g. `arn:aws:s3:::my-bucket`.
#[must_use]
pub fn bucket_arn(partition: &str, bucket: &str) -> String {
    format!("arn:{partition}:s3:::{bucket}")
}

/// Extract the bucket name from a bucket ARN.
///
/// Returns `None` for anything that is not an S3 bucket ARN, including
/// object ARNs (`arn:aws:s3:::bucket/key`).
#[must_use]
pub fn bucket_name_from_arn(arn: &str) -> Option<&str> {
    let (partition, rest) = arn.strip_prefix("arn:")?.split_once(':')?;
    if partition.is_empty() {
        return None;
    }
    let bucket = rest.strip_prefix("s3:::")?;
    if bucket.is_empty() || bucket.contains('/') {
        return None;
    }
    Some(bucket)
}
