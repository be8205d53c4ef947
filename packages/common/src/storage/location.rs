/// A fixed bucket in a fixed region.
///
/// Public object URLs are derived from this alone, so the same key always
/// maps to the same URL regardless of which [`ObjectStore`](super::ObjectStore)
/// wrote it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketLocation {
    pub bucket: String,
    pub region: String,
}

impl BucketLocation {
    pub fn new(bucket: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            region: region.into(),
        }
    }

    /// `https://<bucket>.s3.<region>.amazonaws.com/<key>`
    pub fn object_url(&self, key: &str) -> String {
        format!(
            "https://{}.s3.{}.amazonaws.com/{}",
            self.bucket, self.region, key
        )
    }
}
