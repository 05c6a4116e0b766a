use anyhow::{Result, anyhow};
use web_sys::{File, Url};

use super::ObjectUrls;

/// `blob:` URLs minted by the browser for files picked by the visitor.
#[derive(Copy, Clone, Debug, Default)]
pub struct BlobUrls;

impl ObjectUrls for BlobUrls {
    type Media = File;

    fn create(&self, media: &File) -> Result<String> {
        Url::create_object_url_with_blob(media)
            .map_err(|e| anyhow!("createObjectURL failed for {}: {e:?}", media.name()))
    }

    fn revoke(&self, uri: &str) -> Result<()> {
        Url::revoke_object_url(uri).map_err(|e| anyhow!("revokeObjectURL failed: {e:?}"))
    }
}
