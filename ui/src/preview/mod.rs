//! Local media preview: at most one live object URL for the file the
//! visitor picked, released as soon as it is superseded or torn down.

pub mod blob;

pub use blob::BlobUrls;

use anyhow::Result;
use leptos::logging::warn;

/// MIME filter handed to the native file picker.
pub const VIDEO_ACCEPT: &str = "video/*";

/// Mints and releases URIs that a media element can play straight from
/// local bytes.
pub trait ObjectUrls {
    type Media;

    fn create(&self, media: &Self::Media) -> Result<String>;
    fn revoke(&self, uri: &str) -> Result<()>;
}

struct Active<M> {
    media: M,
    uri: String,
}

/// What a call to [`MediaPreview::select`] did to the state.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Picker closed without a file; nothing changed.
    Cancelled,
    /// First preview of this page view.
    Started,
    /// A new preview replaced (and released) the previous one.
    Superseded,
}

/// The selected file and its preview URI. Both are present or both absent.
pub struct MediaPreview<H: ObjectUrls> {
    urls: H,
    active: Option<Active<H::Media>>,
}

impl<H: ObjectUrls + Default> Default for MediaPreview<H> {
    fn default() -> Self {
        Self::new(H::default())
    }
}

impl<H: ObjectUrls> MediaPreview<H> {
    pub fn new(urls: H) -> Self {
        Self { urls, active: None }
    }

    pub fn uri(&self) -> Option<&str> {
        self.active.as_ref().map(|a| a.uri.as_str())
    }

    pub fn media(&self) -> Option<&H::Media> {
        self.active.as_ref().map(|a| &a.media)
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_none()
    }

    /// Handles a completed picker interaction.
    ///
    /// The new URI is minted before the old one is released, so a failed
    /// mint leaves the current preview untouched.
    pub fn select(&mut self, media: Option<H::Media>) -> Result<Selection> {
        let Some(media) = media else {
            return Ok(Selection::Cancelled);
        };

        let uri = self.urls.create(&media)?;
        let previous = self.active.replace(Active { media, uri });

        match previous {
            Some(old) => {
                self.release(&old.uri);
                Ok(Selection::Superseded)
            }
            None => Ok(Selection::Started),
        }
    }

    /// Drops the current preview, if any, and releases its URI.
    pub fn clear(&mut self) {
        if let Some(old) = self.active.take() {
            self.release(&old.uri);
        }
    }

    fn release(&self, uri: &str) {
        if let Err(e) = self.urls.revoke(uri) {
            warn!("failed to release preview uri {uri}: {e:#}");
        }
    }
}

impl<H: ObjectUrls> Drop for MediaPreview<H> {
    fn drop(&mut self) {
        self.clear();
    }
}
