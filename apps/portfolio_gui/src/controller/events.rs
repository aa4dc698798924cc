//! Events flowing back from the backend worker to the UI thread.

use crate::backend_bridge::commands::ImageKey;
use crate::media::DecodedImage;

pub enum UiEvent {
    Info(String),
    /// The relay accepted the in-flight contact message.
    ContactSendOk,
    /// The relay call failed; the reason is logged, the user sees the fixed
    /// failure banner.
    ContactSendFailed {
        reason: String,
    },
    ImageLoaded {
        key: ImageKey,
        image: DecodedImage,
    },
    ImageLoadFailed {
        key: ImageKey,
        reason: String,
    },
}
