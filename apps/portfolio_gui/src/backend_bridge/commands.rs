//! Backend commands queued from UI to backend worker.

use shared::domain::ContactMessage;

/// Keys for the images the view can ask the worker to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageKey {
    Profile,
    ProjectPreview(usize),
}

pub enum BackendCommand {
    SendContactMessage {
        message: ContactMessage,
    },
    LoadImage {
        key: ImageKey,
        path: String,
    },
}
