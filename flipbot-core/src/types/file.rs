//! Shared files on incoming events and files to upload.

use serde::{Deserialize, Serialize};

/// A file attached to a `file_share` message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedFile {
    pub id: String,
    pub name: String,
    pub title: Option<String>,
    pub mimetype: String,
    /// Authenticated download URL (needs the bot token).
    pub url_private_download: Option<String>,
    /// Comment posted together with the file, when the platform reports it on the file.
    pub initial_comment: Option<String>,
}

impl SharedFile {
    pub fn is_image(&self) -> bool {
        self.mimetype.starts_with("image")
    }
}

/// A file to post to a channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub channel: String,
    pub filename: String,
    pub bytes: Vec<u8>,
    pub title: Option<String>,
    pub initial_comment: Option<String>,
}
