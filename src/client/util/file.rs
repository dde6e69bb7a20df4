use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::service::FileUpload;

/// Reads the first file picked in a file input.
///
/// The multipart field name is set by the service that sends it.
pub async fn read_picked_file(event: &FormEvent) -> Option<FileUpload> {
    let file = event.files().into_iter().next()?;
    let file_name = file.name();

    let bytes = match file.read_bytes().await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::error!(file = %file_name, "Failed to read picked file: {}", err);
            return None;
        }
    };
    let content_type = file
        .content_type()
        .filter(|content_type| !content_type.is_empty())
        .unwrap_or_else(|| content_type_for(&file_name));

    Some(FileUpload {
        field: "file",
        file_name,
        content_type,
        bytes: bytes.to_vec(),
    })
}

/// MIME type guessed from the file extension; anything that is not an image is sent as
/// `application/octet-stream`.
pub fn content_type_for(file_name: &str) -> String {
    let guessed = mime_guess::from_path(file_name).first_or_octet_stream();

    if guessed.type_() == mime_guess::mime::IMAGE {
        guessed.essence_str().to_string()
    } else {
        mime_guess::mime::APPLICATION_OCTET_STREAM.to_string()
    }
}
