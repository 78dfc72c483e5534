// web_app/api/uploads.rs - Image upload storage
//
// Uploaded bytes land in a directory served statically by the server
// binary under /uploads. File names are UUIDs so uploads never collide
// and never trust the client-supplied name.

use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

use uuid::Uuid;

use crate::web_app::model::UploadedImage;

/// Extensions accepted for product images.
const ALLOWED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

/// Directory uploaded images are written to.
///
/// Defaults to the cargo-leptos site root so actix-files can serve it;
/// override with CATALOG_UPLOADS_DIR.
pub fn uploads_dir() -> PathBuf {
    env::var("CATALOG_UPLOADS_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("target/site/uploads"))
}

/// Validate the client file name and return its normalized extension.
pub fn image_extension(file_name: &str) -> Result<String, io::Error> {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    if ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
        Ok(ext)
    } else {
        Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("unsupported image type: '{}'", file_name),
        ))
    }
}

/// Write image bytes to the uploads directory and return the public URL.
pub fn store_image(file_name: &str, content: &[u8]) -> Result<UploadedImage, io::Error> {
    if content.is_empty() {
        return Err(io::Error::new(io::ErrorKind::InvalidData, "empty upload"));
    }

    let ext = image_extension(file_name)?;
    let stored_name = format!("{}.{}", Uuid::new_v4(), ext);

    let dir = uploads_dir();
    fs::create_dir_all(&dir)?;
    fs::write(dir.join(&stored_name), content)?;

    tracing::info!("Stored image '{}' as '{}'", file_name, stored_name);

    Ok(UploadedImage {
        url: format!("/uploads/{}", stored_name),
    })
}
