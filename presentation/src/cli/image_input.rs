//! Image argument handling
//!
//! The `image` subcommand accepts either a data URI or a file path; files
//! are read and encoded into a data URI here so the pipeline only ever
//! sees one format.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::io;
use std::path::Path;

/// Turn an image argument into a `data:<mime>;base64,<data>` URI
pub fn image_argument_to_data_uri(arg: &str) -> io::Result<String> {
    let trimmed = arg.trim();
    if trimmed.starts_with("data:") {
        return Ok(trimmed.to_string());
    }

    let path = Path::new(trimmed);
    let mime_type = mime_type_for(path).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "unsupported image type '{}' (expected png, jpg, jpeg, gif, or webp)",
                path.display()
            ),
        )
    })?;
    let bytes = std::fs::read(path)?;
    Ok(format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes)))
}

fn mime_type_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use truthguard_domain::ImagePayload;

    #[test]
    fn test_data_uri_passes_through() {
        let uri = "data:image/png;base64,iVBORw0KGgo=";
        assert_eq!(image_argument_to_data_uri(uri).unwrap(), uri);
    }

    #[test]
    fn test_file_is_encoded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shot.PNG");
        std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

        let uri = image_argument_to_data_uri(path.to_str().unwrap()).unwrap();

        assert_eq!(uri, "data:image/png;base64,iVBORw==");
        assert!(ImagePayload::parse(uri).is_ok());
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let err = image_argument_to_data_uri("notes.txt").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = image_argument_to_data_uri("/definitely/not/here.jpg").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
