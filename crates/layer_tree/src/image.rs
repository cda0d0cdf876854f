//! Encoded raster images.
//!
//! An [`Image`] is an opaque payload tagged with the codec that produced it.
//! The payload is never decoded here; the renderer hands it to whatever
//! image decoder the platform provides.
//!
//! # Format identifiers
//!
//! | identifier   | codec  |
//! |--------------|--------|
//! | `image/png`  | PNG    |
//! | `image/jpeg` | JPEG   |
//! | `image/jpg`  | JPEG   |
//!
//! Matching is case-sensitive and every other identifier is rejected.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::error::{LayerTreeError, Result, UnsupportedKind};

/// The codec tag of an [`Image`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Jpeg,
    Png,
}

impl ImageFormat {
    /// Looks up a format identifier in the supported table.
    pub fn from_mime_type(mime_type: &str) -> Option<Self> {
        match mime_type {
            "image/png" => Some(Self::Png),
            "image/jpeg" | "image/jpg" => Some(Self::Jpeg),
            _ => None,
        }
    }

    /// The canonical identifier. `image/jpg` input comes back as `image/jpeg`.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Png => "png",
        }
    }
}

/// An encoded raster payload.
///
/// Always holds a non-empty payload. The codec tag is part of the value:
/// a JPEG and a PNG with byte-identical payloads are not equal.
///
/// Values are built through [`Image::new`], [`Image::try_new`] or
/// [`Image::from_data_uri`]; deserialization goes through the same checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "EncodedImage", into = "EncodedImage")]
pub enum Image {
    Jpeg(Vec<u8>),
    Png(Vec<u8>),
}

impl Image {
    /// Builds an image from a format identifier and its encoded bytes.
    ///
    /// Returns `None` when `data` is empty (whatever the identifier) or when
    /// the identifier is not in the supported table.
    pub fn new(mime_type: &str, data: Vec<u8>) -> Option<Self> {
        match Self::try_new(mime_type, data) {
            Ok(image) => Some(image),
            Err(err) => {
                log::debug!("rejected image: {}", err);
                None
            }
        }
    }

    /// Same checks as [`Image::new`], reporting which one failed.
    pub fn try_new(mime_type: &str, data: Vec<u8>) -> Result<Self> {
        if data.is_empty() {
            return Err(LayerTreeError::unsupported(
                UnsupportedKind::Image,
                format!("empty payload for {}", mime_type),
            ));
        }

        match ImageFormat::from_mime_type(mime_type) {
            Some(ImageFormat::Png) => Ok(Self::Png(data)),
            Some(ImageFormat::Jpeg) => Ok(Self::Jpeg(data)),
            None => Err(LayerTreeError::unsupported(
                UnsupportedKind::Image,
                format!("format {}", mime_type),
            )),
        }
    }

    /// Builds an image from a base64 `data:` URI, as found in `<image href>`.
    ///
    /// Media type parameters before `;base64` are ignored and ASCII
    /// whitespace inside the payload is skipped. URIs without the `;base64`
    /// marker are rejected.
    pub fn from_data_uri(uri: &str) -> Option<Self> {
        let rest = uri.trim().strip_prefix("data:")?;
        let (header, payload) = rest.split_once(',')?;

        let mut params = header.split(';');
        let mime_type = params.next()?;
        if params.last() != Some("base64") {
            log::debug!("rejected data uri for {}: not base64", mime_type);
            return None;
        }

        let compact: String = payload
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();
        log::trace!(
            "decoding {} base64 characters for {}",
            compact.len(),
            mime_type
        );

        match STANDARD.decode(compact) {
            Ok(data) => Self::new(mime_type, data),
            Err(err) => {
                log::debug!("rejected data uri for {}: {}", mime_type, err);
                None
            }
        }
    }

    pub fn format(&self) -> ImageFormat {
        match self {
            Self::Jpeg(_) => ImageFormat::Jpeg,
            Self::Png(_) => ImageFormat::Png,
        }
    }

    pub fn data(&self) -> &[u8] {
        match self {
            Self::Jpeg(data) | Self::Png(data) => data,
        }
    }

    pub fn into_data(self) -> Vec<u8> {
        match self {
            Self::Jpeg(data) | Self::Png(data) => data,
        }
    }
}

/// Serialized form of an [`Image`]: canonical identifier plus base64 payload.
#[derive(Serialize, Deserialize)]
struct EncodedImage {
    mime_type: String,
    data: String,
}

impl From<Image> for EncodedImage {
    fn from(image: Image) -> Self {
        Self {
            mime_type: image.format().mime_type().to_string(),
            data: STANDARD.encode(image.data()),
        }
    }
}

impl TryFrom<EncodedImage> for Image {
    type Error = LayerTreeError;

    fn try_from(encoded: EncodedImage) -> Result<Self> {
        let data = STANDARD.decode(&encoded.data).map_err(|e| {
            LayerTreeError::unsupported(UnsupportedKind::Image, format!("payload: {}", e))
        })?;
        Self::try_new(&encoded.mime_type, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];
    const JPEG_SOI: &[u8] = &[0xff, 0xd8, 0xff, 0xe0];

    #[test]
    fn png_holds_exact_bytes() {
        let image = Image::new("image/png", PNG_SIGNATURE.to_vec()).unwrap();
        assert_eq!(image, Image::Png(PNG_SIGNATURE.to_vec()));
        assert_eq!(image.format(), ImageFormat::Png);
        assert_eq!(image.data(), PNG_SIGNATURE);
    }

    #[test]
    fn jpg_is_an_alias_of_jpeg() {
        let jpg = Image::new("image/jpg", JPEG_SOI.to_vec()).unwrap();
        let jpeg = Image::new("image/jpeg", JPEG_SOI.to_vec()).unwrap();
        assert_eq!(jpg, jpeg);
        assert_eq!(jpg, Image::Jpeg(JPEG_SOI.to_vec()));
    }

    #[test]
    fn empty_payload_is_always_rejected() {
        for mime_type in ["image/png", "image/jpeg", "image/jpg", "image/gif", ""] {
            assert_eq!(Image::new(mime_type, Vec::new()), None, "{}", mime_type);
        }
    }

    #[test]
    fn unknown_formats_are_rejected() {
        for mime_type in ["image/gif", "image/webp", "image/svg+xml", "png", ""] {
            assert_eq!(Image::new(mime_type, PNG_SIGNATURE.to_vec()), None);
        }
    }

    #[test]
    fn format_matching_is_case_sensitive() {
        assert_eq!(Image::new("IMAGE/PNG", PNG_SIGNATURE.to_vec()), None);
        assert_eq!(Image::new("image/JPEG", JPEG_SOI.to_vec()), None);
        assert_eq!(Image::new(" image/png", PNG_SIGNATURE.to_vec()), None);
    }

    #[test]
    fn codec_tag_is_part_of_equality() {
        let data = vec![1, 2, 3];
        assert_ne!(Image::Jpeg(data.clone()), Image::Png(data));
    }

    #[test]
    fn payload_is_part_of_equality() {
        assert_ne!(Image::Png(vec![1, 2, 3]), Image::Png(vec![1, 2]));
        assert_ne!(Image::Png(vec![1, 2, 3]), Image::Png(vec![1, 2, 4]));
    }

    #[test]
    fn try_new_checks_emptiness_first() {
        let err = Image::try_new("image/gif", Vec::new()).unwrap_err();
        let LayerTreeError::Unsupported(unsupported) = err;
        assert_eq!(unsupported.kind(), UnsupportedKind::Image);
        assert_eq!(unsupported.context(), "empty payload for image/gif");
    }

    #[test]
    fn try_new_reports_unknown_format() {
        let err = Image::try_new("image/gif", vec![0x47]).unwrap_err();
        assert_eq!(err.to_string(), "unsupported image: format image/gif");
    }

    #[test]
    fn format_identifiers() {
        assert_eq!(ImageFormat::from_mime_type("image/jpg"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::Jpeg.mime_type(), "image/jpeg");
        assert_eq!(ImageFormat::Png.mime_type(), "image/png");
        assert_eq!(ImageFormat::Png.extension(), "png");
        assert_eq!(ImageFormat::from_mime_type("image/bmp"), None);
    }

    #[test]
    fn into_data_returns_payload() {
        let image = Image::new("image/jpeg", JPEG_SOI.to_vec()).unwrap();
        assert_eq!(image.into_data(), JPEG_SOI.to_vec());
    }

    #[test]
    fn data_uri() {
        let uri = format!("data:image/png;base64,{}", STANDARD.encode(PNG_SIGNATURE));
        let image = Image::from_data_uri(&uri).unwrap();
        assert_eq!(image, Image::Png(PNG_SIGNATURE.to_vec()));
    }

    #[test]
    fn data_uri_skips_whitespace_and_parameters() {
        let encoded = STANDARD.encode(JPEG_SOI);
        let (head, tail) = encoded.split_at(3);
        let uri = format!("data:image/jpg;name=x.jpg;base64,\n  {}\n  {}\n", head, tail);
        let image = Image::from_data_uri(&uri).unwrap();
        assert_eq!(image, Image::Jpeg(JPEG_SOI.to_vec()));
    }

    #[test]
    fn data_uri_rejections() {
        assert_eq!(Image::from_data_uri("image/png;base64,AAAA"), None);
        assert_eq!(Image::from_data_uri("data:image/png,AAAA"), None);
        assert_eq!(Image::from_data_uri("data:image/png;base64"), None);
        assert_eq!(Image::from_data_uri("data:image/png;base64,!!!!"), None);
        assert_eq!(Image::from_data_uri("data:image/png;base64,"), None);
        assert_eq!(Image::from_data_uri("data:image/gif;base64,R0lG"), None);
    }

    #[test]
    fn serializes_with_canonical_identifier() {
        let image = Image::new("image/jpg", JPEG_SOI.to_vec()).unwrap();
        let json = serde_json::to_value(&image).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "mime_type": "image/jpeg",
                "data": STANDARD.encode(JPEG_SOI),
            })
        );

        let back: Image = serde_json::from_value(json).unwrap();
        assert_eq!(back, image);
    }

    #[test]
    fn deserialization_is_validated() {
        let empty = serde_json::json!({ "mime_type": "image/png", "data": "" });
        assert!(serde_json::from_value::<Image>(empty).is_err());

        let gif = serde_json::json!({ "mime_type": "image/gif", "data": "R0lG" });
        let err = serde_json::from_value::<Image>(gif).unwrap_err();
        assert!(err.to_string().contains("format image/gif"));

        let garbage = serde_json::json!({ "mime_type": "image/png", "data": "***" });
        assert!(serde_json::from_value::<Image>(garbage).is_err());
    }
}
