use crate::product::ProductId;
use crate::user::UserId;
use allergo_derive::record;
use chrono::{DateTime, Utc};

pub type PictureId = String;

/// Image container of a [`Picture`].
///
/// The formats the apps are known to upload. Any other value decodes as `Other`,
/// which is written back as `"other"`.
#[record]
#[derive(Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Jpeg,
    Png,
    Heic,
    #[serde(other)]
    Other,
}

/// Transfer encoding of [`Picture::data`]; unrecognized values decode as `Other`.
#[record]
#[derive(Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ImageEncoding {
    Raw,
    Gzip,
    #[serde(other)]
    Other,
}

/// A product photo, optionally uploaded by a user.
///
/// The id is the product EAN followed by the uploader id, so each user has at most
/// one photo per product.
#[record(collection = "Images")]
#[derive(PartialEq, Eq)]
pub struct Picture {
    #[serde(rename = "_id")]
    pub id: PictureId,
    #[serde(with = "bytes_as_base64")]
    pub data: Vec<u8>,
    pub data_type: ImageFormat,
    pub data_encoding: ImageEncoding,
    pub user: Option<UserId>,
    pub product: ProductId,
    pub updated: DateTime<Utc>,
}

impl Picture {
    #[must_use]
    pub fn new(
        user: Option<UserId>,
        product: ProductId,
        data: Vec<u8>,
        data_type: ImageFormat,
        data_encoding: ImageEncoding,
        updated: DateTime<Utc>,
    ) -> Self {
        let id = format!("{product}{}", user.as_deref().unwrap_or_default());
        Self { id, data, data_type, data_encoding, user, product, updated }
    }
}

#[record]
pub struct PictureRef {
    #[serde(rename = "_id")]
    pub id: PictureId,
}

/// Picture bytes travel as standard, padded Base64 strings.
pub(crate) mod bytes_as_base64 {
    use base64::{Engine as _, engine::general_purpose};
    use serde::{Deserialize, Deserializer, Serializer};

    pub(crate) fn serialize<S: Serializer>(bytes: &[u8], s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&general_purpose::STANDARD.encode(bytes))
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(d)?;
        general_purpose::STANDARD
            .decode(encoded)
            .map_err(|e| serde::de::Error::custom(format!("Invalid Base64: {e}")))
    }
}
