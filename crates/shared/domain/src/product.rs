use crate::country::CountryId;
use crate::keyword::Keyword;
use crate::picture::{Picture, PictureId};
use crate::user::UserId;
use allergo_derive::record;
use chrono::{DateTime, Utc};

/// Product barcode (EAN), the product's primary key.
pub type ProductId = String;

#[record]
#[derive(Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ProductSource {
    Ica,
    Coop,
    App,
}

#[record(collection = "Products")]
#[derive(PartialEq, Eq)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ProductId,
    pub name: String,
    pub producer: Option<String>,
    pub origin: Option<CountryId>,
    pub ingredients: Option<String>,
    pub image: Option<PictureId>,
    pub updated: DateTime<Utc>,
    pub data_source: ProductSource,
}

#[record]
pub struct ProductWithPicture {
    pub product: Product,
    pub picture: Option<Picture>,
}

#[record]
pub struct ProductEan {
    pub ean: ProductId,
}

#[record]
pub struct ProductEans {
    pub eans: Vec<ProductId>,
}

#[record]
pub struct ProductIngredients {
    pub ingredients: String,
}

#[record]
pub struct EanAndUserId {
    pub ean: ProductId,
    #[serde(rename = "userID")]
    pub user_id: Option<UserId>,
}

#[record]
pub struct ProductList {
    pub items: Vec<Product>,
}

/// A product with its ingredient list resolved to keywords.
#[record]
pub struct ProductExtended {
    pub product: Product,
    pub ingredients: Vec<Keyword>,
}

#[record]
pub struct ProductRawIngredients {
    pub id: ProductId,
    pub raw: String,
}

#[record]
pub struct ProductSearch {
    pub limit: u32,
    pub string: Option<String>,
    pub excluded_ids: Vec<ProductId>,
}

/// A user's proposed change to a product.
///
/// `None` keeps the stored value; `Some("")` clears an optional field.
#[record(collection = "ProductCorrections")]
#[derive(PartialEq, Eq)]
pub struct ProductCorrection {
    #[serde(rename = "_id")]
    pub id: String,
    pub product: ProductId,
    pub user: UserId,
    pub name: Option<String>,
    pub producer: Option<String>,
    pub origin: Option<CountryId>,
    pub ingredients: Option<String>,
    pub comment: Option<String>,
    pub image: Option<PictureId>,
    pub updated: DateTime<Utc>,
}

impl ProductCorrection {
    /// An empty correction by `user` for `product`.
    #[must_use]
    pub fn new(product: ProductId, user: UserId, updated: DateTime<Utc>) -> Self {
        Self {
            id: format!("{user}{product}"),
            product,
            user,
            name: None,
            producer: None,
            origin: None,
            ingredients: None,
            comment: None,
            image: None,
            updated,
        }
    }
}

/// A scanned EAN with the stored product (if known) and the user's correction (if any).
#[record]
pub struct ProductWithCorrection {
    pub ean: ProductId,
    pub product: Option<Product>,
    pub correction: Option<ProductCorrection>,
}

impl ProductWithCorrection {
    #[must_use]
    pub fn user(&self) -> Option<&str> {
        self.correction.as_ref().map(|c| c.user.as_str())
    }

    /// Stable key combining the EAN and the correcting user.
    #[must_use]
    pub fn key(&self) -> String {
        format!("{} + {}", self.ean, self.user().unwrap_or_default())
    }

    /// True when the product is not in the catalog yet.
    #[must_use]
    pub const fn is_new(&self) -> bool {
        self.product.is_none()
    }
}

#[record]
pub struct ProductWithCorrectionList {
    pub items: Vec<ProductWithCorrection>,
}
