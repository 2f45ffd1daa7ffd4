use crate::allergy::AllergyId;
use crate::ingredient::IngredientId;
use crate::product::ProductId;
use crate::user::UserId;
use allergo_derive::record;
use chrono::{DateTime, Utc};

pub type ReviewId = String;

/// A user's free-text review of a product, ingredient or allergy.
#[record(collection = "Reviews")]
#[derive(PartialEq, Eq)]
pub struct Review {
    #[serde(rename = "_id")]
    pub id: ReviewId,
    pub user: UserId,
    pub product: Option<ProductId>,
    #[serde(default)]
    pub ingredient: Option<IngredientId>,
    #[serde(default)]
    pub allergy: Option<AllergyId>,
    pub date: DateTime<Utc>,
    pub text: Option<String>,
    #[serde(default)]
    pub approved: Option<bool>,
}

impl Review {
    /// Placeholder review with empty ids, dated now.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            id: String::new(),
            user: String::new(),
            product: None,
            ingredient: None,
            allergy: None,
            date: Utc::now(),
            text: None,
            approved: None,
        }
    }

    /// A product review. Each user has a single review per product.
    #[must_use]
    pub fn for_product(
        product: ProductId,
        user: UserId,
        date: DateTime<Utc>,
        text: Option<String>,
        approved: Option<bool>,
    ) -> Self {
        Self {
            id: format!("productReview - Product: {product} - User: {user}"),
            user,
            product: Some(product),
            ingredient: None,
            allergy: None,
            date,
            text,
            approved,
        }
    }
}

#[record]
pub struct UserProductReview {
    pub user: UserId,
    pub product: ProductId,
    pub review: Option<Review>,
}

/// Thumbs up/down counts for a product.
#[record]
#[derive(PartialEq, Eq)]
pub struct ProductStats {
    pub product: ProductId,
    pub positive: u32,
    pub negative: u32,
}
