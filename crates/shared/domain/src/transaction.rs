use crate::user::UserId;
use allergo_derive::record;
use chrono::{DateTime, Utc};

pub type TransactionId = String;

/// What kind of access a transaction records.
#[record]
#[derive(Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionNature {
    Top,
    Read,
    Update,
    Insert,
    Delete,
    Login,
    Logout,
    Search,
    History,
}

#[record]
#[derive(Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionSource {
    App,
    Web,
}

/// Audit entry for one access to a collection.
#[record(collection = "Transactions")]
pub struct Transaction {
    #[serde(rename = "_id")]
    pub id: TransactionId,
    #[serde(rename = "userID")]
    pub user_id: Option<UserId>,
    pub country: Option<String>,
    pub user_agent: Option<String>,
    pub collection: String,
    pub item: Option<String>,
    pub nature: TransactionNature,
    pub time: DateTime<Utc>,
    pub source: TransactionSource,
}
