use crate::allergy::Allergy;
use crate::user::BasicUserInfo;
use allergo_derive::record;

/// Everything the app needs right after sign-in.
#[record]
pub struct Settings {
    pub user_info: BasicUserInfo,
    pub supported_allergies: Vec<Allergy>,
    pub number_of_products: u64,
    pub number_of_product_searches_last_30_days: u32,
}

/// Plain acknowledgement body.
#[record]
#[derive(Copy, PartialEq, Eq)]
pub struct Ack {
    pub ok: bool,
}

impl Ack {
    #[must_use]
    pub const fn new(ok: bool) -> Self {
        Self { ok }
    }
}
