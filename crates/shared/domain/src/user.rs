use crate::allergy::AllergyId;
use crate::keyword::KeywordId;
use crate::product::ProductId;
use allergo_derive::record;
use chrono::{DateTime, Utc};

pub type UserId = String;
pub type TokenId = String;
pub type PaymentId = String;

/// Access level of an account.
#[record]
#[derive(Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Normal,
    Superuser,
    Admin,
    Owner,
    Invalid,
}

impl Role {
    /// Every role an active account can hold.
    pub const VALID: [Self; 4] = [Self::Normal, Self::Superuser, Self::Admin, Self::Owner];
    /// Roles with administrative rights.
    pub const ADMIN: [Self; 3] = [Self::Superuser, Self::Admin, Self::Owner];

    #[must_use]
    pub fn is_admin(self) -> bool {
        Self::ADMIN.contains(&self)
    }
}

/// Identity provider the account signed in with.
#[record]
#[derive(Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UserSource {
    Apple,
}

#[record(collection = "Users")]
#[derive(PartialEq, Eq)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: UserId,
    pub name: Option<String>,
    pub email: Option<String>,
    pub real_user_status: i32,
    pub role: Role,
    pub experience: i32,
    #[serde(rename = "appleID")]
    pub apple_id: Option<UserId>,
    pub allergies: Option<Vec<AllergyId>>,
    pub products: Option<Vec<ProductId>>,
    pub ingredients: Option<Vec<KeywordId>>,
    pub joined: DateTime<Utc>,
}

impl User {
    /// Applies the client-editable fields of `info`, keeping identity fields.
    #[must_use]
    pub fn updated_from(&self, info: &BasicUserInfo) -> Self {
        Self {
            id: self.id.clone(),
            name: info.name.clone(),
            email: info.email.clone(),
            real_user_status: info.real_user_status,
            role: info.role,
            experience: info.experience,
            apple_id: self.apple_id.clone(),
            allergies: info.allergies.clone(),
            products: info.products.clone(),
            ingredients: info.ingredients.clone(),
            joined: self.joined,
        }
    }
}

/// Sign-in request sent by the app.
#[record]
pub struct Credentials {
    pub name: Option<String>,
    pub email: Option<String>,
    pub real_user_status: i32,
    pub app_code: String,
    pub source: UserSource,
}

/// In-app subscription products.
#[record]
#[derive(Copy, PartialEq, Eq, Hash)]
pub enum SubscriptionPlan {
    #[serde(rename = "app.allergomat.plus.monthly")]
    Monthly,
    #[serde(rename = "app.allergomat.plus.yearly")]
    Yearly,
}

#[record(collection = "Payments")]
#[derive(PartialEq, Eq)]
pub struct Payment {
    #[serde(rename = "_id")]
    pub id: PaymentId,
    pub user: UserId,
    #[serde(rename = "productID")]
    pub product_id: SubscriptionPlan,
    pub payment_id: String,
    pub date: DateTime<Utc>,
    pub expiry: DateTime<Utc>,
}

#[record(collection = "Tokens")]
#[derive(PartialEq, Eq)]
pub struct Token {
    #[serde(rename = "_id")]
    pub id: TokenId,
    pub user: UserId,
    pub date: DateTime<Utc>,
    pub expiry_date: DateTime<Utc>,
}

#[record]
pub struct UserWithToken {
    pub user: User,
    pub token: Token,
}

#[record]
pub struct Device {
    pub model: String,
    pub system_name: String,
    pub system_version: String,
}

/// The account snapshot the app keeps locally.
///
/// Equality ignores the order of `payments` and `allergies`, and does not look at
/// `products` or `ingredients`.
#[record]
pub struct BasicUserInfo {
    #[serde(rename = "_id")]
    pub id: UserId,
    pub name: Option<String>,
    pub email: Option<String>,
    pub real_user_status: i32,
    pub role: Role,
    pub experience: i32,
    pub payments: Vec<Payment>,
    pub allergies: Option<Vec<AllergyId>>,
    pub products: Option<Vec<ProductId>>,
    pub ingredients: Option<Vec<KeywordId>>,
    pub token: TokenId,
}

impl BasicUserInfo {
    #[must_use]
    pub fn from_parts(user: &User, payments: Vec<Payment>, token: &Token) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            real_user_status: user.real_user_status,
            role: user.role,
            experience: user.experience,
            payments,
            allergies: user.allergies.clone(),
            products: user.products.clone(),
            ingredients: user.ingredients.clone(),
            token: token.id.clone(),
        }
    }

    /// Admins always have access; everyone else needs an unexpired payment.
    #[must_use]
    pub fn has_valid_subscription(&self, now: DateTime<Utc>) -> bool {
        self.payments.iter().any(|p| p.expiry >= now) || self.role.is_admin()
    }

    #[must_use]
    pub fn unlocked_for(&self, experience: i32) -> bool {
        self.role.is_admin() || self.experience >= experience
    }

    fn sorted_payments(&self) -> Vec<&Payment> {
        let mut payments: Vec<_> = self.payments.iter().collect();
        payments.sort_by(|a, b| b.date.cmp(&a.date));
        payments
    }

    fn sorted_allergies(&self) -> Option<Vec<&str>> {
        self.allergies.as_ref().map(|ids| {
            let mut ids: Vec<_> = ids.iter().map(String::as_str).collect();
            ids.sort_unstable();
            ids
        })
    }
}

impl PartialEq for BasicUserInfo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.email == other.email
            && self.real_user_status == other.real_user_status
            && self.role == other.role
            && self.experience == other.experience
            && self.token == other.token
            && self.sorted_payments() == other.sorted_payments()
            && self.sorted_allergies() == other.sorted_allergies()
    }
}

impl Eq for BasicUserInfo {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn info(role: Role, experience: i32) -> BasicUserInfo {
        BasicUserInfo {
            id: "u1".into(),
            name: None,
            email: None,
            real_user_status: 1,
            role,
            experience,
            payments: Vec::new(),
            allergies: Some(vec!["peanut".into(), "gluten".into()]),
            products: None,
            ingredients: None,
            token: "t1".into(),
        }
    }

    fn payment(id: &str, date: DateTime<Utc>, expiry: DateTime<Utc>) -> Payment {
        Payment {
            id: id.into(),
            user: "u1".into(),
            product_id: SubscriptionPlan::Monthly,
            payment_id: format!("store-{id}"),
            date,
            expiry,
        }
    }

    #[test]
    fn admin_roles() {
        assert!(Role::Owner.is_admin());
        assert!(Role::Superuser.is_admin());
        assert!(!Role::Normal.is_admin());
        assert!(!Role::Invalid.is_admin());
        assert!(!Role::VALID.contains(&Role::Invalid));
    }

    #[test]
    fn subscription_requires_unexpired_payment_or_admin() {
        let now = Utc::now();
        let mut user = info(Role::Normal, 0);
        assert!(!user.has_valid_subscription(now));

        user.payments.push(payment("old", now - Duration::days(60), now - Duration::days(30)));
        assert!(!user.has_valid_subscription(now));

        user.payments.push(payment("new", now, now + Duration::days(30)));
        assert!(user.has_valid_subscription(now));

        assert!(info(Role::Admin, 0).has_valid_subscription(now));
    }

    #[test]
    fn experience_unlock() {
        assert!(!info(Role::Normal, 10).unlocked_for(50));
        assert!(info(Role::Normal, 50).unlocked_for(50));
        assert!(info(Role::Owner, 0).unlocked_for(50));
    }

    #[test]
    fn equality_ignores_collection_order() {
        let now = Utc::now();
        let first = payment("a", now - Duration::days(1), now);
        let second = payment("b", now, now + Duration::days(1));

        let mut lhs = info(Role::Normal, 5);
        lhs.payments = vec![first.clone(), second.clone()];
        let mut rhs = lhs.clone();
        rhs.payments = vec![second, first];
        rhs.allergies = Some(vec!["gluten".into(), "peanut".into()]);
        rhs.products = Some(vec!["ignored".into()]);

        assert_eq!(lhs, rhs);

        rhs.experience = 6;
        assert_ne!(lhs, rhs);
    }

    #[test]
    fn plan_ids_match_store_products() {
        let json = serde_json::to_string(&SubscriptionPlan::Yearly).unwrap();
        assert_eq!(json, r#""app.allergomat.plus.yearly""#);
    }
}
