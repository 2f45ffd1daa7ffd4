use allergo_kernel::correction::Corrected;
use allergo_kernel::domain::keyword::{Keyword, KeywordCorrection, KeywordWithCorrection};
use allergo_kernel::domain::product::{Product, ProductCorrection, ProductSource, ProductWithCorrection};
use allergo_kernel::domain::{AllergyAssociation, Proba};
use chrono::{TimeZone, Utc};

fn assoc(id: &str, p: Proba) -> AllergyAssociation {
    AllergyAssociation::new(id, p)
}

fn keyword() -> Keyword {
    Keyword {
        id: "vassle".into(),
        is_ingredient: true,
        allergies: vec![assoc("milk", Proba::Medium), assoc("soy", Proba::None)],
        updated: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
}

fn keyword_with(correction: Option<KeywordCorrection>) -> KeywordWithCorrection {
    KeywordWithCorrection { keyword_id: "vassle".into(), keyword: keyword(), correction }
}

fn keyword_correction(is_ingredient: Option<bool>, allergies: Vec<AllergyAssociation>) -> KeywordCorrection {
    KeywordCorrection::new("u1".into(), "vassle".into(), is_ingredient, allergies, Utc::now())
}

#[test]
fn keyword_without_correction_is_unchanged() {
    let pair = keyword_with(None);
    assert_eq!(pair.corrected(), keyword());
    assert!(!pair.is_corrected());
}

#[test]
fn keyword_correction_merges_associations() {
    let correction = keyword_correction(None, vec![assoc("milk", Proba::High), assoc("egg", Proba::Low)]);
    assert_eq!(correction.id, "u1+vassle");

    let pair = keyword_with(Some(correction.clone()));
    let corrected = pair.corrected();
    assert_eq!(
        corrected.allergies,
        [assoc("milk", Proba::High), assoc("soy", Proba::None), assoc("egg", Proba::Low)]
    );
    assert!(corrected.is_ingredient);
    assert_eq!(corrected.updated, correction.updated);
    assert!(pair.is_corrected());
}

#[test]
fn not_an_ingredient_clears_associations() {
    let pair = keyword_with(Some(keyword_correction(Some(false), vec![assoc("milk", Proba::High)])));
    let corrected = pair.corrected();
    assert!(!corrected.is_ingredient);
    assert!(corrected.allergies.is_empty());
}

fn product() -> Product {
    Product {
        id: "7310865004703".into(),
        name: "Mjölk".into(),
        producer: Some("Arla".into()),
        origin: Some("SE".into()),
        ingredients: Some("mjölk".into()),
        image: None,
        updated: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        data_source: ProductSource::Ica,
    }
}

#[test]
fn product_correction_overrides_and_clears_fields() {
    let mut correction = ProductCorrection::new("7310865004703".into(), "u1".into(), Utc::now());
    correction.name = Some("Lättmjölk".into());
    correction.producer = Some(String::new());

    let pair = ProductWithCorrection {
        ean: "7310865004703".into(),
        product: Some(product()),
        correction: Some(correction.clone()),
    };

    let corrected = pair.corrected().expect("corrected product");
    assert_eq!(corrected.name, "Lättmjölk");
    assert_eq!(corrected.producer, None);
    assert_eq!(corrected.origin.as_deref(), Some("SE"));
    assert_eq!(corrected.data_source, ProductSource::App);
    assert_eq!(corrected.updated, correction.updated);
    assert!(pair.is_corrected());
    assert!(!pair.is_new());
    assert_eq!(pair.key(), "7310865004703 + u1");
}

#[test]
fn new_product_needs_a_name() {
    let correction = ProductCorrection::new("123".into(), "u1".into(), Utc::now());
    let pair = ProductWithCorrection { ean: "123".into(), product: None, correction: Some(correction) };
    assert!(pair.is_new());
    assert_eq!(pair.corrected(), None);
    assert!(!pair.is_corrected());

    let mut named = pair.clone();
    if let Some(c) = named.correction.as_mut() {
        c.name = Some("Havredryck".into());
    }
    let created = named.corrected().expect("new product");
    assert_eq!(created.id, "123");
    assert!(named.is_corrected());
}

#[test]
fn product_without_correction_is_original() {
    let pair = ProductWithCorrection { ean: "7310865004703".into(), product: Some(product()), correction: None };
    assert_eq!(pair.corrected(), Some(product()));
    assert!(!pair.is_corrected());
    assert_eq!(pair.user(), None);
}
