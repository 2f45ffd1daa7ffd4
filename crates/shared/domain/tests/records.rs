use allergo_domain::allergen::{Allergen, AllergenSource};
use allergo_domain::ingredient::{Ingredient, IngredientSearch};
use allergo_domain::keyword::{Keyword, KeywordList};
use allergo_domain::product::Product;
use allergo_domain::{AllergyAssociation, Language, LocalizedTextList, Proba};
use chrono::{TimeZone, Utc};
use serde_json::json;

fn assoc(id: &str, p: Proba) -> AllergyAssociation {
    AllergyAssociation::new(id, p)
}

fn ingredient(id: &str, allergies: Vec<AllergyAssociation>) -> Ingredient {
    Ingredient {
        id: id.into(),
        allergies,
        language: Language::Swedish,
        updated: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
    }
}

fn keyword(is_ingredient: bool, allergies: Vec<AllergyAssociation>) -> Keyword {
    Keyword { id: "mjölk".into(), is_ingredient, allergies, updated: Utc::now() }
}

#[test]
fn ingredient_equality_ignores_association_order_and_timestamp() {
    let a = ingredient("vete", vec![assoc("gluten", Proba::High), assoc("milk", Proba::None)]);
    let mut b = ingredient("vete", vec![assoc("milk", Proba::None), assoc("gluten", Proba::High)]);
    b.updated = Utc::now();
    assert_eq!(a, b);
}

#[test]
fn ingredient_equality_is_not_positional() {
    // Same length and same probabilities, different ids.
    let a = ingredient("vete", vec![assoc("gluten", Proba::High), assoc("milk", Proba::Low)]);
    let b = ingredient("vete", vec![assoc("gluten", Proba::Low), assoc("milk", Proba::High)]);
    assert_ne!(a, b);

    let c = ingredient("vete", vec![assoc("gluten", Proba::High), assoc("egg", Proba::Low)]);
    assert_ne!(a, c);
}

#[test]
fn ingredient_equality_checks_identity_fields() {
    let a = ingredient("vete", vec![]);
    let mut b = ingredient("vete", vec![]);
    b.language = Language::English;
    assert_ne!(a, b);
    assert_ne!(a, ingredient("råg", vec![]));
}

#[test]
fn keyword_equality_uses_flag_and_map() {
    let a = keyword(true, vec![assoc("milk", Proba::High)]);
    assert_eq!(a, keyword(true, vec![assoc("milk", Proba::High)]));
    assert_ne!(a, keyword(false, vec![assoc("milk", Proba::High)]));
    assert_ne!(a, keyword(true, vec![assoc("milk", Proba::High), assoc("egg", Proba::None)]));
}

#[test]
fn allergen_equality_compares_names() {
    let mut name = LocalizedTextList::new();
    name.push(Language::English, "casein");
    let allergen = Allergen {
        id: "E1".into(),
        name: name.clone(),
        allergies: vec![assoc("milk", Proba::High)],
        updated: Utc::now(),
        source: AllergenSource::Manual,
        approved: None,
    };

    let mut other = allergen.clone();
    other.id = "E2".into();
    other.source = AllergenSource::Ai;
    assert_eq!(allergen, other);

    other.name.push(Language::Swedish, "kasein");
    assert_ne!(allergen, other);
}

#[test]
fn list_envelope_and_search_shapes() {
    let list = KeywordList { items: vec![keyword(true, vec![assoc("milk", Proba::Medium)])] };
    let value = serde_json::to_value(&list).unwrap();
    assert_eq!(value["items"][0]["isIngredient"], json!(true));
    assert_eq!(value["items"][0]["allergies"][0], json!({"allergyId": "milk", "probability": "medium"}));

    let search: IngredientSearch =
        serde_json::from_value(json!({"limit": 20, "excludedIds": ["a"], "string": null})).unwrap();
    assert_eq!(search.limit, 20);
    assert_eq!(search.excluded_ids, ["a"]);
    assert!(search.string.is_none());
}

#[test]
fn product_document_shape() {
    let product: Product = serde_json::from_value(json!({
        "_id": "7310865004703",
        "name": "Mjölk",
        "producer": "Arla",
        "origin": "SE",
        "ingredients": "mjölk",
        "image": null,
        "updated": "2024-05-01T12:00:00Z",
        "dataSource": "ica"
    }))
    .unwrap();

    assert_eq!(Product::COLLECTION, "Products");
    assert_eq!(product.origin.as_deref(), Some("SE"));
    assert_eq!(product.updated, Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap());
}
