use allergo_derive::record;

#[record(collection = "Tokens")]
#[derive(PartialEq, Eq)]
pub struct Token {
    #[serde(rename = "_id")]
    pub id: String,
    pub expiry_days: u32,
}

#[record]
#[serde(rename_all = "lowercase")]
pub enum Source {
    App,
    Web,
}

fn main() {
    assert_eq!(Token::COLLECTION, "Tokens");

    let token = Token { id: "t1".to_owned(), expiry_days: 30 };
    let json = serde_json::to_string(&token).unwrap();
    assert_eq!(json, r#"{"_id":"t1","expiryDays":30}"#);

    let lenient: Token =
        serde_json::from_str(r#"{"_id":"t2","expiryDays":1,"extra":true}"#).unwrap();
    assert_eq!(lenient.id, "t2");

    assert_eq!(serde_json::to_string(&Source::Web).unwrap(), r#""web""#);
    let _ = Source::App.clone();
}
