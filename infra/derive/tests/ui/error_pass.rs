use allergo_derive::allergo_error;
use std::borrow::Cow;

#[allergo_error]
pub enum ImportError {
    #[error("Malformed document{}: {source}", format_context(.context))]
    Json { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Internal import error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<serde_json::Value, ImportError> {
    serde_json::from_str(raw).context("Parsing product list")
}

fn main() {
    let err = parse("{").unwrap_err();
    assert!(err.to_string().starts_with("Malformed document (Parsing product list)"));

    let internal: ImportError = "no items".into();
    assert_eq!(internal.to_string(), "Internal import error: no items");
}
