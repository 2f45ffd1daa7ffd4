use allergo_derive::record;
use strum::IntoStaticStr;

/// Machine-readable failure reasons shared by client and server.
#[record]
#[derive(Copy, PartialEq, Eq, Hash, IntoStaticStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ErrorReason {
    // App / session
    NoSelf,
    AppStoreError,
    InvalidToken,
    InvalidRole,
    InvalidExperience,
    UserNotSavedToDatabase,
    UserNotUpdatedInDatabase,
    UserNotFoundInDatabase,
    TokenNotFoundInDatabase,
    AccessDeniedToServer,

    // Sign in with Apple
    CouldNotGetPublicKeyFromApple,
    ApplePublicKeyInvalid,
    CouldNotConvertApplePublicKeyToData,
    CouldNotCreateJwtVerifierFromApplePublicKey,
    IdtokenInvalid,
    UserIdDoesNotMatchIdtoken,
    TokenNotSavedToDatabase,
    TokenNotDeletedFromDatabase,
    CouldNotConvertIdentityTokenToString,
    CouldNotAuthenticateUser,

    // Requests
    CouldNotDecodeRequestContent,
    CorrectionIdenticalToExistingProduct,
    NoUserInfo,
    CouldNotDecodeByteBuffer,
    CouldNotDelete,
    CouldNotUpdate,
    InvalidAppCode,

    // Products
    ProductNotFoundInDatabase,
    CouldNotExtractCategoriesFromDatabase,
    InvalidEan,
    ProductNotSaved,
    #[serde(rename = "no_product_picture_ID")]
    #[strum(serialize = "no_product_picture_ID")]
    NoProductPictureId,
    NoPictureFoundForProduct,
    NoCaptureFoundForProduct,

    // Lookups
    NoSearchString,
    CannotSaveTransaction,
    DocumentNotFoundInDb,
    AllergyNotFoundInDatabase,
    IngredientNotFoundInDatabase,
    NoAllergynames,
    NoAllergens,
    MissingNewIngredient,
    IconNotFoundInDatabase,
    NoImage,
    CommentNotFoundInDatabase,
    CannotSaveComment,

    // Encoding
    CouldNotEncodeObject,
    CouldNotDecodeDocument,
    CouldNotEncodeOrDecodeObject,
    CouldNotSave,
    NoOk,

    // Client
    AuthenticationFailedWithApple,
    UnsupportedAuthentificationMode,
    ServerLoginFailedWithNoData,
    ApplicationFail,
    ServerLoginFailedWithError,
    CannotSaveUserToKeychain,
    ServerError,
    NoDataFromServer,
    CannotDecodeData,
    CannotDecodeUserDataFromKeychain,
    TokenExpired,
    #[serde(rename = "bad_URI")]
    #[strum(serialize = "bad_URI")]
    BadUri,
    BadHttpResponse,
    BadHttpResponseStatusCode,
    NoCommentsForProduct,
    CannotDecompressData,
}

impl ErrorReason {
    /// Wire name, e.g. `"invalid_token"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for ErrorReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which side raised an [`ApiError`].
#[record]
#[derive(Copy, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSide {
    #[default]
    Server,
    App,
}

/// Error body exchanged between app and server.
///
/// Two errors are equal when their reasons are equal; side, code and message are
/// informational.
#[record]
#[derive(thiserror::Error)]
#[error("{id} ({code})")]
pub struct ApiError {
    pub id: ErrorReason,
    #[serde(rename = "source", default)]
    pub side: ErrorSide,
    #[serde(default = "ApiError::default_code")]
    pub code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiError {
    pub const DEFAULT_CODE: u16 = 500;

    const fn default_code() -> u16 {
        Self::DEFAULT_CODE
    }

    #[must_use]
    pub const fn server(id: ErrorReason) -> Self {
        Self { id, side: ErrorSide::Server, code: Self::DEFAULT_CODE, message: None }
    }

    #[must_use]
    pub const fn app(id: ErrorReason) -> Self {
        Self { id, side: ErrorSide::App, code: Self::DEFAULT_CODE, message: None }
    }

    #[must_use]
    pub const fn with_code(mut self, code: u16) -> Self {
        self.code = code;
        self
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl PartialEq for ApiError {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ApiError {}

impl From<ErrorReason> for ApiError {
    fn from(id: ErrorReason) -> Self {
        Self::server(id)
    }
}

/// Error envelope returned by the HTTP layer.
#[record]
#[derive(Copy, PartialEq, Eq)]
pub struct ServerError {
    pub error: bool,
    pub reason: ErrorReason,
}
