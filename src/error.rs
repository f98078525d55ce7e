use thiserror::Error;

/// The central error type for all operations in the gengraphic_engine.
#[derive(Error, Debug)]
pub enum GenGraphicError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Another operation is already in progress")]
    Busy,

    #[error("No API key is configured")]
    MissingCredential,

    #[error("The API key was rejected: {0}")]
    CredentialRejected(String),

    #[error("Remote call failed with status {status}: {message}")]
    Remote { status: u16, message: String },

    #[error("No image data found in model response")]
    NoImageData,

    #[error("Image decode error: {0}")]
    Decode(String),

    #[error("Image processing error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("No design with id {0}")]
    NotFound(String),
}

impl GenGraphicError {
    /// True when the provider reported the credential as unusable.
    pub fn is_credential_error(&self) -> bool {
        matches!(
            self,
            GenGraphicError::CredentialRejected(_) | GenGraphicError::MissingCredential
        )
    }
}

// Variant-level equality; foreign error payloads are not compared.
impl PartialEq for GenGraphicError {
    fn eq(&self, other: &Self) -> bool {
        use GenGraphicError::*;
        match (self, other) {
            (Validation(a), Validation(b)) => a == b,
            (Busy, Busy) => true,
            (MissingCredential, MissingCredential) => true,
            (CredentialRejected(a), CredentialRejected(b)) => a == b,
            (
                Remote {
                    status: s1,
                    message: m1,
                },
                Remote {
                    status: s2,
                    message: m2,
                },
            ) => s1 == s2 && m1 == m2,
            (NoImageData, NoImageData) => true,
            (Decode(_), Decode(_)) => true,
            (ImageError(_), ImageError(_)) => true,
            (IoError(_), IoError(_)) => true,
            (Serialization(_), Serialization(_)) => true,
            (Http(_), Http(_)) => true,
            (NotFound(a), NotFound(b)) => a == b,
            _ => false,
        }
    }
}

/// A centralized result type for our library.
pub type Result<T> = std::result::Result<T, GenGraphicError>;
