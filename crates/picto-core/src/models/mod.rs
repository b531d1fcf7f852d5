pub mod image;
pub mod language;
pub mod translation;

pub use image::{DeleteImageResponse, StoredImage, UploadImageResponse};
pub use language::{LanguageCode, TargetLang};
pub use translation::{TranslationRequest, TranslationResponse};
