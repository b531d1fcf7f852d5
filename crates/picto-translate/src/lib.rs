//! Picto Translate Library
//!
//! Client side of the external translation provider. Handlers depend on the
//! `Translator` trait only; `DeepLTranslator` is the production implementation.

pub mod deepl;
pub mod translator;

pub use deepl::{DeepLConfig, DeepLTranslator};
pub use picto_core::TargetLang;
pub use translator::{Translation, TranslationError, Translator};
