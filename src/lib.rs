//! Diccionario - Biblioteca de diccionario trilingüe y traducción
//!
//! Proporciona un diccionario inglés/español/francés cargado desde archivo
//! y traducción de textos palabra por palabra.

pub mod config;
pub mod dictionary;
pub mod error;
pub mod language;
pub mod menu;
pub mod translator;

pub use config::Config;
pub use dictionary::{Dictionary, DictionaryLoader, OrderedSet};
pub use error::DiccionarioError;
pub use language::Language;
pub use translator::Translator;
