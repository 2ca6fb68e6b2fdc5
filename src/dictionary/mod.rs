//! Módulo de diccionario
//!
//! Proporciona el conjunto ordenado por idioma, el mapa de etiquetas de
//! idioma y la carga desde archivo.

pub mod loader;
pub mod ordered_set;

pub use loader::{DictionaryLoader, LoadReport, RejectedLine};
pub use ordered_set::OrderedSet;

use std::collections::HashMap;

use crate::language::Language;

/// Diccionario trilingüe: un conjunto ordenado por idioma más el mapa
/// palabra → idioma.
///
/// Se construye una vez durante la carga y después es de solo lectura.
/// En el mapa de etiquetas gana el último registro: el orden inglés →
/// español → francés de cada triple decide las colisiones entre idiomas.
#[derive(Debug, Default)]
pub struct Dictionary {
    english: OrderedSet<String>,
    spanish: OrderedSet<String>,
    french: OrderedSet<String>,
    tags: HashMap<String, Language>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registra un triple inglés/español/francés. Cada campo se normaliza
    /// (recortado y en minúsculas) antes de insertarse en su conjunto y de
    /// etiquetarse en el mapa.
    pub fn insert_triple(&mut self, english: &str, spanish: &str, french: &str) {
        let english = normalize(english);
        let spanish = normalize(spanish);
        let french = normalize(french);

        self.english.insert(english.clone());
        self.spanish.insert(spanish.clone());
        self.french.insert(french.clone());

        self.tags.insert(english, Language::English);
        self.tags.insert(spanish, Language::Spanish);
        self.tags.insert(french, Language::French);
    }

    /// Conjunto ordenado de un idioma concreto
    pub fn words(&self, language: Language) -> &OrderedSet<String> {
        match language {
            Language::English => &self.english,
            Language::Spanish => &self.spanish,
            Language::French => &self.french,
        }
    }

    /// Idioma bajo el que quedó registrada una palabra, si existe
    pub fn tag_of(&self, word: &str) -> Option<Language> {
        self.tags.get(word).copied()
    }

    /// Verifica si una palabra está en el conjunto de un idioma
    pub fn contains(&self, language: Language, word: &str) -> bool {
        self.words(language).contains(word)
    }

    pub fn is_empty(&self) -> bool {
        self.english.is_empty() && self.spanish.is_empty() && self.french.is_empty()
    }
}

/// Normaliza una palabra: recorte de espacios y minúsculas
pub fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_triple_populates_all_sets() {
        let mut dict = Dictionary::new();
        dict.insert_triple("Hello", " hola ", "BONJOUR");

        assert!(dict.contains(Language::English, "hello"));
        assert!(dict.contains(Language::Spanish, "hola"));
        assert!(dict.contains(Language::French, "bonjour"));
    }

    #[test]
    fn test_tag_map_last_writer_wins() {
        let mut dict = Dictionary::new();
        // "taxi" se escribe igual en los tres idiomas: el francés, último
        // del triple, se queda con la etiqueta
        dict.insert_triple("taxi", "taxi", "taxi");
        assert_eq!(dict.tag_of("taxi"), Some(Language::French));

        dict.insert_triple("chocolate", "chocolate", "chocolat");
        assert_eq!(dict.tag_of("chocolate"), Some(Language::Spanish));
        assert_eq!(dict.tag_of("chocolat"), Some(Language::French));
    }

    #[test]
    fn test_empty_dictionary() {
        let dict = Dictionary::new();
        assert!(dict.is_empty());
        assert_eq!(dict.tag_of("hola"), None);
    }
}
