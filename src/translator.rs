//! Traducción de oraciones palabra por palabra
//!
//! El mapa de etiquetas solo asocia cada palabra con su propio idioma, no
//! con sus equivalentes: para español y francés una búsqueda con éxito
//! confirma la pertenencia y devuelve la propia clave, nunca una palabra
//! del idioma destino. Es una limitación conocida del modelo de datos,
//! documentada en DESIGN.md.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::dictionary::Dictionary;
use crate::error::DiccionarioError;
use crate::language::Language;

/// Orden fijo en que se traduce cada oración del archivo de texto
const TARGET_ORDER: [Language; 3] = [Language::Spanish, Language::English, Language::French];

/// Traductor sobre un diccionario ya cargado
pub struct Translator<'a> {
    dictionary: &'a Dictionary,
}

impl<'a> Translator<'a> {
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self { dictionary }
    }

    /// Traduce una oración al idioma destino.
    ///
    /// Cada palabra se resuelve por su clave de búsqueda (minúsculas, solo
    /// letras ASCII). Las palabras sin resolver aparecen en la salida como
    /// el token original entre asteriscos.
    pub fn translate_sentence(&self, sentence: &str, target: Language) -> String {
        let mut output = String::new();

        for token in sentence.split_whitespace() {
            let key = lookup_key(token);

            match self.resolve(&key, target) {
                Some(word) => output.push_str(word),
                None => {
                    output.push('*');
                    output.push_str(token);
                    output.push('*');
                }
            }
            output.push(' ');
        }

        output.trim().to_string()
    }

    /// Resuelve una clave contra el idioma destino
    fn resolve<'k>(&self, key: &'k str, target: Language) -> Option<&'k str> {
        match target {
            // Identidad: la clave ya está en inglés, se devuelve tal cual
            Language::English => Some(key),
            Language::Spanish | Language::French => {
                // Pertenencia en el mapa de etiquetas; ver nota del módulo
                if self.dictionary.tag_of(key).is_some() {
                    Some(key)
                } else {
                    None
                }
            }
        }
    }

    /// Traduce un archivo de texto, una oración por línea, a los tres
    /// idiomas en orden fijo (español, inglés, francés). Devuelve las
    /// líneas listas para imprimir.
    pub fn translate_file<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<Vec<String>, DiccionarioError> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| DiccionarioError::from_io(path.to_path_buf(), e))?;

        let reader = BufReader::new(file);
        let mut lines = Vec::new();

        for line_result in reader.lines() {
            let sentence =
                line_result.map_err(|e| DiccionarioError::from_io(path.to_path_buf(), e))?;

            for target in TARGET_ORDER {
                lines.push(format!(
                    "Oración en {}: {}",
                    target.name(),
                    self.translate_sentence(&sentence, target)
                ));
            }
        }

        Ok(lines)
    }
}

/// Clave de búsqueda de un token: minúsculas y solo letras `[a-zA-Z]`
fn lookup_key(token: &str) -> String {
    token
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .collect()
}
