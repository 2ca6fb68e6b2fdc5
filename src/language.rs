//! Los tres idiomas fijos del diccionario

use std::fmt;

/// Idioma de una palabra o destino de una traducción.
///
/// El diccionario trabaja con exactamente estos tres idiomas; cada registro
/// del archivo de entrada aporta una palabra a cada uno.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Spanish,
    French,
}

impl Language {
    /// Nombre del idioma tal como aparece en la salida del programa
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "inglés",
            Language::Spanish => "español",
            Language::French => "francés",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
