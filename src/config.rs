//! Configuración y argumentos CLI

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// Archivo del diccionario (default: "diccionario.txt")
    pub dictionary_file: PathBuf,
    /// Archivo de texto a traducir (default: "texto.txt")
    pub text_file: PathBuf,
    /// Mostrar ayuda
    pub show_help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary_file: PathBuf::from("diccionario.txt"),
            text_file: PathBuf::from("texto.txt"),
            show_help: false,
        }
    }
}

impl Config {
    pub fn from_args(args: Vec<String>) -> Result<Self, String> {
        let mut config = Config::default();
        let mut args_iter = args.into_iter().skip(1); // Skip program name

        while let Some(arg) = args_iter.next() {
            match arg.as_str() {
                "-h" | "--help" => {
                    config.show_help = true;
                    return Ok(config);
                }
                "-d" | "--diccionario" => {
                    config.dictionary_file = PathBuf::from(
                        args_iter.next().ok_or("--diccionario requiere un valor")?,
                    );
                }
                "-t" | "--texto" => {
                    config.text_file =
                        PathBuf::from(args_iter.next().ok_or("--texto requiere un valor")?);
                }
                _ => return Err(format!("Opción desconocida: {}", arg)),
            }
        }

        Ok(config)
    }

    pub fn print_help() {
        println!(
            r#"Diccionario - Diccionario trilingüe y traductor de textos

USO:
    diccionario [OPCIONES]

OPCIONES:
    -h, --help                  Muestra esta ayuda
    -d, --diccionario <ARCHIVO> Archivo del diccionario (default: diccionario.txt)
    -t, --texto <ARCHIVO>       Archivo de texto a traducir (default: texto.txt)

FORMATO DEL DICCIONARIO:
    Una línea por registro, tres campos separados por comas:
    inglés,español,francés

EJEMPLOS:
    diccionario
    diccionario --diccionario palabras.txt --texto frases.txt"#
        );
    }
}
