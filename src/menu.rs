//! Menú interactivo del diccionario

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::dictionary::Dictionary;
use crate::language::Language;
use crate::translator::Translator;

/// Acción elegida en el menú
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Show(Language),
    Translate,
    Exit,
    Invalid,
}

impl Choice {
    fn parse(input: &str) -> Self {
        match input.trim().parse::<u32>() {
            Ok(1) => Choice::Show(Language::English),
            Ok(2) => Choice::Show(Language::Spanish),
            Ok(3) => Choice::Show(Language::French),
            Ok(4) => Choice::Translate,
            Ok(5) => Choice::Exit,
            _ => Choice::Invalid,
        }
    }
}

/// Bucle del menú sobre un diccionario ya cargado.
///
/// Lee una opción numérica por iteración y vuelve a mostrar el menú hasta
/// la opción de salida o el fin de la entrada. Las entradas y salidas son
/// genéricas para poder probarse sin consola.
pub struct Menu<'a> {
    dictionary: &'a Dictionary,
    text_file: PathBuf,
}

impl<'a> Menu<'a> {
    pub fn new(dictionary: &'a Dictionary, text_file: PathBuf) -> Self {
        Self {
            dictionary,
            text_file,
        }
    }

    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> io::Result<()> {
        loop {
            self.print_options(&mut output)?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                // Fin de la entrada: no hay más opciones que leer
                return Ok(());
            }

            match Choice::parse(&line) {
                Choice::Show(language) => self.show_words(language, &mut output)?,
                Choice::Translate => self.translate(&mut output)?,
                Choice::Exit => return Ok(()),
                Choice::Invalid => writeln!(output, "Opción inválida.")?,
            }
        }
    }

    fn print_options<W: Write>(&self, output: &mut W) -> io::Result<()> {
        writeln!(output)?;
        writeln!(output, "--- Diccionario ---")?;
        writeln!(output, "1. Mostrar palabras en inglés")?;
        writeln!(output, "2. Mostrar palabras en español")?;
        writeln!(output, "3. Mostrar palabras en francés")?;
        writeln!(output, "4. Traducir archivo de texto")?;
        writeln!(output, "5. Salir")?;
        write!(output, "Seleccione una opción: ")?;
        output.flush()
    }

    /// Muestra las palabras de un idioma en orden alfabético
    fn show_words<W: Write>(&self, language: Language, output: &mut W) -> io::Result<()> {
        writeln!(output, "Palabras en {}:", language.name())?;

        let words: Vec<&str> = self
            .dictionary
            .words(language)
            .iter()
            .map(String::as_str)
            .collect();
        writeln!(output, "{}", words.join(" "))
    }

    fn translate<W: Write>(&self, output: &mut W) -> io::Result<()> {
        let translator = Translator::new(self.dictionary);

        match translator.translate_file(&self.text_file) {
            Ok(lines) => {
                for line in lines {
                    writeln!(output, "{}", line)?;
                }
            }
            // Archivo ausente o ilegible: diagnóstico y el menú continúa
            Err(e) => writeln!(output, "{}", e)?,
        }

        Ok(())
    }
}
