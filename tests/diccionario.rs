//! Tests de integración del diccionario y el traductor.
//!
//! Ejecutar solo estos tests:  cargo test --test diccionario

use std::io::{Cursor, Write};
use std::path::PathBuf;

use tempfile::NamedTempFile;

use diccionario::dictionary::DictionaryLoader;
use diccionario::menu::Menu;
use diccionario::{Dictionary, DiccionarioError, Language, Translator};

fn write_fixture(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    file
}

fn load_fixture(lines: &[&str]) -> Dictionary {
    let file = write_fixture(lines);
    DictionaryLoader::load_from_file(file.path())
        .expect("Failed to load dictionary fixture")
        .dictionary
}

#[test]
fn test_load_populates_all_three_sets() {
    let dict = load_fixture(&["hello,hola,bonjour", "world,mundo,monde"]);

    assert!(dict.contains(Language::English, "hello"));
    assert!(dict.contains(Language::Spanish, "hola"));
    assert!(dict.contains(Language::French, "bonjour"));
    assert!(dict.contains(Language::English, "world"));
    assert!(dict.contains(Language::Spanish, "mundo"));
    assert!(dict.contains(Language::French, "monde"));
}

#[test]
fn test_malformed_line_skipped_valid_lines_still_load() {
    let file = write_fixture(&["cat,gato", "dog,perro,chien"]);
    let report = DictionaryLoader::load_from_file(file.path()).unwrap();

    assert_eq!(report.rejected.len(), 1);
    assert_eq!(report.rejected[0].content, "cat,gato");
    assert!(!report.dictionary.contains(Language::Spanish, "gato"));
    assert!(report.dictionary.contains(Language::English, "dog"));
}

#[test]
fn test_traversal_is_sorted_per_language() {
    let dict = load_fixture(&[
        "world,mundo,monde",
        "hello,hola,bonjour",
        "cat,gato,chat",
    ]);

    let english: Vec<&String> = dict.words(Language::English).iter().collect();
    assert_eq!(english, ["cat", "hello", "world"]);
    let french: Vec<&String> = dict.words(Language::French).iter().collect();
    assert_eq!(french, ["bonjour", "chat", "monde"]);
}

#[test]
fn test_translate_to_english_is_identity() {
    let dict = load_fixture(&["hello,hola,bonjour", "world,mundo,monde"]);
    let translator = Translator::new(&dict);

    assert_eq!(
        translator.translate_sentence("Hello world", Language::English),
        "hello world"
    );
}

#[test]
fn test_unknown_token_wrapped_for_non_english_targets() {
    let dict = load_fixture(&["hello,hola,bonjour"]);
    let translator = Translator::new(&dict);

    assert_eq!(
        translator.translate_sentence("xyz", Language::Spanish),
        "*xyz*"
    );
    assert_eq!(
        translator.translate_sentence("xyz", Language::French),
        "*xyz*"
    );
}

#[test]
fn test_empty_dictionary_every_token_unresolved() {
    let dict = load_fixture(&[]);
    assert!(dict.is_empty());

    let translator = Translator::new(&dict);
    for target in [Language::Spanish, Language::French] {
        assert_eq!(
            translator.translate_sentence("hola mundo", target),
            "*hola* *mundo*"
        );
    }
}

#[test]
fn test_missing_dictionary_file() {
    let err = DictionaryLoader::load_from_file("no_existe.txt").unwrap_err();
    assert!(matches!(err, DiccionarioError::FileNotFound { .. }));
    assert!(err.to_string().contains("no_existe.txt"));
}

#[test]
fn test_full_menu_session() {
    let dict = load_fixture(&["hello,hola,bonjour", "world,mundo,monde"]);

    let mut text_file = NamedTempFile::new().unwrap();
    writeln!(text_file, "Hello world").unwrap();
    writeln!(text_file, "Goodbye world").unwrap();

    let menu = Menu::new(&dict, text_file.path().to_path_buf());
    let mut output = Vec::new();
    menu.run(Cursor::new("1\n9\n4\n5\n"), &mut output).unwrap();
    let output = String::from_utf8(output).unwrap();

    // Opción 1: palabras en inglés ordenadas
    assert!(output.contains("Palabras en inglés:\nhello world\n"));
    // Opción fuera de rango
    assert!(output.contains("Opción inválida."));
    // Opción 4: cada oración a los tres idiomas en orden fijo
    assert!(output.contains("Oración en español: hello world"));
    assert!(output.contains("Oración en inglés: hello world"));
    assert!(output.contains("Oración en francés: hello world"));
    // "Goodbye" no está en el diccionario: token original entre asteriscos
    assert!(output.contains("Oración en español: *Goodbye* world"));
    assert!(output.contains("Oración en inglés: goodbye world"));
}

#[test]
fn test_menu_with_missing_text_file_keeps_running() {
    let dict = load_fixture(&["hello,hola,bonjour"]);
    let menu = Menu::new(&dict, PathBuf::from("no_existe_texto.txt"));

    let mut output = Vec::new();
    menu.run(Cursor::new("4\n2\n5\n"), &mut output).unwrap();
    let output = String::from_utf8(output).unwrap();

    assert!(output.contains("Archivo no encontrado"));
    assert!(output.contains("Palabras en español:\nhola\n"));
}
