use std::io;
use std::process;

use diccionario::dictionary::DictionaryLoader;
use diccionario::menu::Menu;
use diccionario::{Config, Dictionary};

fn main() {
    let config = match Config::from_args(std::env::args().collect()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            Config::print_help();
            process::exit(1);
        }
    };

    if config.show_help {
        Config::print_help();
        return;
    }

    // Cargar diccionario; si el archivo falta, el menú arranca igualmente
    // con el diccionario vacío
    let dictionary = match DictionaryLoader::load_from_file(&config.dictionary_file) {
        Ok(report) => {
            for rejected in &report.rejected {
                println!("Error en el formato de línea: {}", rejected.content);
            }
            report.dictionary
        }
        Err(e) => {
            println!("{}", e);
            Dictionary::new()
        }
    };

    let menu = Menu::new(&dictionary, config.text_file.clone());
    let stdin = io::stdin();
    if let Err(e) = menu.run(stdin.lock(), io::stdout()) {
        eprintln!("Error de entrada/salida: {}", e);
        process::exit(1);
    }
}
