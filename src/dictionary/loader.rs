//! Cargador del diccionario desde archivo

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::Dictionary;
use crate::error::DiccionarioError;

/// Línea rechazada durante la carga: número de línea (desde 1) y contenido
/// en bruto, para el diagnóstico del llamador
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLine {
    pub number: usize,
    pub content: String,
}

/// Resultado de una carga: el diccionario poblado más las líneas con
/// formato inválido que se saltaron
#[derive(Debug, Default)]
pub struct LoadReport {
    pub dictionary: Dictionary,
    pub rejected: Vec<RejectedLine>,
}

pub struct DictionaryLoader;

impl DictionaryLoader {
    /// Carga un diccionario desde un archivo.
    ///
    /// Formato esperado: una línea por registro, `inglés,español,francés`.
    /// Las líneas que no tienen exactamente 3 campos se registran en el
    /// informe y la carga continúa; un archivo ausente es un error que el
    /// llamador convierte en diagnóstico (el proceso no termina).
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<LoadReport, DiccionarioError> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| DiccionarioError::from_io(path.to_path_buf(), e))?;

        let reader = BufReader::new(file);
        let mut report = LoadReport::default();

        for (index, line_result) in reader.lines().enumerate() {
            let line =
                line_result.map_err(|e| DiccionarioError::from_io(path.to_path_buf(), e))?;

            if line.trim().is_empty() {
                continue;
            }

            let parts: Vec<&str> = line.split(',').collect();
            if parts.len() != 3 {
                report.rejected.push(RejectedLine {
                    number: index + 1,
                    content: line,
                });
                continue;
            }

            report.dictionary.insert_triple(parts[0], parts[1], parts[2]);
        }

        Ok(report)
    }
}
