//! Errores de la biblioteca

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errores anticipados del diccionario y del traductor.
///
/// Ninguno de estos errores debe terminar el proceso: el llamador los
/// convierte en un diagnóstico y continúa (ver `menu`).
#[derive(Debug, Error)]
pub enum DiccionarioError {
    /// El archivo solicitado no existe
    #[error("Archivo no encontrado: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Cualquier otro fallo de E/S leyendo un archivo
    #[error("Error leyendo '{}': {}", path.display(), source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DiccionarioError {
    /// Clasifica un error de E/S según el contrato: "no encontrado" es un
    /// diagnóstico esperado, el resto se reporta con su causa.
    pub fn from_io(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            DiccionarioError::FileNotFound { path }
        } else {
            DiccionarioError::Io { path, source }
        }
    }
}
