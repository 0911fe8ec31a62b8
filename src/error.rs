use std::path::PathBuf;

use thiserror::Error;

/// Failures that end a run with exit code 1.
///
/// Every variant's message is the single diagnostic line shown to the user.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Por favor, forneça o caminho do arquivo JavaScript.\nExemplo: iatest ./caminho/para/arquivo.js")]
    Usage,

    #[error("Arquivo não encontrado: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("O caminho não é um arquivo: {}", path.display())]
    NotAFile { path: PathBuf },

    #[error("Não foi possível ler o arquivo {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Não foi possível gerar testes.")]
    Completion,

    #[error("Não foi possível gravar o arquivo de teste {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
