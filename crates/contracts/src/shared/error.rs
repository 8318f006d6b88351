use serde::{Deserialize, Serialize};

/// Result of a product table operation
pub type TableResult<T> = Result<T, TableError>;

/// Error raised by a product table operation.
///
/// Local validation never produces one of these: format and price problems
/// only change the row status. Errors are reserved for operations the user
/// has to be told about (remote check, export, bulk delete, configuration).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableError {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}

impl TableError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn empty_export() -> Self {
        Self::new("EMPTY_EXPORT", "Nenhum produto para exportar.")
    }

    pub fn http(status: u16, body: impl Into<String>) -> Self {
        Self::new("HTTP_ERROR", format!("Erro do servidor ({})", status)).with_details(body)
    }

    pub fn api(message: impl Into<String>) -> Self {
        Self::new("API_ERROR", "Erro da API").with_details(message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new("DECODE_ERROR", "Resposta inválida do servidor").with_details(message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new("CONFIG_ERROR", message)
    }

    pub fn no_selection() -> Self {
        Self::new(
            "NO_SELECTION",
            "Selecione pelo menos um produto para deletar.",
        )
    }

    pub fn empty_token() -> Self {
        Self::new("EMPTY_TOKEN", "Digite a confirmação para continuar.")
    }

    pub fn missing_entity() -> Self {
        Self::new("MISSING_ENTITY", "Erro: ID não encontrado na URL")
    }
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(details) = &self.details {
            write!(f, ": {}", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for TableError {}

impl From<serde_json::Error> for TableError {
    fn from(err: serde_json::Error) -> Self {
        TableError::decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_details() {
        let err = TableError::http(500, "boom");
        assert_eq!(err.code, "HTTP_ERROR");
        assert_eq!(err.to_string(), "Erro do servidor (500): boom");
    }

    #[test]
    fn test_display_without_details() {
        assert_eq!(
            TableError::empty_export().to_string(),
            "Nenhum produto para exportar."
        );
    }
}
