//! Tipos de erro para a entrega de alertas via webhook.
//!
//! Define [`AlertError`] com variantes para respostas HTTP de erro e falhas de
//! rede. Esses erros são sempre recuperáveis: o adaptador de alertas registra
//! a falha e o ciclo de monitoramento segue para o próximo job.

use thiserror::Error;

use crate::error::ErrorKind;

/// Erros que podem ocorrer ao entregar um alerta ao webhook.
///
/// - [`Status`](AlertError::Status) — o webhook respondeu com status diferente de 2xx
/// - [`Network`](AlertError::Network) — falha na camada de rede
#[derive(Debug, Error)]
pub enum AlertError {
    /// O webhook recusou a mensagem (ex.: 404 webhook removido, 429 rate limit).
    /// Contém o código de status HTTP e o corpo da resposta.
    #[error("webhook returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Falha de rede subjacente (DNS, conexão recusada, timeout).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl AlertError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Recoverable
    }
}
