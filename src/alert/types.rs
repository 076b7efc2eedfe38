//! Corpo JSON enviado ao webhook do Discord.

use serde::Serialize;

/// Mensagem simples de webhook: apenas o campo `content`.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookPayload<'a> {
    pub content: &'a str,
}
