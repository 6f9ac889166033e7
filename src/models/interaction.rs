//! Bot interaction model
//!
//! One row of usage telemetry for a single end-user against a single bot.
//! Timestamps are opaque display strings from the remote system.

use serde::{Deserialize, Serialize};

/// A per-user-per-bot usage record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotInteraction {
    pub id: String,
    pub idtelegram: i64,
    pub nome: String,
    pub quantidade_interacoes: i64,
    pub assinaturas: i64,
    pub created_at: String,
    pub updated_at: String,
    pub followup: i64,
    pub ultima_mensagem: String,
    pub nomebot: String,
}
