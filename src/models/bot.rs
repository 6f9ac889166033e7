//! Bot configuration model
//!
//! Field names follow the remote webhook contract and must not be renamed.

use serde::{Deserialize, Serialize};

use crate::utils::errors::{BotAdminError, Result};

/// A chatbot configuration as stored by the remote automation system
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    pub id: i64,
    pub token: String,
    pub nomebot: String,
    pub pagamento_pendente: String,
    pub pagamento_vencido: String,
    pub enviar_link: String,
    pub texto_inicial: String,
    pub plano_7_dias: String,
    pub plano_15_dias: String,
    pub plano_30_dias: String,
    pub plano_anual: String,
    pub botao_1: String,
    pub botao_2: String,
    pub botao_3: String,
    pub botao_4: String,
    pub preco_7_dias: f64,
    pub preco_15_dias: f64,
    pub preco_30_dias: f64,
    pub preco_anual: f64,
}

/// Payload for creating a new bot; the remote system assigns the id
///
/// Deserialization defaults missing fields to the empty form values;
/// presence is enforced by `validate`, not by the decoder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewBotConfig {
    pub token: String,
    pub nomebot: String,
    pub pagamento_pendente: String,
    pub pagamento_vencido: String,
    pub enviar_link: String,
    pub texto_inicial: String,
    pub plano_7_dias: String,
    pub plano_15_dias: String,
    pub plano_30_dias: String,
    pub plano_anual: String,
    pub botao_1: String,
    pub botao_2: String,
    pub botao_3: String,
    pub botao_4: String,
    pub preco_7_dias: f64,
    pub preco_15_dias: f64,
    pub preco_30_dias: f64,
    pub preco_anual: f64,
}

impl BotConfig {
    /// Split into the remote-assigned id and the editable fields
    pub fn split(self) -> (i64, NewBotConfig) {
        let id = self.id;
        let fields = NewBotConfig {
            token: self.token,
            nomebot: self.nomebot,
            pagamento_pendente: self.pagamento_pendente,
            pagamento_vencido: self.pagamento_vencido,
            enviar_link: self.enviar_link,
            texto_inicial: self.texto_inicial,
            plano_7_dias: self.plano_7_dias,
            plano_15_dias: self.plano_15_dias,
            plano_30_dias: self.plano_30_dias,
            plano_anual: self.plano_anual,
            botao_1: self.botao_1,
            botao_2: self.botao_2,
            botao_3: self.botao_3,
            botao_4: self.botao_4,
            preco_7_dias: self.preco_7_dias,
            preco_15_dias: self.preco_15_dias,
            preco_30_dias: self.preco_30_dias,
            preco_anual: self.preco_anual,
        };
        (id, fields)
    }
}

impl NewBotConfig {
    /// Reattach an id, producing a full configuration record
    pub fn into_config(self, id: i64) -> BotConfig {
        BotConfig {
            id,
            token: self.token,
            nomebot: self.nomebot,
            pagamento_pendente: self.pagamento_pendente,
            pagamento_vencido: self.pagamento_vencido,
            enviar_link: self.enviar_link,
            texto_inicial: self.texto_inicial,
            plano_7_dias: self.plano_7_dias,
            plano_15_dias: self.plano_15_dias,
            plano_30_dias: self.plano_30_dias,
            plano_anual: self.plano_anual,
            botao_1: self.botao_1,
            botao_2: self.botao_2,
            botao_3: self.botao_3,
            botao_4: self.botao_4,
            preco_7_dias: self.preco_7_dias,
            preco_15_dias: self.preco_15_dias,
            preco_30_dias: self.preco_30_dias,
            preco_anual: self.preco_anual,
        }
    }

    /// Validate the record before submission
    ///
    /// Rules run in a fixed order and the first failure aborts the check;
    /// remaining fields are not inspected. Text fields must be non-empty
    /// after trimming, prices strictly positive.
    pub fn validate(&self) -> Result<()> {
        let text_rules: [(&str, &str); 13] = [
            (&self.nomebot, "Bot name is required"),
            (
                &self.pagamento_pendente,
                "Pending payment message is required",
            ),
            (
                &self.pagamento_vencido,
                "Overdue payment message is required",
            ),
            (&self.enviar_link, "Send-link message is required"),
            (&self.texto_inicial, "Greeting text is required"),
            (&self.plano_7_dias, "7-day plan description is required"),
            (&self.plano_15_dias, "15-day plan description is required"),
            (&self.plano_30_dias, "30-day plan description is required"),
            (&self.plano_anual, "Annual plan description is required"),
            (&self.botao_1, "Button 1 label is required"),
            (&self.botao_2, "Button 2 label is required"),
            (&self.botao_3, "Button 3 label is required"),
            (&self.botao_4, "Button 4 label is required"),
        ];

        for (value, message) in text_rules {
            if value.trim().is_empty() {
                return Err(BotAdminError::Validation(message.to_string()));
            }
        }

        let price_rules: [(f64, &str); 4] = [
            (
                self.preco_7_dias,
                "7-day plan price must be greater than zero",
            ),
            (
                self.preco_15_dias,
                "15-day plan price must be greater than zero",
            ),
            (
                self.preco_30_dias,
                "30-day plan price must be greater than zero",
            ),
            (
                self.preco_anual,
                "Annual plan price must be greater than zero",
            ),
        ];

        for (value, message) in price_rules {
            if value <= 0.0 {
                return Err(BotAdminError::Validation(message.to_string()));
            }
        }

        Ok(())
    }
}
