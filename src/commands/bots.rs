//! Bot configuration commands
//!
//! List, show, create, and edit operations over bot configurations.
//! Creation runs the ordered field validation; editing submits the
//! record exactly as assembled, blanks included.

use clap::Args;
use colored::Colorize;
use tracing::debug;

use crate::commands::render_table;
use crate::models::{BotConfig, NewBotConfig};
use crate::services::BotService;
use crate::utils::errors::Result;

/// Field overrides shared by the create and edit commands
///
/// Every field of the bot record can be set from a flag; unset flags
/// leave the underlying value untouched.
#[derive(Debug, Clone, Default, Args)]
pub struct BotFieldArgs {
    /// Telegram bot token
    #[arg(long)]
    pub token: Option<String>,
    /// Bot name
    #[arg(long)]
    pub nomebot: Option<String>,
    /// Pending payment message template
    #[arg(long)]
    pub pagamento_pendente: Option<String>,
    /// Overdue payment message template
    #[arg(long)]
    pub pagamento_vencido: Option<String>,
    /// Send-link message template
    #[arg(long)]
    pub enviar_link: Option<String>,
    /// Greeting text
    #[arg(long)]
    pub texto_inicial: Option<String>,
    /// 7-day plan description
    #[arg(long)]
    pub plano_7_dias: Option<String>,
    /// 15-day plan description
    #[arg(long)]
    pub plano_15_dias: Option<String>,
    /// 30-day plan description
    #[arg(long)]
    pub plano_30_dias: Option<String>,
    /// Annual plan description
    #[arg(long)]
    pub plano_anual: Option<String>,
    /// Button 1 label
    #[arg(long)]
    pub botao_1: Option<String>,
    /// Button 2 label
    #[arg(long)]
    pub botao_2: Option<String>,
    /// Button 3 label
    #[arg(long)]
    pub botao_3: Option<String>,
    /// Button 4 label
    #[arg(long)]
    pub botao_4: Option<String>,
    /// 7-day plan price
    #[arg(long)]
    pub preco_7_dias: Option<f64>,
    /// 15-day plan price
    #[arg(long)]
    pub preco_15_dias: Option<f64>,
    /// 30-day plan price
    #[arg(long)]
    pub preco_30_dias: Option<f64>,
    /// Annual plan price
    #[arg(long)]
    pub preco_anual: Option<f64>,
}

impl BotFieldArgs {
    /// Overlay the set flags onto an editable record
    pub fn overlay(&self, target: &mut NewBotConfig) {
        let fields = [
            (&self.token, &mut target.token),
            (&self.nomebot, &mut target.nomebot),
            (&self.pagamento_pendente, &mut target.pagamento_pendente),
            (&self.pagamento_vencido, &mut target.pagamento_vencido),
            (&self.enviar_link, &mut target.enviar_link),
            (&self.texto_inicial, &mut target.texto_inicial),
            (&self.plano_7_dias, &mut target.plano_7_dias),
            (&self.plano_15_dias, &mut target.plano_15_dias),
            (&self.plano_30_dias, &mut target.plano_30_dias),
            (&self.plano_anual, &mut target.plano_anual),
            (&self.botao_1, &mut target.botao_1),
            (&self.botao_2, &mut target.botao_2),
            (&self.botao_3, &mut target.botao_3),
            (&self.botao_4, &mut target.botao_4),
        ];

        for (source, dest) in fields {
            if let Some(value) = source {
                *dest = value.clone();
            }
        }

        let prices = [
            (&self.preco_7_dias, &mut target.preco_7_dias),
            (&self.preco_15_dias, &mut target.preco_15_dias),
            (&self.preco_30_dias, &mut target.preco_30_dias),
            (&self.preco_anual, &mut target.preco_anual),
        ];

        for (source, dest) in prices {
            if let Some(value) = source {
                *dest = *value;
            }
        }
    }
}

/// List all configured bots
pub async fn list(service: &BotService) -> Result<()> {
    let bots = service.fetch_bots().await?;

    if bots.is_empty() {
        println!("No bots configured.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = bots
        .iter()
        .map(|bot| {
            vec![
                bot.id.to_string(),
                bot.nomebot.clone(),
                format!("{:.2}", bot.preco_7_dias),
                format!("{:.2}", bot.preco_15_dias),
                format!("{:.2}", bot.preco_30_dias),
                format!("{:.2}", bot.preco_anual),
            ]
        })
        .collect();

    println!("{}", format!("Bots ({})", bots.len()).bold());
    println!();
    print!(
        "{}",
        render_table(&["ID", "NAME", "7D", "15D", "30D", "ANNUAL"], &rows)
    );

    Ok(())
}

/// Show the full configuration of one bot
pub async fn show(service: &BotService, id: i64) -> Result<()> {
    let bot = service.fetch_bot(id).await?;

    println!("{}", format!("{} (id {})", bot.nomebot, bot.id).bold());
    println!();
    println!("{}", "Identity".underline());
    println!("  token:           {}", bot.token);
    println!();
    println!("{}", "Messages".underline());
    println!("  texto_inicial:      {}", bot.texto_inicial);
    println!("  pagamento_pendente: {}", bot.pagamento_pendente);
    println!("  pagamento_vencido:  {}", bot.pagamento_vencido);
    println!("  enviar_link:        {}", bot.enviar_link);
    println!();
    println!("{}", "Plans".underline());
    print_plan(&bot.botao_1, &bot.plano_7_dias, bot.preco_7_dias);
    print_plan(&bot.botao_2, &bot.plano_15_dias, bot.preco_15_dias);
    print_plan(&bot.botao_3, &bot.plano_30_dias, bot.preco_30_dias);
    print_plan(&bot.botao_4, &bot.plano_anual, bot.preco_anual);

    Ok(())
}

fn print_plan(button: &str, description: &str, price: f64) {
    println!("  [{}] {} @ {:.2}", button, description, price);
}

/// Create a new bot configuration
///
/// Field values come from an optional TOML file overlaid with any flags;
/// the record is validated before submission and the first unmet rule's
/// message aborts the command.
pub async fn create(
    service: &BotService,
    file: Option<&std::path::Path>,
    fields: &BotFieldArgs,
) -> Result<()> {
    let mut bot = match file {
        Some(path) => load_bot_file(path)?,
        None => NewBotConfig::default(),
    };

    fields.overlay(&mut bot);
    service.create_bot(&bot).await?;

    println!("{} bot {} created", "ok:".green().bold(), bot.nomebot);
    Ok(())
}

/// Load bot fields from a TOML file
fn load_bot_file(path: &std::path::Path) -> Result<NewBotConfig> {
    debug!(path = %path.display(), "Loading bot fields from file");

    let raw = std::fs::read_to_string(path)?;
    toml::from_str(&raw).map_err(|e| {
        crate::utils::errors::BotAdminError::Validation(format!(
            "Invalid bot file {}: {}",
            path.display(),
            e
        ))
    })
}

/// Edit an existing bot configuration
///
/// Fetches the record, overlays the provided flags verbatim (no
/// validation, empty strings allowed), and submits the full record.
pub async fn edit(service: &BotService, id: i64, fields: &BotFieldArgs) -> Result<()> {
    let existing = service.fetch_bot(id).await?;
    let (id, mut editable) = existing.split();

    fields.overlay(&mut editable);
    let updated: BotConfig = editable.into_config(id);

    service.save_bot(&updated).await?;

    println!("{} bot {} saved", "ok:".green().bold(), updated.nomebot);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_only_touches_set_fields() {
        let mut bot = NewBotConfig {
            nomebot: "Original".to_string(),
            texto_inicial: "Hello".to_string(),
            preco_7_dias: 9.9,
            ..Default::default()
        };

        let args = BotFieldArgs {
            texto_inicial: Some("Updated".to_string()),
            preco_30_dias: Some(24.9),
            ..Default::default()
        };
        args.overlay(&mut bot);

        assert_eq!(bot.nomebot, "Original");
        assert_eq!(bot.texto_inicial, "Updated");
        assert_eq!(bot.preco_7_dias, 9.9);
        assert_eq!(bot.preco_30_dias, 24.9);
    }

    #[test]
    fn test_overlay_allows_blanking_a_field() {
        // Editing performs no validation; an empty string is submitted as-is
        let mut bot = NewBotConfig {
            enviar_link: "old link".to_string(),
            ..Default::default()
        };

        let args = BotFieldArgs {
            enviar_link: Some(String::new()),
            ..Default::default()
        };
        args.overlay(&mut bot);

        assert_eq!(bot.enviar_link, "");
    }

    #[test]
    fn test_load_bot_file_with_partial_fields() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
                nomebot = "FileBot"
                texto_inicial = "Bem-vindo"
                preco_7_dias = 9.9
            "#
        )
        .unwrap();

        let bot = load_bot_file(file.path()).unwrap();
        assert_eq!(bot.nomebot, "FileBot");
        assert_eq!(bot.preco_7_dias, 9.9);
        // Missing fields default to the empty form values
        assert_eq!(bot.pagamento_pendente, "");
        assert_eq!(bot.preco_anual, 0.0);
    }

    #[test]
    fn test_load_bot_file_rejects_malformed_toml() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "nomebot = [unclosed").unwrap();

        assert!(load_bot_file(file.path()).is_err());
    }

    #[test]
    fn test_split_and_reassemble_preserve_fields() {
        let bot = BotConfig {
            id: 3,
            token: "t".to_string(),
            nomebot: "Bot".to_string(),
            pagamento_pendente: "a".to_string(),
            pagamento_vencido: "b".to_string(),
            enviar_link: "c".to_string(),
            texto_inicial: "d".to_string(),
            plano_7_dias: "e".to_string(),
            plano_15_dias: "f".to_string(),
            plano_30_dias: "g".to_string(),
            plano_anual: "h".to_string(),
            botao_1: "1".to_string(),
            botao_2: "2".to_string(),
            botao_3: "3".to_string(),
            botao_4: "4".to_string(),
            preco_7_dias: 1.0,
            preco_15_dias: 2.0,
            preco_30_dias: 3.0,
            preco_anual: 4.0,
        };

        let (id, editable) = bot.split();
        let rebuilt = editable.into_config(id);

        assert_eq!(rebuilt.id, 3);
        assert_eq!(rebuilt.nomebot, "Bot");
        assert_eq!(rebuilt.preco_anual, 4.0);
    }
}
