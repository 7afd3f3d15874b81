use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use donation_items::models::{AccountType, ParentType, Session};
use donation_items::services::DetailService;
use donation_items::{list_categories, AppError, AppResult, Category, Config};

#[derive(Parser)]
#[command(name = "donation-items")]
#[command(about = "Inspect donations, solicitations and disposals with their equipment items")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the equipment category registry
    Categories,
    /// Open the detail view of a parent record
    Show {
        /// doacoes, solicitacoes or descartes
        parent_type: String,
        parent_id: String,
        #[arg(long)]
        account_id: String,
        #[arg(long, default_value = "staff")]
        account_type: String,
    },
    /// Resolve the display image of one item
    Image { category: String, item_id: String },
}

fn parse_parent_type(raw: &str) -> AppResult<ParentType> {
    ParentType::from_str(raw)
        .ok_or_else(|| AppError::InvalidInput(format!("unknown parent type: {}", raw)))
}

fn parse_account_type(raw: &str) -> AppResult<AccountType> {
    AccountType::from_str(raw)
        .ok_or_else(|| AppError::InvalidInput(format!("unknown account type: {}", raw)))
}

fn parse_category(raw: &str) -> AppResult<Category> {
    Category::from_key(raw)
        .ok_or_else(|| AppError::InvalidInput(format!("unknown category: {}", raw)))
}

fn detail_service() -> anyhow::Result<DetailService> {
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Backend: {}, media: {}", config.backend_url, config.media_base_url);
    Ok(DetailService::from_config(&config)?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; stdout is reserved for command output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "donation_items=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Categories => {
            for d in list_categories() {
                println!(
                    "{:<16} list={:<16} image={:<14} {}",
                    d.key, d.list_endpoint, d.image_endpoint, d.display_label
                );
            }
        }
        Commands::Show {
            parent_type,
            parent_id,
            account_id,
            account_type,
        } => {
            let parent_type = parse_parent_type(&parent_type)?;
            let account_type = parse_account_type(&account_type)?;
            let session = Session::new(account_id, account_type);
            let service = detail_service()?;

            match service.open_detail(&session, parent_type, &parent_id).await {
                Some(view) => println!("{}", serde_json::to_string_pretty(&view)?),
                None => println!("No details found for {} {}", parent_type.label(), parent_id),
            }
        }
        Commands::Image { category, item_id } => {
            let category = parse_category(&category)?;
            let service = detail_service()?;

            match service.resolve_image(category, &item_id).await {
                Some(url) => println!("{}", url),
                None => println!("No image for {} {}", category.label(), item_id),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_category_is_invalid_input() {
        assert!(matches!(parse_category("impressoras"), Err(AppError::InvalidInput(_))));
        assert_eq!(parse_category("placasMae").unwrap(), Category::Motherboards);
    }

    #[test]
    fn test_unknown_parent_and_account_types_are_invalid_input() {
        assert!(matches!(parse_parent_type("pedidos"), Err(AppError::InvalidInput(_))));
        assert!(matches!(parse_account_type("robot"), Err(AppError::InvalidInput(_))));
        assert_eq!(parse_parent_type("descartes").unwrap(), ParentType::Descartes);
        assert_eq!(parse_account_type("staff").unwrap(), AccountType::Staff);
    }

    #[test]
    fn test_cli_parses_every_command() {
        let cli = Cli::try_parse_from(["donation-items", "categories"]).unwrap();
        assert!(matches!(cli.command, Commands::Categories));

        let cli = Cli::try_parse_from([
            "donation-items",
            "show",
            "doacoes",
            "42",
            "--account-id",
            "7",
        ])
        .unwrap();
        match cli.command {
            Commands::Show {
                parent_type,
                parent_id,
                account_id,
                account_type,
            } => {
                assert_eq!(parent_type, "doacoes");
                assert_eq!(parent_id, "42");
                assert_eq!(account_id, "7");
                assert_eq!(account_type, "staff");
            }
            _ => panic!("expected show"),
        }

        let cli = Cli::try_parse_from(["donation-items", "image", "monitores", "3"]).unwrap();
        assert!(matches!(cli.command, Commands::Image { .. }));
    }
}
