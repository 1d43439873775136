use anyhow::{Result, anyhow};
use clap::Subcommand;
use stagelink_application::App;
use stagelink_core::catalog::Creative;

#[derive(Subcommand)]
pub enum CatalogAction {
    /// List creatives, optionally filtered by genre
    List {
        #[arg(long, default_value = "all")]
        genre: String,
    },
    /// Show one creative with its services
    Show { id: String },
}

fn summary(creative: &Creative) -> String {
    format!(
        "[{}] {} - {} • {} ★{} ({} reviews) {}",
        creative.id,
        creative.name,
        creative.role,
        creative.location,
        creative.rating,
        creative.review_count,
        creative.genres.join(", ")
    )
}

pub fn run(app: &App, action: CatalogAction) -> Result<()> {
    match action {
        CatalogAction::List { genre } => {
            let creatives = app.catalog.filter_by_genre(&genre);
            if creatives.is_empty() {
                println!("No creatives found for '{}'", genre);
            }
            for creative in creatives {
                println!("{}", summary(creative));
            }
        }
        CatalogAction::Show { id } => {
            let creative = app
                .catalog
                .find_by_id(id.as_str())
                .ok_or_else(|| anyhow!("no creative with id '{}'", id))?;
            println!("{}", summary(creative));
            println!("{}", creative.bio);
            for service in &creative.services {
                println!("  - {} - {} ({})", service.name, service.price, service.duration);
            }
        }
    }
    Ok(())
}
