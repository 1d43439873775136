use anyhow::Result;
use clap::Subcommand;
use stagelink_application::App;
use stagelink_core::theme::ThemePreference;

#[derive(Subcommand)]
pub enum ThemeAction {
    /// Print the current theme
    Get,
    /// Set the theme explicitly
    Set {
        #[arg(value_parser = parse_theme)]
        theme: ThemePreference,
    },
    /// Switch between light and dark
    Toggle,
}

fn parse_theme(raw: &str) -> Result<ThemePreference, String> {
    raw.parse()
        .map_err(|_| format!("unknown theme '{}', expected light or dark", raw))
}

pub async fn run(app: &App, action: ThemeAction) -> Result<()> {
    let theme = match action {
        ThemeAction::Get => app.theme.get_theme().await?,
        ThemeAction::Set { theme } => {
            app.theme.set_theme(theme).await?;
            theme
        }
        ThemeAction::Toggle => app.theme.toggle_theme().await?,
    };
    println!("{} ({})", theme, theme.meta_color());
    Ok(())
}
