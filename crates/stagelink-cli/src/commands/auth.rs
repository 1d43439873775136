use anyhow::{Result, anyhow};
use clap::Args;
use stagelink_application::App;
use stagelink_core::route::{RouteDecision, View};
use stagelink_core::session::{AuthOutcome, Role, SignupProfile};
use stagelink_core::validation::{Field, ensure_required};

#[derive(Args)]
pub struct SignupArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    password: String,
    /// creative or booker
    #[arg(long, value_parser = parse_role)]
    role: Role,
}

fn parse_role(raw: &str) -> Result<Role, String> {
    raw.parse()
        .map_err(|_| format!("unknown role '{}', expected creative or booker", raw))
}

fn report(outcome: &AuthOutcome) {
    println!(
        "Signed in as {} ({}), continue at {}",
        outcome.user.email,
        outcome.user.role,
        outcome.landing.page()
    );
}

pub async fn login(app: &App, email: &str, password: &str) -> Result<()> {
    ensure_required(&mut [
        Field::required("email", email),
        Field::required("password", password),
    ])?;
    let outcome = app.auth.login(email, password).await?;
    report(&outcome);
    Ok(())
}

pub async fn signup(app: &App, args: SignupArgs) -> Result<()> {
    ensure_required(&mut [
        Field::required("name", &args.name),
        Field::required("email", &args.email),
        Field::required("password", &args.password),
    ])?;
    let outcome = app
        .auth
        .signup(SignupProfile {
            name: args.name,
            email: args.email,
            password: args.password,
            role: args.role,
        })
        .await?;
    report(&outcome);
    Ok(())
}

pub async fn logout(app: &App) -> Result<()> {
    let landing = app.auth.logout().await?;
    println!("Logged out, continue at {}", landing.page());
    Ok(())
}

pub async fn whoami(app: &App) -> Result<()> {
    match app.auth.current_user().await? {
        Some(user) => println!("{}", serde_json::to_string_pretty(&user)?),
        None => println!("Not logged in"),
    }
    Ok(())
}

pub async fn open(app: &App, view: &str) -> Result<()> {
    let view = view
        .parse::<View>()
        .ok()
        .or_else(|| View::from_page(view))
        .ok_or_else(|| anyhow!("unknown view '{}'", view))?;

    match app.auth.enter(view).await? {
        RouteDecision::Allow => println!("{}", view.page()),
        RouteDecision::Redirect(target) => {
            println!("{} requires login, redirecting to {}", view, target.page())
        }
    }
    Ok(())
}
