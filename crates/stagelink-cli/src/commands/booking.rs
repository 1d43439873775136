use anyhow::{Result, anyhow, bail};
use clap::{Args, Subcommand};
use stagelink_application::App;
use stagelink_core::booking::{BookingForm, format_booking_date};
use stagelink_core::validation::ensure_required;

#[derive(Subcommand)]
pub enum BookAction {
    /// Select a creative and service to book
    Select { creative_id: String, service: String },
    /// Show the current draft
    Draft,
    /// Submit the current draft
    Submit(SubmitArgs),
}

#[derive(Args)]
pub struct SubmitArgs {
    /// Defaults to the drafted service
    #[arg(long)]
    service: Option<String>,
    #[arg(long)]
    date: String,
    #[arg(long)]
    budget: String,
    #[arg(long)]
    message: String,
    #[arg(long)]
    location: String,
}

pub async fn run(app: &App, action: BookAction) -> Result<()> {
    match action {
        BookAction::Select {
            creative_id,
            service,
        } => {
            app.booking.select_for_booking(creative_id, service).await?;
            println!("Draft saved, continue at booking.html");
        }
        BookAction::Draft => match app.booking.load_draft_context().await? {
            Some(context) => {
                println!(
                    "Booking {} - {} • {}",
                    context.creative.name, context.creative.role, context.creative.location
                );
                for service in &context.creative.services {
                    let marker = if service.name == context.draft.service { "*" } else { " " };
                    println!(" {} {} - {}", marker, service.name, service.price);
                }
                println!("Earliest date: {}", app.booking.earliest_date());
            }
            None => println!("No booking draft"),
        },
        BookAction::Submit(args) => submit(app, args).await?,
    }
    Ok(())
}

async fn submit(app: &App, args: SubmitArgs) -> Result<()> {
    let context = app
        .booking
        .load_draft_context()
        .await?
        .ok_or_else(|| anyhow!("no booking draft, run `book select` first"))?;

    let service = args.service.unwrap_or(context.draft.service);
    if context.creative.service(&service).is_none() {
        let offered: Vec<_> = context.creative.services.iter().map(|s| s.name.as_str()).collect();
        bail!(
            "{} does not offer '{}' (choose one of: {})",
            context.creative.name,
            service,
            offered.join(", ")
        );
    }

    let form = BookingForm {
        service,
        date: args.date,
        budget: args.budget,
        message: args.message,
        location: args.location,
    };
    ensure_required(&mut form.fields())?;

    let receipt = app.booking.submit(form).await?;
    println!("Booking Request Sent!");
    println!("{}", receipt.confirmation.message);
    println!("{} will respond within 48 hours.", context.creative.name);
    println!("Booking ID: {}", receipt.confirmation.booking_id);
    Ok(())
}

pub async fn history(app: &App) -> Result<()> {
    let bookings = app.booking.bookings().await?;
    if bookings.is_empty() {
        println!("No bookings yet");
    }
    for booking in bookings {
        let date = format_booking_date(&booking.date).unwrap_or(booking.date);
        println!(
            "{}  {} - {}  {}  [{}]",
            booking.id, booking.creative, booking.service, date, booking.status
        );
    }
    Ok(())
}
