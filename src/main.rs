use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use std::path::PathBuf;
use std::process;

// Import from booking_helper lib
use booking_helper::config::RateTable;
use booking_helper::pricing::{self, RoomType, DATE_FORMAT};
use booking_helper::validation::{validate_booking_form, BookingRequest};
use booking_helper::{logging, Quote};

#[derive(Parser)]
#[command(name = "booking")]
#[command(author = "Booking Helper Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Booking Helper - price and validate hotel stays", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, help = "Enable verbose output", global = true)]
    verbose: bool,

    #[arg(
        long,
        value_name = "FILE",
        help = "Path to a JSON rate table overriding the built-in rates",
        global = true
    )]
    rates_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Price a stay for a room type and date range")]
    Quote {
        #[arg(help = "Room type: standard, deluxe, or suite")]
        room: String,

        #[arg(help = "Check-in date (YYYY-MM-DD)")]
        check_in: String,

        #[arg(help = "Check-out date (YYYY-MM-DD)")]
        check_out: String,
    },

    #[command(about = "Validate a booking request against the booking rules")]
    Validate {
        #[arg(help = "Check-in date (YYYY-MM-DD)")]
        check_in: String,

        #[arg(help = "Check-out date (YYYY-MM-DD)")]
        check_out: String,

        #[arg(short, long, default_value_t = 2, help = "Number of guests")]
        guests: u32,

        #[arg(long, default_value = "standard", help = "Room type being booked")]
        room: String,
    },

    #[command(about = "Book a room interactively")]
    Book,

    #[command(about = "Show the nightly rate table")]
    Rates,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.verbose)?;

    let rates = RateTable::load(cli.rates_file.as_deref())?;
    logging::log_rates_source(cli.rates_file.as_deref().and_then(|p| p.to_str()));

    match cli.command {
        Commands::Quote {
            room,
            check_in,
            check_out,
        } => {
            let quote = pricing::quote_stay(&rates, &room, &check_in, &check_out)?;
            print_quote(&quote);
        }
        Commands::Validate {
            check_in,
            check_out,
            guests,
            room,
        } => {
            let request = BookingRequest {
                room_type: room,
                check_in,
                check_out,
                guests,
            };
            let errors = validate_booking_form(&request);
            logging::log_validation(errors.len());
            if errors.is_empty() {
                println!("{} Booking request is valid", "✓".green().bold());
            } else {
                for error in &errors {
                    println!("{} {}", "✗".red().bold(), error);
                }
                process::exit(1);
            }
        }
        Commands::Book => {
            book_interactive(&rates)?;
        }
        Commands::Rates => {
            println!("{}", "📋 Nightly rates:".blue().bold());
            for room in RoomType::ALL {
                println!(
                    "  {} - {}",
                    room.display_name().cyan(),
                    format!("${}/night", rates.rate(room)).green()
                );
            }
        }
    }

    Ok(())
}

fn print_quote(quote: &Quote) {
    println!(
        "{} {} - {}",
        "→".green(),
        quote.room_type.display_name().cyan(),
        format!("${}/night", quote.nightly_rate).green()
    );
    println!(
        "  {} night{}",
        quote.nights,
        if quote.nights == 1 { "" } else { "s" }
    );
    println!("{} Total: ${}", "✓".green().bold(), quote.total);
    logging::log_quote(quote.room_type.as_key(), quote.nights, quote.total);
}

/// Interactive booking flow: choose a room, pick dates, set the guest count,
/// then validate and price in one go.
fn book_interactive(rates: &RateTable) -> Result<()> {
    let theme = ColorfulTheme::default();
    let today = Local::now().date_naive();

    let labels: Vec<String> = RoomType::ALL
        .iter()
        .map(|room| format!("{} - ${}/night", room.display_name(), rates.rate(*room)))
        .collect();
    let selected = Select::with_theme(&theme)
        .with_prompt("Choose a room")
        .items(&labels)
        .default(0)
        .interact()?;
    let room = RoomType::ALL[selected];

    let check_in = prompt_date(&theme, "Check-in date (YYYY-MM-DD)", today)?;
    let check_out = prompt_date(&theme, "Check-out date (YYYY-MM-DD)", today)?;
    let guests: u32 = Input::with_theme(&theme)
        .with_prompt("Number of guests")
        .default(2)
        .interact_text()?;

    let request = BookingRequest {
        room_type: room.as_key().to_string(),
        check_in,
        check_out,
        guests,
    };

    let errors = validate_booking_form(&request);
    logging::log_validation(errors.len());
    if !errors.is_empty() {
        for error in &errors {
            println!("{} {}", "✗".red().bold(), error);
        }
        process::exit(1);
    }

    let quote = pricing::quote_stay(rates, &request.room_type, &request.check_in, &request.check_out)?;
    println!(
        "{} Booking confirmed for {}! Total: ${}",
        "✓".green().bold(),
        quote.room_type.display_name(),
        quote.total
    );
    logging::log_quote(quote.room_type.as_key(), quote.nights, quote.total);

    Ok(())
}

/// Prompt for a calendar date, rejecting malformed input and dates in the past.
fn prompt_date(theme: &ColorfulTheme, prompt: &str, min: NaiveDate) -> Result<String> {
    let value: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .validate_with(|input: &String| -> std::result::Result<(), String> {
            let date = NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
                .map_err(|_| "Expected a date in YYYY-MM-DD format".to_string())?;
            if date < min {
                return Err("Date cannot be in the past".to_string());
            }
            Ok(())
        })
        .interact_text()?;
    Ok(value)
}
