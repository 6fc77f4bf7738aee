// ABOUTME: Nutriwell CLI - command-line front end for the metrics and assistant engines
// ABOUTME: Computes metrics, chats with the assistant, plans meals, and books consultations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Show derived metrics and insights for a profile and the day's meals
//! nutriwell-cli metrics --profile profile.json --meals meals.json --water 1.5
//!
//! # Ask the assistant a single question
//! nutriwell-cli chat --profile profile.json --message "How many calories should I eat?"
//!
//! # Interactive widget chat without the typing delay
//! nutriwell-cli chat --profile profile.json --surface widget --no-typing
//!
//! # Generate a reproducible weekly plan
//! nutriwell-cli plan --seed 7
//!
//! # Log two servings of a catalog food as JSON
//! nutriwell-cli foods --log "Greek Yogurt" --quantity 2 --meal-type snack
//!
//! # Book a consultation
//! nutriwell-cli book --doctor 1 --date 2025-06-01 --time 09:00 --type video
//! ```

mod commands;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use nutriwell::assistant::ChatSurface;
use nutriwell::config::AppConfig;
use nutriwell::consultation::ConsultationType;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "nutriwell-cli",
    about = "Nutriwell nutrition metrics and assistant CLI",
    long_about = "Command-line front end for the nutriwell metrics engine, rule-based assistant, meal planner, and consultation booking."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

/// Profile and intake inputs shared by metrics and chat
#[derive(clap::Args)]
struct IntakeArgs {
    /// User profile JSON file
    #[arg(long)]
    profile: PathBuf,

    /// JSON array of today's meals
    #[arg(long)]
    meals: Option<PathBuf>,

    /// Water consumed today in liters
    #[arg(long, default_value_t = 0.0)]
    water: f64,
}

#[derive(Subcommand)]
enum Command {
    /// Show BMR, TDEE, BMI, progress, and insights
    Metrics {
        #[command(flatten)]
        intake: IntakeArgs,

        /// Print raw JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Talk to the nutrition assistant
    Chat {
        #[command(flatten)]
        intake: IntakeArgs,

        /// Chat surface (full_page or widget); defaults to NUTRIWELL_CHAT_SURFACE
        #[arg(long)]
        surface: Option<ChatSurface>,

        /// Message to send; repeat for several turns. Reads stdin when absent
        #[arg(long, short = 'm')]
        message: Vec<String>,

        /// Skip the simulated typing delay
        #[arg(long)]
        no_typing: bool,
    },

    /// Generate a weekly meal plan
    Plan {
        /// Seed for a reproducible plan
        #[arg(long)]
        seed: Option<u64>,

        /// Print raw JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List quick-add foods or log one of them
    Foods {
        /// Food to log
        #[arg(long)]
        log: Option<String>,

        /// Servings to log
        #[arg(long, default_value_t = 1.0)]
        quantity: f64,

        /// Meal type of the logged food
        #[arg(long, default_value = "meal")]
        meal_type: String,

        /// Time of day shown for the logged food
        #[arg(long)]
        at: Option<String>,
    },

    /// List doctors available for consultation
    Doctors {
        /// Only doctors whose specialty contains this text
        #[arg(long)]
        specialty: Option<String>,
    },

    /// Book a consultation
    Book {
        /// Doctor id
        #[arg(long)]
        doctor: u32,

        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,

        /// Start time (HH:MM)
        #[arg(long)]
        time: String,

        /// Consultation type (video, audio, chat)
        #[arg(long = "type", default_value = "video")]
        consultation_type: ConsultationType,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::from_env()?;
    if cli.verbose {
        config.logging.level = "debug".into();
    }
    config.logging.init()?;
    debug!("nutriwell-cli starting");
    info!(
        chat_surface = %config.chat_surface,
        simulate_typing = config.simulate_typing,
        "Configuration loaded from environment"
    );

    match cli.command {
        Command::Metrics { intake, json } => {
            let (profile, totals, meal_count) =
                commands::load_intake(&intake.profile, intake.meals.as_deref(), intake.water)?;
            commands::metrics::show(&profile, &totals, meal_count, &config.nutrition, json)?;
        }
        Command::Chat {
            intake,
            surface,
            message,
            no_typing,
        } => {
            let (profile, totals, _) =
                commands::load_intake(&intake.profile, intake.meals.as_deref(), intake.water)?;
            let options = commands::chat::ChatOptions {
                surface: surface.unwrap_or(config.chat_surface),
                simulate_typing: config.simulate_typing && !no_typing,
            };
            commands::chat::run(&profile, &totals, &config.nutrition, &options, &message).await?;
        }
        Command::Plan { seed, json } => commands::meals::plan(seed, json)?,
        Command::Foods {
            log,
            quantity,
            meal_type,
            at,
        } => match log {
            Some(name) => commands::meals::log_food(&name, quantity, &meal_type, at)?,
            None => commands::meals::list_foods(),
        },
        Command::Doctors { specialty } => commands::consult::list(specialty.as_deref()),
        Command::Book {
            doctor,
            date,
            time,
            consultation_type,
        } => commands::consult::book(doctor, date, time, consultation_type)?,
    }

    Ok(())
}
