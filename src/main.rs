use anyhow::Context;
use chrono::{NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};

use ramp_availability::AvailabilityEngine;
use ramp_availability::api::DATETIME_FORMAT;
use ramp_availability::api::availability_dto::AvailableRampDto;
use ramp_availability::config::UpstreamConfig;
use ramp_availability::domain::ramp::CargoType;
use ramp_availability::logger;

/// Operator tool for the ramp availability engine. Queries the upstream
/// services directly and prints the JSON the API surface would serve.
#[derive(Debug, Parser)]
#[command(name = "ramp-availability")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the bookable slots of a branch for one cargo type and date.
    Slots {
        #[arg(long)]
        branch_id: i64,

        /// Cargo type code: SECO, FRIO or FLV.
        #[arg(long = "type")]
        cargo_type: String,

        /// Calendar date, YYYY-MM-DD. Must not lie in the past.
        #[arg(long)]
        schedule_date: NaiveDate,

        /// Slot length in minutes (15-480).
        #[arg(long, default_value_t = 60)]
        interval_time: i64,
    },

    /// Find one ramp of a branch with no conflicting reservation.
    FreeRamp {
        #[arg(long)]
        branch_id: i64,

        /// Range start, "YYYY-MM-DD HH:MM:SS".
        #[arg(long)]
        start_date: String,

        /// Range end, "YYYY-MM-DD HH:MM:SS".
        #[arg(long)]
        end_date: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logger::init();

    let cli = Cli::parse();
    let engine = AvailabilityEngine::from_config(UpstreamConfig::from_env())?;

    match cli.command {
        Command::Slots { branch_id, cargo_type, schedule_date, interval_time } => {
            let cargo_type: CargoType = cargo_type.parse()?;

            let listing = engine.slots.get_slots(branch_id, cargo_type, schedule_date, interval_time).await?;

            println!("{}", serde_json::to_string_pretty(&listing)?);
        }
        Command::FreeRamp { branch_id, start_date, end_date } => {
            let start = NaiveDateTime::parse_from_str(&start_date, DATETIME_FORMAT)
                .with_context(|| format!("start_date '{}' does not match {}", start_date, DATETIME_FORMAT))?;
            let end = NaiveDateTime::parse_from_str(&end_date, DATETIME_FORMAT)
                .with_context(|| format!("end_date '{}' does not match {}", end_date, DATETIME_FORMAT))?;

            let ramp = engine.ramps.find_free_ramp(branch_id, start, end).await?;

            let response = vec![AvailableRampDto::from_ramp(&ramp, start, end)];
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
