//! EvenSplit CLI
//!
//! Computes how an expense is split and prints the allocation as JSON.
//!
//! Usage:
//!   evensplit equal 10.00 --payer <UUID> --with <UUID>,<UUID>
//!   evensplit percentage 80 --share <UUID>=75 --share <UUID>=25
//!   evensplit exact 25 --share <UUID>=20.50 --share <UUID>=4.50

use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use evensplit_core::split::{
    EqualSplitAllocator, SplitAllocation, allocate_by_percentage, allocate_exact,
};
use evensplit_shared::config::LogConfig;
use evensplit_shared::types::{Currency, Money, RemainderPolicy, UserId};
use evensplit_shared::{AppConfig, AppResult};

#[derive(Parser)]
#[command(name = "evensplit", about = "Split an expense between participants")]
struct Cli {
    /// Currency of the total (defaults to `split.default_currency`).
    #[arg(long, global = true, env = "EVENSPLIT_CURRENCY")]
    currency: Option<Currency>,

    /// Split mode.
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Split equally; the payer is always the first participant.
    Equal {
        /// Total amount paid.
        total: Decimal,
        /// User who paid.
        #[arg(long)]
        payer: UserId,
        /// Other participants (repeatable or comma-separated).
        #[arg(long = "with", value_delimiter = ',')]
        members: Vec<UserId>,
        /// Remainder policy (defaults to `split.remainder_policy`).
        #[arg(long)]
        policy: Option<RemainderPolicy>,
    },
    /// Split by percentages that add up to 100.
    Percentage {
        /// Total amount paid.
        total: Decimal,
        /// `<UUID>=<percent>` per participant.
        #[arg(long = "share", value_parser = parse_share, required = true)]
        shares: Vec<(UserId, Decimal)>,
    },
    /// Split by explicit amounts that add up to the total.
    Exact {
        /// Total amount paid.
        total: Decimal,
        /// `<UUID>=<amount>` per participant.
        #[arg(long = "share", value_parser = parse_share, required = true)]
        shares: Vec<(UserId, Decimal)>,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    // Parse first so `--help` and usage errors work even with broken config
    let cli = Cli::parse();

    let config = AppConfig::load().context("Failed to load configuration")?;
    init_tracing(&config.log);

    let currency = cli.currency.unwrap_or(config.split.default_currency);

    match run(cli.command, currency, &config) {
        Ok(allocation) => {
            debug!(
                participants = allocation.len(),
                total = %allocation.total(),
                "Allocation computed"
            );
            let json = serde_json::to_string_pretty(&allocation)
                .context("Failed to serialize allocation")?;
            println!("{json}");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("{}: {err}", err.error_code());
            Ok(ExitCode::from(2))
        }
    }
}

/// Logs go to stderr so stdout carries only the JSON result.
fn init_tracing(log: &LogConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.filter));
    let registry = tracing_subscriber::registry().with(filter);

    if log.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn run(command: Command, currency: Currency, config: &AppConfig) -> AppResult<SplitAllocation> {
    let allocation = match command {
        Command::Equal {
            total,
            payer,
            members,
            policy,
        } => {
            let policy = policy.unwrap_or(config.split.remainder_policy);
            info!(%policy, %currency, "Splitting equally");

            let participants: Vec<UserId> = std::iter::once(payer).chain(members).collect();
            EqualSplitAllocator::new(policy).allocate(
                Money::new(total, currency),
                &participants,
                payer,
            )?
        }
        Command::Percentage { total, shares } => {
            info!(%currency, participants = shares.len(), "Splitting by percentage");
            allocate_by_percentage(Money::new(total, currency), &shares)?
        }
        Command::Exact { total, shares } => {
            info!(%currency, participants = shares.len(), "Splitting by exact amounts");
            allocate_exact(Money::new(total, currency), &shares)?
        }
    };

    Ok(allocation)
}

/// Parses `<UUID>=<decimal>`.
fn parse_share(s: &str) -> Result<(UserId, Decimal), String> {
    let (user, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected <UUID>=<value>, got '{s}'"))?;
    let user = user
        .trim()
        .parse::<UserId>()
        .map_err(|e| format!("invalid user id '{user}': {e}"))?;
    let value = value
        .trim()
        .parse::<Decimal>()
        .map_err(|e| format!("invalid value '{value}': {e}"))?;
    Ok((user, value))
}
