//! Registration intake - terminal entry point.

use anyhow::Context;
use backup_store::{BackupStore, Store};
use registration_core::{Field, PROGRAM_OPTIONS};
use registration_form::config::Config;
use registration_form::error::AppResult;
use registration_form::form::{FormController, FormState};
use registration_form::status::MessageClass;
use sheets_client::SheetsClient;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> AppResult<()> {
    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    // Initialize logging
    init_logging(&config.log.level);

    info!("Starting registration intake");

    let client = SheetsClient::new(&config.sheets.endpoint_url)?;

    let backend = if config.backup.persist {
        Store::json(&config.backup.path)
    } else {
        warn!("Persistence disabled, local backups are in-memory only");
        Store::memory()
    };
    let store = BackupStore::new(backend, config.backup.capacity);

    // Report any backlog from earlier sessions
    let backlog = store.count().await;
    if backlog > 0 {
        info!("{} registration(s) already stored locally", backlog);
    }

    info!("Posting registrations to {}", client.endpoint());

    let controller = FormController::new(client, store);

    tokio::select! {
        result = run(&controller, &config) => result,
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received");
            Ok(())
        }
    }
}

/// Prompt-fill-submit loop. Returns when input closes or the user is done.
async fn run(controller: &FormController, config: &Config) -> AppResult<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        println!("\n--- New registration ---");
        let mut form = FormState::new(config.ui.message_timeout);

        for field in Field::ALL {
            if !fill_field(&mut form, field, &mut lines).await? {
                info!("Input closed");
                return Ok(());
            }
        }

        controller.submit(&mut form).await;
        print_status(&form);
        for (_, message) in form.field_errors() {
            println!("  ! {message}");
        }

        prompt("Register another? [y/N] ")?;
        match lines.next_line().await? {
            Some(line) if line.trim().eq_ignore_ascii_case("y") => continue,
            _ => return Ok(()),
        }
    }
}

/// Ask for one field until it passes live validation.
/// Returns false when stdin is exhausted.
async fn fill_field(
    form: &mut FormState,
    field: Field,
    lines: &mut Lines<BufReader<Stdin>>,
) -> AppResult<bool> {
    loop {
        prompt_field(field)?;

        let Some(line) = lines.next_line().await? else {
            return Ok(false);
        };

        form.set_field(field, resolve_value(field, line.trim()));
        form.touch(field);

        match form.field_error(field) {
            Some(message) => println!("  ! {message}"),
            None if form.input.get(field).trim().is_empty() => {
                println!("  ! {}", field.error_message())
            }
            None => return Ok(true),
        }
    }
}

fn prompt_field(field: Field) -> AppResult<()> {
    let label = match field {
        Field::Name => "Full name",
        Field::Program => "Course program",
        Field::NationalId => "National ID (NIK)",
        Field::Address => "Address",
        Field::Phone => "WhatsApp number",
    };

    if field == Field::Program {
        println!("Available programs:");
        for (i, option) in PROGRAM_OPTIONS.iter().enumerate() {
            println!("  {}. {option}", i + 1);
        }
    }

    prompt(&format!("{label}: "))
}

/// A program can be picked by number; everything else is taken as-is.
fn resolve_value(field: Field, raw: &str) -> String {
    if field == Field::Program {
        if let Ok(n) = raw.parse::<usize>() {
            if (1..=PROGRAM_OPTIONS.len()).contains(&n) {
                return PROGRAM_OPTIONS[n - 1].to_string();
            }
        }
    }
    raw.to_string()
}

fn print_status(form: &FormState) {
    if let Some(message) = form.status.current() {
        match message.class {
            MessageClass::Success => println!("✅ {}", message.text),
            MessageClass::Info => println!("ℹ️  {}", message.text),
            MessageClass::Error => println!("⚠️  {}", message.text),
        }
    }
}

fn prompt(text: &str) -> AppResult<()> {
    print!("{text}");
    std::io::stdout().flush()?;
    Ok(())
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
