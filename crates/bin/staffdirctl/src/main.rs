//! # staffdirctl — staff-directory location console
//!
//! Composition root that wires the REST gateway to the location store and
//! drives it from the command line.
//!
//! ## Responsibilities
//! - Parse the command line and `staffdir.toml` / environment configuration
//! - Initialize tracing
//! - Construct the reqwest gateway and inject it into the store
//! - Run one store operation and render the resulting state
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::time::Duration;

use clap::{Parser, Subcommand};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::WatchStream;

use staffdir_adapter_http_reqwest::GatewayConfig;
use staffdir_app::ports::LocationGateway;
use staffdir_app::store::{LocationState, LocationStore};
use staffdir_domain::id::LocationId;
use staffdir_domain::location::Location;
use staffdir_domain::sort::SortSpec;

use crate::config::Config;

#[derive(Parser)]
#[command(
    name = "staffdirctl",
    about = "Console for the staff-directory location API",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch and print the location list.
    List {
        /// Sort spec, e.g. `city,asc`.
        #[arg(long)]
        sort: Option<SortSpec>,
    },
    /// Fetch and print a single location.
    Get { id: LocationId },
    /// Create a location from the given fields.
    Create {
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Replace a location.
    Update {
        id: LocationId,
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Merge the given fields into a location.
    Patch {
        id: LocationId,
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Delete a location.
    Delete { id: LocationId },
    /// Keep refreshing the list and print each state change.
    Watch {
        /// Seconds between refreshes.
        #[arg(long, default_value_t = 5)]
        interval: u64,
        /// Sort spec, e.g. `city,asc`.
        #[arg(long)]
        sort: Option<SortSpec>,
    },
}

/// Location fields shared by the write commands.
#[derive(clap::Args)]
struct FieldArgs {
    #[arg(long)]
    street_address: Option<String>,
    #[arg(long)]
    postal_code: Option<String>,
    #[arg(long)]
    city: Option<String>,
    #[arg(long)]
    state_province: Option<String>,
}

impl FieldArgs {
    fn into_location(self, id: Option<LocationId>) -> Location {
        Location {
            id,
            street_address: self.street_address,
            postal_code: self.postal_code,
            city: self.city,
            state_province: self.state_province,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .init();

    tracing::debug!(
        base_url = %config.server.base_url,
        service = %config.server.service,
        "configured"
    );

    let gateway = GatewayConfig {
        base_url: config.server.base_url.clone(),
        service: config.server.service.clone(),
        connect_timeout: Duration::from_millis(config.http.connect_timeout_ms),
    }
    .build()?;
    let store = LocationStore::new(gateway);

    match cli.command {
        Command::List { sort } => {
            store.refresh(sort).await?;
            print_list(&store.state());
        }
        Command::Get { id } => {
            let location = store.fetch_one(id).await?;
            println!("{}", format_row(&location));
        }
        Command::Create { fields } => {
            let created = store.create(fields.into_location(None)).await?;
            println!("{}", format_row(&created));
        }
        Command::Update { id, fields } => {
            let updated = store.update(fields.into_location(Some(id))).await?;
            println!("{}", format_row(&updated));
        }
        Command::Patch { id, fields } => {
            let updated = store.partial_update(fields.into_location(Some(id))).await?;
            println!("{}", format_row(&updated));
        }
        Command::Delete { id } => {
            store.delete(id).await?;
            println!("deleted location {id}");
        }
        Command::Watch { interval, sort } => {
            watch(&store, interval, sort).await;
        }
    }

    Ok(())
}

/// Refresh on an interval and print every state change until interrupted.
async fn watch<G: LocationGateway>(
    store: &LocationStore<G>,
    interval: u64,
    sort: Option<SortSpec>,
) {
    let mut ticker = tokio::time::interval(Duration::from_secs(interval.max(1)));
    let mut snapshots = WatchStream::from_changes(store.subscribe());
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                // Failures surface in the printed state.
                let _ = store.refresh(sort).await;
            }
            Some(state) = snapshots.next() => {
                print_state(&state);
            }
        }
    }
}

fn print_state(state: &LocationState) {
    if let Some(message) = &state.error_message {
        println!("error: {message}");
    } else if !state.loading {
        print_list(state);
    }
}

fn print_list(state: &LocationState) {
    if state.entities.is_empty() {
        println!("no locations");
        return;
    }
    for location in &state.entities {
        println!("{}", format_row(location));
    }
}

fn format_row(location: &Location) -> String {
    let id = location
        .id
        .map_or_else(|| "-".to_string(), |id| id.to_string());
    format!(
        "{id}\t{}\t{}\t{}\t{}",
        field(&location.street_address),
        field(&location.postal_code),
        field(&location.city),
        field(&location.state_province),
    )
}

fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_format_rows_with_placeholders_for_absent_fields() {
        let location = Location::builder()
            .id(LocationId::new(3))
            .city("Lyon")
            .build();
        assert_eq!(format_row(&location), "3\t-\t-\tLyon\t-");
    }

    #[test]
    fn should_format_unsaved_records_without_id() {
        let location = Location::builder().city("Lyon").build();
        assert_eq!(format_row(&location), "-\t-\t-\tLyon\t-");
    }

    #[test]
    fn should_build_location_from_field_args() {
        let fields = FieldArgs {
            street_address: Some("1 Main St".to_string()),
            postal_code: None,
            city: Some("Springfield".to_string()),
            state_province: None,
        };
        let location = fields.into_location(Some(LocationId::new(9)));
        assert_eq!(location.id, Some(LocationId::new(9)));
        assert_eq!(location.street_address.as_deref(), Some("1 Main St"));
        assert!(location.postal_code.is_none());
    }
}
