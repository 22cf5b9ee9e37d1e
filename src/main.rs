//! bpcat - catalog manager for bank products
//!
//! This is the binary entry point. All logic lives in the library
//! crates; the CLI drives the state engine headlessly against the
//! configured backend and renders the resulting view.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::info;

use bpcat_api::HttpProductsApi;
use bpcat_app::config::{config_file_path, load_settings};
use bpcat_app::{AppState, Engine, Field, Message, Route};
use bpcat_core::dates;

/// Catalog manager for bank products
#[derive(Parser, Debug)]
#[command(name = "bpcat")]
#[command(about = "Catalog manager for bank products", long_about = None)]
struct Cli {
    /// Backend base URL (overrides the config file)
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Path to an alternate config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List products, optionally filtered and truncated
    List {
        /// Search term matched against id, name, and description
        #[arg(long, value_name = "TERM")]
        search: Option<String>,

        /// Visible rows; invalid input falls back to 5
        #[arg(long, value_name = "N")]
        page_size: Option<String>,
    },

    /// Create a product (the revision date is derived automatically)
    Create {
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: String,
        #[arg(long, value_name = "URL")]
        logo: String,
        /// Release date, `YYYY-MM-DD` or `D/M/YYYY`; defaults to today
        #[arg(long, value_name = "DATE")]
        date_release: Option<String>,
    },

    /// Edit an existing product (unset fields keep their stored values)
    Edit {
        /// Product identifier (immutable)
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, value_name = "URL")]
        logo: Option<String>,
        /// Release date, `YYYY-MM-DD` or `D/M/YYYY`
        #[arg(long, value_name = "DATE")]
        date_release: Option<String>,
    },

    /// Delete a product
    Delete {
        /// Product identifier
        id: String,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    bpcat_core::logging::init()?;

    let cli = Cli::parse();
    let config_path = cli.config.unwrap_or_else(config_file_path);
    let settings = load_settings(&config_path);
    let base_url = cli
        .base_url
        .unwrap_or_else(|| settings.api.base_url.clone());

    info!(%base_url, "starting against backend");
    let api = HttpProductsApi::new(&base_url, Duration::from_secs(settings.api.timeout_secs))?;
    let mut engine = Engine::new(api, settings.list.page_size);

    match cli.command {
        Command::List { search, page_size } => {
            engine.navigate(Route::ProductList);
            engine.run_until_idle().await;
            if let Some(term) = search {
                engine.dispatch(Message::SearchChanged { term });
            }
            if let Some(input) = page_size {
                engine.dispatch(Message::PageSizeChanged { input });
            }
            print_list(engine.state());
        }

        Command::Create {
            id,
            name,
            description,
            logo,
            date_release,
        } => {
            engine.navigate(Route::ProductCreate);
            let mut fields = vec![
                (Field::Id, id),
                (Field::Name, name),
                (Field::Description, description),
                (Field::Logo, logo),
            ];
            if let Some(date) = date_release {
                fields.push((Field::DateRelease, date));
            }
            submit_form(&mut engine, fields).await;
        }

        Command::Edit {
            id,
            name,
            description,
            logo,
            date_release,
        } => {
            engine.navigate(Route::ProductEdit(id));
            engine.run_until_idle().await;
            if let Some(err) = engine.state().form.as_ref().and_then(|f| f.error.clone()) {
                eprintln!("{err}");
                std::process::exit(1);
            }

            let mut fields = Vec::new();
            if let Some(v) = name {
                fields.push((Field::Name, v));
            }
            if let Some(v) = description {
                fields.push((Field::Description, v));
            }
            if let Some(v) = logo {
                fields.push((Field::Logo, v));
            }
            if let Some(v) = date_release {
                fields.push((Field::DateRelease, v));
            }
            submit_form(&mut engine, fields).await;
        }

        Command::Delete { id } => {
            engine.navigate(Route::ProductList);
            engine.run_until_idle().await;
            engine.dispatch(Message::DeleteRequested { id });
            engine.run_until_idle().await;

            if let Some(err) = &engine.state().list.error {
                eprintln!("{err}");
                std::process::exit(1);
            }
            println!("Producto eliminado.");
            print_list(engine.state());
        }
    }

    Ok(())
}

/// Apply field values, submit, and report the outcome.
///
/// On success the engine has already navigated back to a reloaded list;
/// on failure the form is still active and its error plus any per-field
/// validation messages are printed.
async fn submit_form(engine: &mut Engine<HttpProductsApi>, fields: Vec<(Field, String)>) {
    for (field, value) in fields {
        engine.dispatch(Message::FieldChanged { field, value });
    }
    engine.dispatch(Message::SubmitRequested);
    engine.run_until_idle().await;

    match engine.state().form.as_ref() {
        None => {
            println!("Producto guardado.");
            print_list(engine.state());
        }
        Some(form) => {
            if let Some(err) = &form.error {
                eprintln!("{err}");
            }
            for (field, error) in form.validate().iter() {
                if form.touched.contains(field) {
                    eprintln!("  {}: {}", field.name(), error.message());
                }
            }
            std::process::exit(1);
        }
    }
}

/// Render the visible view as a table, dates in `DD/MM/YYYY`.
fn print_list(state: &AppState) {
    let list = &state.list;
    if let Some(err) = &list.error {
        eprintln!("{err}");
        std::process::exit(1);
    }
    if list.visible().is_empty() {
        println!("(sin productos)");
        return;
    }

    println!(
        "{:<10}  {:<28}  {:<40}  {:>10}  {:>10}",
        "ID", "NOMBRE", "DESCRIPCIÓN", "LIBERACIÓN", "REVISIÓN"
    );
    for product in list.visible() {
        println!(
            "{:<10}  {:<28}  {:<40}  {:>10}  {:>10}",
            product.id,
            truncate(&product.name, 28),
            truncate(&product.description, 40),
            dates::format_display(&product.date_release),
            dates::format_display(&product.date_revision),
        );
    }
    println!(
        "{} de {} productos",
        list.visible().len(),
        list.filtered().len()
    );
}

fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        return value.to_string();
    }
    let cut: String = value.chars().take(max.saturating_sub(1)).collect();
    format!("{cut}…")
}
