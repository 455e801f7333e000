//! order-review - print the review screen for a catalog and a basket
//!
//! Interactions are replayed from `--action` flags in order, then the chosen
//! way off the screen is taken so the persisted options can be inspected.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use order_review::shared::models::{Catalog, Order};
use order_review::store::KeyValueStore;
use order_review::{
    MemoryStore, Navigation, OrderOptionStore, RedbStore, ReviewConfig, ReviewScreen, logging,
};

/// One user interaction on the review screen
#[derive(Debug, Clone, PartialEq, Eq)]
enum Action {
    ToggleAsap,
    FocusTime,
    EditTime(String),
    BlurTime,
    ToggleTakeaway,
    ToggleDineIn,
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(raw) = s.strip_prefix("time=") {
            return Ok(Self::EditTime(raw.to_string()));
        }
        match s {
            "toggle-asap" => Ok(Self::ToggleAsap),
            "focus-time" => Ok(Self::FocusTime),
            "blur-time" => Ok(Self::BlurTime),
            "toggle-takeaway" => Ok(Self::ToggleTakeaway),
            "toggle-dine-in" => Ok(Self::ToggleDineIn),
            other => Err(format!(
                "unknown action {other:?} (expected toggle-asap, focus-time, time=<raw>, \
                 blur-time, toggle-takeaway or toggle-dine-in)"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Leave {
    /// Persist current options, back to product selection
    Edit,
    /// Reset persisted options, on to payment
    Checkout,
    /// Profile settings, persist nothing
    Profile,
    /// Start page, persist nothing
    Home,
    /// Stay on the screen, persist nothing
    Stay,
}

#[derive(Debug, Parser)]
#[command(name = "order-review", version, about = "Order review screen from the command line")]
struct Cli {
    /// Catalog JSON (array of areas)
    #[arg(long)]
    catalog: PathBuf,

    /// Order JSON (basket-entry id -> {item, count})
    #[arg(long)]
    order: PathBuf,

    /// Selected area id
    #[arg(long)]
    area: String,

    /// Selected item id
    #[arg(long)]
    item: String,

    /// redb file for persisted options (overrides config and ORDER_REVIEW_STORE)
    #[arg(long)]
    store: Option<PathBuf>,

    /// Config JSON
    #[arg(long, default_value = "order-review.json")]
    config: PathBuf,

    /// Interaction to replay (repeatable)
    #[arg(long = "action", value_parser = Action::from_str)]
    actions: Vec<Action>,

    /// How to leave the screen afterwards
    #[arg(long, value_enum, default_value_t = Leave::Stay)]
    leave: Leave,
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

fn run<S: KeyValueStore>(
    cli: &Cli,
    config: &ReviewConfig,
    store: S,
    catalog: &Catalog,
    order: &Order,
) -> anyhow::Result<()> {
    let option_store = OrderOptionStore::with_key(store, config.storage_key.clone());
    let mut screen = ReviewScreen::mount(option_store, catalog, &cli.area, &cli.item)?
        .with_separator(config.thousands_separator);

    for action in &cli.actions {
        match action {
            Action::ToggleAsap => screen.toggle_asap(),
            Action::FocusTime => screen.focus_time(),
            Action::EditTime(raw) => screen.edit_time(raw),
            Action::BlurTime => screen.blur_time(),
            Action::ToggleTakeaway => screen.toggle_takeaway(),
            Action::ToggleDineIn => screen.toggle_dine_in(),
        }
    }

    println!("{} / {}", screen.area().name, screen.item().name);
    let review = screen.review(order);
    for line in &review.entries {
        println!(
            "  {:<24} {:>8} x{:<4} = {}",
            line.entry.item.name,
            line.entry.item.price.to_string(),
            line.entry.count.to_string(),
            line.line_total
        );
    }
    println!("Total: {}", review.formatted_total);

    let details = screen.details();
    println!(
        "ASAP: [{}]  Time: {:<5}  Takeaway: [{}]  Dine-in: [{}]",
        if details.asap_checked() { "x" } else { " " },
        details.time_text(),
        if details.takeaway_checked() { "x" } else { " " },
        if details.dine_in_checked() { "x" } else { " " },
    );

    let nav: Option<Navigation> = match cli.leave {
        Leave::Edit => Some(screen.edit_products()?),
        Leave::Checkout => Some(screen.checkout()?),
        Leave::Profile => Some(screen.edit_profile()),
        Leave::Home => Some(screen.home()),
        Leave::Stay => None,
    };
    if let Some(nav) = nav {
        println!("-> {}", nav.route());
    }
    println!("Stored: {}", serde_json::to_string(&screen.option_store().load())?);

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = ReviewConfig::load(&cli.config)?.with_env_overrides();
    logging::init(config.log_filter.as_deref());

    let catalog: Catalog = read_json(&cli.catalog)?;
    let order: Order = read_json(&cli.order)?;

    match cli.store.clone().or_else(|| config.store_path.clone()) {
        Some(path) => {
            let store = RedbStore::open(&path)
                .with_context(|| format!("Failed to open store {}", path.display()))?;
            run(&cli, &config, store, &catalog, &order)
        }
        None => {
            tracing::info!("No store path configured, options will not outlive this run");
            run(&cli, &config, MemoryStore::new(), &catalog, &order)
        }
    }
}
