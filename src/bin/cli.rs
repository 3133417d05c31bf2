//! Cashbook CLI
//!
//! Command-line front end for recording and listing expenses.

use clap::{Parser, Subcommand};
use cashbook::{
    Category, Collection, Config, ErrorPolicy, FileStore, ItemStore, PersistenceAdapter, Result,
};
use tracing_subscriber::{fmt, EnvFilter};

/// Cashbook CLI
#[derive(Parser, Debug)]
#[command(name = "cashbook")]
#[command(about = "Track private and business expenses")]
#[command(version)]
struct Args {
    /// Data directory
    #[arg(short, long, global = true, default_value = "./cashbook_data")]
    data_dir: String,

    /// Fail on unreadable data or failed writes instead of carrying on
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Record a new expense
    Add {
        /// What the money was spent on
        #[arg(short, long)]
        name: String,

        /// Personal or Business
        #[arg(short, long, default_value_t = Category::Personal)]
        category: Category,

        /// Amount spent (non-negative)
        #[arg(short, long, value_parser = parse_price)]
        price: f64,
    },

    /// List expenses
    List {
        /// private or business (both when omitted)
        collection: Option<Collection>,
    },

    /// Remove expenses by position
    Remove {
        /// private or business
        collection: Collection,

        /// Zero-based positions as shown by `list`
        #[arg(required = true)]
        offsets: Vec<usize>,
    },
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,cashbook=info"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    let policy = if args.strict {
        ErrorPolicy::Strict
    } else {
        ErrorPolicy::Lenient
    };

    let config = Config::builder()
        .data_dir(&args.data_dir)
        .error_policy(policy)
        .build();

    tracing::debug!("Cashbook v{}", cashbook::VERSION);
    tracing::debug!("Data directory: {}", args.data_dir);

    let mut store = match config.open_store() {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Failed to open store: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&mut store, args.command) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

/// Prices from the command line must be finite and non-negative
fn parse_price(s: &str) -> std::result::Result<f64, String> {
    let price: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;

    if !price.is_finite() {
        return Err(format!("'{}' is not a finite amount", s));
    }
    if price < 0.0 {
        return Err(format!("'{}' is negative", s));
    }

    // Normalizes "-0" to 0
    Ok(price + 0.0)
}

fn run(store: &mut ItemStore<FileStore>, command: Commands) -> Result<()> {
    match command {
        Commands::Add {
            name,
            category,
            price,
        } => {
            let collection = store.add_entry(name.as_str(), category.as_str(), price)?;
            tracing::info!("Added '{}' to {} expenses", name, collection);
        }
        Commands::List { collection } => match collection {
            Some(collection) => print_collection(store, collection),
            None => {
                for collection in Collection::ALL {
                    print_collection(store, collection);
                }
            }
        },
        Commands::Remove {
            collection,
            offsets,
        } => {
            let before = store.len(collection);
            store.remove_at(collection, offsets)?;
            let removed = before - store.len(collection);
            tracing::info!("Removed {} item(s) from {} expenses", removed, collection);
        }
    }

    Ok(())
}

fn print_collection<P: PersistenceAdapter>(store: &ItemStore<P>, collection: Collection) {
    let heading = match collection {
        Collection::Private => "Private expenses:",
        Collection::Business => "Business expenses:",
    };
    println!("{}", heading);

    for (index, item) in store.items(collection).iter().enumerate() {
        println!("  {:>3}  {:<30} {:>12}", index, item.name(), item.formatted_price());
    }

    println!("  {:>3}  {:<30} {:>12}", "", "Total", format!("{}$", store.total(collection)));
}
