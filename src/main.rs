use anyhow::Result;
use clap::{Parser, Subcommand};

use contas::cli::{handle_account_command, handle_export_command, handle_status_command};
use contas::config::{paths::ContaPaths, settings::Settings};
use contas::storage::Storage;

#[derive(Parser)]
#[command(
    name = "contas",
    version,
    about = "Terminal-based bill management",
    long_about = "contas keeps track of bills: what is owed, when it is due and \
                  whether it was paid. Bills can be filtered by name and due date \
                  and exported as PDF, CSV or Word reports."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Bill management commands
    #[command(subcommand, alias = "account")]
    Conta(contas::cli::AccountCommands),

    /// Status commands
    #[command(subcommand, alias = "status")]
    Situacao(contas::cli::StatusCommands),

    /// Export filtered bills as a report
    Export(contas::cli::ExportArgs),

    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = ContaPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    contas::logging::init(&settings.log_level)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Conta(cmd)) => {
            require_init(&storage)?;
            handle_account_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Situacao(cmd)) => {
            require_init(&storage)?;
            handle_status_command(&storage, cmd)?;
        }
        Some(Commands::Export(args)) => {
            require_init(&storage)?;
            handle_export_command(&storage, &settings, args)?;
        }
        Some(Commands::Init) => {
            println!("Initializing contas at: {}", paths.base_dir().display());
            contas::storage::init::initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Default statuses have been created:");
            println!("  1 - Paga");
            println!("  2 - Pendente");
            println!();
            println!("Run 'contas conta create --help' to register your first bill.");
        }
        Some(Commands::Config) => {
            println!("contas Configuration");
            println!("====================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Export directory: {}", settings.resolve_export_dir(&paths).display());
            println!();
            println!("Settings:");
            println!("  Page size: {}", settings.page_size);
            println!("  Log level: {}", settings.log_level);
        }
        None => {
            println!("contas - Terminal-based bill management");
            println!();
            println!("Run 'contas --help' for usage information.");
        }
    }

    Ok(())
}

fn require_init(storage: &Storage) -> Result<()> {
    if !storage.is_initialized() {
        anyhow::bail!("contas is not initialized. Run 'contas init' first.");
    }
    Ok(())
}
