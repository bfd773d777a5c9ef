//! Account CLI commands
//!
//! Implements CLI commands for bill management: filtered listing, details
//! and the four mutations.

use clap::{Args, Subcommand};
use tracing::warn;

use crate::config::settings::Settings;
use crate::display::account::{format_account_details, format_account_page};
use crate::error::{ContaError, ContaResult};
use crate::models::{Account, AccountId, AccountInput};
use crate::query::FilterParams;
use crate::services::{AccountService, MutationResult};
use crate::storage::Storage;

/// Filters shared by the listing and the exports
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Substring of the account name (case-insensitive)
    #[arg(long)]
    pub nome: Option<String>,
    /// Earliest due date, inclusive (YYYY-MM-DD or DD/MM/YYYY)
    #[arg(long)]
    pub data_inicio: Option<String>,
    /// Latest due date, inclusive (YYYY-MM-DD or DD/MM/YYYY)
    #[arg(long)]
    pub data_fim: Option<String>,
}

impl From<FilterArgs> for FilterParams {
    fn from(args: FilterArgs) -> Self {
        FilterParams {
            nome: args.nome,
            data_inicio: args.data_inicio,
            data_fim: args.data_fim,
        }
    }
}

/// Account fields as typed on the command line
#[derive(Args, Debug, Clone)]
pub struct AccountArgs {
    /// Account name
    #[arg(long)]
    pub nome: String,
    /// Amount in locale format (e.g. "1.500,00")
    #[arg(long, allow_hyphen_values = true)]
    pub valor: String,
    /// Due date (YYYY-MM-DD or DD/MM/YYYY)
    #[arg(long)]
    pub vencimento: String,
    /// Status ID (see `contas situacao list`)
    #[arg(long)]
    pub situacao_conta_id: u64,
}

impl From<AccountArgs> for AccountInput {
    fn from(args: AccountArgs) -> Self {
        AccountInput {
            nome: args.nome,
            valor: args.valor,
            vencimento: args.vencimento,
            situacao_conta_id: args.situacao_conta_id,
        }
    }
}

/// Account fields to change; anything left out keeps its current value
#[derive(Args, Debug, Clone, Default)]
pub struct EditArgs {
    /// New account name
    #[arg(long)]
    pub nome: Option<String>,
    /// New amount in locale format (e.g. "1.500,00")
    #[arg(long, allow_hyphen_values = true)]
    pub valor: Option<String>,
    /// New due date (YYYY-MM-DD or DD/MM/YYYY)
    #[arg(long)]
    pub vencimento: Option<String>,
    /// New status ID
    #[arg(long)]
    pub situacao_conta_id: Option<u64>,
}

impl EditArgs {
    /// Overlay the given flags on the account's current values
    pub fn apply(self, current: AccountInput) -> AccountInput {
        AccountInput {
            nome: self.nome.unwrap_or(current.nome),
            valor: self.valor.unwrap_or(current.valor),
            vencimento: self.vencimento.unwrap_or(current.vencimento),
            situacao_conta_id: self.situacao_conta_id.unwrap_or(current.situacao_conta_id),
        }
    }
}

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// List accounts, newest first
    List {
        #[command(flatten)]
        filter: FilterArgs,
        /// Page number
        #[arg(short, long, default_value = "1")]
        page: usize,
        /// Accounts per page (defaults to the configured page size)
        #[arg(long)]
        per_page: Option<usize>,
    },
    /// Show account details
    Show {
        /// Account ID
        id: AccountId,
    },
    /// Create a new account
    Create(AccountArgs),
    /// Edit an account, starting from its current values
    Edit {
        /// Account ID
        id: AccountId,
        #[command(flatten)]
        fields: EditArgs,
    },
    /// Delete an account
    Delete {
        /// Account ID
        id: AccountId,
    },
    /// Flip an account between paid and pending
    #[command(alias = "pagar")]
    Toggle {
        /// Account ID
        id: AccountId,
    },
}

/// Handle an account command
pub fn handle_account_command(
    storage: &Storage,
    settings: &Settings,
    cmd: AccountCommands,
) -> ContaResult<()> {
    let service = AccountService::new(storage);

    match cmd {
        AccountCommands::List {
            filter,
            page,
            per_page,
        } => {
            let params = FilterParams::from(filter);
            let page = service.list(&params, page, per_page.unwrap_or(settings.page_size))?;
            print!("{}", format_account_page(&page));
        }

        AccountCommands::Show { id } => {
            let record = service.show(id)?;
            print!("{}", format_account_details(&record));
        }

        AccountCommands::Create(fields) => {
            let account = report(service.create(fields.into()))?;
            println!("  ID: {}", account.id);
        }

        AccountCommands::Edit { id, fields } => {
            let current = service.show(id).map_err(|e| {
                warn!(account_id = %id, error = %e, "account not loaded for editing");
                ContaError::Rejected("Conta não editada!".into())
            })?;
            let input = fields.apply(AccountInput::from(&current.account));
            report(service.update(id, input))?;
        }

        AccountCommands::Delete { id } => {
            report(service.delete(id))?;
        }

        AccountCommands::Toggle { id } => {
            let account = report(service.toggle_status(id))?;
            let record = service.show(account.id)?;
            println!("  {}: {}", record.account.name, record.status.name);
        }
    }

    Ok(())
}

/// Print a mutation's outcome; on failure, echo the input back so it can be
/// corrected and resubmitted
///
/// The underlying error was already logged by the service and stays out of
/// the returned error.
fn report(result: MutationResult<Account>) -> ContaResult<Account> {
    match result {
        Ok(success) => {
            println!("{}", success.message);
            Ok(success.value)
        }
        Err(failure) => {
            if let Some(input) = &failure.input {
                eprintln!("{}", echo_input(input));
            }
            Err(ContaError::Rejected(failure.message))
        }
    }
}

fn echo_input(input: &AccountInput) -> String {
    format!(
        "  --nome {:?} --valor {:?} --vencimento {:?} --situacao-conta-id {}",
        input.nome, input.valor, input.vencimento, input.situacao_conta_id
    )
}
