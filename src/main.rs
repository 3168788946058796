use anyhow::Result;
use clap::{Parser, Subcommand};

use planner_cli::cli::{handle_item_command, handle_list_command, ItemCommands, ListCommands};
use planner_cli::config::PlannerPaths;
use planner_cli::services::Planner;
use planner_cli::storage::PersistenceGateway;

#[derive(Parser)]
#[command(
    name = "planner",
    version,
    about = "Household shopping list and budget planner",
    long_about = "planner keeps per-account shopping lists with budgets, \
                  purchase tracking and spending summaries. Every command \
                  authenticates as one account, performs its operation and \
                  saves the data file on exit."
)]
struct Cli {
    /// Username to sign up or log in as
    #[arg(short, long, env = "PLANNER_USER", global = true)]
    user: Option<String>,

    /// Password (prompted for when omitted)
    #[arg(short, long, env = "PLANNER_PASSWORD", global = true)]
    password: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new account and log in
    Signup,

    /// List management commands
    #[command(subcommand)]
    List(ListCommands),

    /// Item management commands
    #[command(subcommand)]
    Item(ItemCommands),

    /// Show where the planner keeps its data
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = PlannerPaths::new()?;
    paths.ensure_directories()?;

    let gateway = PersistenceGateway::new(paths.store_file());
    let mut planner = Planner::open(gateway)?;

    let result = run(&mut planner, &paths, cli);

    // Each invocation is one session; logging out flushes the store. When
    // the command failed the store is unchanged and the flush is harmless;
    // when no login happened the logout is a no-op.
    let flush = planner.logout();

    result?;
    flush?;

    Ok(())
}

fn run(planner: &mut Planner, paths: &PlannerPaths, cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Signup) => {
            let (user, password) = credentials(cli.user, cli.password)?;
            planner.signup(&user, &password)?;
            println!("Created account '{}'.", user);
        }

        Some(Commands::List(cmd)) => {
            login(planner, cli.user, cli.password)?;
            handle_list_command(planner, cmd)?;
        }

        Some(Commands::Item(cmd)) => {
            login(planner, cli.user, cli.password)?;
            handle_item_command(planner, cmd)?;
        }

        Some(Commands::Config) => {
            println!("Planner configuration");
            println!("  Data directory: {}", paths.base_dir().display());
            println!("  Account store:  {}", paths.store_file().display());
        }

        None => {
            println!("planner - household shopping list and budget planner");
            println!();
            println!("Run 'planner --help' for usage information.");
        }
    }

    Ok(())
}

/// Resolve the username and password, prompting for the password when it was
/// not passed via flag or environment
fn credentials(user: Option<String>, password: Option<String>) -> Result<(String, String)> {
    let user = user.ok_or_else(|| anyhow::anyhow!("no user given; pass --user or set PLANNER_USER"))?;
    let password = match password {
        Some(password) => password,
        None => rpassword::prompt_password("Password: ")?,
    };
    Ok((user, password))
}

/// Authenticate the planner session for commands that require an account
fn login(planner: &mut Planner, user: Option<String>, password: Option<String>) -> Result<()> {
    let (user, password) = credentials(user, password)?;
    planner.login(&user, &password)?;
    Ok(())
}
