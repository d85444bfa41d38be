use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use log::{debug, error, info};
use tokio::io::BufReader;

use cocktail_browser::session::Flow;
use cocktail_browser::{
    shell, AlcoholicFilter, AppContext, BrowserConfig, CocktailApi, CocktailDbClient,
    CocktailError, Command, Route, Session,
};

#[derive(Debug, Parser)]
#[command(name = "cocktail-browser")]
#[command(about = "Browse cocktails from TheCocktailDB by ingredient or type")]
struct Cli {
    /// Configuration file (defaults to ./cocktail.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[arg(long, global = true, help = "Print the normalized API response as JSON")]
    json: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search cocktails containing an ingredient
    Search { ingredient: String },
    /// Browse cocktails by type: alcoholic or non-alcoholic
    Browse { filter: String },
    /// Show one cocktail by id
    Drink { id: String },
    /// Show an ingredient and the cocktails that use it
    Ingredient { name: String },
    /// Show the page at a route such as /drink/11007
    Open { path: String },
    /// Interactive session (the default)
    Shell,
}

fn init_logger(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_module("cocktail_browser", log::LevelFilter::Debug);
    }
    let _ = builder.try_init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    debug!("CLI arguments: {:?}", cli);

    if let Err(e) = run(cli).await {
        error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CocktailError> {
    let mut config = BrowserConfig::load(cli.config.as_deref())?;
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
    }
    info!("Using API at {}", config.api.base_url);

    let client = Arc::new(CocktailDbClient::from_config(&config.api)?);
    let context = AppContext::new(client.clone(), &config);
    let mut session = Session::new(context);

    let route = match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let stdin = BufReader::new(tokio::io::stdin());
            return shell::run(&mut session, stdin, tokio::io::stdout()).await;
        }
        Commands::Search { ingredient } => {
            if cli.json {
                let response = client.search_by_ingredient(&ingredient).await?;
                return print_json(&response);
            }
            return one_shot(&mut session, Command::Search(ingredient)).await;
        }
        Commands::Browse { filter } => {
            let filter: AlcoholicFilter = filter.parse()?;
            if cli.json {
                let response = client.filter_by_alcoholic(filter).await?;
                return print_json(&response);
            }
            return one_shot(&mut session, Command::Browse(Some(filter))).await;
        }
        Commands::Drink { id } => Route::Drink(id),
        Commands::Ingredient { name } => Route::Ingredient(name),
        Commands::Open { path } => path.parse()?,
    };

    if cli.json {
        return match route {
            Route::Home => Err(CocktailError::InvalidArgument(
                "--json needs a drink or ingredient route".to_string(),
            )),
            Route::Drink(id) => print_json(&client.get_drink_by_id(&id).await?),
            Route::Ingredient(name) => print_json(&client.get_ingredient_by_name(&name).await?),
        };
    }

    one_shot(&mut session, Command::Go(route)).await
}

/// Handle one command, wait for its requests and print the resulting page
async fn one_shot(session: &mut Session, command: Command) -> Result<(), CocktailError> {
    if let Flow::Continue(requests) = session.handle(command)? {
        session.settle(requests).await;
    }
    print!("{}", session.render());
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), CocktailError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
