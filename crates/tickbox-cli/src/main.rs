use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use dialoguer::{Confirm, Input, Password};
use dotenvy::dotenv;
use tickbox_config::password_hash_cost_from_env;
use tickbox_core::hash_password_with_cost;
use tickbox_db::{
    PgUserStore, StoreError, UserStore, database_url_from_env, init_db_pool, run_migrations,
};
use tickbox_models::User;

#[derive(Parser)]
#[command(name = "tickbox-cli")]
#[command(about = "Tickbox CLI - Account administration", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new account
    CreateUser {
        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Delete an account by email
    DeleteUser {
        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    let database_url = database_url_from_env().context("DATABASE_URL must be set")?;
    let pool = init_db_pool(&database_url)
        .await
        .context("Failed to connect to database")?;
    run_migrations(&pool)
        .await
        .context("Failed to run migrations")?;
    let store = PgUserStore::new(pool);

    match cli.command {
        Commands::CreateUser { email, password } => {
            handle_create_user(&store, email, password).await
        }
        Commands::DeleteUser { email, yes } => handle_delete_user(&store, email, yes).await,
    }
}

async fn handle_create_user(
    store: &PgUserStore,
    email: Option<String>,
    password: Option<String>,
) -> anyhow::Result<()> {
    let email = match email {
        Some(email) => email,
        None => prompt_email()?,
    };

    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()
            .context("Failed to read password")?,
    };

    if password.is_empty() {
        bail!("password must not be empty");
    }

    let cost = password_hash_cost_from_env().context("invalid PASSWORD_HASH_COST")?;
    let hash = hash_password_with_cost(&password, cost).map_err(|e| e.error)?;
    let user = User::new(email, hash);

    match store.create(&user).await {
        Ok(()) => {
            println!("\n✅ User created successfully!");
            println!("   Email: {}", user.email);
            println!("   ID: {}", user.id);
            Ok(())
        }
        Err(StoreError::DuplicateEmail) => bail!("{} is already registered", user.email),
        Err(e) => Err(e).context("Failed to create user"),
    }
}

async fn handle_delete_user(
    store: &PgUserStore,
    email: Option<String>,
    yes: bool,
) -> anyhow::Result<()> {
    let email = match email {
        Some(email) => email,
        None => prompt_email()?,
    };

    let Some(user) = store
        .get_by_email(&email)
        .await
        .context("Failed to look up user")?
    else {
        bail!("no account with email {}", email);
    };

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete {}? Existing sessions will stop working", email))
            .default(false)
            .interact()
            .context("Failed to read confirmation")?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    store
        .delete(user.id)
        .await
        .context("Failed to delete user")?;

    println!("\n✅ Deleted {}", email);
    Ok(())
}

fn prompt_email() -> anyhow::Result<String> {
    Input::new()
        .with_prompt("Email address")
        .interact_text()
        .context("Failed to read email")
}
