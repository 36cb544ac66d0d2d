//! CLI administration tool for employee-management.
//!
//! Provides commands for creating user accounts, listing employees,
//! and performing database checks without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Show row counts and server version
//! cargo run --bin admin -- db info
//!
//! # Create a user account (prompts for missing fields and the password)
//! cargo run --bin admin -- user create --username alice --email alice@example.com
//!
//! # List all employees
//! cargo run --bin admin -- employee list
//! ```
//!
//! # Environment Variables
//!
//! Same database variables as the server (`DATABASE_URL` or `DB_*` components).

use employee_management::api::dto::user::UserRegistrationRequest;
use employee_management::application::services::RegisterUser;
use employee_management::config;
use employee_management::server::{build_state, connect_pool};
use employee_management::state::AppState;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use sqlx::PgPool;
use std::sync::Arc;
use validator::Validate;

/// CLI tool for managing employee-management.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Manage user accounts
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Inspect employee records
    Employee {
        #[command(subcommand)]
        action: EmployeeAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

/// User management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// Register a new user account
    Create {
        #[arg(short, long)]
        username: Option<String>,

        #[arg(short, long)]
        email: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Employee subcommands.
#[derive(Subcommand)]
enum EmployeeAction {
    /// List all employees
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Db { action } => handle_db_action(action, &pool).await?,
        Commands::User { action } => {
            let state = build_state(Arc::new(pool));
            handle_user_action(action, &state).await?
        }
        Commands::Employee { action } => {
            let state = build_state(Arc::new(pool));
            handle_employee_action(action, &state).await?
        }
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let state = build_state(Arc::new(pool.clone()));
            let employees = state
                .employee_service
                .count_employees()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to count employees: {}", e))?;
            let users = state
                .user_service
                .count_users()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to count users: {}", e))?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!(
                "  Employees:  {}",
                employees.to_string().bright_green().bold()
            );
            println!("  Users:      {}", users.to_string().bright_green().bold());
            println!();
        }
    }

    Ok(())
}

/// Dispatches user management commands.
async fn handle_user_action(action: UserAction, state: &AppState) -> Result<()> {
    match action {
        UserAction::Create {
            username,
            email,
            yes,
        } => create_user(state, username, email, yes).await,
    }
}

/// Creates a user account with interactive prompts.
///
/// Goes through the same registration path as `POST /api/users/register`,
/// so uniqueness checks and password hashing are identical.
async fn create_user(
    state: &AppState,
    username: Option<String>,
    email: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "Create User".bright_blue().bold());
    println!();

    let username = match username {
        Some(u) => u,
        None => Input::new().with_prompt("Username").interact_text()?,
    };
    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };
    let first_name: String = Input::new()
        .with_prompt("First name")
        .interact_text()?;
    let last_name: String = Input::new()
        .with_prompt("Last name")
        .interact_text()?;
    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Repeat password", "Passwords do not match")
        .interact()?;

    let registration = validated_registration(UserRegistrationRequest {
        username,
        email,
        password,
        first_name,
        last_name,
    })?;

    println!();
    println!("{}", "User details:".bright_white().bold());
    println!("  Username: {}", registration.username.cyan());
    println!("  Email:    {}", registration.email.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this user?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let user = state
        .user_service
        .register_user(registration)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create user: {}", e))?;

    println!();
    println!(
        "{} (id {})",
        "User created successfully!".green().bold(),
        user.id.to_string().bright_black()
    );
    println!();

    Ok(())
}

/// Applies the same input rules as `POST /api/users/register`.
fn validated_registration(request: UserRegistrationRequest) -> Result<RegisterUser> {
    request
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid user details: {e}"))?;

    Ok(request.into())
}

/// Dispatches employee commands.
async fn handle_employee_action(action: EmployeeAction, state: &AppState) -> Result<()> {
    match action {
        EmployeeAction::List => list_employees(state).await,
    }
}

/// Lists all employees ordered by id.
///
/// # Output Format
///
/// ```text
/// Employees
///
///   ID   Name                      Email                          Department
///   ──────────────────────────────────────────────────────────────────────────
///   1    Ada Lovelace              ada@example.com                Engineering
/// ```
async fn list_employees(state: &AppState) -> Result<()> {
    println!("{}", "Employees".bright_blue().bold());
    println!();

    let employees = state
        .employee_service
        .list_employees()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list employees: {}", e))?;

    if employees.is_empty() {
        println!("{}", "  No employees found".yellow());
        return Ok(());
    }

    println!(
        "  {:<4} {:<25} {:<30} {:<20}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Email".bright_white().bold(),
        "Department".bright_white().bold()
    );
    println!("  {}", "─".repeat(80).bright_black());

    for employee in &employees {
        let name = format!("{} {}", employee.first_name, employee.last_name);
        println!(
            "  {:<4} {:<25} {:<30} {}",
            employee.id.to_string().bright_black(),
            name.cyan(),
            employee.email,
            employee.department
        );
    }

    println!();
    println!(
        "  Total: {}",
        employees.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}
