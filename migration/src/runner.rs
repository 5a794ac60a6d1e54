use colored::*;
use migration::Migrator;
use sea_orm::{Database, DatabaseConnection, DbErr};
use sea_orm_migration::prelude::*;
use std::io::{self, Write};
use std::time::Instant;

const STATUS_COLUMN: usize = 72;

async fn connect(url: &str) -> Result<DatabaseConnection, DbErr> {
    Database::connect(url).await
}

fn print_step(label: &str, name: &str) {
    let line = format!("{label} {}", name.bold());
    let dots = ".".repeat(STATUS_COLUMN.saturating_sub(line.len()));
    print!("{line}{dots} ");
    io::stdout().flush().ok();
}

/// Applies pending migrations one at a time, printing an aligned status line
/// per step. Applied migrations are recorded in the tracking table, so a
/// second run is a no-op.
pub async fn apply_pending(url: &str) -> Result<(), DbErr> {
    let db = connect(url).await?;
    let pending = Migrator::get_pending_migrations(&db).await?;

    if pending.is_empty() {
        println!("{}", "Schema is up to date".green());
        return Ok(());
    }

    println!("Applying {} migration(s)...", pending.len());
    for migration in pending {
        print_step("Applying", migration.name());
        let start = Instant::now();

        match Migrator::up(&db, Some(1)).await {
            Ok(()) => {
                let elapsed = format!("({:.2?})", start.elapsed()).dimmed();
                println!("{} {}", "done".green(), elapsed);
            }
            Err(err) => {
                println!("{}", "failed".red());
                return Err(err);
            }
        }
    }

    Ok(())
}

/// Lists every known migration with its applied or pending state.
pub async fn print_status(url: &str) -> Result<(), DbErr> {
    let db = connect(url).await?;
    let applied: Vec<String> = Migrator::get_applied_migrations(&db)
        .await?
        .iter()
        .map(|m| m.name().to_string())
        .collect();

    for migration in Migrator::migrations() {
        let name = migration.name().to_string();
        print_step("Migration", &name);
        if applied.contains(&name) {
            println!("{}", "applied".green());
        } else {
            println!("{}", "pending".yellow());
        }
    }

    Ok(())
}
