use std::{fs, io, path::Path, process};
use util::config;

mod runner;

/// Schema management CLI.
///
/// - `migration` / `migration up`: apply pending migrations
/// - `migration fresh`: drop the database file, then migrate from scratch
/// - `migration clean`: drop the database file only
/// - `migration status`: show applied and pending migrations
#[tokio::main]
async fn main() {
    let db_path = config::database_path();
    let url = database_url(&db_path);
    let command = std::env::args().nth(1);

    let outcome = match command.as_deref() {
        Some("clean") => remove_db_file(&db_path).map_err(|e| e.to_string()),
        Some("fresh") => match remove_db_file(&db_path).and_then(|_| create_db_dir(&db_path)) {
            Ok(()) => runner::apply_pending(&url).await.map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        },
        Some("status") => runner::print_status(&url).await.map_err(|e| e.to_string()),
        None | Some("up") => match create_db_dir(&db_path) {
            Ok(()) => runner::apply_pending(&url).await.map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        },
        Some(other) => Err(format!(
            "Unknown command '{other}'. Expected one of: up, fresh, clean, status"
        )),
    };

    if let Err(err) = outcome {
        eprintln!("migration: {err}");
        process::exit(1);
    }
}

fn database_url(db_path: &str) -> String {
    if db_path.starts_with("sqlite:") {
        db_path.to_string()
    } else {
        format!("sqlite://{db_path}?mode=rwc")
    }
}

fn remove_db_file(path: &str) -> io::Result<()> {
    let db_path = Path::new(path);
    if db_path.exists() {
        fs::remove_file(db_path)?;
        println!("Deleted DB: {}", db_path.display());
    } else {
        println!("DB file does not exist: {}", db_path.display());
    }
    Ok(())
}

fn create_db_dir(path: &str) -> io::Result<()> {
    match Path::new(path).parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}
