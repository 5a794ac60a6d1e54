pub mod models;
pub mod test_utils;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::path::Path;
use util::config;

/// Opens the database named by `DATABASE_PATH`.
///
/// A value starting with `sqlite:` is used as a DSN verbatim; anything else is
/// treated as a file path whose parent directory is created on demand.
pub async fn connect() -> Result<DatabaseConnection, DbErr> {
    let path_or_url = config::database_path();
    let url = if path_or_url.starts_with("sqlite:") {
        path_or_url
    } else {
        if let Some(parent) = Path::new(&path_or_url).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| DbErr::Custom(format!("cannot create {}: {}", parent.display(), e)))?;
            }
        }
        format!("sqlite://{path_or_url}?mode=rwc")
    };

    let mut options = ConnectOptions::new(url);
    options.sqlx_logging(false);

    tracing::debug!("connecting to database");
    Database::connect(options).await
}
