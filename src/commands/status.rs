use anyhow::{Context, Result};
use rusqlite::{Connection, OpenFlags};
use tracing::{info, warn};

use crate::cli::StatusArgs;
use crate::store::list_studies;

pub fn run(args: StatusArgs) -> Result<()> {
    info!(db_path = %args.db_path.display(), "status requested");

    if !args.db_path.exists() {
        warn!(path = %args.db_path.display(), "database file missing");
        return Ok(());
    }

    let connection = Connection::open_with_flags(&args.db_path, OpenFlags::SQLITE_OPEN_READ_ONLY)
        .with_context(|| format!("failed to open {}", args.db_path.display()))?;

    let studies = list_studies(&connection)?;
    let words_count = query_count(&connection, "SELECT COUNT(*) FROM words").unwrap_or(0);
    let unknown_count =
        query_count(&connection, "SELECT COUNT(*) FROM words WHERE known = 0").unwrap_or(0);

    info!(
        path = %args.db_path.display(),
        studies = studies.len(),
        words = words_count,
        unknown_words = unknown_count,
        "database status"
    );

    for study in &studies {
        info!(
            id = study.id,
            title = %study.title,
            source = %study.source_path.clone().unwrap_or_default(),
            step = study.current_step,
            words = study.word_count,
            last_studied_at = %study.last_studied_at,
            "study"
        );
    }

    Ok(())
}

fn query_count(connection: &Connection, sql: &str) -> Result<i64> {
    let count = connection.query_row(sql, [], |row| row.get(0))?;
    Ok(count)
}
