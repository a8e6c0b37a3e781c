//! SQLite persistence for saved studies and the learner's vocabulary.

use std::path::Path;

use anyhow::{Context, Result, bail};
use rusqlite::{Connection, OptionalExtension, params};
use tracing::info;

use crate::model::{ParagraphReport, StudyDetail, StudySummary, VocabularyEntry, WordRow};
use crate::util::now_utc_string;


pub const STORE_SCHEMA_VERSION: &str = "0.1.0";

#[derive(Debug, Clone)]
pub struct NewStudy<'a> {
    pub title: &'a str,
    pub source_path: Option<&'a str>,
    pub source_sha256: Option<&'a str>,
    pub english_text: &'a str,
    pub paragraphs: &'a [ParagraphReport],
    pub current_step: i64,
    pub words: &'a [VocabularyEntry],
}

pub fn open_store(path: &Path) -> Result<Connection> {
    let connection =
        Connection::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    configure_connection(&connection)?;
    ensure_schema(&connection)?;
    Ok(connection)
}

fn configure_connection(connection: &Connection) -> Result<()> {
    connection
        .pragma_update(None, "journal_mode", "WAL")
        .context("failed to set journal_mode=WAL")?;
    connection
        .pragma_update(None, "synchronous", "NORMAL")
        .context("failed to set synchronous=NORMAL")?;
    connection
        .pragma_update(None, "foreign_keys", "ON")
        .context("failed to enable foreign keys")?;
    Ok(())
}

pub fn ensure_schema(connection: &Connection) -> Result<()> {
    connection
        .execute_batch(
            "
        CREATE TABLE IF NOT EXISTS metadata (
          key TEXT PRIMARY KEY,
          value TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS studies (
          id INTEGER PRIMARY KEY AUTOINCREMENT,
          title TEXT NOT NULL,
          source_path TEXT,
          source_sha256 TEXT,
          english_text TEXT,
          paragraphs_json TEXT NOT NULL DEFAULT '[]',
          current_step INTEGER NOT NULL DEFAULT 1,
          word_count INTEGER NOT NULL DEFAULT 0,
          last_studied_at TEXT NOT NULL,
          created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS words (
          id INTEGER PRIMARY KEY AUTOINCREMENT,
          word TEXT NOT NULL,
          meaning TEXT NOT NULL DEFAULT '',
          study_id INTEGER,
          known INTEGER NOT NULL DEFAULT 0,
          created_at TEXT NOT NULL,
          UNIQUE(word, study_id),
          FOREIGN KEY(study_id) REFERENCES studies(id) ON DELETE CASCADE
        );

        CREATE INDEX IF NOT EXISTS idx_words_word ON words(word);
        CREATE INDEX IF NOT EXISTS idx_words_study ON words(study_id);
        ",
        )
        .context("failed to create store schema")?;

    connection
        .execute(
            "INSERT INTO metadata(key, value) VALUES('schema_version', ?1)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![STORE_SCHEMA_VERSION],
        )
        .context("failed to record store schema version")?;

    Ok(())
}

/// Saves a study and its vocabulary in one transaction. Words already stored
/// for the same study are left untouched.
pub fn insert_study(connection: &mut Connection, study: &NewStudy<'_>) -> Result<i64> {
    let now = now_utc_string();
    let paragraphs_json =
        serde_json::to_string(study.paragraphs).context("failed to serialize study paragraphs")?;

    let transaction = connection
        .transaction()
        .context("failed to begin study transaction")?;
    transaction
        .execute(
            "INSERT INTO studies (
               title, source_path, source_sha256, english_text, paragraphs_json,
               current_step, word_count, last_studied_at, created_at
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)",
            params![
                study.title,
                study.source_path,
                study.source_sha256,
                study.english_text,
                paragraphs_json,
                study.current_step,
                study.words.len() as i64,
                now,
            ],
        )
        .context("failed to insert study")?;
    let study_id = transaction.last_insert_rowid();

    let mut words_inserted = 0usize;
    {
        let mut statement = transaction.prepare(
            "INSERT OR IGNORE INTO words (word, meaning, study_id, known, created_at)
             VALUES (?1, ?2, ?3, 0, ?4)",
        )?;
        for entry in study.words {
            words_inserted +=
                statement.execute(params![entry.word.to_lowercase(), entry.meaning, study_id, now])?;
        }
    }

    transaction
        .commit()
        .context("failed to commit study transaction")?;

    info!(study_id, words = words_inserted, "saved study");
    Ok(study_id)
}

/// Studies, most recently studied first, with the number of words currently
/// stored for each.
pub fn list_studies(connection: &Connection) -> Result<Vec<StudySummary>> {
    let mut statement = connection.prepare(
        "SELECT s.id, s.title, s.source_path, s.current_step,
                (SELECT COUNT(*) FROM words w WHERE w.study_id = s.id),
                s.last_studied_at, s.created_at
         FROM studies s
         ORDER BY s.last_studied_at DESC, s.id DESC",
    )?;

    let rows = statement.query_map([], |row| {
        Ok(StudySummary {
            id: row.get(0)?,
            title: row.get(1)?,
            source_path: row.get(2)?,
            current_step: row.get(3)?,
            word_count: row.get(4)?,
            last_studied_at: row.get(5)?,
            created_at: row.get(6)?,
        })
    })?;

    let mut studies = Vec::new();
    for row in rows {
        studies.push(row.context("failed to read study row")?);
    }
    Ok(studies)
}

pub fn get_study(connection: &Connection, study_id: i64) -> Result<Option<StudyDetail>> {
    let row = connection
        .query_row(
            "SELECT s.id, s.title, s.source_path, s.source_sha256, s.english_text,
                    s.paragraphs_json, s.current_step,
                    (SELECT COUNT(*) FROM words w WHERE w.study_id = s.id),
                    s.last_studied_at, s.created_at
             FROM studies s
             WHERE s.id = ?1",
            params![study_id],
            |row| {
                let paragraphs_json: String = row.get(5)?;
                let detail = StudyDetail {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    source_path: row.get(2)?,
                    source_sha256: row.get(3)?,
                    english_text: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
                    paragraphs: Vec::new(),
                    current_step: row.get(6)?,
                    word_count: row.get(7)?,
                    last_studied_at: row.get(8)?,
                    created_at: row.get(9)?,
                };
                Ok((detail, paragraphs_json))
            },
        )
        .optional()
        .with_context(|| format!("failed to read study {study_id}"))?;

    let Some((mut detail, paragraphs_json)) = row else {
        return Ok(None);
    };
    detail.paragraphs = serde_json::from_str(&paragraphs_json)
        .with_context(|| format!("failed to parse paragraphs of study {study_id}"))?;
    Ok(Some(detail))
}

/// Records learner progress and refreshes `last_studied_at`.
pub fn update_study_step(connection: &Connection, study_id: i64, step: i64) -> Result<bool> {
    if step < 1 {
        bail!("study step must be at least 1, got {step}");
    }

    let updated = connection
        .execute(
            "UPDATE studies SET current_step = ?1, last_studied_at = ?2 WHERE id = ?3",
            params![step, now_utc_string(), study_id],
        )
        .with_context(|| format!("failed to update study {study_id}"))?;
    Ok(updated > 0)
}

/// Deletes a study together with the words saved for it.
pub fn delete_study(connection: &mut Connection, study_id: i64) -> Result<bool> {
    let transaction = connection
        .transaction()
        .context("failed to begin study delete transaction")?;
    let words_deleted = transaction
        .execute("DELETE FROM words WHERE study_id = ?1", params![study_id])
        .with_context(|| format!("failed to delete words of study {study_id}"))?;
    let studies_deleted = transaction
        .execute("DELETE FROM studies WHERE id = ?1", params![study_id])
        .with_context(|| format!("failed to delete study {study_id}"))?;
    transaction
        .commit()
        .context("failed to commit study delete transaction")?;

    if studies_deleted > 0 {
        info!(study_id, words = words_deleted, "deleted study");
    }
    Ok(studies_deleted > 0)
}

/// Adds one word by hand, optionally attached to a study. Returns the id of
/// the stored row; an existing row for the same word and study is kept as is.
pub fn add_word(
    connection: &Connection,
    word: &str,
    meaning: &str,
    study_id: Option<i64>,
) -> Result<i64> {
    let word = word.trim().to_lowercase();
    if word.is_empty() {
        bail!("cannot add an empty word");
    }

    if let Some(study_id) = study_id {
        let exists = connection
            .query_row(
                "SELECT 1 FROM studies WHERE id = ?1",
                params![study_id],
                |_| Ok(()),
            )
            .optional()?
            .is_some();
        if !exists {
            bail!("study {study_id} not found");
        }
    }

    let existing = connection
        .query_row(
            "SELECT id FROM words WHERE word = ?1 AND study_id IS ?2",
            params![word, study_id],
            |row| row.get::<_, i64>(0),
        )
        .optional()
        .with_context(|| format!("failed to look up word '{word}'"))?;
    if let Some(word_id) = existing {
        return Ok(word_id);
    }

    connection
        .execute(
            "INSERT INTO words (word, meaning, study_id, known, created_at)
             VALUES (?1, ?2, ?3, 0, ?4)",
            params![word, meaning, study_id, now_utc_string()],
        )
        .with_context(|| format!("failed to insert word '{word}'"))?;
    Ok(connection.last_insert_rowid())
}

pub fn set_word_meaning(connection: &Connection, word_id: i64, meaning: &str) -> Result<bool> {
    let updated = connection
        .execute(
            "UPDATE words SET meaning = ?1 WHERE id = ?2",
            params![meaning, word_id],
        )
        .with_context(|| format!("failed to update meaning of word {word_id}"))?;
    Ok(updated > 0)
}

pub fn list_words(
    connection: &Connection,
    study_id: Option<i64>,
    unknown_only: bool,
) -> Result<Vec<WordRow>> {
    let mut statement = connection.prepare(
        "SELECT w.id, w.word, w.meaning, w.study_id, s.title, w.known
         FROM words w
         LEFT JOIN studies s ON s.id = w.study_id
         WHERE (?1 IS NULL OR w.study_id = ?1)
           AND (?2 = 0 OR w.known = 0)
         ORDER BY w.word ASC, w.id ASC",
    )?;

    let rows = statement.query_map(params![study_id, unknown_only], |row| {
        Ok(WordRow {
            id: row.get(0)?,
            word: row.get(1)?,
            meaning: row.get(2)?,
            study_id: row.get(3)?,
            study_title: row.get(4)?,
            known: row.get(5)?,
        })
    })?;

    let mut words = Vec::new();
    for row in rows {
        words.push(row.context("failed to read word row")?);
    }
    Ok(words)
}

pub fn set_word_known(connection: &Connection, word_id: i64, known: bool) -> Result<bool> {
    let updated = connection
        .execute(
            "UPDATE words SET known = ?1 WHERE id = ?2",
            params![known, word_id],
        )
        .with_context(|| format!("failed to update word {word_id}"))?;
    Ok(updated > 0)
}

pub fn delete_word(connection: &Connection, word_id: i64) -> Result<bool> {
    let deleted = connection
        .execute("DELETE FROM words WHERE id = ?1", params![word_id])
        .with_context(|| format!("failed to delete word {word_id}"))?;
    Ok(deleted > 0)
}
