use anyhow::{Result, bail};
use tracing::info;

use crate::cli::{VocabAction, VocabArgs};
use crate::store::{
    add_word, delete_word, list_words, open_store, set_word_known, set_word_meaning,
};
use crate::util::print_json_pretty;

pub fn run(args: VocabArgs) -> Result<()> {
    let connection = open_store(&args.db_path)?;

    match args.action {
        VocabAction::List {
            study_id,
            unknown_only,
        } => {
            let words = list_words(&connection, study_id, unknown_only)?;
            info!(
                path = %args.db_path.display(),
                words = words.len(),
                unknown_only,
                "listed vocabulary"
            );
            print_json_pretty(&words)
        }
        VocabAction::Add {
            word,
            meaning,
            study_id,
        } => {
            let word_id = add_word(&connection, &word, &meaning, study_id)?;
            info!(word_id, word = %word, "stored word");
            Ok(())
        }
        VocabAction::Meaning { word_id, meaning } => {
            if !set_word_meaning(&connection, word_id, &meaning)? {
                bail!("word {} not found in {}", word_id, args.db_path.display());
            }
            info!(word_id, "updated meaning");
            Ok(())
        }
        VocabAction::Mark { word_id, known } => {
            if !set_word_known(&connection, word_id, known)? {
                bail!("word {} not found in {}", word_id, args.db_path.display());
            }
            info!(word_id, known, "updated word");
            Ok(())
        }
        VocabAction::Delete { word_id } => {
            if !delete_word(&connection, word_id)? {
                bail!("word {} not found in {}", word_id, args.db_path.display());
            }
            info!(word_id, "deleted word");
            Ok(())
        }
    }
}
