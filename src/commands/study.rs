use anyhow::{Result, bail};
use tracing::info;

use crate::cli::{StudyAction, StudyArgs};
use crate::store::{delete_study, get_study, list_studies, open_store, update_study_step};
use crate::util::print_json_pretty;

pub fn run(args: StudyArgs) -> Result<()> {
    let mut connection = open_store(&args.db_path)?;

    match args.action {
        StudyAction::List => {
            let studies = list_studies(&connection)?;
            info!(path = %args.db_path.display(), studies = studies.len(), "listed studies");
            print_json_pretty(&studies)
        }
        StudyAction::Show { study_id } => match get_study(&connection, study_id)? {
            Some(study) => print_json_pretty(&study),
            None => bail!("study {} not found in {}", study_id, args.db_path.display()),
        },
        StudyAction::Step { study_id, step } => {
            if !update_study_step(&connection, study_id, step)? {
                bail!("study {} not found in {}", study_id, args.db_path.display());
            }
            info!(study_id, step, "updated study progress");
            Ok(())
        }
        StudyAction::Delete { study_id } => {
            if !delete_study(&mut connection, study_id)? {
                bail!("study {} not found in {}", study_id, args.db_path.display());
            }
            Ok(())
        }
    }
}
