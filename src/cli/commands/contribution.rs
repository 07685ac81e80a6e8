//! Contribution command - edit the contributions list

use intake::core::models::{Collection, Field};
use intake::core::services::Action;
use intake::output::{OperationResult, OutputMode, StateView};

use super::{Workspace, position};
use crate::cli::app::ContributionAction;

const LIST: Collection = Collection::Contributions;

/// Handle contribution subcommands
pub fn contribution(
    workspace: &Workspace,
    action: ContributionAction,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let mut editor = workspace.draft_editor()?;

    let message = match action {
        ContributionAction::List => {
            StateView::only(editor.state(), LIST).render(mode);
            return Ok(());
        },
        ContributionAction::Add { description } => {
            editor.apply(Action::Append(LIST))?;
            let number = editor.state().len(LIST);
            if let Some(description) = description {
                editor.apply(Action::Edit {
                    collection: LIST,
                    position: number - 1,
                    field: Field::Description,
                    value: description,
                })?;
            }
            format!("Added contribution {number}")
        },
        ContributionAction::Edit {
            number,
            description,
        } => {
            editor.apply(Action::Edit {
                collection: LIST,
                position: position(number)?,
                field: Field::Description,
                value: description,
            })?;
            format!("Updated contribution {number}")
        },
        ContributionAction::Remove { number } => {
            editor.apply(Action::Remove {
                collection: LIST,
                position: position(number)?,
            })?;
            format!("Removed contribution {number}")
        },
    };

    editor.save()?;
    OperationResult::ok(message).render(mode);
    Ok(())
}
