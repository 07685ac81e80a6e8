//! Contributor command - edit the contributors list

use intake::core::models::{Collection, Field};
use intake::core::services::Action;
use intake::output::{OperationResult, OutputMode, StateView};

use super::{Workspace, position};
use crate::cli::app::ContributorAction;

const LIST: Collection = Collection::Contributors;

/// Handle contributor subcommands
pub fn contributor(
    workspace: &Workspace,
    action: ContributorAction,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let mut editor = workspace.draft_editor()?;

    let message = match action {
        ContributorAction::List => {
            StateView::only(editor.state(), LIST).render(mode);
            return Ok(());
        },
        ContributorAction::Add {
            name,
            expertise,
            contribution,
        } => {
            editor.apply(Action::Append(LIST))?;
            let number = editor.state().len(LIST);
            let values = Field::CONTRIBUTOR_FIELDS.into_iter().zip([name, expertise, contribution]);
            for (field, value) in values {
                if let Some(value) = value {
                    editor.apply(Action::Edit {
                        collection: LIST,
                        position: number - 1,
                        field,
                        value,
                    })?;
                }
            }
            format!("Added contributor {number}")
        },
        ContributorAction::Edit {
            number,
            field,
            value,
        } => {
            let field: Field = field.parse().map_err(|e: String| anyhow::anyhow!(e))?;
            editor.apply(Action::Edit {
                collection: LIST,
                position: position(number)?,
                field,
                value,
            })?;
            format!("Updated contributor {number} {field}")
        },
        ContributorAction::Remove { number } => {
            editor.apply(Action::Remove {
                collection: LIST,
                position: position(number)?,
            })?;
            format!("Removed contributor {number}")
        },
    };

    editor.save()?;
    OperationResult::ok(message).render(mode);
    Ok(())
}
