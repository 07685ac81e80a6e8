//! Draft commands - show, save, load and discard the working draft

use anyhow::Context;

use intake::output::{OperationResult, OutputMode, StateView};

use super::Workspace;

/// Show the draft plus the last save time
pub fn status(workspace: &Workspace, mode: OutputMode) -> anyhow::Result<()> {
    let editor = workspace.draft_editor()?;
    let saved_at = workspace.saved().saved_at()?;
    StateView::full(editor.state(), saved_at).render(mode);
    Ok(())
}

/// Copy the draft into the saved contributor analysis
pub fn save(workspace: &Workspace, mode: OutputMode) -> anyhow::Result<()> {
    let draft = workspace.draft().load().context("failed to read draft")?;
    workspace
        .saved()
        .save(&draft)
        .context("failed to save contributor analysis")?;

    OperationResult::ok(format!(
        "Saved {} contribution(s) and {} contributor(s) to local storage.",
        draft.contributions.len(),
        draft.contributors.len()
    ))
    .render(mode);
    Ok(())
}

/// Replace the draft with the saved contributor analysis
pub fn load(workspace: &Workspace, mode: OutputMode) -> anyhow::Result<()> {
    let saved = workspace
        .saved()
        .load()
        .context("failed to read saved contributor analysis")?;

    workspace
        .draft()
        .save(&saved)
        .context("failed to write draft")?;

    OperationResult::ok(format!(
        "Loaded {} contribution(s) and {} contributor(s) into the draft.",
        saved.contributions.len(),
        saved.contributors.len()
    ))
    .render(mode);
    Ok(())
}

/// Discard the draft
pub fn reset(workspace: &Workspace, mode: OutputMode) -> anyhow::Result<()> {
    workspace.draft_editor()?.reset()?;
    OperationResult::ok("Draft cleared.").render(mode);
    Ok(())
}
