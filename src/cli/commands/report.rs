//! Report commands - build the prompt and submit an application

use std::fs;
use std::path::Path;

use anyhow::Context;

use intake::core::models::PatentApplication;
use intake::core::services::build_prompt;
use intake::output::OutputMode;

use super::Workspace;

fn read_form(path: &Path) -> anyhow::Result<PatentApplication> {
    let content =
        fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?;
    PatentApplication::from_toml(&content)
        .with_context(|| format!("invalid application form {}", path.display()))
}

/// Print the prompt that a report request would send
pub fn prompt(workspace: &Workspace, form: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let application = read_form(form)?;
    let snapshot = workspace.saved().load()?;
    let prompt = build_prompt(&application, &snapshot);

    if mode == OutputMode::Json {
        println!(
            "{}",
            serde_json::json!({
                "system": intake::core::services::SYSTEM_PROMPT,
                "prompt": prompt,
            })
        );
    } else {
        println!("{prompt}");
    }
    Ok(())
}

/// Submit the application with the saved contributor analysis
#[cfg(feature = "llm")]
pub fn report(workspace: &Workspace, form: &Path, mode: OutputMode) -> anyhow::Result<()> {
    use intake::adapters::groq::GroqClient;
    use intake::core::services::submit_application;
    use intake::output::render_submission;

    let application = read_form(form)?;
    let snapshot = workspace.saved().load()?;
    let client = GroqClient::from_env(&workspace.config().report);

    let runtime = tokio::runtime::Runtime::new()?;
    let submission = runtime.block_on(submit_application(&client, &application, &snapshot));
    render_submission(&submission, mode);

    if submission.success {
        Ok(())
    } else {
        anyhow::bail!("report generation failed")
    }
}
