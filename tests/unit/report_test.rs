//! Tests for prompt building and application submission

use intake::core::models::{PatentApplication, Snapshot};
use intake::core::services::report::{EMPTY_REPORT, FAILURE_MESSAGE, SUCCESS_MESSAGE};
use intake::core::services::{SYSTEM_PROMPT, build_prompt, submit_application};

use crate::common::{CannedGenerator, sample_application, sample_snapshot};

// =============================================================================
// PROMPT
// =============================================================================

#[test]
fn test_prompt_renders_answers() {
    let prompt = build_prompt(&sample_application(), &Snapshot::empty());
    assert!(prompt.contains("1. Invention Stage: Working prototype"));
    assert!(prompt.contains("4. Public Disclosure: No"));
    assert!(prompt.contains("5. Patent Goals: Licensing, Defensive (Other: Investor pitch)"));
    assert!(prompt.contains("6. Protection Regions: US, EU"));
    assert!(prompt.contains("10. Need Disclosure Explanation: Yes"));
    assert!(prompt.contains("11. Need Disclosure Assistance: No"));
    assert!(prompt.contains("12. Need Confidentiality Agreement: Yes"));
}

#[test]
fn test_prompt_without_other_goal_has_no_suffix() {
    let application = PatentApplication {
        patent_goals: vec!["Licensing".to_string()],
        ..PatentApplication::default()
    };
    let prompt = build_prompt(&application, &Snapshot::empty());
    assert!(prompt.contains("5. Patent Goals: Licensing\n"));
    assert!(!prompt.contains("(Other:"));
}

#[test]
fn test_prompt_includes_contributor_analysis() {
    let prompt = build_prompt(&sample_application(), &sample_snapshot());
    assert!(prompt.contains("Contributor Analysis:"));
    assert!(prompt.contains("- Contribution 2: Ran the bench tests"));
    assert!(prompt.contains("- Contributor 2: Grace (Compilers): Toolchain"));
}

// =============================================================================
// SUBMISSION
// =============================================================================

#[tokio::test]
async fn test_submission_success() {
    let generator = CannedGenerator::answering(Some("## Assessment\nLooks novel."));
    let submission =
        submit_application(&generator, &sample_application(), &sample_snapshot()).await;

    assert!(submission.success);
    assert_eq!(submission.message, SUCCESS_MESSAGE);
    assert_eq!(submission.report.as_deref(), Some("## Assessment\nLooks novel."));

    let seen = generator.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0, SYSTEM_PROMPT);
    assert!(seen[0].1.contains("Self-calibrating sensor"));
}

#[tokio::test]
async fn test_submission_with_empty_answer() {
    let generator = CannedGenerator::answering(None);
    let submission =
        submit_application(&generator, &sample_application(), &Snapshot::empty()).await;
    assert!(submission.success);
    assert_eq!(submission.report.as_deref(), Some(EMPTY_REPORT));
}

#[tokio::test]
async fn test_submission_failure() {
    let generator = CannedGenerator::failing("connection refused");
    let submission =
        submit_application(&generator, &sample_application(), &Snapshot::empty()).await;
    assert!(!submission.success);
    assert_eq!(submission.message, FAILURE_MESSAGE);
    assert_eq!(submission.report, None);
}
