//! Report prompt
//!
//! Renders the questionnaire and contributor analysis into the single prompt
//! sent to the report generator.

use std::fmt::Write as _;

use crate::core::models::{PatentApplication, Snapshot};

/// System instruction sent with every report request
pub const SYSTEM_PROMPT: &str = "You are a patent expert assistant providing insights on \
     patent ability and suggestions for patent applications.";

const INTRO: &str = "Based on the following information about a potential patent application, \
     provide a comprehensive assessment of the invention's patentability and suggestions for \
     the application process:";

const REQUESTS: &str = "Please provide:
1. An assessment of the invention's patentability based on the provided information.
2. Potential challenges or concerns regarding the patent application.
3. Suggestions for strengthening the patent application.
4. Recommendations for next steps in the patent application process.
5. Any additional insights or considerations based on the provided information.

Please structure your response in clear sections with headings for each of the above points.";

const fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

/// Build the user prompt for a report
///
/// The contributor analysis section is only included when the snapshot has
/// at least one record.
#[must_use]
pub fn build_prompt(application: &PatentApplication, snapshot: &Snapshot) -> String {
    let a = application;
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{INTRO}\n");
    let _ = writeln!(out, "1. Invention Stage: {}", a.invention_stage);
    let _ = writeln!(out, "2. Prior Art Search: {}", a.prior_art_search);
    let _ = writeln!(out, "3. Novelty: {}", a.novelty);
    let _ = writeln!(out, "4. Public Disclosure: {}", yes_no(a.public_disclosure));
    let _ = writeln!(out, "5. Patent Goals: {}", a.goals_summary());
    let _ = writeln!(out, "6. Protection Regions: {}", a.protection_regions);
    let _ = writeln!(out, "7. Timeline: {}", a.timeline);
    let _ = writeln!(out, "8. Budget: {}", a.budget);
    let _ = writeln!(
        out,
        "9. Disclosure Process Familiarity: {}",
        a.disclosure_process_familiarity
    );
    let _ = writeln!(
        out,
        "10. Need Disclosure Explanation: {}",
        yes_no(a.need_disclosure_explanation)
    );
    let _ = writeln!(
        out,
        "11. Need Disclosure Assistance: {}",
        yes_no(a.need_disclosure_assistance)
    );
    let _ = writeln!(
        out,
        "12. Need Confidentiality Agreement: {}",
        yes_no(a.need_confidentiality_agreement)
    );

    if !snapshot.is_empty() {
        let _ = writeln!(out, "\nContributor Analysis:");
        for (i, c) in snapshot.contributions.iter().enumerate() {
            let _ = writeln!(out, "- Contribution {}: {}", i + 1, c.description);
        }
        for (i, c) in snapshot.contributors.iter().enumerate() {
            let _ = writeln!(
                out,
                "- Contributor {}: {} ({}): {}",
                i + 1,
                c.name,
                c.expertise,
                c.contribution
            );
        }
    }

    let _ = write!(out, "\n{REQUESTS}");
    out
}
