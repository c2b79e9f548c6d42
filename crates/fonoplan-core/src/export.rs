use std::fmt::Write;

use crate::model::GeneratedActivity;

/// Render the activity as a plain-text document for download.
///
/// Deterministic given the activity data; no timestamps or environment
/// details are embedded.
pub fn plain_text(activity: &GeneratedActivity) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "SPEECH THERAPY ACTIVITY");
    let _ = writeln!(out, "=======================");
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", activity.title);
    let _ = writeln!(out);
    let _ = writeln!(out, "SMART OBJECTIVE:");
    let _ = writeln!(out, "{}", activity.smart_objective);
    let _ = writeln!(out);
    let _ = writeln!(out, "DESCRIPTION:");
    let _ = writeln!(out, "{}", activity.description);
    let _ = writeln!(out);

    let _ = writeln!(out, "MATERIALS:");
    for material in &activity.materials {
        let _ = writeln!(out, "- {material}");
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "PROCEDURE:");
    for phase in &activity.procedure {
        let _ = writeln!(out, "{} ({} min):", phase.name, phase.minutes);
        let _ = writeln!(out, "{}", phase.description);
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "EVALUATION:");
    let _ = writeln!(out, "Criteria: {}", activity.evaluation.criteria);
    let _ = writeln!(out);
    let _ = writeln!(out, "Methods:");
    for method in &activity.evaluation.methods {
        let _ = writeln!(out, "- {method}");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Feedback: {}", activity.evaluation.feedback);
    let _ = writeln!(out);

    let _ = writeln!(out, "ADAPTATIONS:");
    for adaptation in &activity.adaptations {
        let _ = writeln!(out, "- {adaptation}");
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "THEORETICAL FOUNDATION:");
    for foundation in &activity.theoretical_foundation {
        let _ = writeln!(out, "- {foundation}");
    }

    out
}
