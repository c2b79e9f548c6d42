use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::FonoplanError;
use crate::model::GeneratedActivity;

// Models often wrap JSON answers in markdown code fences.
static CODE_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"```json\n?|\n?```").unwrap());

/// Parse the model's raw text response into a structured activity.
///
/// Strips any surrounding code-fence markup, then requires a single JSON
/// object with every activity field present.
pub fn parse_activity(raw_text: &str) -> Result<GeneratedActivity, FonoplanError> {
    let cleaned = CODE_FENCE.replace_all(raw_text, "");
    let cleaned = cleaned.trim();

    let value: serde_json::Value = serde_json::from_str(cleaned)
        .map_err(|e| FonoplanError::UnparsableActivity(e.to_string()))?;

    if !value.is_object() {
        return Err(FonoplanError::UnparsableActivity(
            "response is not a JSON object".into(),
        ));
    }

    serde_json::from_value(value).map_err(|e| FonoplanError::UnparsableActivity(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACTIVITY_JSON: &str = r#"{
        "title": "Articulation safari",
        "smartObjective": "Produce /r/ in 8 of 10 two-syllable words within 30 minutes",
        "description": "Card-based articulation game",
        "materials": ["Picture cards", "Mirror"],
        "procedure": [
            {"name": "Warm-up", "time": 5, "description": "Mouth exercises", "color": "bg-blue-100"},
            {"name": "Development", "time": 19, "description": "Minimal pair drills", "color": "bg-green-100"},
            {"name": "Closing", "time": 6, "description": "Review and reward", "color": "bg-purple-100"}
        ],
        "evaluation": {
            "criteria": "80% accuracy on target words",
            "methods": ["Tally sheet", "Audio recording"],
            "feedback": "Immediate verbal feedback"
        },
        "adaptations": ["Shorter turns if attention drops"],
        "theoreticalFoundation": ["Minimal pairs approach"]
    }"#;

    #[test]
    fn parses_plain_json() {
        let activity = parse_activity(ACTIVITY_JSON).unwrap();
        assert_eq!(activity.title, "Articulation safari");
        assert_eq!(activity.procedure.len(), 3);
        assert_eq!(activity.total_minutes(), 30);
    }

    #[test]
    fn fenced_json_equals_plain_json() {
        let fenced = format!("```json\n{ACTIVITY_JSON}\n```");
        assert_eq!(
            parse_activity(&fenced).unwrap(),
            parse_activity(ACTIVITY_JSON).unwrap()
        );
    }

    #[test]
    fn bare_fence_is_stripped() {
        let fenced = format!("```\n{ACTIVITY_JSON}\n```");
        assert!(parse_activity(&fenced).is_ok());
    }

    #[test]
    fn non_json_text_fails() {
        let err = parse_activity("Sorry, I could not generate an activity.").unwrap_err();
        assert!(matches!(err, FonoplanError::UnparsableActivity(_)));
    }

    #[test]
    fn non_object_json_fails() {
        let err = parse_activity(r#"["not", "an", "object"]"#).unwrap_err();
        assert!(matches!(err, FonoplanError::UnparsableActivity(_)));
    }

    #[test]
    fn missing_field_fails_instead_of_defaulting() {
        let err = parse_activity(r#"{"title":"X"}"#).unwrap_err();
        assert!(matches!(err, FonoplanError::UnparsableActivity(_)));
    }
}
