use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionType {
    Individual,
    Group,
    Home,
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionType::Individual => write!(f, "individual"),
            SessionType::Group => write!(f, "group"),
            SessionType::Home => write!(f, "home"),
        }
    }
}

/// One uploaded reference document after text extraction.
///
/// `extraction_succeeded` is false when the extractor fell back to a
/// placeholder message instead of recovered text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedReference {
    pub source_name: String,
    pub extracted_text: String,
    pub extraction_succeeded: bool,
}

/// The full set of session parameters for one generation attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRequest {
    /// Patient description (age and clinical context).
    pub description: String,
    /// Specific therapeutic objective.
    pub objective: String,
    pub duration_minutes: u32,
    pub session_type: SessionType,
    #[serde(default)]
    pub pediatric: bool,
    #[serde(default)]
    pub additional_context: String,
    #[serde(default)]
    pub references: Vec<UploadedReference>,
}

/// Structured activity plan as returned by the generation API.
///
/// All fields except the cosmetic `display_tag` are required; a response
/// missing any of them fails deserialization and thus the attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedActivity {
    pub title: String,
    pub smart_objective: String,
    pub description: String,
    pub materials: Vec<String>,
    pub procedure: Vec<ProcedurePhase>,
    pub evaluation: Evaluation,
    pub adaptations: Vec<String>,
    pub theoretical_foundation: Vec<String>,
}

impl GeneratedActivity {
    /// Sum of the procedure phase durations. Should land close to the
    /// requested session duration; the model is asked, not forced, to comply.
    /// Phase times come from an external response, so the sum saturates
    /// rather than overflowing.
    pub fn total_minutes(&self) -> u32 {
        self.procedure
            .iter()
            .map(|p| p.minutes)
            .fold(0u32, u32::saturating_add)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcedurePhase {
    pub name: String,
    /// Wire name "time": duration of this phase in minutes.
    #[serde(rename = "time")]
    pub minutes: u32,
    pub description: String,
    /// Wire name "color": presentation hint for the rendering surface.
    #[serde(rename = "color", default)]
    pub display_tag: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub criteria: String,
    pub methods: Vec<String>,
    pub feedback: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_type_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&SessionType::Individual).unwrap(),
            "\"individual\""
        );
        let t: SessionType = serde_json::from_str("\"home\"").unwrap();
        assert_eq!(t, SessionType::Home);
    }

    #[test]
    fn procedure_phase_wire_names() {
        let json = r#"{"name":"Warm-up","time":5,"description":"Breathing games","color":"bg-blue-100"}"#;
        let phase: ProcedurePhase = serde_json::from_str(json).unwrap();
        assert_eq!(phase.minutes, 5);
        assert_eq!(phase.display_tag, "bg-blue-100");

        let back = serde_json::to_value(&phase).unwrap();
        assert!(back.get("time").is_some());
        assert!(back.get("color").is_some());
        assert!(back.get("minutes").is_none());
    }

    #[test]
    fn display_tag_is_optional_on_the_wire() {
        let json = r#"{"name":"Closing","time":6,"description":"Review"}"#;
        let phase: ProcedurePhase = serde_json::from_str(json).unwrap();
        assert_eq!(phase.display_tag, "");
    }

    #[test]
    fn total_minutes_sums_phases() {
        let activity = GeneratedActivity {
            title: "T".into(),
            smart_objective: "O".into(),
            description: "D".into(),
            materials: vec![],
            procedure: vec![
                ProcedurePhase {
                    name: "a".into(),
                    minutes: 5,
                    description: String::new(),
                    display_tag: String::new(),
                },
                ProcedurePhase {
                    name: "b".into(),
                    minutes: 20,
                    description: String::new(),
                    display_tag: String::new(),
                },
            ],
            evaluation: Evaluation {
                criteria: String::new(),
                methods: vec![],
                feedback: String::new(),
            },
            adaptations: vec![],
            theoretical_foundation: vec![],
        };
        assert_eq!(activity.total_minutes(), 25);
    }

    #[test]
    fn total_minutes_saturates_on_absurd_phase_times() {
        let phase = |minutes| ProcedurePhase {
            name: "p".into(),
            minutes,
            description: String::new(),
            display_tag: String::new(),
        };
        let activity = GeneratedActivity {
            title: "T".into(),
            smart_objective: "O".into(),
            description: "D".into(),
            materials: vec![],
            procedure: vec![phase(u32::MAX), phase(u32::MAX)],
            evaluation: Evaluation {
                criteria: String::new(),
                methods: vec![],
                feedback: String::new(),
            },
            adaptations: vec![],
            theoretical_foundation: vec![],
        };
        assert_eq!(activity.total_minutes(), u32::MAX);
    }
}
