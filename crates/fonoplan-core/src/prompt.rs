use std::fmt::Write;

use crate::model::SessionRequest;

/// Build the generation prompt for one session request.
///
/// Pure and deterministic: identical requests produce byte-identical
/// prompts. References are labeled by ordinal position and source name so
/// the model can cite them.
pub fn build_prompt(request: &SessionRequest) -> String {
    let mut references_text = String::new();
    for (i, reference) in request.references.iter().enumerate() {
        let _ = write!(
            references_text,
            "\n--- Reference {}: {} ---\n{}",
            i + 1,
            reference.source_name,
            reference.extracted_text
        );
    }

    let pediatric_note = if request.pediatric {
        "Yes - use playful, adapted language"
    } else {
        "No - use standard professional language"
    };

    let additional_context = if request.additional_context.is_empty() {
        "Not specified"
    } else {
        request.additional_context.as_str()
    };

    let references_section = if references_text.is_empty() {
        String::new()
    } else {
        format!("SCIENTIFIC REFERENCES TO GROUND THE ACTIVITY:\n{references_text}\n\n")
    };

    format!(
        r#"You are an expert speech-language therapist who designs therapeutic activities. Generate a personalized activity based on the following parameters:

PATIENT INFORMATION:
{description}

SPECIFIC OBJECTIVE:
{objective}

DURATION: {duration} minutes
SESSION TYPE: {session_type}
PEDIATRIC MODE: {pediatric_note}

ADDITIONAL CONTEXT:
{additional_context}

{references_section}FORMAT INSTRUCTIONS:
Return the answer as valid JSON with the following structure:

{{
  "title": "Activity title",
  "smartObjective": "Complete and specific SMART objective",
  "description": "Detailed description of the activity",
  "materials": ["List", "of", "required", "materials"],
  "procedure": [
    {{
      "name": "Phase name",
      "time": number_of_minutes,
      "description": "Detailed description of this phase",
      "color": "bg-blue-100 border-blue-200 text-blue-800"
    }}
  ],
  "evaluation": {{
    "criteria": "Specific evaluation criteria",
    "methods": ["Evaluation", "methods"],
    "feedback": "Type of feedback to provide"
  }},
  "adaptations": ["List", "of", "specific", "adaptations"],
  "theoreticalFoundation": ["Theoretical", "and", "scientific", "bases"]
}}

SPECIFIC REQUIREMENTS:
1. Use the SMART methodology for the objective
2. Integrate principles from Bloom's taxonomy
3. Use 3 procedure phases (warm-up 15%, development 65%, closing 20%)
4. If pediatric, use motivating and playful language
5. If scientific references are provided, work them into the theoretical foundation
6. Adapt materials and strategies to the provided context
7. Make sure the phase durations add up to the requested total

Generate a professional, creative, evidence-based activity."#,
        description = request.description,
        objective = request.objective,
        duration = request.duration_minutes,
        session_type = request.session_type,
    )
}
