use fonoplan_core::error::FonoplanError;
use fonoplan_core::extraction::Extraction;
use fonoplan_core::model::GeneratedActivity;

pub fn print_activity(activity: &GeneratedActivity) -> Result<(), FonoplanError> {
    let json = serde_json::to_string_pretty(activity)?;
    println!("{json}");
    Ok(())
}

pub fn print_extraction(extraction: &Extraction) -> Result<(), FonoplanError> {
    let json = serde_json::to_string_pretty(extraction)?;
    println!("{json}");
    Ok(())
}
