use fonoplan_core::extraction::content_stream::ContentStreamExtractor;
use fonoplan_core::extraction::TextExtractor;
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: PathBuf,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), fonoplan_core::error::FonoplanError> {
    let bytes = std::fs::read(&input_file)?;
    let extractor = ContentStreamExtractor::new();
    let extraction = extractor.extract(&bytes);

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&extraction)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Extracted {} character(s), written to {}",
                extraction.text.len(),
                path.display()
            );
            if !extraction.succeeded {
                eprintln!("  warning: no readable text operators found");
            }
        }
        None => match output_format {
            "json" => output::json::print_extraction(&extraction)?,
            _ => {
                println!("{}", extraction.text);
                if !extraction.succeeded {
                    eprintln!(
                        "warning: no readable text operators found in {}",
                        input_file.display()
                    );
                }
            }
        },
    }

    Ok(())
}
