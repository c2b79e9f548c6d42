use std::path::PathBuf;

pub fn run(session_file: PathBuf, refs: Vec<PathBuf>) -> Result<(), fonoplan_core::error::FonoplanError> {
    let request = super::load_request(&session_file, &refs)?;
    println!("{}", fonoplan_core::prompt::build_prompt(&request));
    Ok(())
}
