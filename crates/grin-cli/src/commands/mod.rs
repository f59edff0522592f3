pub mod generate;
pub mod havel_hakimi;
pub mod invariants;

use std::error::Error;
use std::fs;
use std::path::Path;

/// Writes `contents` to `out`, creating parent directories, or prints it
/// when no path is given.
pub(crate) fn emit(contents: &str, out: Option<&Path>) -> Result<(), Box<dyn Error>> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(path, contents)?;
        }
        None => println!("{contents}"),
    }
    Ok(())
}
