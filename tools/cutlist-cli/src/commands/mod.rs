pub mod acts;
pub mod audit;
pub mod extract;
pub mod init;
pub mod report;

use std::path::Path;

/// Write command output to a file, or to stdout when no path is given.
pub fn write_output(output: Option<&Path>, content: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .map_err(|e| anyhow::anyhow!("Failed to write {}: {e}", path.display()))?;
            eprintln!("Wrote {}", path.display());
        }
        None => print!("{content}"),
    }
    Ok(())
}
