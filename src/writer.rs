use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

/// Default output location, relative to the module under test.
pub const DEFAULT_OUTPUT: &str = "spec/classes/init_spec.rb";

/// Write `content` to `path`, creating parent directories and replacing any
/// existing file.
pub fn write_spec(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), bytes = content.len(), "spec written");
    Ok(())
}
