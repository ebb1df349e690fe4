use std::io::ErrorKind;
use std::path::Path;

/// Create `dir` and any missing parents.
///
/// Losing a race with another process that creates the directory first is fine, any other failure
/// is returned.
pub fn ensure_dir(dir: &Path) -> std::io::Result<()> {
    if dir.is_dir() {
        return Ok(());
    }

    match std::fs::create_dir_all(dir) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists && dir.is_dir() => {
            log::trace!("Directory {} was created concurrently", dir.display());
            Ok(())
        }
        Err(e) => Err(e),
    }
}
