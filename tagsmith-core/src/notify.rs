//! Asset change notification.

use std::path::Path;

use crate::Result;

/// Tells the host editor that a generated asset changed on disk.
pub trait AssetNotifier {
    fn asset_changed(&self, path: &Path) -> Result<()>;
}

/// Records asset changes in the log.
///
/// Editors that watch the project directory pick the file up on their next
/// refresh, so nothing else needs to happen.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl AssetNotifier for LogNotifier {
    fn asset_changed(&self, path: &Path) -> Result<()> {
        tracing::info!(path = %path.display(), "asset changed");
        Ok(())
    }
}
