use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(not(target_arch = "wasm32"))]
use crate::errors::CoreError;

/// A rendered chart image.
///
/// Every render call produces a fresh artifact with its own id and file
/// name, so concurrent requests never overwrite each other's charts. The
/// SVG is self-contained; callers can embed it inline or persist it with
/// [`ChartArtifact::write_to_dir`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartArtifact {
    /// Unique identifier for this render
    pub id: Uuid,

    /// Suggested file name, e.g. "loan_pie_chart_<id>.svg"
    pub file_name: String,

    /// The SVG document
    pub svg: String,
}

impl ChartArtifact {
    pub(crate) fn new(kind: &str, svg: String) -> Self {
        let id = Uuid::new_v4();
        Self {
            file_name: format!("{kind}_{id}.svg"),
            id,
            svg,
        }
    }

    /// The image bytes, for embedding or HTTP responses.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.svg.as_bytes()
    }

    /// Write the artifact under `dir` using its unique file name.
    /// Returns the full path of the written file.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn write_to_dir(&self, dir: &std::path::Path) -> Result<std::path::PathBuf, CoreError> {
        let path = dir.join(&self.file_name);
        std::fs::write(&path, self.svg.as_bytes())?;
        tracing::debug!(path = %path.display(), "chart artifact written");
        Ok(path)
    }
}
