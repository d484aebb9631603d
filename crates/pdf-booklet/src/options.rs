use crate::constants::DEFAULT_GUTTER_PT;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Booklet conversion configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BookletOptions {
    /// Width of the spine gutter reserved at the sheet center, in points
    pub gutter_pt: f32,

    /// Draw a vertical guide line at the sheet center for cutting/folding
    pub guide_line: bool,
}

impl Default for BookletOptions {
    fn default() -> Self {
        Self {
            gutter_pt: DEFAULT_GUTTER_PT,
            guide_line: true,
        }
    }
}

impl BookletOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| BookletError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| BookletError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if !self.gutter_pt.is_finite() || self.gutter_pt < 0.0 {
            return Err(BookletError::Config(format!(
                "Gutter width must be a non-negative number of points, got {}",
                self.gutter_pt
            )));
        }

        Ok(())
    }
}
