use url::Url;

use super::error::{AppError, Result};

/// Moves the user to a created paste.
pub trait Navigator {
    fn navigate(&mut self, location: &str) -> Result<()>;
}

/// Opens locations in the system browser. Relative locations returned by
/// the server (e.g. `/abc123`) are resolved against the server URL first.
pub struct BrowserNavigator {
    base: Url,
}

impl BrowserNavigator {
    pub fn new(server_url: &str) -> Result<Self> {
        Ok(Self {
            base: Url::parse(server_url)?,
        })
    }

    /// Only web locations are accepted; anything else would be handed to an
    /// arbitrary OS protocol handler.
    pub fn resolve(&self, location: &str) -> Result<Url> {
        let target = self.base.join(location.trim())?;
        if !matches!(target.scheme(), "http" | "https") {
            return Err(AppError::Http(format!(
                "refusing to open non-web location '{}'",
                target
            )));
        }
        Ok(target)
    }
}

impl Navigator for BrowserNavigator {
    fn navigate(&mut self, location: &str) -> Result<()> {
        let target = self.resolve(location)?;
        tracing::info!(url = %target, "opening paste in browser");
        open::that(target.as_str())?;
        Ok(())
    }
}
