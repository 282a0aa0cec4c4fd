//! Navigation seam between the session layer and whatever renders pages.

/// Performs a full navigation to a portal path.
///
/// In a browser this replaces the location; the CLI prints the destination.
/// Implementations must not block.
pub trait Navigator: Send + Sync + std::fmt::Debug + 'static {
    /// Navigate to `path`, discarding the current page.
    fn navigate(&self, path: &str);
}
