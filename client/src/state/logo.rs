#[cfg(test)]
#[path = "logo_test.rs"]
mod logo_test;

/// Display state for the brand logo.
///
/// Starts out showing the image. Once the image fails to load the state is
/// latched to the fallback badge for the rest of the page view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LogoState {
    broken: bool,
}

impl LogoState {
    pub fn is_broken(self) -> bool {
        self.broken
    }

    /// Latch the fallback. Returns `true` only on the transition, so signal
    /// subscribers are notified at most once.
    pub fn mark_broken(&mut self) -> bool {
        if self.broken {
            return false;
        }
        self.broken = true;
        true
    }
}
