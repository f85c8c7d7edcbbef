use tracing::debug;

/// Open/closed flag for the sidebar panel.
///
/// Starts closed. Only user input changes it: a toggle request flips it;
/// menu activation, overlay dismissal and `Esc` force it closed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PanelToggle {
    is_open: bool,
}

impl PanelToggle {
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Flips the panel.
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
        debug!(open = self.is_open, "sidebar toggled");
    }

    /// Forces the panel closed. Returns `true` if this changed the state.
    pub fn close(&mut self) -> bool {
        let was_open = std::mem::replace(&mut self.is_open, false);
        if was_open {
            debug!("sidebar closed");
        }
        was_open
    }
}
