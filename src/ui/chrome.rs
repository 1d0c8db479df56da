/// Whether the chat panel or the floating launcher is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShellVisibility {
    #[default]
    Visible,
    Collapsed,
}

/// Presentation-only widget state; nothing here outlives the window.
#[derive(Debug, Default)]
pub struct ChromeState {
    visibility: ShellVisibility,
    confirm_clear: bool,
}

impl ChromeState {
    pub fn is_collapsed(&self) -> bool {
        self.visibility == ShellVisibility::Collapsed
    }

    pub fn collapse(&mut self) {
        self.visibility = ShellVisibility::Collapsed;
        self.confirm_clear = false;
    }

    pub fn expand(&mut self) {
        self.visibility = ShellVisibility::Visible;
    }

    pub fn request_clear(&mut self) {
        self.confirm_clear = true;
    }

    pub fn is_confirming_clear(&self) -> bool {
        self.confirm_clear
    }

    /// Close the confirmation prompt. True only if it was open and the user said yes.
    pub fn resolve_clear(&mut self, confirmed: bool) -> bool {
        let was_open = self.confirm_clear;
        self.confirm_clear = false;
        was_open && confirmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_visible_and_toggles() {
        let mut chrome = ChromeState::default();
        assert_eq!(chrome.visibility, ShellVisibility::Visible);

        chrome.collapse();
        assert!(chrome.is_collapsed());

        chrome.expand();
        assert!(!chrome.is_collapsed());
    }

    #[test]
    fn clear_needs_an_open_prompt_and_a_yes() {
        let mut chrome = ChromeState::default();
        assert!(!chrome.resolve_clear(true));

        chrome.request_clear();
        assert!(chrome.is_confirming_clear());
        assert!(!chrome.resolve_clear(false));
        assert!(!chrome.is_confirming_clear());

        chrome.request_clear();
        assert!(chrome.resolve_clear(true));
    }

    #[test]
    fn collapsing_dismisses_the_prompt() {
        let mut chrome = ChromeState::default();
        chrome.request_clear();
        chrome.collapse();
        assert!(!chrome.is_confirming_clear());
    }
}
