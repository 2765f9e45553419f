//! Open/close phases for modals that stay mounted and animate through CSS.
//!
//! A modal is displayed (`display: flex`) one frame before it receives the
//! `show` class so the opening transition has a starting point to animate from.
//! Closing removes `show` first and keeps the modal displayed until the element
//! reports the end of its transition.

/// Lifecycle of a mounted modal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalPhase {
    #[default]
    Hidden,
    /// Displayed, waiting one frame before the `show` class is applied.
    Opening,
    Shown,
    /// `show` removed, waiting for `transitionend`.
    Closing,
}

impl ModalPhase {
    /// Starts opening. Reopening a closing modal skips straight back to `Opening`.
    #[must_use]
    pub fn open(self) -> Self {
        match self {
            ModalPhase::Hidden | ModalPhase::Closing => ModalPhase::Opening,
            other => other,
        }
    }

    /// Applies the `show` class once layout has been flushed.
    #[must_use]
    pub fn frame_elapsed(self) -> Self {
        match self {
            ModalPhase::Opening => ModalPhase::Shown,
            other => other,
        }
    }

    /// Starts closing. A modal that never got `show` has no transition to wait
    /// for and hides immediately.
    #[must_use]
    pub fn close(self) -> Self {
        match self {
            ModalPhase::Opening => ModalPhase::Hidden,
            ModalPhase::Shown => ModalPhase::Closing,
            other => other,
        }
    }

    /// Finishes a close once the fade-out transition reports completion.
    #[must_use]
    pub fn transition_finished(self) -> Self {
        match self {
            ModalPhase::Closing => ModalPhase::Hidden,
            other => other,
        }
    }

    /// Whether the element should take part in layout (`display: flex`).
    pub fn is_displayed(self) -> bool {
        self != ModalPhase::Hidden
    }

    /// Whether the `show` class is applied.
    pub fn is_visible(self) -> bool {
        self == ModalPhase::Shown
    }

    pub fn display_style(self) -> &'static str {
        if self.is_displayed() { "flex" } else { "none" }
    }
}

#[cfg(test)]
mod tests {
    use super::ModalPhase;

    #[test]
    fn full_cycle_walks_every_phase() {
        let phase = ModalPhase::default();
        assert_eq!(phase, ModalPhase::Hidden);
        assert!(!phase.is_displayed());

        let phase = phase.open();
        assert_eq!(phase, ModalPhase::Opening);
        assert!(phase.is_displayed());
        assert!(!phase.is_visible());

        let phase = phase.frame_elapsed();
        assert_eq!(phase, ModalPhase::Shown);
        assert!(phase.is_visible());

        let phase = phase.close();
        assert_eq!(phase, ModalPhase::Closing);
        assert!(phase.is_displayed());
        assert!(!phase.is_visible());

        let phase = phase.transition_finished();
        assert_eq!(phase, ModalPhase::Hidden);
        assert_eq!(phase.display_style(), "none");
    }

    #[test]
    fn invalid_transitions_are_ignored() {
        assert_eq!(ModalPhase::Hidden.close(), ModalPhase::Hidden);
        assert_eq!(ModalPhase::Hidden.frame_elapsed(), ModalPhase::Hidden);
        assert_eq!(ModalPhase::Shown.open(), ModalPhase::Shown);
        assert_eq!(ModalPhase::Shown.transition_finished(), ModalPhase::Shown);
        assert_eq!(ModalPhase::Opening.transition_finished(), ModalPhase::Opening);
    }

    #[test]
    fn stale_frame_after_close_does_not_reshow() {
        let phase = ModalPhase::Hidden.open().close();
        assert_eq!(phase, ModalPhase::Hidden);
        assert_eq!(phase.frame_elapsed(), ModalPhase::Hidden);

        let closing = ModalPhase::Shown.close();
        assert_eq!(closing.frame_elapsed(), ModalPhase::Closing);
    }

    #[test]
    fn reopening_while_closing_restarts_the_open() {
        let phase = ModalPhase::Shown.close().open();
        assert_eq!(phase, ModalPhase::Opening);
        assert_eq!(phase.frame_elapsed(), ModalPhase::Shown);
    }
}
