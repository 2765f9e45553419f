//! Visible state of the challenge modal.

use super::outcome::ChallengeOutcome;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChallengeState {
    pub password: String,
    pub invalid_password_visible: bool,
    pub hint_visible: bool,
}

impl Default for ChallengeState {
    fn default() -> Self {
        Self {
            password: String::new(),
            invalid_password_visible: false,
            hint_visible: true,
        }
    }
}

impl ChallengeState {
    /// Updates the message lines after an attempt. Only a rejected password
    /// changes what the modal shows; navigation is handled by the page.
    pub fn apply(&mut self, outcome: &ChallengeOutcome) {
        if matches!(outcome, ChallengeOutcome::InvalidPassword) {
            self.invalid_password_visible = true;
            self.hint_visible = false;
        }
    }
}
