//! Form state for the shortener page. The page keeps one `ShortenerState` in a
//! signal and routes every input, toggle, and reply through these methods, so
//! field/error interactions are testable without a browser.

use super::{
    error_codes::{ErrorSlot, ServerErrorRoute, route_error_code},
    types::Submission,
    validation::{Rejection, ValidatedSubmission, validate},
};

/// Tooltip on the shorten button while there is nothing to shorten.
pub const EMPTY_CONTENT_HINT: &str = "Please enter a workflow or URL to shorten";

/// Message line under a field. Hidden lines keep their text until it is
/// replaced or cleared, like `visibility: hidden`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldError {
    pub message: String,
    pub visible: bool,
}

impl FieldError {
    fn show(&mut self, message: &str) {
        self.message = message.to_string();
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }

    fn clear(&mut self) {
        self.message.clear();
        self.visible = false;
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub workflow: FieldError,
    pub vanity_url: FieldError,
    pub password: FieldError,
}

impl FieldErrors {
    pub fn get(&self, slot: ErrorSlot) -> &FieldError {
        match slot {
            ErrorSlot::Workflow => &self.workflow,
            ErrorSlot::VanityUrl => &self.vanity_url,
            ErrorSlot::Password => &self.password,
        }
    }

    fn get_mut(&mut self, slot: ErrorSlot) -> &mut FieldError {
        match slot {
            ErrorSlot::Workflow => &mut self.workflow,
            ErrorSlot::VanityUrl => &mut self.vanity_url,
            ErrorSlot::Password => &mut self.password,
        }
    }

    /// Slots currently displaying a message.
    pub fn visible(&self) -> Vec<ErrorSlot> {
        [ErrorSlot::Workflow, ErrorSlot::VanityUrl, ErrorSlot::Password]
            .into_iter()
            .filter(|slot| self.get(*slot).visible)
            .collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShortenerState {
    pub content: String,
    pub slug: String,
    pub password: String,
    pub vanity_url_enabled: bool,
    pub password_enabled: bool,
    pub errors: FieldErrors,
}

impl ShortenerState {
    pub fn set_content(&mut self, value: String) {
        self.content = value;
        self.errors.workflow.hide();
    }

    pub fn set_slug(&mut self, value: String) {
        self.slug = value;
        self.errors.vanity_url.hide();
    }

    pub fn set_password(&mut self, value: String) {
        self.password = value;
        self.errors.password.hide();
    }

    /// Shows or hides the vanity-URL input. Hiding drops its value and message.
    pub fn toggle_vanity_url(&mut self) {
        self.vanity_url_enabled = !self.vanity_url_enabled;
        if !self.vanity_url_enabled {
            self.slug.clear();
            self.errors.vanity_url.clear();
        }
    }

    /// Shows or hides the password input. Hiding drops its value and message.
    pub fn toggle_password(&mut self) {
        self.password_enabled = !self.password_enabled;
        if !self.password_enabled {
            self.password.clear();
            self.errors.password.clear();
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.content.trim().is_empty()
    }

    /// Tooltip for the shorten button, present only while it is disabled.
    pub fn submit_hint(&self) -> Option<&'static str> {
        (!self.can_submit()).then_some(EMPTY_CONTENT_HINT)
    }

    /// The payload as it would be sent right now.
    pub fn submission(&self) -> Submission {
        Submission::from_fields(&self.content, &self.slug, &self.password)
    }

    /// Validates the current fields. On rejection the matching field shows the
    /// reason and no request must be made.
    pub fn prepare(&mut self) -> Result<ValidatedSubmission, Rejection> {
        validate(self.submission()).inspect_err(|rejection| {
            self.errors.get_mut(rejection.slot()).show(rejection.message());
        })
    }

    /// Displays a backend error code in the field that owns it, if any.
    pub fn apply_error_code(&mut self, code: &str) -> ServerErrorRoute {
        let route = route_error_code(code);
        if let ServerErrorRoute::Show { slot, message } = &route {
            self.errors.get_mut(*slot).show(message);
        }
        route
    }

    /// Clears every value, toggle, and error line.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
