//! Copy shown in the success modal, chosen by content kind and password.

use super::content::ContentKind;

/// Tip line under the success message. `code` is rendered as inline code
/// between `before` and `after`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tip {
    pub before: &'static str,
    pub code: Option<&'static str>,
    pub after: &'static str,
}

impl Tip {
    const fn plain(text: &'static str) -> Self {
        Self {
            before: text,
            code: None,
            after: "",
        }
    }

    /// Tip as plain text, with the code fragment inlined.
    pub fn text(&self) -> String {
        format!("{}{}{}", self.before, self.code.unwrap_or(""), self.after)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SuccessCopy {
    pub message: &'static str,
    pub tip: Tip,
}

impl SuccessCopy {
    pub fn for_shortlink(kind: ContentKind, has_password: bool) -> Self {
        match (kind, has_password) {
            (ContentKind::Url, false) => Self {
                message: "Your shortlink has been created.",
                tip: Tip::plain("This will permanently redirect to your URL."),
            },
            (ContentKind::Workflow, false) => Self {
                message: "This shortlink will serve your workflow JSON.",
                tip: Tip {
                    before: "Append ",
                    code: Some("/view"),
                    after: " to display on canvas.",
                },
            },
            (ContentKind::Url, true) => Self {
                message: "Your password-protected shortlink has been created.",
                tip: Tip::plain("Visiting this URL will require your password."),
            },
            (ContentKind::Workflow, true) => Self {
                message: "Your password-protected shortlink has been created.",
                tip: Tip::plain("Accessing this workflow will require your password."),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SuccessCopy;
    use crate::features::shortener::content::ContentKind;

    #[test]
    fn public_url() {
        let copy = SuccessCopy::for_shortlink(ContentKind::Url, false);
        assert_eq!(copy.message, "Your shortlink has been created.");
        assert_eq!(copy.tip.text(), "This will permanently redirect to your URL.");
    }

    #[test]
    fn public_workflow_mentions_the_view_suffix() {
        let copy = SuccessCopy::for_shortlink(ContentKind::Workflow, false);
        assert_eq!(copy.message, "This shortlink will serve your workflow JSON.");
        assert_eq!(copy.tip.code, Some("/view"));
        assert_eq!(copy.tip.text(), "Append /view to display on canvas.");
    }

    #[test]
    fn protected_variants_share_the_message_but_not_the_tip() {
        let url = SuccessCopy::for_shortlink(ContentKind::Url, true);
        let workflow = SuccessCopy::for_shortlink(ContentKind::Workflow, true);
        assert_eq!(url.message, workflow.message);
        assert_eq!(url.message, "Your password-protected shortlink has been created.");
        assert_eq!(url.tip.text(), "Visiting this URL will require your password.");
        assert_eq!(
            workflow.tip.text(),
            "Accessing this workflow will require your password."
        );
    }
}
