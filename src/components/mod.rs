//! Shared UI components exported for routes.

pub(crate) mod ui;

pub(crate) use ui::{Button, FieldMessage, Modal, Spinner, Toggle};
