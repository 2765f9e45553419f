mod button;
mod field_message;
mod modal;
mod spinner;
mod toggle;

pub(crate) use button::Button;
pub(crate) use field_message::FieldMessage;
pub(crate) use modal::Modal;
pub(crate) use spinner::Spinner;
pub(crate) use toggle::Toggle;
