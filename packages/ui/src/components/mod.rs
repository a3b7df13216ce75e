//! Styled form controls and the toast system, shared by every view.

mod button;
pub use button::{Button, ButtonVariant};

mod input;
pub use input::{Input, Textarea};

mod label;
pub use label::Label;

pub use dioxus_primitives::toast::{use_toast, ToastOptions, ToastProvider, Toasts};
