mod confirm;
mod terminal;

pub(in crate::features::ui) use confirm::draw_confirm_delete_popup;
pub(in crate::features::ui) use terminal::{draw_terminal_too_small, too_small};
