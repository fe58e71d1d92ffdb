mod form;
mod format;
mod header;
mod menu;
mod overlays;
mod saved;
mod session;

pub(super) use form::draw_form;
pub(super) use header::{BANNER_HEIGHT, draw_banner, draw_footer, draw_notice};
pub(super) use menu::{draw_help, draw_menu, draw_settings, draw_status};
pub(super) use overlays::{draw_confirm_delete_popup, draw_terminal_too_small, too_small};
pub(super) use saved::draw_saved_list;
pub(super) use session::draw_session;
