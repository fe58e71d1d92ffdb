mod parsing;
mod state;

pub use parsing::{
    parse_index, parse_method, parse_port, patch_from_form, quick_target, record_from_form,
};
pub use state::{AppState, StoreError};
