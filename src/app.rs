pub use crate::features::app::{
    AppState, StoreError, parse_index, parse_method, parse_port, patch_from_form, quick_target,
    record_from_form,
};
pub use crate::features::targets::SavedTargets;
