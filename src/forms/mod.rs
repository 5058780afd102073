//! Editable form state per entity: a draft, a per-field error map and the
//! mutation handlers a UI wires to its inputs.

mod event;
mod member;
mod project;
mod schedule;

pub use event::*;
pub use member::*;
pub use project::*;
pub use schedule::*;

use crate::errors::FieldErrors;
use crate::models::FileUpload;

/// Image check shared by the avatar and thumbnail pickers.
pub(crate) fn check_image(file: &FileUpload, max_bytes: usize) -> Result<(), String> {
    if !file.is_image() {
        return Err("Please select a valid image file".to_string());
    }
    if file.len() > max_bytes {
        return Err(format!("Image size should be less than {}", human_size(max_bytes)));
    }
    Ok(())
}

fn human_size(bytes: usize) -> String {
    const MIB: usize = 1024 * 1024;
    if bytes >= MIB && bytes % MIB == 0 {
        format!("{}MB", bytes / MIB)
    } else {
        format!("{} bytes", bytes)
    }
}

/// Validation outcome shared by the forms: store the errors, report success.
pub(crate) fn apply_validation(slot: &mut FieldErrors, errors: FieldErrors) -> bool {
    let ok = errors.is_empty();
    *slot = errors;
    ok
}
