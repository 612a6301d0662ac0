// Letter reference ids for panel targets
use super::error::PanelError;

pub const MAX_REF_IDS: usize = 26;

/// Reference id for the target at `index`: 0 -> "A", 1 -> "B", ...
pub fn ref_id(index: usize) -> Result<String, PanelError> {
    if index >= MAX_REF_IDS {
        return Err(PanelError::RefIdsExhausted {
            index: index + 1,
            max: MAX_REF_IDS,
        });
    }

    Ok(char::from(b'A' + index as u8).to_string())
}
