use crate::constants::{ACTIVE_CLASS, INACTIVE_CLASS};

/// Class attribute of a layer menu entry.
#[inline]
pub fn menu_class(active: bool) -> &'static str {
    if active {
        ACTIVE_CLASS
    } else {
        INACTIVE_CLASS
    }
}

/// Inline style for a legend color key.
#[inline]
pub fn swatch_style(color: &str) -> String {
    format!("background-color: {color};")
}
