//! Active-section computation for the navigation highlight.

use super::constants::NAV_SECTION_LOOKAHEAD_PX;

/// Index of the last section whose top offset is within the look-ahead
/// window of the current scroll position, or `None` if no section qualifies.
///
/// `section_tops` must be in document order (top to bottom). The scan is
/// deliberately approximate: the 200 px look-ahead mirrors the page's
/// original feel and is inclusive at the boundary.
pub fn active_section(scroll_y: f64, section_tops: &[f64]) -> Option<usize> {
    let mut current = None;
    for (i, top) in section_tops.iter().enumerate() {
        if scroll_y >= top - NAV_SECTION_LOOKAHEAD_PX {
            current = Some(i);
        }
    }
    current
}
