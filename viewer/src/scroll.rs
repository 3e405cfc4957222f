/// Whether the viewport is within `threshold` units of the end of the content.
///
/// Units are whatever the caller measures in (terminal rows here). Content
/// that already fits inside the viewport always counts as near the bottom.
pub fn near_bottom(scroll_top: usize, client_height: usize, scroll_height: usize, threshold: usize) -> bool {
    scroll_top.saturating_add(client_height) >= scroll_height.saturating_sub(threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_far_from_bottom() {
        assert!(!near_bottom(0, 20, 100, 5));
        assert!(!near_bottom(74, 20, 100, 5));
    }

    #[test]
    fn test_within_threshold() {
        assert!(near_bottom(75, 20, 100, 5));
        assert!(near_bottom(80, 20, 100, 5));
    }

    #[test]
    fn test_short_content() {
        assert!(near_bottom(0, 20, 10, 5));
        assert!(near_bottom(0, 0, 0, 0));
    }
}
