//! Panel grids for complex slices.

use nx_core::ComplexDisplay;

/// `(rows, cols)` for the two panels of a complex line or xy plot.
pub fn line_grid(display: ComplexDisplay) -> (usize, usize) {
    match display {
        ComplexDisplay::Horizontal => (1, 2),
        ComplexDisplay::Vertical | ComplexDisplay::Auto => (2, 1),
    }
}

/// `(rows, cols)` for the two panels of a complex map of `height × width`.
///
/// `auto` stacks wide images and puts tall or square ones side by side.
pub fn map_grid(display: ComplexDisplay, height: usize, width: usize) -> (usize, usize) {
    match display {
        ComplexDisplay::Horizontal => (1, 2),
        ComplexDisplay::Vertical => (2, 1),
        ComplexDisplay::Auto if height < width => (2, 1),
        ComplexDisplay::Auto => (1, 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_auto_is_vertical() {
        assert_eq!(line_grid(ComplexDisplay::Auto), (2, 1));
        assert_eq!(line_grid(ComplexDisplay::Horizontal), (1, 2));
    }

    #[test]
    fn map_auto_depends_on_aspect() {
        assert_eq!(map_grid(ComplexDisplay::Auto, 4, 16), (2, 1));
        assert_eq!(map_grid(ComplexDisplay::Auto, 16, 4), (1, 2));
        assert_eq!(map_grid(ComplexDisplay::Auto, 8, 8), (1, 2));
        assert_eq!(map_grid(ComplexDisplay::Vertical, 16, 4), (2, 1));
    }
}
