//! Responsive layout helpers
//!
//! The product grid adapts its column count to the terminal width, the way
//! the original storefront's CSS grid stepped from one to three columns.

/// Width breakpoints for the product grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    Narrow,
    Medium,
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=69 => Breakpoint::Narrow,
            70..=109 => Breakpoint::Medium,
            _ => Breakpoint::Wide,
        }
    }

    /// Product cards per row at this breakpoint
    pub fn grid_columns(self) -> u16 {
        match self {
            Breakpoint::Narrow => 1,
            Breakpoint::Medium => 2,
            Breakpoint::Wide => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_thresholds() {
        assert_eq!(Breakpoint::from_width(0), Breakpoint::Narrow);
        assert_eq!(Breakpoint::from_width(69), Breakpoint::Narrow);
        assert_eq!(Breakpoint::from_width(70), Breakpoint::Medium);
        assert_eq!(Breakpoint::from_width(109), Breakpoint::Medium);
        assert_eq!(Breakpoint::from_width(200), Breakpoint::Wide);
    }

    #[test]
    fn test_grid_columns() {
        assert_eq!(Breakpoint::Narrow.grid_columns(), 1);
        assert_eq!(Breakpoint::Medium.grid_columns(), 2);
        assert_eq!(Breakpoint::Wide.grid_columns(), 3);
    }
}
