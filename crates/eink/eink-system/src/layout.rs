//! Fixed-anchor panel layout
//!
//! The panel is a portrait canvas split into four areas:
//!
//! ```text
//! +----------+---------------------+
//! | calendar | next up             |
//! +----------+------+--------------+
//! | cell 0   | cell 1 | cell 2     |
//! | cell 3   | cell 4 | cell 5     |
//! | ...                            |
//! +--------------------------------+
//! | status strip                   |
//! +--------------------------------+
//! ```
//!
//! All rectangles are computed once from [`LayoutConstants`]; nothing checks
//! for overlap or for cells running off the canvas.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Sizing constants for the whole panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConstants {
    /// Canvas size in logical (portrait) orientation
    pub canvas: Size,
    /// Gap between neighbouring regions and cells
    pub cell_spacing: u32,
    /// Inner padding used for titles and text
    pub padding: u32,
    /// Calendar cell size (anchored top-left)
    pub calendar: Size,
    /// Upcoming-event cell size (right of the calendar)
    pub next_up: Size,
    /// Grid cell size
    pub grid_cell: Size,
    /// Number of cells per grid row
    pub row_width: u32,
    /// Number of grid rows reserved above the status strip
    pub grid_rows: u32,
    /// Height of the status strip (full canvas width)
    pub status_height: u32,
}

impl LayoutConstants {
    /// Layout of the 480×800 portrait Inky Impression panel
    pub const PORTRAIT_480X800: Self = Self {
        canvas: Size::new(480, 800),
        cell_spacing: 3,
        padding: 10,
        calendar: Size::new(158, 158),
        next_up: Size::new(318, 158),
        grid_cell: Size::new(158, 118),
        row_width: 3,
        grid_rows: 5,
        status_height: 31,
    };
}

impl Default for LayoutConstants {
    fn default() -> Self {
        Self::PORTRAIT_480X800
    }
}

/// Uniform grid of equally sized cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Top-left corner of cell 0
    pub origin: Point,
    /// Cells per row
    pub row_width: u32,
    /// Size of each cell
    pub cell: Size,
    /// Gap between cells, horizontally and vertically
    pub spacing: u32,
}

impl GridLayout {
    /// Row and column of the cell at `index` (declaration order, row-major)
    ///
    /// A zero `row_width` is treated as one column.
    pub fn position(&self, index: usize) -> (u32, u32) {
        let row_width = self.row_width.max(1) as usize;
        ((index / row_width) as u32, (index % row_width) as u32)
    }

    /// Pixel rectangle of the cell at `index`
    ///
    /// Top-left is `origin + (col·(w+spacing), row·(h+spacing))`; the bottom
    /// right corner is inclusive at `top_left + (w−1, h−1)`.
    pub fn cell_rect(&self, index: usize) -> Rectangle {
        let (row, col) = self.position(index);
        let step_x = self.cell.width.saturating_add(self.spacing);
        let step_y = self.cell.height.saturating_add(self.spacing);
        let offset = Point::new(
            col.saturating_mul(step_x) as i32,
            row.saturating_mul(step_y) as i32,
        );
        Rectangle::new(self.origin + offset, self.cell)
    }

    /// Vertical extent of `rows` rows including trailing spacing
    pub fn rows_height(&self, rows: u32) -> u32 {
        rows.saturating_mul(self.cell.height.saturating_add(self.spacing))
    }
}

/// Resolved rectangles for every fixed region plus the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelLayout {
    /// Canvas size
    pub canvas: Size,
    /// Inner padding for text
    pub padding: u32,
    /// Calendar cell
    pub calendar: Rectangle,
    /// Upcoming-event cell
    pub next_up: Rectangle,
    /// Grid of data cells
    pub grid: GridLayout,
    /// Status strip under the grid
    pub status: Rectangle,
}

impl PanelLayout {
    /// Compute all regions from sizing constants
    pub fn new(constants: &LayoutConstants) -> Self {
        let spacing = constants.cell_spacing;
        let calendar = Rectangle::new(Point::zero(), constants.calendar);

        let next_up = Rectangle::new(
            Point::new(constants.calendar.width.saturating_add(spacing) as i32, 0),
            constants.next_up,
        );

        let grid = GridLayout {
            origin: Point::new(0, constants.calendar.height.saturating_add(spacing) as i32),
            row_width: constants.row_width,
            cell: constants.grid_cell,
            spacing,
        };

        let status_top = grid.origin.y + grid.rows_height(constants.grid_rows) as i32;
        let status = Rectangle::new(
            Point::new(0, status_top),
            Size::new(constants.canvas.width, constants.status_height),
        );

        Self {
            canvas: constants.canvas,
            padding: constants.padding,
            calendar,
            next_up,
            grid,
            status,
        }
    }

    /// Rectangle of grid cell `index`
    pub fn cell_rect(&self, index: usize) -> Rectangle {
        self.grid.cell_rect(index)
    }
}

impl Default for PanelLayout {
    fn default() -> Self {
        Self::new(&LayoutConstants::default())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    fn grid() -> GridLayout {
        GridLayout {
            origin: Point::zero(),
            row_width: 3,
            cell: Size::new(158, 118),
            spacing: 3,
        }
    }

    #[test]
    fn test_cell_rect_first_cell() {
        let rect = grid().cell_rect(0);
        assert_eq!(rect.top_left, Point::new(0, 0));
        assert_eq!(rect.bottom_right(), Some(Point::new(157, 117)));
    }

    #[test]
    fn test_cell_rect_second_row_middle() {
        let rect = grid().cell_rect(4);
        assert_eq!(rect.top_left, Point::new(161, 121));
        assert_eq!(rect.bottom_right(), Some(Point::new(318, 238)));
    }

    #[test]
    fn test_cell_rect_wraps_rows() {
        let g = grid();
        assert_eq!(g.position(2), (0, 2));
        assert_eq!(g.position(3), (1, 0));
        assert_eq!(g.cell_rect(3).top_left, Point::new(0, 121));
    }

    #[test]
    fn test_cell_rect_with_origin() {
        let g = GridLayout {
            origin: Point::new(0, 161),
            ..grid()
        };
        assert_eq!(g.cell_rect(0).top_left, Point::new(0, 161));
        assert_eq!(g.cell_rect(5).top_left, Point::new(322, 282));
    }

    #[test]
    fn test_zero_row_width_is_single_column() {
        let g = GridLayout {
            row_width: 0,
            ..grid()
        };
        assert_eq!(g.position(2), (2, 0));
    }

    #[test]
    fn test_panel_regions() {
        let layout = PanelLayout::default();
        assert_eq!(layout.calendar, Rectangle::new(Point::zero(), Size::new(158, 158)));
        assert_eq!(layout.next_up.top_left, Point::new(161, 0));
        assert_eq!(layout.next_up.size, Size::new(318, 158));
        assert_eq!(layout.grid.origin, Point::new(0, 161));
        assert_eq!(layout.status.top_left, Point::new(0, 766));
        assert_eq!(layout.status.size, Size::new(480, 31));
    }

    #[test]
    fn test_regions_fit_canvas() {
        let layout = PanelLayout::default();
        let canvas = Rectangle::new(Point::zero(), layout.canvas);
        let last_cell = layout.cell_rect(14);
        assert!(canvas.contains(last_cell.bottom_right().unwrap()));
        assert!(canvas.contains(layout.status.bottom_right().unwrap()));
        assert!(canvas.contains(layout.next_up.bottom_right().unwrap()));
    }
}
