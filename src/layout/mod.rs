//! Grid layout and pointer hit-testing.
//!
//! Cards are square and laid out row-major in a fixed number of columns,
//! with `spacing` between cells and around the edge. The grid is centered
//! vertically, then shifted down by `top_bias`.
//!
//! Presentation layers use `hit_test` to turn a tap into a card index for
//! `Session::select_card`; the core itself only knows linear indices.
//!
//! ```
//! use train_your_memory::core::GridConfig;
//! use train_your_memory::layout::GridLayout;
//!
//! let grid = GridLayout::compute(&GridConfig::default(), 375.0, 812.0, 16).unwrap();
//!
//! assert_eq!(grid.rows(), 4);
//! let cell = grid.cell(5).unwrap();
//! assert_eq!(grid.hit_test(cell.center_x(), cell.center_y()), Some(5));
//! ```

use serde::{Deserialize, Serialize};

use crate::core::GridConfig;
use crate::error::ConfigError;

/// An axis-aligned rectangle in view coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[must_use]
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    #[must_use]
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Half-open containment: the right and bottom edges are outside.
    #[must_use]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Computed grid geometry for one view size and card count.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    columns: usize,
    rows: usize,
    card_count: usize,
    spacing: f32,
    card_size: f32,
    offset_y: f32,
}

impl GridLayout {
    /// Lay out `card_count` cards in a view of the given size.
    ///
    /// A view too narrow for the spacing yields a zero card size rather than
    /// a negative one.
    pub fn compute(
        config: &GridConfig,
        view_width: f32,
        view_height: f32,
        card_count: usize,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let columns = config.columns;
        let spacing = config.spacing;
        let total_spacing_x = spacing * (columns + 1) as f32;
        let card_size = ((view_width - total_spacing_x) / columns as f32).max(0.0);

        let rows = card_count.div_ceil(columns);
        let total_spacing_y = spacing * (rows + 1) as f32;
        let offset_y =
            (view_height - card_size * rows as f32 - total_spacing_y) / 2.0 + config.top_bias;

        Ok(Self {
            columns,
            rows,
            card_count,
            spacing,
            card_size,
            offset_y,
        })
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Side length of each square cell.
    #[must_use]
    pub fn card_size(&self) -> f32 {
        self.card_size
    }

    /// Top edge of the first row.
    #[must_use]
    pub fn offset_y(&self) -> f32 {
        self.offset_y
    }

    /// Frame of the card at `index`.
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<Rect> {
        if index >= self.card_count {
            return None;
        }
        let row = index / self.columns;
        let col = index % self.columns;
        let pitch = self.card_size + self.spacing;

        Some(Rect {
            x: self.spacing + col as f32 * pitch,
            y: self.offset_y + row as f32 * pitch,
            width: self.card_size,
            height: self.card_size,
        })
    }

    /// Frames of every card in index order.
    pub fn cells(&self) -> impl Iterator<Item = Rect> + '_ {
        (0..self.card_count).filter_map(move |i| self.cell(i))
    }

    /// Card index under a point, if any. Gaps between cells hit nothing.
    #[must_use]
    pub fn hit_test(&self, x: f32, y: f32) -> Option<usize> {
        let pitch = self.card_size + self.spacing;
        if pitch <= 0.0 {
            return None;
        }

        let local_x = x - self.spacing;
        let local_y = y - self.offset_y;
        if local_x < 0.0 || local_y < 0.0 {
            return None;
        }

        let col = (local_x / pitch) as usize;
        let row = (local_y / pitch) as usize;
        if col >= self.columns || row >= self.rows {
            return None;
        }

        let index = row * self.columns + col;
        self.cell(index)
            .filter(|rect| rect.contains(x, y))
            .map(|_| index)
    }
}
