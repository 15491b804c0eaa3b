use super::errors::LayoutError;
use serde::Serialize;
use tapgrid_core::config::LayoutConfig;
use tapgrid_core::types::{RectInt, SizeInt};

/// Validated sizing parameters for [`super::LayoutEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutParams {
    pub icon_ratio: f64,
    pub padding_ratio: f64,
    pub label_ratio: f64,
    pub shrink_factor: f64,
    pub min_icon_size: u32,
    pub min_padding: u32,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            icon_ratio: 0.15,
            padding_ratio: 0.062,
            label_ratio: 0.018,
            shrink_factor: 0.9,
            min_icon_size: 40,
            min_padding: 10,
        }
    }
}

impl LayoutParams {
    pub fn validate(self) -> Result<Self, LayoutError> {
        if !(self.icon_ratio.is_finite() && self.icon_ratio > 0.0) {
            return Err(LayoutError::InvalidParams(format!(
                "icon_ratio must be positive, got {}",
                self.icon_ratio
            )));
        }
        if !(self.padding_ratio.is_finite() && self.padding_ratio > 0.0) {
            return Err(LayoutError::InvalidParams(format!(
                "padding_ratio must be positive, got {}",
                self.padding_ratio
            )));
        }
        if !(self.label_ratio.is_finite() && self.label_ratio >= 0.0) {
            return Err(LayoutError::InvalidParams(format!(
                "label_ratio must not be negative, got {}",
                self.label_ratio
            )));
        }
        if !(self.shrink_factor > 0.0 && self.shrink_factor < 1.0) {
            return Err(LayoutError::InvalidParams(format!(
                "shrink_factor must lie strictly between 0 and 1, got {}",
                self.shrink_factor
            )));
        }
        Ok(self)
    }
}

impl TryFrom<&LayoutConfig> for LayoutParams {
    type Error = LayoutError;

    fn try_from(config: &LayoutConfig) -> Result<Self, Self::Error> {
        LayoutParams {
            icon_ratio: config.icon_ratio,
            padding_ratio: config.padding_ratio,
            label_ratio: config.label_ratio,
            shrink_factor: config.shrink_factor,
            min_icon_size: config.min_icon_size,
            min_padding: config.min_padding,
        }
        .validate()
    }
}

/// Grid geometry for a given viewport and entry count.
///
/// Tile `i` sits in column `i % columns` and row `i / columns`. Its icon box is
/// `icon_size` square and its label strip (`label_height` high) sits directly
/// below. Columns are centered horizontally by `row_extra_padding`, which is
/// negative only when a single icon is wider than the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LayoutGeometry {
    pub viewport: SizeInt,
    pub entry_count: usize,
    pub icon_size: u32,
    pub padding: u32,
    pub label_height: u32,
    pub columns: u32,
    pub rows: u32,
    pub row_extra_padding: i32,
    /// Shrinking stopped at the size floor while the grid still overflowed.
    pub floor_reached: bool,
}

impl LayoutGeometry {
    /// Derives columns, rows and centering from fixed tile sizes.
    pub fn from_sizes(
        viewport: SizeInt,
        entry_count: usize,
        icon_size: u32,
        padding: u32,
        label_height: u32,
    ) -> Self {
        let stride = u64::from(icon_size) + u64::from(padding);
        let columns = (u64::from(viewport.width) / stride.max(1)).max(1);
        let rows = (entry_count as u64 + columns - 1) / columns;
        let used_width = (columns * stride).saturating_sub(u64::from(padding));
        let row_extra_padding = (i64::from(viewport.width) - used_width as i64) / 2;

        Self {
            viewport,
            entry_count,
            icon_size,
            padding,
            label_height,
            columns: clamp_u32(columns),
            rows: clamp_u32(rows),
            row_extra_padding: clamp_i32(row_extra_padding),
            floor_reached: false,
        }
    }

    /// Horizontal distance between the left edges of neighbouring tiles.
    pub fn column_stride(&self) -> u64 {
        u64::from(self.icon_size) + u64::from(self.padding)
    }

    /// Vertical distance between the top edges of neighbouring rows.
    pub fn row_stride(&self) -> u64 {
        u64::from(self.icon_size) + u64::from(self.label_height) + u64::from(self.padding)
    }

    /// Height the grid needs, including the top and bottom padding.
    pub fn required_height(&self) -> u64 {
        u64::from(self.rows) * self.row_stride() + u64::from(self.padding)
    }

    /// True if the rows do not fit the viewport height, or a single icon is
    /// wider than the viewport.
    pub fn overflows(&self) -> bool {
        self.required_height() > u64::from(self.viewport.height)
            || self.icon_size > self.viewport.width
    }

    pub fn at_floor(&self) -> bool {
        self.floor_reached
    }

    /// True if every tile's icon and label lie inside the viewport.
    pub fn fits_viewport(&self) -> bool {
        let bounds = self.viewport.bounds();
        (0..self.entry_count)
            .filter_map(|i| self.tile_rect(i))
            .all(|tile| bounds.contains_rect(&tile))
    }

    fn origin(&self, index: usize) -> Option<(i32, i32)> {
        if index >= self.entry_count || self.columns == 0 {
            return None;
        }
        let columns = self.columns as usize;
        let column = (index % columns) as i64;
        let row = (index / columns) as i64;
        let x = column * self.column_stride() as i64 + i64::from(self.row_extra_padding);
        let y = row * self.row_stride() as i64 + i64::from(self.padding);
        Some((clamp_i32(x), clamp_i32(y)))
    }

    /// The icon box of tile `index`. This is the area that reacts to taps.
    pub fn icon_rect(&self, index: usize) -> Option<RectInt> {
        self.origin(index)
            .map(|(x, y)| RectInt::from_coords(x, y, self.icon_size, self.icon_size))
    }

    /// The label strip below the icon of tile `index`.
    pub fn label_rect(&self, index: usize) -> Option<RectInt> {
        self.origin(index).map(|(x, y)| {
            let label_y = clamp_i32(i64::from(y) + i64::from(self.icon_size));
            RectInt::from_coords(x, label_y, self.icon_size, self.label_height)
        })
    }

    /// Icon box and label strip together.
    pub fn tile_rect(&self, index: usize) -> Option<RectInt> {
        self.origin(index).map(|(x, y)| {
            let height = self.icon_size.saturating_add(self.label_height);
            RectInt::from_coords(x, y, self.icon_size, height)
        })
    }
}

fn clamp_u32(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

fn clamp_i32(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}
