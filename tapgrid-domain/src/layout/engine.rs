use super::errors::LayoutError;
use super::types::{LayoutGeometry, LayoutParams};
use tapgrid_core::config::LayoutConfig;
use tapgrid_core::types::SizeInt;
use tracing::{debug, warn};

/// Computes grid geometry from viewport size and entry count.
///
/// Sizes start as fractions of the viewport. While the rows overflow the
/// height, or one icon is wider than the viewport, icon size and padding
/// shrink together by the shrink factor until either drops below its floor;
/// past that point overflow is accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayoutEngine {
    params: LayoutParams,
}

impl LayoutEngine {
    pub fn new(params: LayoutParams) -> Result<Self, LayoutError> {
        Ok(Self { params: params.validate()? })
    }

    pub fn from_config(config: &LayoutConfig) -> Result<Self, LayoutError> {
        Ok(Self { params: LayoutParams::try_from(config)? })
    }

    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    /// Pure: identical inputs always produce identical geometry.
    pub fn compute(&self, viewport: SizeInt, entry_count: usize) -> LayoutGeometry {
        let params = &self.params;
        let mut icon_size = scale(viewport.width, params.icon_ratio);
        let mut padding = scale(viewport.width, params.padding_ratio);
        let label_height = scale(viewport.height, params.label_ratio);

        let mut geometry =
            LayoutGeometry::from_sizes(viewport, entry_count, icon_size, padding, label_height);
        while geometry.overflows() {
            if icon_size < params.min_icon_size || padding < params.min_padding {
                geometry.floor_reached = true;
                break;
            }
            let next_icon = scale(icon_size, params.shrink_factor);
            let next_padding = scale(padding, params.shrink_factor);
            if next_icon == icon_size && next_padding == padding {
                // Both sizes are zero; nothing left to shrink.
                geometry.floor_reached = true;
                break;
            }
            icon_size = next_icon;
            padding = next_padding;
            geometry =
                LayoutGeometry::from_sizes(viewport, entry_count, icon_size, padding, label_height);
        }

        if geometry.floor_reached {
            warn!(
                "{} entries overflow a {}x{} viewport at minimum size (icon {}, padding {})",
                entry_count, viewport.width, viewport.height, geometry.icon_size, geometry.padding
            );
        }
        debug!(
            "Layout for {} entries in {}x{}: {} columns x {} rows, icon {}, padding {}, label {}",
            entry_count,
            viewport.width,
            viewport.height,
            geometry.columns,
            geometry.rows,
            geometry.icon_size,
            geometry.padding,
            geometry.label_height
        );
        geometry
    }
}

/// Computes the layout with the default parameters.
pub fn compute_layout(
    viewport_width: u32,
    viewport_height: u32,
    catalog_length: usize,
) -> LayoutGeometry {
    let viewport = SizeInt::new(viewport_width, viewport_height);
    LayoutEngine::default().compute(viewport, catalog_length)
}

/// `floor(value * factor)`; saturating on overflow.
fn scale(value: u32, factor: f64) -> u32 {
    (f64::from(value) * factor) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;
    use std::fs;
    use tapgrid_core::config::ConfigLoader;
    use tempfile::TempDir;

    #[test]
    fn test_baseline_sizes_for_800x480() {
        let geometry = compute_layout(800, 480, 5);
        assert_eq!(geometry.icon_size, 120);
        assert_eq!(geometry.padding, 49);
        assert_eq!(geometry.label_height, 8);
        assert_eq!(geometry.columns, 4);
        assert_eq!(geometry.rows, 2);
        // used = 4 * 169 - 49 = 627
        assert_eq!(geometry.row_extra_padding, 86);
        assert!(!geometry.at_floor());
    }

    #[test]
    fn test_shrinks_until_rows_fit() {
        let geometry = compute_layout(800, 480, 20);
        assert!(!geometry.overflows());
        assert!(geometry.icon_size < 120);
        assert!(geometry.fits_viewport());
        assert!(!geometry.at_floor());
    }

    #[test]
    fn test_floor_accepts_overflow() {
        let geometry = compute_layout(800, 480, 500);
        assert!(geometry.at_floor());
        assert!(geometry.overflows());
        assert!(geometry.icon_size < 40 || geometry.padding < 10);
    }

    #[test]
    fn test_zero_entries_do_not_shrink() {
        let geometry = compute_layout(800, 480, 0);
        assert_eq!(geometry.icon_size, 120);
        assert_eq!(geometry.rows, 0);
    }

    #[test]
    fn test_zero_floor_terminates() {
        let engine = LayoutEngine::new(LayoutParams {
            min_icon_size: 0,
            min_padding: 0,
            ..LayoutParams::default()
        })
        .unwrap();
        let geometry = engine.compute(SizeInt::new(200, 200), 100_000);
        assert!(geometry.at_floor());
    }

    #[test]
    fn test_engine_rejects_invalid_params() {
        let result = LayoutEngine::new(LayoutParams {
            shrink_factor: 0.0,
            ..LayoutParams::default()
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_icon_wider_than_viewport_is_shrunk_to_fit() {
        let temp = TempDir::new().unwrap();
        let user = temp.path().join("user.toml");
        fs::write(&user, "[layout]\nicon_ratio = 1.2\n").unwrap();
        let config = ConfigLoader::load_from_paths(None, Some(user.as_path())).unwrap();

        let engine = LayoutEngine::from_config(&config.layout).unwrap();
        let geometry = engine.compute(SizeInt::new(400, 1000), 1);

        // 480 -> 432 -> 388, padding 24 -> 21 -> 18.
        assert_eq!(geometry.icon_size, 388);
        assert_eq!(geometry.padding, 18);
        assert_eq!(geometry.columns, 1);
        assert_eq!(geometry.row_extra_padding, 6);
        assert!(!geometry.overflows());
        assert!(!geometry.at_floor());
        assert!(geometry.fits_viewport());
    }

    #[test]
    fn test_icon_floor_wider_than_viewport_reports_floor() {
        let engine = LayoutEngine::new(LayoutParams {
            icon_ratio: 3.0,
            min_icon_size: 200,
            ..LayoutParams::default()
        })
        .unwrap();
        let geometry = engine.compute(SizeInt::new(100, 1000), 1);
        assert!(geometry.at_floor());
        assert!(geometry.overflows());
    }

    #[rstest]
    #[case(800, 480, 1)]
    #[case(1920, 1080, 37)]
    #[case(480, 800, 12)]
    fn test_compute_is_idempotent(#[case] width: u32, #[case] height: u32, #[case] count: usize) {
        assert_eq!(compute_layout(width, height, count), compute_layout(width, height, count));
    }

    proptest! {
        #[test]
        fn prop_tiles_fit_or_floor_reached(
            width in 200u32..4000,
            height in 200u32..4000,
            count in 1usize..400,
        ) {
            let geometry = compute_layout(width, height, count);
            prop_assert!(geometry.columns >= 1);
            prop_assert!(geometry.fits_viewport() || geometry.at_floor());
        }

        #[test]
        fn prop_any_ratio_fits_or_floor_reached(
            icon_ratio in 0.01f64..3.0,
            padding_ratio in 0.01f64..1.0,
            width in 50u32..2000,
            height in 50u32..2000,
            count in 1usize..100,
        ) {
            let engine = LayoutEngine::new(LayoutParams {
                icon_ratio,
                padding_ratio,
                ..LayoutParams::default()
            })
            .unwrap();
            let geometry = engine.compute(SizeInt::new(width, height), count);
            prop_assert!(geometry.fits_viewport() || geometry.at_floor());
        }

        #[test]
        fn prop_icon_boxes_never_overlap(
            width in 200u32..2000,
            height in 200u32..2000,
            count in 2usize..60,
        ) {
            let geometry = compute_layout(width, height, count);
            for i in 1..count {
                let previous = geometry.icon_rect(i - 1).unwrap();
                let current = geometry.icon_rect(i).unwrap();
                prop_assert!(!previous.intersects(&current));
            }
        }
    }
}
