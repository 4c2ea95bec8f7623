//! Domain-critical regression tests for paint-grid.
//!
//! These tests are designed to catch specific classes of bugs, not just
//! confirm happy paths. Each test documents the regression it guards against.

#[cfg(test)]
mod domain_tests {
    use crate::api::{build_grid, GridBuilder, GridError, GridRequest};
    use crate::color::Rgb;
    use crate::dither::OrderedDither;
    use crate::gradient::{GradientKind, GradientSampler};
    use crate::palette::Palette;

    fn grey(v: u8) -> Rgb {
        Rgb::new(v, v, v)
    }

    // ========================================================================
    // GAP 1: Truncation, not rounding
    // ========================================================================

    /// If this breaks, it means: interpolation switched from truncation to
    /// rounding. Palettes would then contain 128 instead of 127 and every
    /// exported legend would differ from previously generated ones.
    #[test]
    fn test_interpolation_truncates() {
        let palette = Palette::generate(&[Rgb::BLACK, Rgb::WHITE], 2).unwrap();
        assert_eq!(palette.colors()[1], grey(127));

        let palette = Palette::generate(&[Rgb::BLACK, Rgb::WHITE], 3).unwrap();
        // 255/3 = 85, 510/3 = 170
        assert_eq!(palette.colors(), &[grey(0), grey(85), grey(170)]);

        let palette = Palette::generate(&[Rgb::BLACK, Rgb::WHITE], 64).unwrap();
        // 255/64 = 3.98 -> 3 (rounding would give 4); 255 * 63/64 = 251.02 -> 251
        assert_eq!(palette.colors()[1], grey(3));
        assert_eq!(palette.colors()[63], grey(251));
    }

    // ========================================================================
    // GAP 2: Dither matrix orientation
    // ========================================================================

    /// If this breaks, it means: the threshold matrix is being indexed
    /// `[x][y]` instead of `[y][x]`. The matrix is not symmetric, so the
    /// transposed pattern shifts different cells across palette boundaries.
    #[test]
    fn test_dither_matrix_indexed_by_row_then_column() {
        let c = grey(100);
        // Row 0, column 1 holds 8 (offset 0); row 1, column 0 holds 12 (+4)
        assert_eq!(OrderedDither.dither(c, 1, 0), grey(100));
        assert_eq!(OrderedDither.dither(c, 0, 1), grey(104));
        // Row 3, column 0 holds 15 (+7); row 0, column 3 holds 10 (+2)
        assert_eq!(OrderedDither.dither(c, 0, 3), grey(107));
        assert_eq!(OrderedDither.dither(c, 3, 0), grey(102));
    }

    // ========================================================================
    // GAP 3: Labels follow a row-major scan
    // ========================================================================

    /// If this breaks, it means: labels are being assigned in column-major
    /// order (or in palette order). In this grid the top row already holds
    /// two distinct colors, so a row-major scan labels the bottom row's
    /// color 3 while a column-major scan would label it 2.
    #[test]
    fn test_labels_assigned_row_major() {
        let result = GridBuilder::new(vec![Rgb::BLACK, Rgb::WHITE])
            .gradient(GradientKind::Vertical)
            .subdivisions(64)
            .build(2, 4)
            .unwrap();

        // Top row samples black; the +2 offset at column 3 snaps to grey 3.
        // Bottom row samples white and snaps to grey 251 everywhere.
        let labels: Vec<u32> = result.grid.cells().iter().map(|c| c.label).collect();
        assert_eq!(labels, vec![1, 1, 1, 2, 3, 3, 3, 3]);

        let legend: Vec<(u32, Rgb)> = result.legend.iter().map(|e| (e.label, e.color)).collect();
        assert_eq!(legend, vec![(1, grey(0)), (2, grey(3)), (3, grey(251))]);
    }

    /// If this breaks, it means: the first cell no longer receives label 1,
    /// e.g. because labels start at 0 or are pre-seeded from the palette.
    #[test]
    fn test_origin_cell_always_label_one() {
        for kind in GradientKind::ALL {
            let result = GridBuilder::new(vec![grey(30), Rgb::new(200, 10, 90), grey(240)])
                .gradient(kind)
                .subdivisions(5)
                .build(7, 3)
                .unwrap();
            assert_eq!(result.grid.get(0, 0).unwrap().label, 1, "{kind}");
        }
    }

    // ========================================================================
    // GAP 4: Last-segment clamp
    // ========================================================================

    /// If this breaks, it means: a factor of exactly 1.0 is indexing past the
    /// last segment (panic) or interpolating with a stale segment instead of
    /// returning the final stop.
    #[test]
    fn test_factor_one_returns_last_stop_for_every_kind() {
        let stops = [Rgb::new(255, 0, 0), Rgb::new(0, 255, 0), Rgb::new(0, 0, 255)];
        let cases = [
            (GradientKind::Horizontal, 4, 0, 5, 3),
            (GradientKind::Vertical, 0, 2, 5, 3),
            (GradientKind::Diagonal, 4, 2, 5, 3),
            (GradientKind::Radial, 0, 0, 6, 6),
        ];
        for (kind, x, y, w, h) in cases {
            let sampler = GradientSampler::new(kind, &stops).unwrap();
            assert_eq!(kind.factor(x, y, w, h), 1.0, "{kind}");
            assert_eq!(sampler.sample(x, y, w, h), stops[2], "{kind}");
        }
    }

    // ========================================================================
    // GAP 5: Degenerate dimensions
    // ========================================================================

    /// If this breaks, it means: a single-column horizontal, single-row
    /// vertical, or 1x1 diagonal grid is dividing by zero again, producing
    /// NaN factors (which cast to segment 0 with NaN interpolation) instead
    /// of the defined factor 0.
    #[test]
    fn test_degenerate_grids_sample_first_stop() {
        let stops = vec![grey(40), grey(220)];
        let cases = [
            (GradientKind::Horizontal, 6, 1),
            (GradientKind::Vertical, 1, 6),
            (GradientKind::Diagonal, 1, 1),
        ];
        for (kind, rows, cols) in cases {
            let sampler = GradientSampler::new(kind, &stops).unwrap();
            for row in 0..rows {
                for col in 0..cols {
                    let f = kind.factor(col, row, cols, rows);
                    assert_eq!(f, 0.0, "{kind} at ({row}, {col})");
                    assert_eq!(sampler.sample(col, row, cols, rows), stops[0]);
                }
            }
            let result = GridBuilder::new(stops.clone())
                .gradient(kind)
                .build(rows, cols)
                .unwrap();
            assert_eq!(result.grid.cells().len(), rows * cols);
        }
    }

    // ========================================================================
    // GAP 6: Determinism
    // ========================================================================

    /// If this breaks, it means: hidden state (a shared label map, hash
    /// iteration order, or randomness) leaked into the build. Two builds of
    /// the same request must be identical, including legend order.
    #[test]
    fn test_repeated_builds_are_identical() {
        let request = GridRequest::new(
            13,
            21,
            GradientKind::Radial,
            vec![
                Rgb::new(12, 34, 56),
                Rgb::new(250, 120, 3),
                Rgb::new(90, 200, 160),
                Rgb::new(255, 255, 255),
            ],
            7,
        );
        let first = build_grid(&request).unwrap();
        for _ in 0..5 {
            assert_eq!(build_grid(&request).unwrap(), first);
        }
    }

    /// If this breaks, it means: the builder carries label state between
    /// builds, so a second, different grid continues numbering where the
    /// first left off.
    #[test]
    fn test_builder_does_not_share_labels_between_builds() {
        let builder = GridBuilder::new(vec![Rgb::BLACK, Rgb::WHITE]).subdivisions(8);
        let _big = builder.build(20, 20).unwrap();
        let small = builder.build(1, 1).unwrap();
        assert_eq!(small.legend.len(), 1);
        assert_eq!(small.grid.get(0, 0).unwrap().label, 1);
    }

    // ========================================================================
    // GAP 7: Quantization tie-break
    // ========================================================================

    /// If this breaks, it means: `find_nearest` switched to `<=` (last match
    /// wins) or to an unstable min, so duplicate or equidistant palette
    /// entries resolve differently between runs or versions.
    #[test]
    fn test_equidistant_entries_resolve_to_first() {
        let palette = Palette::new(vec![grey(100), grey(120), grey(100)]).unwrap();
        assert_eq!(palette.find_nearest(grey(110)).0, 0);
        assert_eq!(palette.find_nearest(grey(100)).0, 0);
    }

    // ========================================================================
    // GAP 8: Validation precedes work
    // ========================================================================

    /// If this breaks, it means: an invalid request produced a partial grid
    /// or panicked instead of reporting `InvalidInput`.
    #[test]
    fn test_invalid_requests_report_invalid_input() {
        let stops = vec![Rgb::BLACK, Rgb::WHITE];
        let request = |rows, stops: &[Rgb], subdivisions| {
            GridRequest::new(rows, 5, GradientKind::Horizontal, stops.to_vec(), subdivisions)
        };
        let cases = [
            (request(0, &stops, 3), "grid dimensions must be positive"),
            (request(5, &stops[..1], 3), "need at least two color stops"),
            (request(5, &stops, 0), "subdivision count must be positive"),
        ];
        for (request, message) in cases {
            assert_eq!(build_grid(&request), Err(GridError::InvalidInput(message)));
        }
        assert_eq!(
            Rgb::checked(0, 300, 0).unwrap_err().message(),
            "channel out of range"
        );
    }
}
