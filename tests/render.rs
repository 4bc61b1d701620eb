use matrix_display::display::{HeadlessBackend, Rect};
use matrix_display::{
    Color, Error, FigSize, Matrix, MatrixDisplay, RenderMode, RenderOptions, TileGrid, ValueRange,
};
use test_log::test;

fn display() -> MatrixDisplay<HeadlessBackend> {
    MatrixDisplay::new(HeadlessBackend::new())
}

fn center(r: Rect) -> (usize, usize) {
    (r.x + r.width / 2, r.y + r.height / 2)
}

/// 以小型線性同餘產生器產生可重現的資料
fn noise(rows: usize, cols: usize, seed: u64) -> Matrix {
    let mut state = seed;
    Matrix::from_fn(rows, cols, |_, _| {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((state >> 33) as f64 / (1u64 << 31) as f64) - 0.5
    })
}

#[test]
fn tiles_reassemble_into_the_original_matrix() {
    for &(rows, cols, gr, gc) in &[(100, 100, 2, 2), (120, 120, 3, 3), (6, 10, 3, 5), (7, 7, 1, 7)] {
        let m = noise(rows, cols, 7);
        let grid = TileGrid::new(gr, gc, rows / gr, cols / gc);
        let mut rebuilt = vec![f64::NAN; rows * cols];
        let mut seen = vec![false; rows * cols];
        for tile in m.tiles(&grid) {
            let (r0, c0) = tile.origin();
            let (tr, tc) = tile.shape();
            for r in 0..tr {
                for c in 0..tc {
                    let idx = (r0 + r) * cols + c0 + c;
                    assert!(!seen[idx], "tiles overlap at {}", idx);
                    seen[idx] = true;
                    rebuilt[idx] = tile.get(r, c);
                }
            }
        }
        assert!(seen.iter().all(|&s| s));
        assert_eq!(rebuilt.as_slice(), m.as_slice());
    }
}

#[test]
fn same_key_reuses_handle_and_views() {
    let mut d = display();
    let opts = RenderOptions::builder().grid(2, 2).title("Dynamic").build();

    d.render_tiled_matrix(&noise(100, 100, 1), &opts).unwrap();
    let handle = d.handle(&opts).unwrap();
    let id = handle.id();
    let views: Vec<_> = handle
        .canvas()
        .cells()
        .map(|c| c.image().unwrap().id())
        .collect();

    for step in 0..5 {
        d.render_tiled_matrix(&noise(100, 100, step + 2), &opts).unwrap();
    }

    let handle = d.handle(&opts).unwrap();
    assert_eq!(handle.id(), id);
    let again: Vec<_> = handle
        .canvas()
        .cells()
        .map(|c| c.image().unwrap().id())
        .collect();
    assert_eq!(views, again);
    assert!(handle.canvas().cells().all(|c| c.image().unwrap().updates() == 5));
    assert_eq!(d.backend().opened(), 1);
    assert_eq!(d.backend().last_probe().unwrap().presents(), 6);
    assert_eq!(d.registry().len(), 1);
}

#[test]
fn different_keys_open_independent_surfaces() {
    let mut d = display();
    let m = Matrix::zeros(4, 4);
    d.render_tiled_matrix(&m, &RenderOptions::builder().title("a").build()).unwrap();
    d.render_tiled_matrix(&m, &RenderOptions::builder().title("b").build()).unwrap();
    d.render_tiled_matrix(&m, &RenderOptions::builder().title("a").grid(2, 2).build())
        .unwrap();
    d.render_tiled_matrix(&m, &RenderOptions::builder().title("a").figsize(3.0, 2.0).build())
        .unwrap();
    assert_eq!(d.backend().opened(), 4);
    assert_eq!(d.registry().len(), 4);
    assert_eq!(d.backend().probes()[0].size(), (600, 600));
    assert_eq!(d.backend().probes()[3].size(), (300, 200));
}

#[test]
fn closed_surface_is_recreated_without_error() {
    let mut d = display();
    let opts = RenderOptions::builder().title("closable").build();
    let m = Matrix::filled(4, 4, 1.0);

    d.render_tiled_matrix(&m, &opts).unwrap();
    let first = d.handle(&opts).unwrap().id();
    d.backend().last_probe().unwrap().close();
    assert!(d.handle(&opts).is_none());

    d.render_tiled_matrix(&m, &opts).unwrap();
    let handle = d.handle(&opts).unwrap();
    assert_ne!(handle.id(), first);
    assert_eq!(handle.canvas().cell(0, 0).unwrap().image().unwrap().updates(), 0);
    assert_eq!(d.backend().opened(), 2);
    assert!(d.backend().last_probe().unwrap().is_open());
    assert_eq!(d.registry().len(), 1);
}

#[test]
fn binary_mode_thresholds_at_zero() {
    let mut d = display();
    let opts = RenderOptions::builder().grid(2, 2).build();
    let (black, white) = (Color::BLACK.to_u32(), Color::WHITE.to_u32());

    d.render_tiled_matrix(&Matrix::filled(8, 8, -0.5), &opts).unwrap();
    let probe = d.backend().last_probe().unwrap().clone();
    for cell in d.handle(&opts).unwrap().canvas().cells() {
        let (x, y) = center(cell.rect());
        assert_eq!(probe.pixel(x, y), Some(black));
        assert!(cell.image().unwrap().data().iter().all(|&v| v == 0.0));
    }

    d.render_tiled_matrix(&Matrix::filled(8, 8, 0.25), &opts).unwrap();
    for cell in d.handle(&opts).unwrap().canvas().cells() {
        let (x, y) = center(cell.rect());
        assert_eq!(probe.pixel(x, y), Some(white));
    }

    let mixed = Matrix::from_fn(8, 8, |r, c| if (r + c) % 2 == 0 { 3.0 } else { 0.0 });
    d.render_tiled_matrix(&mixed, &opts).unwrap();
    let handle = d.handle(&opts).unwrap();
    let view = handle.canvas().cell(1, 1).unwrap().image().unwrap();
    assert_eq!(view.shape(), (4, 4));
    assert_eq!(view.range(), ValueRange::UNIT);
    for r in 0..4 {
        for c in 0..4 {
            let expected = if (r + 4 + c + 4) % 2 == 0 { white } else { black };
            assert_eq!(view.color_at(r, c).map(Color::to_u32), Some(expected));
        }
    }
}

#[test]
fn color_mode_scales_every_tile_by_the_whole_matrix() {
    let mut d = display();
    let opts = RenderOptions::builder().mode(RenderMode::Color).grid(1, 2).build();
    let m = Matrix::from_rows(&[[0.0, 1.0, 50.0, 100.0], [2.0, 3.0, 60.0, 70.0]]).unwrap();

    d.render_tiled_matrix(&m, &opts).unwrap();
    let handle = d.handle(&opts).unwrap();
    for cell in handle.canvas().cells() {
        let view = cell.image().unwrap();
        assert_eq!(view.range(), ValueRange::new(0.0, 100.0));
        assert_eq!(view.palette().name(), "viridis");
    }
    let left = handle.canvas().cell(0, 0).unwrap().image().unwrap();
    let right = handle.canvas().cell(0, 1).unwrap().image().unwrap();
    assert_eq!(left.color_at(0, 0), Some(Color::hex(0x440154)));
    assert_eq!(right.color_at(0, 1), Some(Color::hex(0xFDE725)));

    // 明確指定範圍與色階時，原地更新
    let explicit = RenderOptions {
        cmap: Some("gray".into()),
        vmin: Some(-1.0),
        vmax: Some(1.0),
        ..opts.clone()
    };
    d.render_tiled_matrix(&m, &explicit).unwrap();
    let view = d.handle(&opts).unwrap().canvas().cell(0, 0).unwrap().image().unwrap();
    assert_eq!(view.range(), ValueRange::new(-1.0, 1.0));
    assert_eq!(view.palette().name(), "gray");
    assert_eq!(view.updates(), 1);
    assert_eq!(d.backend().opened(), 1);
}

#[test]
fn invalid_input_fails_before_any_drawing() {
    assert!(matches!(
        Matrix::from_shape_vec(&[100], vec![0.0; 100]),
        Err(Error::NotTwoDimensional { ndim: 1 })
    ));
    assert!(matches!(
        "grayscale".parse::<RenderMode>(),
        Err(Error::UnsupportedMode(_))
    ));

    let mut d = display();
    let m = Matrix::zeros(10, 10);
    let zero = RenderOptions {
        grid_rows: Some(0),
        ..RenderOptions::default()
    };
    assert!(matches!(
        d.render_tiled_matrix(&m, &zero),
        Err(Error::InvalidGrid { .. })
    ));
    let thirds = RenderOptions::builder().grid_rows(3).build();
    let err = d.render_tiled_matrix(&m, &thirds).unwrap_err();
    assert!(matches!(err, Error::IndivisibleGrid { grid_rows: 3, grid_cols: 1, .. }));
    assert!(err.to_string().contains("(3x1)"));

    assert_eq!(d.backend().opened(), 0);
    assert_eq!(d.backend().pauses(), 0);
    assert!(d.registry().is_empty());
}

#[test]
fn rejected_call_leaves_existing_display_untouched() {
    let mut d = display();
    let opts = RenderOptions::builder().grid(2, 2).title("keep").build();
    d.render_tiled_matrix(&Matrix::filled(4, 4, 1.0), &opts).unwrap();
    let probe = d.backend().last_probe().unwrap().clone();
    let frame = probe.frame();

    let bad = Matrix::filled(5, 4, -1.0);
    assert!(d.render_tiled_matrix(&bad, &opts).is_err());

    assert_eq!(probe.presents(), 1);
    assert_eq!(probe.frame(), frame);
    let handle = d.handle(&opts).unwrap();
    assert!(handle.canvas().cells().all(|c| c.image().unwrap().updates() == 0));
}

#[test]
fn heading_follows_the_title_argument() {
    let mut d = display();
    let m = Matrix::zeros(2, 2);
    d.render_tiled_matrix(&m, &RenderOptions::builder().title("Update 1").build())
        .unwrap();
    assert_eq!(d.backend().last_probe().unwrap().heading(), "Update 1");

    let untitled = RenderOptions::default();
    d.render_tiled_matrix(&m, &untitled).unwrap();
    assert_eq!(d.backend().last_probe().unwrap().heading(), "");
    assert_eq!(d.handle(&untitled).unwrap().canvas().heading(), "");

    let titled = d.backend().probes()[0].clone();
    assert_eq!(titled.heading(), "Update 1");
}

#[test]
fn heading_band_stays_background() {
    let mut d = display();
    let opts = RenderOptions {
        figsize: FigSize::new(2.0, 2.0),
        title: Some("band".into()),
        ..RenderOptions::default()
    };
    d.render_tiled_matrix(&Matrix::filled(3, 3, 1.0), &opts).unwrap();
    let handle = d.handle(&opts).unwrap();
    let band = handle.canvas().heading_rect();
    assert_eq!(band.height, 10);
    let probe = d.backend().last_probe().unwrap();
    let background = d.config().background;
    for x in 0..200 {
        assert_eq!(probe.pixel(x, band.height / 2), Some(background));
    }
}

#[test]
fn close_clicked_between_calls_recreates_on_the_next_call() {
    let mut d = display();
    let opts = RenderOptions::builder().title("clicked").build();
    let m = Matrix::filled(4, 4, 1.0);

    d.render_tiled_matrix(&m, &opts).unwrap();
    let first = d.handle(&opts).unwrap().id();
    let clicked = d.backend().last_probe().unwrap().clone();
    // 關閉要等視窗處理事件時才會生效
    clicked.request_close();
    assert!(clicked.is_open());

    d.render_tiled_matrix(&m, &opts).unwrap();
    assert!(!clicked.is_open());
    assert_eq!(clicked.presents(), 1);
    assert_ne!(d.handle(&opts).unwrap().id(), first);
    assert_eq!(d.backend().opened(), 2);
    assert_eq!(d.registry().len(), 1);
}

#[test]
fn dense_grid_draws_every_tile_inside_the_surface() {
    let mut d = display();
    let opts = RenderOptions::builder().grid(1, 200).build();
    let m = Matrix::from_fn(1, 200, |_, c| if c % 2 == 0 { 1.0 } else { -1.0 });
    d.render_tiled_matrix(&m, &opts).unwrap();

    let probe = d.backend().last_probe().unwrap().clone();
    let handle = d.handle(&opts).unwrap();
    for (j, cell) in handle.canvas().cells().enumerate() {
        let r = cell.rect();
        assert!(r.x + r.width <= 600, "cell {} leaves the surface: {:?}", j, r);
        let expected = if j % 2 == 0 { Color::WHITE } else { Color::BLACK };
        let (x, y) = center(r);
        assert_eq!(probe.pixel(x, y), Some(expected.to_u32()));
    }
}

#[test]
fn huge_figure_size_is_rejected() {
    let mut d = display();
    let opts = RenderOptions {
        figsize: FigSize::new(1e9, 1e9),
        ..RenderOptions::default()
    };
    let err = d.render_tiled_matrix(&Matrix::zeros(2, 2), &opts).unwrap_err();
    assert!(matches!(err, Error::InvalidFigureSize { .. }));
    assert!(err.is_validation());
    assert!(d.registry().is_empty());
}
