use basins::engine::field::BasinField;
use basins::engine::root_finder::RootFinder;
use basins::graphics::canvas::ImageCanvas;
use basins::graphics::color;
use basins::models::function::descriptor::FunctionDescriptor;
use basins::models::function::polynomial::Polynomial;
use basins::models::function::root_product::RootProduct;
use basins::models::resolution::Resolution;
use basins::models::viewport::Viewport;
use complex_rs::complex::Complex;

fn configure(field: &mut BasinField, descriptor: FunctionDescriptor, zoom: f64, quality: f64) {
    field
        .configure(
            descriptor.target(),
            Viewport::new(Complex::new(0.0, 0.0), zoom),
            quality,
            1e-3,
            RootFinder::default(),
        )
        .unwrap();
}

#[test]
fn two_root_polynomial_discovers_both_basins() {
    // f(z) = (z - 1)(z + 2); 96x64 raster at zoom 16 spans re in [-3, 3],
    // so both roots are in view.
    let mut field = BasinField::new();
    configure(
        &mut field,
        FunctionDescriptor::RootProduct(RootProduct::new(vec![
            Complex::new(1.0, 0.0),
            Complex::new(-2.0, 0.0),
        ])),
        16.0,
        1.0,
    );

    let resolution = Resolution::new(96, 64);
    field.compute_field(resolution).unwrap();

    assert_eq!(field.roots().len(), 2, "exactly two basins expected");
    for expected in [Complex::new(1.0, 0.0), Complex::new(-2.0, 0.0)] {
        assert!(
            field
                .roots()
                .iter()
                .any(|root| (*root - expected).norm() <= 1e-4),
            "no catalog entry near {:?}",
            expected
        );
    }
}

#[test]
fn pixels_near_a_root_take_that_root_gradient() {
    let mut field = BasinField::new();
    configure(
        &mut field,
        FunctionDescriptor::RootProduct(RootProduct::new(vec![
            Complex::new(1.0, 0.0),
            Complex::new(-2.0, 0.0),
        ])),
        16.0,
        1.0,
    );

    let resolution = Resolution::new(96, 64);
    field.compute_field(resolution).unwrap();

    // A pixel on top of each root converges immediately, so its sample sits
    // near the bright end of its own root's gradient and the two differ.
    let (row_a, col_a) = field.plane_to_pixel(Complex::new(1.0, 0.0), resolution);
    let (row_b, col_b) = field.plane_to_pixel(Complex::new(-2.0, 0.0), resolution);
    let sample_a = field
        .sample_at(col_a as u32, row_a as u32, resolution)
        .unwrap();
    let sample_b = field
        .sample_at(col_b as u32, row_b as u32, resolution)
        .unwrap();

    assert_ne!(sample_a.root_index, sample_b.root_index);
    let color_a = field.classify_color(&sample_a);
    let color_b = field.classify_color(&sample_b);
    assert_ne!(color_a, color::BACKGROUND);
    assert_ne!(color_b, color::BACKGROUND);
    assert_ne!(color_a, color_b);
}

#[test]
fn constant_function_renders_only_background() {
    // f(z) = 1 everywhere: nothing converges, the catalog stays empty and
    // every pixel keeps the background color.
    let mut field = BasinField::new();
    configure(
        &mut field,
        FunctionDescriptor::Polynomial(Polynomial::new(vec![Complex::new(1.0, 0.0)])),
        16.0,
        1.0,
    );

    let mut canvas = ImageCanvas::new(32, 24);
    field.render(&mut canvas).unwrap();

    assert!(field.roots().is_empty());
    for row in 0..24 {
        for col in 0..32 {
            assert_eq!(canvas.pixel(col, row), color::BACKGROUND);
        }
    }
}

#[test]
fn unconfigured_render_leaves_the_canvas_untouched() {
    let mut field = BasinField::new();
    let mut canvas = ImageCanvas::new(16, 16);
    field.render(&mut canvas).unwrap();

    // ImageCanvas starts fully transparent; a render pass would have made
    // every pixel opaque.
    assert_eq!(canvas.pixel(8, 8), [0, 0, 0, 0]);
}

#[test]
fn render_marks_every_discovered_root() {
    let mut field = BasinField::new();
    configure(
        &mut field,
        FunctionDescriptor::RootProduct(RootProduct::new(vec![
            Complex::new(1.0, 0.0),
            Complex::new(-2.0, 0.0),
        ])),
        16.0,
        1.0,
    );

    let mut canvas = ImageCanvas::new(96, 64);
    field.render(&mut canvas).unwrap();

    for root in field.roots().to_vec() {
        let (row, col) = field.plane_to_pixel(root, Resolution::new(96, 64));
        assert_eq!(
            canvas.pixel(col as u32, row as u32),
            [0xff, 0xff, 0xff, 0xff],
            "expected a marker over the root at {:?}",
            root
        );
    }
}

#[test]
fn coarse_quality_shares_samples_across_cells() {
    let mut field = BasinField::new();
    configure(
        &mut field,
        FunctionDescriptor::RootProduct(RootProduct::new(vec![
            Complex::new(1.0, 0.0),
            Complex::new(-2.0, 0.0),
        ])),
        16.0,
        0.25,
    );

    let resolution = Resolution::new(64, 64);
    field.compute_field(resolution).unwrap();

    // quality 0.25 over 64 pixels -> cells of width 4
    let anchor = field.quantize_pixel(5, 9, resolution);
    assert_eq!(anchor, field.quantize_pixel(7, 11, resolution));
    assert_eq!(
        field.sample_at(5, 9, resolution).unwrap().root_index,
        field.sample_at(7, 11, resolution).unwrap().root_index
    );
}
