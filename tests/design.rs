use fillr_icons::design::{draw_icon, Palette, DETAILED_MIN_SIZE};
use image::{Rgba, RgbaImage};

fn is_yellowish(pixel: &Rgba<u8>) -> bool {
    pixel[0] > 150 && pixel[1] > 120 && pixel[0] > pixel[2] && pixel[1] > pixel[2]
}

#[test]
fn test_icon_dimensions() {
    let palette = Palette::default();
    for size in [16, 32, 48, 128, 256] {
        let icon = draw_icon(size, &palette).expect("Failed to draw icon");
        assert_eq!(icon.width(), size, "width of {size}px icon");
        assert_eq!(icon.height(), size, "height of {size}px icon");
    }
}

#[test]
fn test_zero_size_is_rejected() {
    assert!(draw_icon(0, &Palette::default()).is_err());
}

#[test]
fn test_corners_are_transparent() {
    let palette = Palette::default();
    for size in [16, 48, 128] {
        let icon = draw_icon(size, &palette).unwrap();
        let last = size - 1;
        for (x, y) in [(0, 0), (last, 0), (0, last), (last, last)] {
            assert_eq!(
                icon.get_pixel(x, y)[3],
                0,
                "{size}px icon should be transparent at ({x}, {y})"
            );
        }
    }
}

#[test]
fn test_background_tile() {
    let palette = Palette::default();
    let icon = draw_icon(128, &palette).unwrap();

    // Below the gradient and left of the form lines and bolt
    assert_eq!(*icon.get_pixel(20, 110), palette.background);
    assert_eq!(*icon.get_pixel(110, 110), palette.background);
}

#[test]
fn test_highlight_gradient_lightens_top() {
    let palette = Palette::default();
    let icon = draw_icon(128, &palette).unwrap();

    let top = icon.get_pixel(20, 9);
    assert_eq!(top[3], 255);
    assert!(
        top[0] > palette.background[0] && top[1] > palette.background[1],
        "top of tile should be lighter than the background, got {top:?}"
    );
}

#[test]
fn test_form_lines_on_large_icon() {
    let icon = draw_icon(128, &Palette::default()).unwrap();

    // First bar starts at y = 32 and is 4px tall
    let bar = icon.get_pixel(40, 33);
    assert_eq!(bar[3], 255);
    assert!(bar[0] > 150 && bar[1] > 150, "form line should be whitish, got {bar:?}");

    // Gap between the first and second bar
    let gap = icon.get_pixel(40, 44);
    assert!(gap[0] < 150, "gap should stay blue, got {gap:?}");
}

#[test]
fn test_form_line_on_small_icon() {
    let palette = Palette::default();
    let icon = draw_icon(16, &palette).unwrap();

    let bar = icon.get_pixel(5, 8);
    assert!(bar[0] > 150, "16px form line should be whitish, got {bar:?}");

    let below = icon.get_pixel(3, 11);
    assert!(below[0] < 100, "below the bar should stay blue, got {below:?}");
}

#[test]
fn test_bolt_on_large_icon() {
    let icon = draw_icon(128, &Palette::default()).unwrap();

    // On the first bolt segment, inside the core highlight
    let core = icon.get_pixel(64, 41);
    assert!(is_yellowish(core), "bolt core expected, got {core:?}");
    assert!(core[2] > 100, "core highlight is pale yellow, got {core:?}");
}

#[test]
fn test_bolt_on_small_icon() {
    let icon = draw_icon(16, &Palette::default()).unwrap();
    let bolt = icon.get_pixel(7, 6);
    assert!(is_yellowish(bolt), "bolt expected, got {bolt:?}");
}

#[test]
fn test_detailed_threshold() {
    let palette = Palette::default();
    let small = draw_icon(DETAILED_MIN_SIZE - 1, &palette).unwrap();
    let large = draw_icon(DETAILED_MIN_SIZE, &palette).unwrap();

    // Only the detailed variant carries a form line at size/4
    let form_row = |icon: &RgbaImage, size: u32| *icon.get_pixel(size * 3 / 10, size / 4);
    let small_px = form_row(&small, DETAILED_MIN_SIZE - 1);
    let large_px = form_row(&large, DETAILED_MIN_SIZE);
    assert!(large_px[0] > small_px[0] + 50, "{large_px:?} vs {small_px:?}");
}

#[test]
fn test_custom_palette() {
    let palette = Palette {
        background: Rgba([200, 30, 30, 255]),
        ..Palette::default()
    };
    let icon = draw_icon(128, &palette).unwrap();
    assert_eq!(*icon.get_pixel(20, 110), Rgba([200, 30, 30, 255]));
}

#[test]
fn test_drawing_is_deterministic() {
    let palette = Palette::default();
    assert_eq!(
        draw_icon(48, &palette).unwrap(),
        draw_icon(48, &palette).unwrap()
    );
}
