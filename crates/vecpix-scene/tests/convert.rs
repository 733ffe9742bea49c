use std::fs;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use tempfile::TempDir;
use vecpix_scene::prelude::*;

const RED: [u8; 4] = [255, 0, 0, 255];
const BLUE: [u8; 4] = [0, 0, 255, 255];
const WHITE: [u8; 4] = [255, 255, 255, 255];

fn write_svg(dir: &TempDir, name: &str, src: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, src).unwrap();
    path
}

fn run(src: &str) -> RgbaImage {
    let dir = TempDir::new().unwrap();
    let input = write_svg(&dir, "in.svg", src);
    let output = dir.path().join("out.png");
    convert(&input, &output).unwrap();
    read_png(&output)
}

fn read_png(path: &Path) -> RgbaImage {
    image::open(path).unwrap().to_rgba8()
}

fn px(img: &RgbaImage, x: u32, y: u32) -> [u8; 4] {
    img.get_pixel(x, y).0
}

fn count(img: &RgbaImage, color: [u8; 4]) -> usize {
    img.pixels().filter(|p| p.0 == color).count()
}

// ── scenarios ─────────────────────────────────────────────────────────────

#[test]
fn filled_disk() {
    let img = run(r#"<svg width="100" height="100"><circle cx="50" cy="50" r="10" fill="red"/></svg>"#);
    assert_eq!(img.dimensions(), (100, 100));

    for y in 0..100u32 {
        for x in 0..100u32 {
            let (dx, dy) = (x as i64 - 50, y as i64 - 50);
            let expected = if dx * dx + dy * dy <= 100 { RED } else { WHITE };
            assert_eq!(px(&img, x, y), expected, "pixel ({x}, {y})");
        }
    }
}

#[test]
fn scaled_rect_covers_doubled_box() {
    let img = run(
        r#"<svg width="30" height="30">
            <rect x="0" y="0" width="10" height="5" fill="blue" transform="scale(2)"/>
        </svg>"#,
    );
    assert_eq!(count(&img, BLUE), 20 * 10);
    assert_eq!(px(&img, 0, 0), BLUE);
    assert_eq!(px(&img, 19, 9), BLUE);
    assert_eq!(px(&img, 20, 9), WHITE);
    assert_eq!(px(&img, 19, 10), WHITE);
}

#[test]
fn rotated_polygon_outline() {
    let img = run(
        r#"<svg width="12" height="12">
            <polygon points="0,0 10,0 5,10" fill="red" transform="rotate(180)" transform-origin="5 5"/>
        </svg>"#,
    );
    // base edge moved from y=0 to y=10, apex from (5,10) to (5,0)
    for x in 0..=10 {
        assert_eq!(px(&img, x, 10), RED, "base pixel {x}");
    }
    assert_eq!(px(&img, 5, 0), RED);
    assert_eq!(px(&img, 5, 5), WHITE, "outline only, interior stays background");
    assert_eq!(px(&img, 2, 0), WHITE);
}

#[test]
fn translated_group_moves_every_child() {
    let img = run(
        r#"<svg width="40" height="40">
            <g transform="translate(5,5)">
                <circle cx="10" cy="10" r="2" fill="red"/>
                <rect x="20" y="20" width="3" height="3" fill="blue"/>
            </g>
        </svg>"#,
    );
    assert_eq!(px(&img, 15, 15), RED);
    assert_eq!(px(&img, 10, 10), WHITE);
    assert_eq!(px(&img, 25, 25), BLUE);
    assert_eq!(px(&img, 27, 27), BLUE);
    assert_eq!(px(&img, 28, 28), WHITE);
    assert_eq!(count(&img, BLUE), 9);
}

#[test]
fn malformed_points_write_nothing() {
    let dir = TempDir::new().unwrap();
    let input = write_svg(
        &dir,
        "bad.svg",
        r#"<svg width="10" height="10"><polyline points="0,0 a,1 5,5" stroke="red"/></svg>"#,
    );
    let output = dir.path().join("out.png");

    let err = convert(&input, &output).unwrap_err();
    assert!(matches!(err.downcast_ref::<SceneError>(), Some(SceneError::InvalidPoints { .. })));
    assert!(format!("{err:#}").contains("a,1"));
    assert!(!output.exists());
}

// ── pipeline ──────────────────────────────────────────────────────────────

#[test]
fn missing_input_is_an_error() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.png");
    let err = convert(dir.path().join("nope.svg"), &output).unwrap_err();
    assert!(format!("{err:#}").contains("nope.svg"));
    assert!(!output.exists());
}

#[test]
fn non_svg_root_is_rejected() {
    let dir = TempDir::new().unwrap();
    let input = write_svg(&dir, "in.svg", r#"<html width="10" height="10"/>"#);
    let output = dir.path().join("out.png");
    assert!(convert(&input, &output).is_err());
    assert!(!output.exists());
}

#[test]
fn unknown_elements_do_not_paint() {
    let img = run(
        r#"<svg width="10" height="10">
            <title>drawing</title>
            <path d="M0 0 L9 9" stroke="red"/>
            <line x1="0" y1="9" x2="9" y2="9" stroke="blue"/>
        </svg>"#,
    );
    assert_eq!(count(&img, RED), 0);
    assert_eq!(count(&img, BLUE), 10);
}

#[test]
fn unknown_color_paints_nothing() {
    let img = run(r#"<svg width="10" height="10"><circle cx="5" cy="5" r="3" fill="chartreusey"/></svg>"#);
    assert_eq!(count(&img, WHITE), 100);
}

#[test]
fn custom_background() {
    let dir = TempDir::new().unwrap();
    let input = write_svg(&dir, "in.svg", r#"<svg width="4" height="4"/>"#);
    let output = dir.path().join("out.png");

    let config = ConvertConfig::default().background(Color::BLACK);
    convert_with(&config, &input, &output).unwrap();

    let img = read_png(&output);
    assert!(img.pixels().all(|p| p.0 == [0, 0, 0, 255]));
}
