use super::*;

fn solid_rgb(count: usize, size: usize, rgb: [f32; 3]) -> ImageBatch {
    let plane = size * size;
    let mut data = Vec::with_capacity(count * 3 * plane);
    for _ in 0..count {
        for c in rgb {
            data.extend(std::iter::repeat_n(c, plane));
        }
    }
    ImageBatch::new(count, 3, size, size, data).unwrap()
}

#[test]
fn value_mapping_matches_minus_one_to_one_range() {
    assert_eq!(to_u8(-1.0), 0);
    assert_eq!(to_u8(1.0), 255);
    assert_eq!(to_u8(0.0), 128);
    assert_eq!(to_u8(-5.0), 0);
    assert_eq!(to_u8(5.0), 255);
}

#[test]
fn square_batch_uses_sqrt_per_row_with_padding() {
    // 4 images of 3x3 -> 2x2 tiles, padding 2: 2*(3+2)+2 = 12.
    let img = compose_grid(&solid_rgb(4, 3, [1.0, -1.0, -1.0]), GridOpts::default()).unwrap();
    assert_eq!(img.dimensions(), (12, 12));
    assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255]);
    assert_eq!(img.get_pixel(2, 2).0, [255, 0, 0, 255]);
    assert_eq!(img.get_pixel(5, 2).0, [0, 0, 0, 255]);
    assert_eq!(img.get_pixel(7, 7).0, [255, 0, 0, 255]);
}

#[test]
fn non_square_batch_adds_partial_row() {
    // 5 images -> floor(sqrt(5)) = 2 per row, 3 rows.
    let img = compose_grid(
        &solid_rgb(5, 2, [0.0, 0.0, 0.0]),
        GridOpts {
            nrow: None,
            padding: 1,
        },
    )
    .unwrap();
    assert_eq!(img.dimensions(), (2 * 3 + 1, 3 * 3 + 1));
    // Last row, second slot stays background.
    assert_eq!(img.get_pixel(4, 7).0, [0, 0, 0, 255]);
    assert_eq!(img.get_pixel(1, 7).0, [128, 128, 128, 255]);
}

#[test]
fn grayscale_is_replicated_and_nrow_is_clamped() {
    let batch = ImageBatch::new(2, 1, 1, 1, vec![1.0, -1.0]).unwrap();
    let img = compose_grid(
        &batch,
        GridOpts {
            nrow: Some(8),
            padding: 0,
        },
    )
    .unwrap();
    assert_eq!(img.dimensions(), (2, 1));
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
    assert_eq!(img.get_pixel(1, 0).0, [0, 0, 0, 255]);
}

#[test]
fn single_image_without_padding_is_the_image() {
    let img = compose_grid(
        &solid_rgb(1, 4, [-1.0, 1.0, 0.0]),
        GridOpts {
            nrow: None,
            padding: 0,
        },
    )
    .unwrap();
    assert_eq!(img.dimensions(), (4, 4));
    assert!(img.pixels().all(|p| p.0 == [0, 255, 128, 255]));
}
