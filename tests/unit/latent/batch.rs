use super::*;

fn batch(rows: usize, dim: usize, data: &[f32]) -> LatentBatch {
    LatentBatch::new(rows, dim, data.to_vec()).unwrap()
}

#[test]
fn new_validates_shape() {
    assert!(LatentBatch::new(0, 4, vec![]).is_err());
    assert!(LatentBatch::new(2, 0, vec![]).is_err());
    assert!(LatentBatch::new(2, 2, vec![0.0; 3]).is_err());

    let b = batch(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    assert_eq!(b.rows(), 2);
    assert_eq!(b.dim(), 3);
    assert_eq!(b.row(1), &[4.0, 5.0, 6.0]);
}

#[test]
fn direction_is_target_minus_current() {
    let a = batch(1, 3, &[1.0, -1.0, 0.5]);
    let b = batch(1, 3, &[3.0, 1.0, 0.5]);
    let d = a.direction_to(&b).unwrap();
    assert_eq!(d.as_slice(), &[2.0, 2.0, 0.0]);
}

#[test]
fn direction_rejects_shape_mismatch() {
    let a = batch(1, 2, &[0.0, 0.0]);
    let b = batch(2, 1, &[0.0, 0.0]);
    assert!(a.direction_to(&b).is_err());
}

#[test]
fn walk_starts_at_current_and_stops_short_of_target() {
    let a = batch(1, 2, &[0.0, 4.0]);
    let b = batch(1, 2, &[4.0, 0.0]);
    let d = a.direction_to(&b).unwrap();

    assert_eq!(a.walk_point(&d, 4, 0).unwrap(), a);
    assert_eq!(a.walk_point(&d, 4, 1).unwrap().as_slice(), &[1.0, 3.0]);
    assert_eq!(a.walk_point(&d, 4, 3).unwrap().as_slice(), &[3.0, 1.0]);
}

#[test]
fn walk_point_rejects_zero_steps() {
    let a = batch(1, 1, &[0.0]);
    let d = batch(1, 1, &[1.0]);
    assert!(a.walk_point(&d, 0, 0).is_err());
}
