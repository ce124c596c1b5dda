use pixel_engine_edit::{CellPos, brushes::bresenham_line};

fn line(from: (i32, i32), to: (i32, i32)) -> Vec<(i32, i32)> {
    bresenham_line(from.into(), to.into()).into_iter().map(Into::into).collect()
}

#[test]
fn test_line_horizontal() {
    assert_eq!(vec![(2, 0), (2, 1), (2, 2), (2, 3)], line((2, 0), (2, 3)));
}

#[test]
fn test_line_vertical_upwards() {
    assert_eq!(vec![(3, 1), (2, 1), (1, 1), (0, 1)], line((3, 1), (0, 1)));
}

#[test]
fn test_line_diagonal() {
    assert_eq!(vec![(0, 0), (1, 1), (2, 2), (3, 3)], line((0, 0), (3, 3)));
}

#[test]
fn test_line_is_connected() {
    let points = bresenham_line(CellPos::new(0, 0), CellPos::new(3, 9));

    assert_eq!(CellPos::new(0, 0), points[0]);
    assert_eq!(CellPos::new(3, 9), *points.last().unwrap());
    for pair in points.windows(2) {
        let step = pair[1] - pair[0];
        assert!(step.row.abs() <= 1 && step.col.abs() <= 1, "gap between {} and {}", pair[0], pair[1]);
    }
}

#[test]
fn test_line_no_duplicates() {
    let points = bresenham_line(CellPos::new(5, 0), CellPos::new(0, 7));
    let mut unique = points.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(points.len(), unique.len());
}
