use super::*;

fn step_plane(width: u32, height: u32, split_x: u32, lo: u8, hi: u8) -> Vec<u8> {
    let mut plane = vec![lo; (width * height) as usize];
    for y in 0..height {
        for x in split_x..width {
            plane[(y * width + x) as usize] = hi;
        }
    }
    plane
}

#[test]
fn flat_planes_have_no_edges() {
    for fill in [0u8, 255u8] {
        let plane = vec![fill; 7 * 5];
        let out = detect_edges(&plane, 7, 5, 250, 255).unwrap();
        assert!(out.iter().all(|&v| v == 0));
    }
}

#[test]
fn vertical_step_yields_one_edge_column() {
    let (w, h) = (8u32, 5u32);
    let plane = step_plane(w, h, 4, 0, 255);
    let out = detect_edges(&plane, w, h, 250, 255).unwrap();

    for y in 0..h {
        let row = &out[(y * w) as usize..((y + 1) * w) as usize];
        let cols: Vec<usize> = row
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v != 0)
            .map(|(x, _)| x)
            .collect();
        assert_eq!(cols.len(), 1, "row {y} should have exactly one edge pixel");
        assert!((3..=4).contains(&cols[0]), "edge must sit on the step");
    }
}

#[test]
fn binary_block_contour_is_thin_and_local() {
    let (w, h) = (11u32, 11u32);
    let mut plane = vec![0u8; (w * h) as usize];
    for y in 3..8u32 {
        for x in 3..8u32 {
            plane[(y * w + x) as usize] = 255;
        }
    }

    let out = detect_edges(&plane, w, h, 250, 255).unwrap();

    let edges: Vec<(u32, u32)> = (0..h)
        .flat_map(|y| (0..w).map(move |x| (x, y)))
        .filter(|&(x, y)| out[(y * w + x) as usize] != 0)
        .collect();
    assert!(!edges.is_empty());
    assert_eq!(out[(5 * w + 5) as usize], 0, "block interior is not an edge");
    for &(x, y) in &edges {
        assert!(
            (2..=8).contains(&x) && (2..=8).contains(&y),
            "edge ({x},{y}) strays from the block boundary"
        );
    }
}

#[test]
fn diagonal_step_marks_connected_contour() {
    let (w, h) = (8u32, 8u32);
    let mut plane = vec![0u8; (w * h) as usize];
    for y in 0..h {
        for x in 0..w {
            if x + y >= 6 {
                plane[(y * w + x) as usize] = 255;
            }
        }
    }

    let out = detect_edges(&plane, w, h, 250, 255).unwrap();

    let edges: Vec<(u32, u32)> = (0..h)
        .flat_map(|y| (0..w).map(move |x| (x, y)))
        .filter(|&(x, y)| out[(y * w + x) as usize] != 0)
        .collect();
    assert!(edges.len() >= 5);
    for &(x, y) in &edges {
        let dist = (x + y) as i32 - 6;
        assert!(dist.abs() <= 1, "edge ({x},{y}) strays from the diagonal");
    }
}

#[test]
fn thresholds_gate_weak_gradients() {
    let (w, h) = (8u32, 5u32);
    let plane = step_plane(w, h, 4, 0, 100); // step magnitude 400

    let none = detect_edges(&plane, w, h, 250, 500).unwrap();
    assert!(none.iter().all(|&v| v == 0), "no seed above high threshold");

    let some = detect_edges(&plane, w, h, 250, 399).unwrap();
    assert!(some.iter().any(|&v| v != 0), "magnitude above high seeds edges");
}

#[test]
fn rejects_bad_inputs() {
    assert!(detect_edges(&[0u8; 5], 2, 2, 250, 255).is_err());
    assert!(detect_edges(&[0u8; 4], 2, 2, 255, 250).is_err());
}

#[test]
fn zero_sized_plane_is_ok() {
    let out = detect_edges(&[], 0, 3, 250, 255).unwrap();
    assert!(out.is_empty());
}
