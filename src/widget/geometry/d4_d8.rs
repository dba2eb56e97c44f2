//! Four- and eight-sided dice
//!
//! One provider covers both: up to four faces are laid out on a tetrahedron,
//! five to eight on an octahedron. Only `face_count` face elements are
//! rendered, so a d5 or d7 is an octahedron with the extra faces left blank.

use super::layout::{face_markup, ordered, stylesheet, triangle_rules, FaceLayout};

const TETRA_EDGE: f64 = 0.9;
const OCTA_EDGE: f64 = 0.75;

/// Pitch of a slanted tetrahedron face: asin(1/3)
const TETRA_PITCH: f64 = 19.4712;
/// Pitch of an octahedron face normal: atan(1/sqrt(2))
const OCTA_PITCH: f64 = 35.2644;

pub fn uses_tetrahedron(face_count: u32) -> bool {
    face_count <= 4
}

fn edge(face_count: u32) -> f64 {
    if uses_tetrahedron(face_count) {
        TETRA_EDGE
    } else {
        OCTA_EDGE
    }
}

fn tetrahedron() -> Vec<FaceLayout> {
    let radius = TETRA_EDGE / (2.0 * 6f64.sqrt());
    let mut faces: Vec<FaceLayout> = (0..3)
        .map(|k| FaceLayout::facing(120.0 * k as f64, TETRA_PITCH, radius))
        .collect();
    faces.push(FaceLayout::facing(0.0, -90.0, radius).turned(180.0));
    faces
}

fn octahedron() -> Vec<FaceLayout> {
    let radius = OCTA_EDGE / 6f64.sqrt();
    let mut labelled = Vec::with_capacity(8);
    // Upper faces 1..=4 point up; face 9 - n sits opposite face n
    for k in 0..4u32 {
        let yaw = 45.0 + 90.0 * k as f64;
        labelled.push((k + 1, FaceLayout::facing(yaw, OCTA_PITCH, radius)));
    }
    for j in 0..4u32 {
        let yaw = 45.0 + 90.0 * j as f64;
        let opposite = (j + 2) % 4;
        labelled.push((
            8 - opposite,
            FaceLayout::facing(yaw, -OCTA_PITCH, radius).turned(180.0),
        ));
    }
    ordered(labelled)
}

pub fn faces(face_count: u32) -> Vec<FaceLayout> {
    let layouts = if uses_tetrahedron(face_count) {
        tetrahedron()
    } else {
        octahedron()
    };
    layouts.into_iter().take(face_count as usize).collect()
}

pub fn html(face_count: u32) -> String {
    face_markup(face_count)
}

pub fn css(face_count: u32) -> String {
    stylesheet(&triangle_rules(edge(face_count)), &faces(face_count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::geometry::layout::Transform;

    #[test]
    fn test_small_counts_use_tetrahedron() {
        assert!(uses_tetrahedron(4));
        assert!(uses_tetrahedron(2));
        assert!(!uses_tetrahedron(5));
        assert!(!uses_tetrahedron(8));
    }

    #[test]
    fn test_face_count_is_respected() {
        assert_eq!(faces(4).len(), 4);
        assert_eq!(faces(7).len(), 7);
        assert_eq!(faces(8).len(), 8);
        assert_eq!(html(8).matches("class=\"face ").count(), 8);
    }

    #[test]
    fn test_octahedron_opposite_faces_sum_to_nine() {
        let faces = octahedron();
        for n in 1..=4usize {
            let upper = &faces[n - 1];
            let lower = &faces[8 - n];
            let Transform::RotateY(upper_yaw) = upper.placement[0] else {
                panic!("expected yaw first");
            };
            let Transform::RotateY(lower_yaw) = lower.placement[0] else {
                panic!("expected yaw first");
            };
            assert_eq!((lower_yaw - upper_yaw).abs(), 180.0, "face {n}");
        }
    }
}
