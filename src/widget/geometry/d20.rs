//! Twenty-sided die (icosahedron)
//!
//! Five faces around the top vertex, two belts of five, five around the
//! bottom vertex. Opposite faces sum to 21.

use super::layout::{face_markup, ordered, stylesheet, triangle_rules, FaceLayout};

const EDGE: f64 = 0.5;
/// Inradius of an icosahedron per unit edge
const INRADIUS_RATIO: f64 = 0.7558;
const CAP_PITCH: f64 = 52.6226;
const BELT_PITCH: f64 = 10.8123;

pub fn faces() -> Vec<FaceLayout> {
    let radius = EDGE * INRADIUS_RATIO;
    let mut labelled = Vec::with_capacity(20);

    for k in 0..5u32 {
        let on_axis = 72.0 * k as f64;
        let off_axis = 36.0 + on_axis;
        let opposite = (k + 3) % 5;

        labelled.push((1 + k, FaceLayout::facing(on_axis, CAP_PITCH, radius)));
        labelled.push((
            6 + k,
            FaceLayout::facing(on_axis, BELT_PITCH, radius).turned(180.0),
        ));
        labelled.push((
            15 - opposite,
            FaceLayout::facing(off_axis, -BELT_PITCH, radius),
        ));
        labelled.push((
            20 - opposite,
            FaceLayout::facing(off_axis, -CAP_PITCH, radius).turned(180.0),
        ));
    }

    ordered(labelled)
}

pub fn html() -> String {
    face_markup(20)
}

pub fn css() -> String {
    stylesheet(&triangle_rules(EDGE), &faces())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::geometry::layout::Transform;

    fn yaw_pitch(face: &FaceLayout) -> (f64, f64) {
        match (face.placement[0], face.placement[1]) {
            (Transform::RotateY(yaw), Transform::RotateX(pitch)) => (yaw, pitch),
            other => panic!("unexpected placement {other:?}"),
        }
    }

    #[test]
    fn test_twenty_distinct_faces() {
        let faces = faces();
        assert_eq!(faces.len(), 20);
        for (i, a) in faces.iter().enumerate() {
            for b in faces.iter().skip(i + 1) {
                assert_ne!(yaw_pitch(a), yaw_pitch(b));
            }
        }
    }

    #[test]
    fn test_opposite_faces_sum_to_twenty_one() {
        let faces = faces();
        for n in 1..=10usize {
            let (yaw_a, pitch_a) = yaw_pitch(&faces[n - 1]);
            let (yaw_b, pitch_b) = yaw_pitch(&faces[21 - n - 1]);
            assert_eq!(pitch_a, -pitch_b, "face {n}");
            assert_eq!((yaw_b - yaw_a).rem_euclid(360.0), 180.0, "face {n}");
        }
    }
}
