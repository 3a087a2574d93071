//! Geometrie-Hilfsfunktionen: Rechtecke, Segment-Schnitte, Polygone, Rotation.

use glam::{Affine2, Mat2, Vec2};

/// Toleranz für Determinanten-Tests (parallel/entartet).
const DET_EPSILON: f32 = 1e-9;

/// Achsen-ausgerichtetes Rechteck in Canvas-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    /// Baut ein Rechteck aus zwei beliebigen Eckpunkten.
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Enger Rahmen um alle Positionen (`None` bei leerer Eingabe).
    pub fn bounding<I: IntoIterator<Item = Vec2>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some(Self { min, max })
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Vergrößert das Rechteck in alle Richtungen.
    pub fn expand(&self, margin: f32) -> Self {
        Self {
            min: self.min - Vec2::splat(margin),
            max: self.max + Vec2::splat(margin),
        }
    }

    pub fn translate(&self, delta: Vec2) -> Self {
        Self {
            min: self.min + delta,
            max: self.max + delta,
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Die vier Seiten im Uhrzeigersinn.
    pub fn sides(&self) -> [(Vec2, Vec2); 4] {
        let tl = self.min;
        let tr = Vec2::new(self.max.x, self.min.y);
        let br = self.max;
        let bl = Vec2::new(self.min.x, self.max.y);
        [(tl, tr), (tr, br), (br, bl), (bl, tl)]
    }
}

/// Parametrischer Schnitt zweier Strecken über die Determinante.
///
/// Parallele oder entartete Strecken gelten nie als Treffer.
pub fn segments_intersect(p1: Vec2, p2: Vec2, q1: Vec2, q2: Vec2) -> bool {
    let r = p2 - p1;
    let s = q2 - q1;
    let det = r.perp_dot(s);
    if det.abs() < DET_EPSILON {
        return false;
    }
    let qp = q1 - p1;
    let t = qp.perp_dot(s) / det;
    let u = qp.perp_dot(r) / det;
    (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u)
}

/// Schneidet die Strecke eine der vier Rechteckseiten?
pub fn segment_crosses_rect(a: Vec2, b: Vec2, rect: &Rect) -> bool {
    rect.sides()
        .iter()
        .any(|(s, e)| segments_intersect(a, b, *s, *e))
}

/// Projektion von `p` auf die Strecke `a`–`b` als Parameter in [0, 1].
pub fn project_onto_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return 0.0;
    }
    ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0)
}

/// Abstand eines Punkts zur Strecke `a`–`b`.
pub fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let t = project_onto_segment(p, a, b);
    p.distance(a.lerp(b, t))
}

/// Punkt-in-Polygon-Test (Strahlverfahren, Polygon implizit geschlossen).
pub fn point_in_polygon(p: Vec2, polygon: &[Vec2]) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let (vi, vj) = (polygon[i], polygon[j]);
        if (vi.y > p.y) != (vj.y > p.y) {
            let x_cross = (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x;
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Arithmetisches Mittel der Positionen.
pub fn centroid(points: &[Vec2]) -> Option<Vec2> {
    if points.is_empty() {
        return None;
    }
    let sum: Vec2 = points.iter().copied().sum();
    Some(sum / points.len() as f32)
}

/// Rotationsmatrix für Grad; Vielfache von 90° werden exakt abgebildet.
fn rotation_matrix(degrees: f32) -> Mat2 {
    let wrapped = degrees.rem_euclid(360.0);
    let (sin, cos) = if wrapped == 0.0 {
        (0.0, 1.0)
    } else if wrapped == 90.0 {
        (1.0, 0.0)
    } else if wrapped == 180.0 {
        (0.0, -1.0)
    } else if wrapped == 270.0 {
        (-1.0, 0.0)
    } else {
        wrapped.to_radians().sin_cos()
    };
    Mat2::from_cols(Vec2::new(cos, sin), Vec2::new(-sin, cos))
}

/// Affine Rotation um ein Zentrum.
pub fn rotation_about(center: Vec2, degrees: f32) -> Affine2 {
    Affine2::from_translation(center)
        * Affine2::from_mat2(rotation_matrix(degrees))
        * Affine2::from_translation(-center)
}

/// Ähnlichkeitstransformation, die Strecke `a0`–`b0` auf `a1`–`b1` abbildet.
///
/// Rotation, gleichmäßige Skalierung und Verschiebung; bei entarteter
/// Ausgangsstrecke bleibt nur die Verschiebung von `a0` nach `a1`.
pub fn similarity_between(a0: Vec2, b0: Vec2, a1: Vec2, b1: Vec2) -> Affine2 {
    let d0 = b0 - a0;
    let d1 = b1 - a1;
    let len0_sq = d0.length_squared();
    if len0_sq <= f32::EPSILON {
        return Affine2::from_translation(a1 - a0);
    }
    // Komplexe Division d1 / d0 liefert cos·s und sin·s
    let cos = d0.dot(d1) / len0_sq;
    let sin = d0.perp_dot(d1) / len0_sq;
    let linear = Mat2::from_cols(Vec2::new(cos, sin), Vec2::new(-sin, cos));
    Affine2::from_translation(a1) * Affine2::from_mat2(linear) * Affine2::from_translation(-a0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn crossing_segments_intersect() {
        assert!(segments_intersect(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
            Vec2::new(10.0, 0.0),
        ));
    }

    #[test]
    fn parallel_segments_never_intersect() {
        assert!(!segments_intersect(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(5.0, 0.0),
        ));
    }

    #[test]
    fn segment_through_rect_crosses_sides() {
        let rect = Rect::from_corners(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(segment_crosses_rect(
            Vec2::new(-5.0, 5.0),
            Vec2::new(15.0, 5.0),
            &rect
        ));
        assert!(!segment_crosses_rect(
            Vec2::new(-5.0, -5.0),
            Vec2::new(-1.0, 20.0),
            &rect
        ));
    }

    #[test]
    fn distance_to_segment_clamps_to_endpoints() {
        let d = distance_to_segment(Vec2::new(13.0, 4.0), Vec2::ZERO, Vec2::new(10.0, 0.0));
        assert_relative_eq!(d, 5.0);
    }

    #[test]
    fn point_in_square() {
        let square = [
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 0.0),
            Vec2::new(4.0, 4.0),
            Vec2::new(0.0, 4.0),
        ];
        assert!(point_in_polygon(Vec2::new(2.0, 2.0), &square));
        assert!(!point_in_polygon(Vec2::new(5.0, 2.0), &square));
    }

    #[test]
    fn quarter_turn_is_exact() {
        let rot = rotation_about(Vec2::new(1.0, 1.0), 90.0);
        let p = rot.transform_point2(Vec2::new(3.0, 1.0));
        assert_eq!(p, Vec2::new(1.0, 3.0));
    }

    #[test]
    fn similarity_maps_endpoints() {
        let a0 = Vec2::new(0.0, 0.0);
        let b0 = Vec2::new(10.0, 0.0);
        let a1 = Vec2::new(5.0, 5.0);
        let b1 = Vec2::new(5.0, 25.0);
        let t = similarity_between(a0, b0, a1, b1);
        let mapped_b = t.transform_point2(b0);
        assert_relative_eq!(mapped_b.x, b1.x, epsilon = 1e-4);
        assert_relative_eq!(mapped_b.y, b1.y, epsilon = 1e-4);
        // Mittelpunkt bleibt Mittelpunkt
        let mid = t.transform_point2(Vec2::new(5.0, 0.0));
        assert_relative_eq!(mid.x, 5.0, epsilon = 1e-4);
        assert_relative_eq!(mid.y, 15.0, epsilon = 1e-4);
    }
}
