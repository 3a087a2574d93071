//! Kubische Bézier-Mathematik für gekrümmte Kanten.

use glam::Vec2;

/// Pixel-Versatz der Standard-Steuerpunkte senkrecht zur Sehne.
pub const DEFAULT_HANDLE_OFFSET_PX: f32 = 40.0;

/// Kontrollpolygon einer kubischen Bézier-Kurve `[p0, p1, p2, p3]`.
pub type CubicPoints = [Vec2; 4];

/// Position auf der Kurve bei Parameter `t`.
pub fn point_at(c: &CubicPoints, t: f32) -> Vec2 {
    let u = 1.0 - t;
    c[0] * (u * u * u) + c[1] * (3.0 * u * u * t) + c[2] * (3.0 * u * t * t) + c[3] * (t * t * t)
}

/// Erste Ableitung (Tangente) bei Parameter `t`.
pub fn derivative_at(c: &CubicPoints, t: f32) -> Vec2 {
    let u = 1.0 - t;
    (c[1] - c[0]) * (3.0 * u * u) + (c[2] - c[1]) * (6.0 * u * t) + (c[3] - c[2]) * (3.0 * t * t)
}

/// Tangentenwinkel (Radiant) am Kurvenende, z.B. für Pfeilspitzen.
///
/// Fällt bei degenerierter Ableitung auf die Sehne zurück.
pub fn end_angle(c: &CubicPoints) -> f32 {
    let d = derivative_at(c, 1.0);
    let d = if d.length_squared() > f32::EPSILON {
        d
    } else {
        c[3] - c[0]
    };
    d.y.atan2(d.x)
}

/// Teilt die Kurve bei `t` nach de Casteljau in zwei Teilkurven.
pub fn split(c: &CubicPoints, t: f32) -> (CubicPoints, CubicPoints) {
    let p01 = c[0].lerp(c[1], t);
    let p12 = c[1].lerp(c[2], t);
    let p23 = c[2].lerp(c[3], t);
    let p012 = p01.lerp(p12, t);
    let p123 = p12.lerp(p23, t);
    let mid = p012.lerp(p123, t);
    ([c[0], p01, p012, mid], [mid, p123, p23, c[3]])
}

/// Standard-Steuerpunkte für eine neue Bézier-Kante.
///
/// `cp1 = start + 0.3·d + n·k/scale`, `cp2 = start + 0.7·d − n·k/scale`
/// mit Einheitsnormale `n` und Pixel-Versatz `k`.
pub fn default_control_points(start: Vec2, end: Vec2, offset_px: f32, scale: f32) -> (Vec2, Vec2) {
    let d = end - start;
    let normal = d.perp().normalize_or_zero();
    let offset = normal * (offset_px / scale.max(f32::EPSILON));
    (start + d * 0.3 + offset, start + d * 0.7 - offset)
}

/// Nächster Kurvenparameter zu `target` (Abtastung plus lokale Verfeinerung).
pub fn closest_t(c: &CubicPoints, target: Vec2, samples: usize) -> (f32, f32) {
    let samples = samples.max(4);
    let mut best_t = 0.0;
    let mut best_d = f32::MAX;
    for i in 0..=samples {
        let t = i as f32 / samples as f32;
        let d = point_at(c, t).distance_squared(target);
        if d < best_d {
            best_d = d;
            best_t = t;
        }
    }

    let mut step = 1.0 / samples as f32;
    for _ in 0..16 {
        step *= 0.5;
        for candidate in [best_t - step, best_t + step] {
            let t = candidate.clamp(0.0, 1.0);
            let d = point_at(c, t).distance_squared(target);
            if d < best_d {
                best_d = d;
                best_t = t;
            }
        }
    }
    (best_t, best_d.sqrt())
}

/// Stützpunkte entlang der Kurve (für Hit-Tests und Box-Selektion).
pub fn flatten(c: &CubicPoints, segments: usize) -> Vec<Vec2> {
    let segments = segments.max(1);
    (0..=segments)
        .map(|i| point_at(c, i as f32 / segments as f32))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> CubicPoints {
        [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 20.0),
            Vec2::new(30.0, 20.0),
            Vec2::new(40.0, 0.0),
        ]
    }

    #[test]
    fn endpoints_are_interpolated() {
        let c = sample();
        assert_eq!(point_at(&c, 0.0), c[0]);
        assert_eq!(point_at(&c, 1.0), c[3]);
    }

    #[test]
    fn split_halves_meet_on_curve() {
        let c = sample();
        let (left, right) = split(&c, 0.4);
        let on_curve = point_at(&c, 0.4);
        assert_relative_eq!(left[3].x, on_curve.x, epsilon = 1e-4);
        assert_relative_eq!(right[0].y, on_curve.y, epsilon = 1e-4);
        // Teilkurve reproduziert Originalpunkt
        let probe = point_at(&right, 0.5);
        let expected = point_at(&c, 0.4 + 0.6 * 0.5);
        assert_relative_eq!(probe.x, expected.x, epsilon = 1e-3);
        assert_relative_eq!(probe.y, expected.y, epsilon = 1e-3);
    }

    #[test]
    fn default_control_points_use_normal_offset() {
        let (cp1, cp2) =
            default_control_points(Vec2::ZERO, Vec2::new(100.0, 0.0), 20.0, 2.0);
        assert_relative_eq!(cp1.x, 30.0);
        assert_relative_eq!(cp1.y, 10.0);
        assert_relative_eq!(cp2.x, 70.0);
        assert_relative_eq!(cp2.y, -10.0);
    }

    #[test]
    fn end_angle_follows_last_handle() {
        let c = sample();
        // Ableitung am Ende zeigt von (30,20) nach (40,0)
        let expected = (-20.0f32).atan2(10.0);
        assert_relative_eq!(end_angle(&c), expected, epsilon = 1e-5);
    }

    #[test]
    fn closest_t_finds_midpoint() {
        let c = [
            Vec2::ZERO,
            Vec2::new(10.0, 0.0),
            Vec2::new(20.0, 0.0),
            Vec2::new(30.0, 0.0),
        ];
        let (t, d) = closest_t(&c, Vec2::new(15.0, 3.0), 16);
        assert_relative_eq!(t, 0.5, epsilon = 1e-3);
        assert_relative_eq!(d, 3.0, epsilon = 1e-3);
    }
}
