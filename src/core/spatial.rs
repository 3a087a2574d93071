//! Spatial-Index (KD-Tree) für schnelle Punkt-Abfragen.

use glam::Vec2;
use indexmap::IndexMap;
use kiddo::{KdTree, SquaredEuclidean};

use super::MapPoint;

/// Ergebnis einer Distanzabfrage gegen den Spatial-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialMatch {
    /// ID des gefundenen Punkts
    pub point_id: u64,
    /// Euklidische Distanz zum Suchpunkt
    pub distance: f32,
}

/// Read-only Spatial-Index über allen Punkten einer Topologie.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    tree: KdTree<f64, 2>,
    point_ids: Vec<u64>,
    positions: Vec<Vec2>,
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::empty()
    }
}

impl SpatialIndex {
    /// Erstellt einen leeren Spatial-Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            point_ids: Vec::new(),
            positions: Vec::new(),
        }
    }

    /// Baut einen neuen Index aus den übergebenen Punkten.
    pub fn from_points(points: &IndexMap<u64, MapPoint>) -> Self {
        let point_ids: Vec<u64> = points.keys().copied().collect();
        let positions: Vec<Vec2> = points.values().map(|p| p.position).collect();
        let entries: Vec<[f64; 2]> = positions
            .iter()
            .map(|p| [p.x as f64, p.y as f64])
            .collect();

        Self {
            tree: (&entries).into(),
            point_ids,
            positions,
        }
    }

    pub fn len(&self) -> usize {
        self.point_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.point_ids.is_empty()
    }

    /// Findet den nächsten Punkt zur gegebenen Canvas-Position.
    pub fn nearest(&self, query: Vec2) -> Option<SpatialMatch> {
        if self.is_empty() {
            return None;
        }

        let result = self
            .tree
            .nearest_one::<SquaredEuclidean>(&[query.x as f64, query.y as f64]);
        let point_id = *self.point_ids.get(result.item as usize)?;

        Some(SpatialMatch {
            point_id,
            distance: (result.distance as f32).sqrt(),
        })
    }

    /// Findet alle Punkte innerhalb eines Radius, sortiert nach Distanz.
    pub fn within_radius(&self, query: Vec2, radius: f32) -> Vec<SpatialMatch> {
        if self.is_empty() || radius.is_sign_negative() {
            return Vec::new();
        }

        let mut results = self
            .tree
            .within::<SquaredEuclidean>(&[query.x as f64, query.y as f64], (radius * radius) as f64)
            .into_iter()
            .filter_map(|entry| {
                let point_id = *self.point_ids.get(entry.item as usize)?;
                Some(SpatialMatch {
                    point_id,
                    distance: (entry.distance as f32).sqrt(),
                })
            })
            .collect::<Vec<_>>();

        results.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        results
    }

    /// Findet alle Punkte, deren Zentrum im Rechteck liegt.
    ///
    /// KD-Tree-Vorfilter über den Umkreis, danach exakte Rechteck-Prüfung.
    pub fn within_rect(&self, min: Vec2, max: Vec2) -> Vec<u64> {
        if self.is_empty() {
            return Vec::new();
        }

        let center_x = (min.x + max.x) as f64 * 0.5;
        let center_y = (min.y + max.y) as f64 * 0.5;
        let half_w = (max.x - min.x) as f64 * 0.5;
        let half_h = (max.y - min.y) as f64 * 0.5;
        // Kleiner Zuschlag gegen Rundung an den Ecken
        let radius_sq = (half_w * half_w + half_h * half_h) * 1.0001 + 1e-6;

        let mut hits: Vec<usize> = self
            .tree
            .within::<SquaredEuclidean>(&[center_x, center_y], radius_sq)
            .into_iter()
            .map(|entry| entry.item as usize)
            .filter(|idx| {
                self.positions.get(*idx).is_some_and(|pos| {
                    pos.x >= min.x && pos.x <= max.x && pos.y >= min.y && pos.y <= max.y
                })
            })
            .collect();
        // Einfügereihenfolge der Topologie beibehalten
        hits.sort_unstable();
        hits.into_iter()
            .filter_map(|idx| self.point_ids.get(idx).copied())
            .collect()
    }
}
