//! Die zentrale Topologie-Datenstruktur: Punkte, Kanten, Bereiche, Gruppen.

use std::collections::HashSet;

use glam::Vec2;
use indexmap::IndexMap;

use super::bezier::{self, CubicPoints};
use super::geometry;
use super::map_file::{accept_loaded_id, TopologyData};
use super::{
    Area, AreaKind, AreaPatch, Edge, EdgeKind, EdgePatch, EditError, MapPoint, NetworkGroup,
    NodeStub, PathGroup, PathStub, PointKind, PointPatch, SpatialIndex, SpatialMatch,
};

/// Fortlaufende Namenszähler je Entitätsart.
///
/// Zähler wachsen nur beim Erzeugen und werden nie wiederverwendet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameCounters {
    /// Je Punkt-Rolle (Index = `PointKind as usize`)
    pub points: [u64; 5],
    pub edges: u64,
    pub areas: u64,
}

/// Darstellungs-Sichtbarkeit nach Auswertung der Netzwerkgruppen.
#[derive(Debug, Clone, Default)]
pub struct Visibility {
    pub hidden_edges: HashSet<u64>,
    pub hidden_points: HashSet<u64>,
}

/// Vollständige Topologie einer Karte
#[derive(Debug, Clone, Default)]
pub struct TopologyMap {
    /// Alle Punkte in Einfügereihenfolge
    pub points: IndexMap<u64, MapPoint>,
    /// Alle Kanten in Einfügereihenfolge
    pub edges: IndexMap<u64, Edge>,
    /// Alle Bereiche in Einfügereihenfolge
    pub areas: IndexMap<u64, Area>,
    pub network_groups: IndexMap<u64, NetworkGroup>,
    pub path_groups: IndexMap<u64, PathGroup>,
    pub counters: NameCounters,
    next_id: u64,
    spatial_index: SpatialIndex,
}

impl TopologyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Baut eine Topologie aus persistierten Daten; Zähler werden aus den Namen rekonstruiert.
    pub fn from_data(data: &TopologyData) -> Self {
        let mut map = Self::new();
        for point in data.points.iter().filter(|p| accept_loaded_id("Punkt", p.id)) {
            map.points.insert(point.id, point.clone());
        }
        for edge in data.lines.iter().filter(|e| accept_loaded_id("Kante", e.id)) {
            map.edges.insert(edge.id, edge.clone());
        }
        map.fill_missing_control_points();
        for area in data.areas.iter().filter(|a| accept_loaded_id("Bereich", a.id)) {
            map.areas.insert(area.id, area.clone());
        }
        for group in data
            .network_groups
            .iter()
            .filter(|g| accept_loaded_id("Netzwerkgruppe", g.id))
        {
            map.network_groups.insert(group.id, group.clone());
        }
        for group in data
            .path_groups
            .iter()
            .filter(|g| accept_loaded_id("Pfadgruppe", g.id))
        {
            map.path_groups.insert(group.id, group.clone());
        }

        map.next_id = map
            .points
            .keys()
            .chain(map.edges.keys())
            .chain(map.areas.keys())
            .chain(map.network_groups.keys())
            .chain(map.path_groups.keys())
            .copied()
            .max()
            .unwrap_or(0);

        for point in map.points.values() {
            let slot = &mut map.counters.points[point.kind as usize];
            *slot = (*slot).max(name_number(&point.name, point.kind.name_prefix()));
        }
        map.counters.edges = map
            .edges
            .values()
            .map(|e| name_number(&e.name, "e"))
            .max()
            .unwrap_or(0);
        map.counters.areas = map
            .areas
            .values()
            .map(|a| name_number(&a.name, "a"))
            .max()
            .unwrap_or(0);

        map.rebuild_spatial_index();
        map
    }

    /// Persistierbare Sicht (ohne Striche).
    pub fn to_data(&self) -> TopologyData {
        TopologyData {
            points: self.points.values().cloned().collect(),
            lines: self.edges.values().cloned().collect(),
            areas: self.areas.values().cloned().collect(),
            strokes: None,
            network_groups: self.network_groups.values().cloned().collect(),
            path_groups: self.path_groups.values().cloned().collect(),
        }
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn area_count(&self) -> usize {
        self.areas.len()
    }

    /// Vergibt eine neue, eindeutige ID.
    pub fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    // ── Namen ───────────────────────────────────────────────────────

    fn next_point_name(&mut self, kind: PointKind) -> String {
        loop {
            let slot = &mut self.counters.points[kind as usize];
            *slot += 1;
            let name = format!("{}{}", kind.name_prefix(), *slot);
            if !self.points.values().any(|p| p.name == name) {
                return name;
            }
        }
    }

    fn next_edge_name(&mut self) -> String {
        loop {
            self.counters.edges += 1;
            let name = format!("e{}", self.counters.edges);
            if !self.edges.values().any(|e| e.name == name) {
                return name;
            }
        }
    }

    fn next_area_name(&mut self) -> String {
        loop {
            self.counters.areas += 1;
            let name = format!("a{}", self.counters.areas);
            if !self.areas.values().any(|a| a.name == name) {
                return name;
            }
        }
    }

    /// Anzeigename eines Punkts (Fallback: `#<id>`).
    pub fn point_label(&self, id: u64) -> String {
        self.points
            .get(&id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| format!("#{id}"))
    }

    // ── Punkte ──────────────────────────────────────────────────────

    /// Erzeugt einen Punkt mit automatisch vergebenem Namen.
    pub fn add_point(&mut self, kind: PointKind, position: Vec2) -> u64 {
        let id = self.allocate_id();
        let name = self.next_point_name(kind);
        self.points
            .insert(id, MapPoint::new(id, name, kind, position));
        self.rebuild_spatial_index();
        id
    }

    pub fn point_position(&self, id: u64) -> Option<Vec2> {
        self.points.get(&id).map(|p| p.position)
    }

    /// Wendet eine Teiländerung an; Namenskollisionen werden abgelehnt.
    pub fn update_point(&mut self, id: u64, patch: &PointPatch) -> Result<(), EditError> {
        if !self.points.contains_key(&id) {
            return Err(EditError::UnknownPoint(id));
        }
        if let Some(name) = &patch.name {
            let name = name.trim();
            if name.is_empty() {
                return Err(EditError::EmptyName);
            }
            if self.points.values().any(|p| p.id != id && p.name == name) {
                return Err(EditError::NameTaken(name.to_string()));
            }
        }
        let moved = patch.position.is_some();
        if let Some(point) = self.points.get_mut(&id) {
            patch.apply_to(point);
            if let Some(name) = &patch.name {
                point.name = name.trim().to_string();
            }
        }
        if moved {
            self.rebuild_spatial_index();
        }
        Ok(())
    }

    /// Setzt mehrere Positionen auf einmal (Index wird einmal neu gebaut).
    pub fn set_point_positions(&mut self, positions: &[(u64, Vec2)]) {
        let mut changed = false;
        for (id, pos) in positions {
            if let Some(point) = self.points.get_mut(id) {
                if point.position != *pos {
                    point.position = *pos;
                    changed = true;
                }
            }
        }
        if changed {
            self.rebuild_spatial_index();
        }
    }

    /// Entfernt Punkte. Kanten bleiben bestehen und können danach hängen.
    pub fn delete_points(&mut self, ids: &HashSet<u64>) -> usize {
        let before = self.points.len();
        self.points.retain(|id, _| !ids.contains(id));
        let removed = before - self.points.len();
        if removed > 0 {
            self.rebuild_spatial_index();
        }
        removed
    }

    // ── Kanten ──────────────────────────────────────────────────────

    /// Prüft Self-Loop, Existenz und die Duplikatregel.
    ///
    /// Eine beidseitige Kante schließt jede andere Kante auf demselben Paar aus;
    /// eine einseitige a→b scheitert an vorhandenem a→b oder einer beidseitigen Kante.
    pub fn check_edge(
        &self,
        start: u64,
        end: u64,
        kind: EdgeKind,
        ignore_edge: Option<u64>,
    ) -> Result<(), EditError> {
        if start == end {
            return Err(EditError::SelfLoop(start));
        }
        for id in [start, end] {
            if !self.points.contains_key(&id) {
                return Err(EditError::UnknownPoint(id));
            }
        }
        let conflict = self
            .edges
            .values()
            .filter(|e| Some(e.id) != ignore_edge && e.connects(start, end))
            .any(|e| {
                kind.is_bidirectional()
                    || e.kind.is_bidirectional()
                    || (e.start_point_id == start && e.end_point_id == end)
            });
        if conflict {
            return Err(EditError::DuplicateEdge {
                start: self.point_label(start),
                end: self.point_label(end),
                arrow: kind.arrow_glyph(),
            });
        }
        Ok(())
    }

    /// Erzeugt eine Kante nach erfolgreicher Prüfung (Bézier-Standardgriffe bei Zoom 1).
    pub fn add_edge(
        &mut self,
        start: u64,
        end: u64,
        kind: EdgeKind,
        color: [f32; 4],
        width: f32,
    ) -> Result<u64, EditError> {
        self.add_edge_at_scale(
            start,
            end,
            kind,
            color,
            width,
            bezier::DEFAULT_HANDLE_OFFSET_PX,
            1.0,
        )
    }

    /// Wie [`Self::add_edge`]; Bézier-Griffe liegen `offset_px` Bildschirmpixel
    /// neben der Sehne bei Zoom-Faktor `scale`.
    #[allow(clippy::too_many_arguments)]
    pub fn add_edge_at_scale(
        &mut self,
        start: u64,
        end: u64,
        kind: EdgeKind,
        color: [f32; 4],
        width: f32,
        offset_px: f32,
        scale: f32,
    ) -> Result<u64, EditError> {
        self.check_edge(start, end, kind, None)?;
        let (start_pos, end_pos) = match (self.point_position(start), self.point_position(end)) {
            (Some(s), Some(e)) => (s, e),
            _ => return Err(EditError::UnknownPoint(start)),
        };
        let id = self.allocate_id();
        let name = self.next_edge_name();
        let mut edge = Edge::new(id, name, start, end, kind, start_pos, end_pos, color, width);
        edge.ensure_control_points(start_pos, end_pos, offset_px, scale);
        self.edges.insert(id, edge);
        Ok(id)
    }

    /// Leitet fehlende Steuerpunkte von Bézier-Kanten aus den Endpunkten ab.
    fn fill_missing_control_points(&mut self) {
        let positions: Vec<(u64, Vec2, Vec2)> = self
            .edges
            .values()
            .filter(|e| e.kind.is_bezier() && (e.cp1.is_none() || e.cp2.is_none()))
            .filter_map(|e| self.edge_endpoints(e).map(|(a, b)| (e.id, a, b)))
            .collect();
        for (id, a, b) in positions {
            if let Some(edge) = self.edges.get_mut(&id) {
                edge.ensure_control_points(a, b, bezier::DEFAULT_HANDLE_OFFSET_PX, 1.0);
            }
        }
    }

    /// Fügt eine fertige Kante unverändert ein (Einfügen, Teilen).
    pub(crate) fn insert_edge_raw(&mut self, edge: Edge) {
        self.edges.insert(edge.id, edge);
    }

    /// Erzeugt einen Kantennamen für intern gebaute Kanten.
    pub(crate) fn reserve_edge_name(&mut self) -> String {
        self.next_edge_name()
    }

    pub fn update_edge(&mut self, id: u64, patch: &EdgePatch) -> Result<(), EditError> {
        let Some(edge) = self.edges.get(&id) else {
            return Err(EditError::UnknownEdge(id));
        };
        if let Some(kind) = patch.kind {
            if kind != edge.kind {
                self.check_edge(edge.start_point_id, edge.end_point_id, kind, Some(id))?;
            }
        }
        if let Some(name) = &patch.name {
            let name = name.trim();
            if name.is_empty() {
                return Err(EditError::EmptyName);
            }
            if self.edges.values().any(|e| e.id != id && e.name == name) {
                return Err(EditError::NameTaken(name.to_string()));
            }
        }
        if let Some(edge) = self.edges.get_mut(&id) {
            patch.apply_to(edge);
            if let Some(name) = &patch.name {
                edge.name = name.trim().to_string();
            }
            if !edge.kind.is_bezier() {
                edge.cp1 = None;
                edge.cp2 = None;
            }
        }
        self.fill_missing_control_points();
        Ok(())
    }

    pub fn delete_edges(&mut self, ids: &HashSet<u64>) -> usize {
        let before = self.edges.len();
        self.edges.retain(|id, _| !ids.contains(id));
        for group in self.network_groups.values_mut() {
            group.paths.retain(|p| !ids.contains(&p.id));
        }
        for group in self.path_groups.values_mut() {
            group.paths.retain(|p| !ids.contains(&p.id));
        }
        before - self.edges.len()
    }

    /// Kanten, deren Start- oder Endpunkt nicht mehr existiert.
    pub fn dangling_edges(&self) -> Vec<u64> {
        self.edges
            .values()
            .filter(|e| {
                !self.points.contains_key(&e.start_point_id)
                    || !self.points.contains_key(&e.end_point_id)
            })
            .map(|e| e.id)
            .collect()
    }

    pub fn edges_touching(&self, point_id: u64) -> impl Iterator<Item = &Edge> {
        self.edges.values().filter(move |e| e.touches(point_id))
    }

    /// Endpunkt-Positionen einer Kante (nur wenn beide Punkte existieren).
    pub fn edge_endpoints(&self, edge: &Edge) -> Option<(Vec2, Vec2)> {
        Some((
            self.point_position(edge.start_point_id)?,
            self.point_position(edge.end_point_id)?,
        ))
    }

    /// Kubisches Kontrollpolygon, falls die Kante als Bézier gezeichnet wird.
    pub fn edge_curve(&self, edge: &Edge) -> Option<CubicPoints> {
        if !edge.kind.is_bezier() {
            return None;
        }
        let (a, b) = self.edge_endpoints(edge)?;
        Some([a, edge.cp1?, edge.cp2?, b])
    }

    /// Abstand einer Position zur gezeichneten Kantengeometrie.
    pub fn edge_distance(&self, edge: &Edge, pos: Vec2) -> Option<f32> {
        if let Some(curve) = self.edge_curve(edge) {
            return Some(bezier::closest_t(&curve, pos, 24).1);
        }
        let (a, b) = self.edge_endpoints(edge)?;
        Some(geometry::distance_to_segment(pos, a, b))
    }

    /// Nächste Kante innerhalb der Toleranz.
    pub fn nearest_edge(&self, pos: Vec2, tolerance: f32) -> Option<(u64, f32)> {
        self.edges
            .values()
            .filter_map(|e| self.edge_distance(e, pos).map(|d| (e.id, d)))
            .filter(|(_, d)| *d <= tolerance)
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }

    // ── Bereiche ────────────────────────────────────────────────────

    pub fn add_area(&mut self, kind: AreaKind, vertices: Vec<Vec2>) -> Result<u64, EditError> {
        if vertices.len() < Area::MIN_VERTICES {
            return Err(EditError::TooFewVertices(vertices.len()));
        }
        let id = self.allocate_id();
        let name = self.next_area_name();
        self.areas.insert(id, Area::new(id, name, kind, vertices));
        Ok(id)
    }

    pub(crate) fn insert_area_raw(&mut self, area: Area) {
        self.areas.insert(area.id, area);
    }

    pub(crate) fn reserve_area_name(&mut self) -> String {
        self.next_area_name()
    }

    pub(crate) fn reserve_point_name(&mut self, kind: PointKind) -> String {
        self.next_point_name(kind)
    }

    /// Fügt einen fertigen Punkt ein (Einfügen aus Zwischenablage, Teilen).
    pub(crate) fn insert_point_raw(&mut self, point: MapPoint) {
        self.points.insert(point.id, point);
        self.rebuild_spatial_index();
    }

    pub fn update_area(&mut self, id: u64, patch: &AreaPatch) -> Result<(), EditError> {
        if !self.areas.contains_key(&id) {
            return Err(EditError::UnknownArea(id));
        }
        if let Some(vertices) = &patch.vertices {
            if vertices.len() < Area::MIN_VERTICES {
                return Err(EditError::TooFewVertices(vertices.len()));
            }
        }
        if let Some(name) = &patch.name {
            let name = name.trim();
            if name.is_empty() {
                return Err(EditError::EmptyName);
            }
            if self.areas.values().any(|a| a.id != id && a.name == name) {
                return Err(EditError::NameTaken(name.to_string()));
            }
        }
        if let Some(area) = self.areas.get_mut(&id) {
            patch.apply_to(area);
            if let Some(name) = &patch.name {
                area.name = name.trim().to_string();
            }
        }
        Ok(())
    }

    pub fn delete_areas(&mut self, ids: &HashSet<u64>) -> usize {
        let before = self.areas.len();
        self.areas.retain(|id, _| !ids.contains(id));
        for group in self.network_groups.values_mut() {
            if group.area_id.is_some_and(|a| ids.contains(&a)) {
                group.area_id = None;
            }
        }
        before - self.areas.len()
    }

    /// Oberster Bereich (zuletzt eingefügt) unter der Position.
    pub fn area_at(&self, pos: Vec2) -> Option<u64> {
        self.areas
            .values()
            .rev()
            .find(|a| a.contains(pos))
            .map(|a| a.id)
    }

    // ── Gruppen ─────────────────────────────────────────────────────

    pub fn add_network_group(&mut self, name: &str, area_id: Option<u64>) -> Result<u64, EditError> {
        let name = validate_group_name(name, self.network_groups.values().map(|g| &g.name))?;
        if let Some(area) = area_id {
            if !self.areas.contains_key(&area) {
                return Err(EditError::UnknownArea(area));
            }
        }
        let id = self.allocate_id();
        self.network_groups
            .insert(id, NetworkGroup::new(id, name, area_id));
        Ok(id)
    }

    pub fn add_path_group(&mut self, name: &str) -> Result<u64, EditError> {
        let name = validate_group_name(name, self.path_groups.values().map(|g| &g.name))?;
        let id = self.allocate_id();
        self.path_groups.insert(id, PathGroup::new(id, name));
        Ok(id)
    }

    /// Stub einer Kante zum aktuellen Zeitpunkt.
    pub fn path_stub(&self, edge_id: u64) -> Option<PathStub> {
        let edge = self.edges.get(&edge_id)?;
        Some(PathStub::from_edge(
            edge,
            &self.point_label(edge.start_point_id),
            &self.point_label(edge.end_point_id),
        ))
    }

    /// Netzwerkgruppen dürfen eine Kante auch mehrfach über Gruppen hinweg beanspruchen.
    pub fn add_path_to_network_group(&mut self, group_id: u64, edge_id: u64) -> Result<(), EditError> {
        let stub = self
            .path_stub(edge_id)
            .ok_or(EditError::UnknownEdge(edge_id))?;
        let group = self
            .network_groups
            .get_mut(&group_id)
            .ok_or(EditError::UnknownGroup(group_id))?;
        if !group.claims_edge(edge_id) {
            group.paths.push(stub);
        }
        Ok(())
    }

    pub fn add_point_to_network_group(&mut self, group_id: u64, point_id: u64) -> Result<(), EditError> {
        let stub = self
            .points
            .get(&point_id)
            .map(NodeStub::from)
            .ok_or(EditError::UnknownPoint(point_id))?;
        let group = self
            .network_groups
            .get_mut(&group_id)
            .ok_or(EditError::UnknownGroup(group_id))?;
        if !group.nodes.iter().any(|n| n.id == point_id) {
            group.nodes.push(stub);
        }
        Ok(())
    }

    /// Pfadgruppen sind exklusiv: eine Kante gehört höchstens einer Pfadgruppe.
    pub fn add_path_to_path_group(&mut self, group_id: u64, edge_id: u64) -> Result<(), EditError> {
        if !self.path_groups.contains_key(&group_id) {
            return Err(EditError::UnknownGroup(group_id));
        }
        if self.path_groups.values().any(|g| g.contains_edge(edge_id)) {
            return Err(EditError::PathAlreadyGrouped(edge_id));
        }
        let stub = self
            .path_stub(edge_id)
            .ok_or(EditError::UnknownEdge(edge_id))?;
        if let Some(group) = self.path_groups.get_mut(&group_id) {
            group.paths.push(stub);
        }
        Ok(())
    }

    pub fn set_network_group_visible(&mut self, group_id: u64, visible: bool) -> Result<(), EditError> {
        let group = self
            .network_groups
            .get_mut(&group_id)
            .ok_or(EditError::UnknownGroup(group_id))?;
        group.visible = visible;
        Ok(())
    }

    pub fn remove_group(&mut self, group_id: u64) -> Result<(), EditError> {
        if self.network_groups.shift_remove(&group_id).is_some()
            || self.path_groups.shift_remove(&group_id).is_some()
        {
            Ok(())
        } else {
            Err(EditError::UnknownGroup(group_id))
        }
    }

    /// Wertet die Sichtbarkeitskaskade aus.
    ///
    /// Eine Kante ist sichtbar, wenn alle beanspruchenden Netzwerkgruppen sichtbar
    /// sind; ein Punkt, wenn ihn keine Kante nutzt oder mindestens eine sichtbare.
    pub fn visibility(&self) -> Visibility {
        let hidden_edges: HashSet<u64> = self
            .network_groups
            .values()
            .filter(|g| !g.visible)
            .flat_map(|g| g.paths.iter().map(|p| p.id))
            .filter(|id| self.edges.contains_key(id))
            .collect();

        let mut used: HashSet<u64> = HashSet::new();
        let mut shown: HashSet<u64> = HashSet::new();
        for edge in self.edges.values() {
            for pid in [edge.start_point_id, edge.end_point_id] {
                used.insert(pid);
                if !hidden_edges.contains(&edge.id) {
                    shown.insert(pid);
                }
            }
        }
        let hidden_points = used
            .into_iter()
            .filter(|pid| !shown.contains(pid) && self.points.contains_key(pid))
            .collect();

        Visibility {
            hidden_edges,
            hidden_points,
        }
    }

    // ── Spatial ─────────────────────────────────────────────────────

    pub fn rebuild_spatial_index(&mut self) {
        self.spatial_index = SpatialIndex::from_points(&self.points);
    }

    pub fn nearest_point(&self, pos: Vec2) -> Option<SpatialMatch> {
        self.spatial_index.nearest(pos)
    }

    pub fn points_within_radius(&self, pos: Vec2, radius: f32) -> Vec<SpatialMatch> {
        self.spatial_index.within_radius(pos, radius)
    }

    pub fn points_in_rect(&self, min: Vec2, max: Vec2) -> Vec<u64> {
        self.spatial_index.within_rect(min, max)
    }
}

/// Zahl hinter dem Präfix (`"n12"` → 12), sonst 0.
fn name_number(name: &str, prefix: &str) -> u64 {
    name.strip_prefix(prefix)
        .and_then(|rest| rest.parse().ok())
        .unwrap_or(0)
}

fn validate_group_name<'a>(
    name: &str,
    mut existing: impl Iterator<Item = &'a String>,
) -> Result<String, EditError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(EditError::EmptyName);
    }
    if existing.any(|n| n == name) {
        return Err(EditError::NameTaken(name.to_string()));
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests;
