//! Serde-Adapter: `glam::Vec2` als `{ "x": .., "y": .. }`-Objekt.
//!
//! Das persistierte Kartenformat speichert Positionen als Objekt statt als Array.

use glam::Vec2;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Serialize, Deserialize)]
struct Xy {
    x: f32,
    y: f32,
}

impl From<Vec2> for Xy {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Xy> for Vec2 {
    fn from(p: Xy) -> Self {
        Vec2::new(p.x, p.y)
    }
}

/// Einzelne Position.
pub fn serialize<S: Serializer>(value: &Vec2, serializer: S) -> Result<S::Ok, S::Error> {
    Xy::from(*value).serialize(serializer)
}

/// Einzelne Position.
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec2, D::Error> {
    Ok(Xy::deserialize(deserializer)?.into())
}

/// Optionale Position (z.B. Bézier-Steuerpunkte).
pub mod option {
    use super::Xy;
    use glam::Vec2;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<Vec2>, serializer: S) -> Result<S::Ok, S::Error> {
        value.map(Xy::from).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Vec2>, D::Error> {
        Ok(Option::<Xy>::deserialize(deserializer)?.map(Vec2::from))
    }
}

/// Positionsliste (Polygon-Ecken, Strich-Punkte).
pub mod vec {
    use super::Xy;
    use glam::Vec2;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(value: &[Vec2], serializer: S) -> Result<S::Ok, S::Error> {
        value
            .iter()
            .map(|v| Xy::from(*v))
            .collect::<Vec<_>>()
            .serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Vec2>, D::Error> {
        Ok(Vec::<Xy>::deserialize(deserializer)?
            .into_iter()
            .map(Vec2::from)
            .collect())
    }
}
