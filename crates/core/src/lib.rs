//! Mission record model shared by the importer, exporter and JSONish crates.

use serde::{Deserialize, Serialize};

/// The five hero stats a mission can require, in their canonical output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Combat,
    Vigor,
    Mobility,
    Charisma,
    Intelligence,
}

impl Attribute {
    /// Every attribute in the order used by both the text format and JSONish output.
    pub const ALL: [Attribute; 5] = [
        Self::Combat,
        Self::Vigor,
        Self::Mobility,
        Self::Charisma,
        Self::Intelligence,
    ];

    /// Upper-case key written to JSONish documents.
    pub fn key(self) -> &'static str {
        match self {
            Self::Combat => "COMBAT",
            Self::Vigor => "VIGOR",
            Self::Mobility => "MOBILITY",
            Self::Charisma => "CHARISMA",
            Self::Intelligence => "INTELLIGENCE",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Required attribute values keyed by [`Attribute`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSet {
    #[serde(rename = "COMBAT")]
    combat: i64,
    #[serde(rename = "VIGOR")]
    vigor: i64,
    #[serde(rename = "MOBILITY")]
    mobility: i64,
    #[serde(rename = "CHARISMA")]
    charisma: i64,
    #[serde(rename = "INTELLIGENCE")]
    intelligence: i64,
}

impl AttributeSet {
    /// Build a set from values listed in [`Attribute::ALL`] order.
    pub fn from_values(values: [i64; 5]) -> Self {
        let [combat, vigor, mobility, charisma, intelligence] = values;
        Self {
            combat,
            vigor,
            mobility,
            charisma,
            intelligence,
        }
    }

    pub fn get(&self, attribute: Attribute) -> i64 {
        self.values()[attribute.index()]
    }

    /// Values in [`Attribute::ALL`] order.
    pub fn values(&self) -> [i64; 5] {
        [
            self.combat,
            self.vigor,
            self.mobility,
            self.charisma,
            self.intelligence,
        ]
    }

    /// Iterate `(attribute, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, i64)> + '_ {
        Attribute::ALL.into_iter().map(|attr| (attr, self.get(attr)))
    }
}

/// Map position of the mission marker, serialized as `[x, y]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[i64; 2]", into = "[i64; 2]")]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl From<[i64; 2]> for Position {
    fn from([x, y]: [i64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Position> for [i64; 2] {
    fn from(position: Position) -> Self {
        [position.x, position.y]
    }
}

/// Result branch of a mission (failure or success).
///
/// Only `duration` comes from the text format. `message` and `mission` are
/// reserved keys the game understands; they stay `None` unless a decoded
/// JSONish document already carries them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub duration: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mission: Option<String>,
}

impl Outcome {
    pub fn with_duration(duration: i64) -> Self {
        Self {
            duration,
            ..Self::default()
        }
    }
}

/// One mission record as read from the text format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub caller: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub attributes: AttributeSet,
    pub position: Position,
    pub slots: i64,
    pub difficulty: i64,
    pub failure: Outcome,
    pub success: Outcome,
    pub dangerous: bool,
}

/// Interpret the integer danger flag; any nonzero value marks the mission dangerous.
#[inline]
pub fn danger_from_flag(flag: i64) -> bool {
    flag != 0
}
