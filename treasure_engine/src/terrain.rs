//! Terrain surrounding a town, and the item it takes to get across.

use crate::dice;
use crate::item::{Item, ItemHolder};

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TerrainKind {
    Marsh,
    Mountains,
    Ocean,
    Plains,
    Desert,
    Jungle,
}

impl TerrainKind {
    pub const ALL: [TerrainKind; 6] = [
        TerrainKind::Marsh,
        TerrainKind::Mountains,
        TerrainKind::Ocean,
        TerrainKind::Plains,
        TerrainKind::Desert,
        TerrainKind::Jungle,
    ];

    pub fn required_item(self) -> Item {
        match self {
            TerrainKind::Marsh => Item::Boots,
            TerrainKind::Mountains => Item::Rope,
            TerrainKind::Ocean => Item::Boat,
            TerrainKind::Plains => Item::Horse,
            TerrainKind::Desert => Item::Water,
            TerrainKind::Jungle => Item::Machete,
        }
    }
}

impl Display for TerrainKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TerrainKind::Marsh => "Marsh",
            TerrainKind::Mountains => "Mountains",
            TerrainKind::Ocean => "Ocean",
            TerrainKind::Plains => "Plains",
            TerrainKind::Desert => "Desert",
            TerrainKind::Jungle => "Jungle",
        };
        write!(f, "{name}")
    }
}

/// An immutable crossing obstacle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Terrain {
    kind: TerrainKind,
    required_item: Item,
}

impl Terrain {
    pub fn new(kind: TerrainKind) -> Self {
        Self {
            kind,
            required_item: kind.required_item(),
        }
    }

    /// Flat pick over the six terrain kinds.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(TerrainKind::ALL[dice::partition(rng, TerrainKind::ALL.len())])
    }

    pub fn kind(&self) -> TerrainKind {
        self.kind
    }

    pub fn required_item(&self) -> Item {
        self.required_item
    }

    pub fn can_cross(&self, holder: &impl ItemHolder) -> bool {
        holder.contains_item(self.required_item)
    }

    pub fn info(&self) -> String {
        format!("The {} can only be crossed with a {}.", self.kind, self.required_item)
    }
}
