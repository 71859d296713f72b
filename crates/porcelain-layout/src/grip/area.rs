//! Resize grip areas

use crate::error::{LayoutError, LayoutResult};
use serde::{Deserialize, Serialize};

/// Which edge or corner a size grip drags
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GripArea {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl GripArea {
    pub fn all() -> &'static [GripArea] {
        &[
            GripArea::N,
            GripArea::S,
            GripArea::E,
            GripArea::W,
            GripArea::NE,
            GripArea::NW,
            GripArea::SE,
            GripArea::SW,
        ]
    }

    /// Parse a compass id ("n", "se", ...)
    pub fn from_id(id: &str) -> LayoutResult<Self> {
        match id.to_lowercase().as_str() {
            "n" => Ok(GripArea::N),
            "s" => Ok(GripArea::S),
            "e" => Ok(GripArea::E),
            "w" => Ok(GripArea::W),
            "ne" => Ok(GripArea::NE),
            "nw" => Ok(GripArea::NW),
            "se" => Ok(GripArea::SE),
            "sw" => Ok(GripArea::SW),
            _ => Err(LayoutError::UnknownGripArea(id.to_string())),
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            GripArea::N => "n",
            GripArea::S => "s",
            GripArea::E => "e",
            GripArea::W => "w",
            GripArea::NE => "ne",
            GripArea::NW => "nw",
            GripArea::SE => "se",
            GripArea::SW => "sw",
        }
    }

    pub fn moves_left(&self) -> bool {
        matches!(self, GripArea::W | GripArea::NW | GripArea::SW)
    }

    pub fn moves_right(&self) -> bool {
        matches!(self, GripArea::E | GripArea::NE | GripArea::SE)
    }

    pub fn moves_top(&self) -> bool {
        matches!(self, GripArea::N | GripArea::NE | GripArea::NW)
    }

    pub fn moves_bottom(&self) -> bool {
        matches!(self, GripArea::S | GripArea::SE | GripArea::SW)
    }
}
