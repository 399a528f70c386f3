use core::fmt;
use std::convert::Infallible;
use std::fmt::Display;
use std::str::FromStr;

use geo_types::{Coord, coord};
use serde::{Deserialize, Serialize};

/// A point of interest where one may (or may not) scream.
///
/// Coordinates are validated on construction, so a `Zone` always carries a
/// position within the valid latitude/longitude ranges.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct Zone {
    name: String,
    coord: Coord,
    kind: ZoneKind,
    score: String,
    description: String,
}

impl Zone {
    pub fn new(
        name: impl Into<String>,
        lat: f64,
        lon: f64,
        kind: ZoneKind,
        score: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, ZoneError> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(ZoneError::CoordOutOfRange { lat, lon });
        }

        Ok(Self {
            name: name.into(),
            coord: coord! { x: lon, y: lat },
            kind,
            score: score.into(),
            description: description.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coord(&self) -> &Coord {
        &self.coord
    }

    pub fn lat(&self) -> f64 {
        self.coord.y
    }

    pub fn lon(&self) -> f64 {
        self.coord.x
    }

    pub fn kind(&self) -> ZoneKind {
        self.kind
    }

    /// Opaque display text. The emoji scale has no documented numeric meaning.
    pub fn score(&self) -> &str {
        &self.score
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Zone category. `Unknown` catches every unrecognized category so that
/// parsing and color resolution stay total.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum ZoneKind {
    Forest,
    Tunnel,
    Square,
    River,
    #[serde(other)]
    Unknown,
}

impl FromStr for ZoneKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "forest" => Self::Forest,
            "tunnel" => Self::Tunnel,
            "square" => Self::Square,
            "river" => Self::River,
            _ => Self::Unknown,
        })
    }
}

impl Display for ZoneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Forest => "forest",
                Self::Tunnel => "tunnel",
                Self::Square => "square",
                Self::River => "river",
                Self::Unknown => "unknown",
            }
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ZoneError {
    CoordOutOfRange { lat: f64, lon: f64 },
}

impl std::error::Error for ZoneError {}

impl Display for ZoneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneError::CoordOutOfRange { lat, lon } => {
                write!(f, "coordinate out of range: lat {lat}, lon {lon}")
            }
        }
    }
}
