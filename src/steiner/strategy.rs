//! Strategy identifiers and their errors.

use std::fmt;
use std::str::FromStr;

use crate::cdt::{CdtError, InsertMode};

/// A Steiner point placement rule.
///
/// Variants are declared in tie-break order: when two strategies leave the
/// same number of obtuse triangles, the one declared first wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Strategy {
    /// Midpoint of the longest edge.
    MaxEdge,
    /// Circumcenter.
    Pericenter,
    /// Centroid of a convex polygon grown from obtuse neighbors.
    Polygon,
    /// Foot of the obtuse vertex on the opposite edge.
    Projection,
    /// Reserved; has no placement rule yet.
    Bisection,
    /// Reserved; has no placement rule yet.
    Altitude,
}

impl Strategy {
    pub const ALL: [Strategy; 6] = [
        Strategy::MaxEdge,
        Strategy::Pericenter,
        Strategy::Polygon,
        Strategy::Projection,
        Strategy::Bisection,
        Strategy::Altitude,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::MaxEdge => "max_edge",
            Strategy::Pericenter => "pericenter",
            Strategy::Polygon => "polygon",
            Strategy::Projection => "projection",
            Strategy::Bisection => "bisection",
            Strategy::Altitude => "altitude",
        }
    }

    /// Polygon points are inserted with flips; everything else subdivides locally.
    pub fn insert_mode(self) -> InsertMode {
        match self {
            Strategy::Polygon => InsertMode::Delaunay,
            _ => InsertMode::NoFlip,
        }
    }

    /// Parses `name`, falling back to [`Strategy::Projection`] with a warning.
    pub fn from_name_lossy(name: &str) -> Strategy {
        name.parse().unwrap_or_else(|err: UnknownStrategy| {
            tracing::warn!("{err}, falling back to {}", Strategy::Projection);
            Strategy::Projection
        })
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown strategy `{0}`")]
pub struct UnknownStrategy(pub String);

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == normalized)
            .ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}

/// Why a strategy produced no point for a triangle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StrategyError {
    #[error("triangle has no obtuse vertex")]
    NoObtuseVertex,

    #[error("triangle is degenerate")]
    Degenerate,

    #[error("no obtuse neighbor could be merged into a convex polygon")]
    PolygonNotGrown,

    #[error("strategy {0} is not implemented")]
    NotImplemented(Strategy),

    #[error("face is not part of the triangulation")]
    FaceNotFound,

    #[error(transparent)]
    Constraint(#[from] CdtError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal_order() {
        let mut shuffled = vec![
            Strategy::Projection,
            Strategy::Altitude,
            Strategy::MaxEdge,
            Strategy::Polygon,
            Strategy::Bisection,
            Strategy::Pericenter,
        ];
        shuffled.sort();
        assert_eq!(shuffled, Strategy::ALL.to_vec());
    }

    #[test]
    fn test_parse_names() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.name().parse::<Strategy>(), Ok(strategy));
        }
        assert_eq!("MAX-EDGE".parse::<Strategy>(), Ok(Strategy::MaxEdge));
        assert!("centroid".parse::<Strategy>().is_err());
    }

    #[test]
    fn test_lossy_falls_back_to_projection() {
        assert_eq!(Strategy::from_name_lossy("pericenter"), Strategy::Pericenter);
        assert_eq!(Strategy::from_name_lossy("nonsense"), Strategy::Projection);
    }

    #[test]
    fn test_insert_mode() {
        assert_eq!(Strategy::Polygon.insert_mode(), InsertMode::Delaunay);
        assert_eq!(Strategy::Projection.insert_mode(), InsertMode::NoFlip);
        assert_eq!(Strategy::MaxEdge.insert_mode(), InsertMode::NoFlip);
    }
}
