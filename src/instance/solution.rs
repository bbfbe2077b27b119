//! Solution files.

use std::path::Path;

use rug::Rational;
use serde::{Deserialize, Serialize};

use super::error::InstanceError;
use crate::cdt::Triangulation;
use crate::search::SteinerPoint;

/// A CG:SHOP 2025 solution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub content_type: String,
    pub instance_uid: String,
    /// Exact `"num/den"` x coordinates of the Steiner points.
    pub steiner_points_x: Vec<String>,
    pub steiner_points_y: Vec<String>,
    /// Every edge of the final triangulation, ascending and sorted.
    pub edges: Vec<[usize; 2]>,
}

impl Solution {
    pub const CONTENT_TYPE: &'static str = "CG_SHOP_2025_Solution";

    pub fn new(
        instance_uid: impl Into<String>,
        steiner_points: &[SteinerPoint],
        triangulation: &Triangulation,
    ) -> Self {
        let (steiner_points_x, steiner_points_y) = steiner_points
            .iter()
            .map(|sp| (fraction(&sp.point.x), fraction(&sp.point.y)))
            .unzip();
        let edges = triangulation
            .edges()
            .into_iter()
            .map(|edge| [edge.0, edge.1])
            .collect();
        Self {
            content_type: Self::CONTENT_TYPE.to_string(),
            instance_uid: instance_uid.into(),
            steiner_points_x,
            steiner_points_y,
            edges,
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, InstanceError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the solution, creating parent directories as needed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), InstanceError> {
        let path = path.as_ref();
        let io_err = |source| InstanceError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(io_err)?;
            }
        }
        std::fs::write(path, self.to_json_pretty()?).map_err(io_err)
    }
}

fn fraction(value: &Rational) -> String {
    format!("{}/{}", value.numer(), value.denom())
}
