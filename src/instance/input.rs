//! Instance files.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::InstanceError;
use crate::cdt::{InsertMode, Triangulation};
use crate::geometry::{BoundaryRegion, Point};
use crate::search::{Method, RunParameters};

/// Optional run parameters carried by an instance file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    /// Iteration budget.
    #[serde(rename = "L", default, skip_serializing_if = "Option::is_none")]
    pub l: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beta: Option<f64>,
}

/// A CG:SHOP 2025 instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    pub instance_uid: String,
    pub num_points: usize,
    pub points_x: Vec<i64>,
    pub points_y: Vec<i64>,
    /// Indices of the region polygon, in order; the last connects to the first.
    pub region_boundary: Vec<usize>,
    #[serde(default)]
    pub num_constraints: usize,
    #[serde(default)]
    pub additional_constraints: Vec<[usize; 2]>,
    /// Driver name: `legacy`, `local`, `sa` or `ant`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Parameters>,
}

/// Triangulation and region built from an instance.
#[derive(Debug, Clone)]
pub struct MeshSetup {
    pub triangulation: Triangulation,
    pub region: BoundaryRegion,
}

impl Instance {
    pub fn from_json(json: &str) -> Result<Self, InstanceError> {
        let instance: Instance = serde_json::from_str(json)?;
        instance.validate()?;
        Ok(instance)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, InstanceError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| InstanceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Checks declared counts, index ranges, region size and duplicates.
    pub fn validate(&self) -> Result<(), InstanceError> {
        let n = self.num_points;
        let columns = [
            ("points_x", self.points_x.len()),
            ("points_y", self.points_y.len()),
        ];
        for (field, actual) in columns {
            if actual != n {
                return Err(InstanceError::LengthMismatch {
                    field,
                    expected: n,
                    actual,
                });
            }
        }
        if self.additional_constraints.len() != self.num_constraints {
            return Err(InstanceError::LengthMismatch {
                field: "additional_constraints",
                expected: self.num_constraints,
                actual: self.additional_constraints.len(),
            });
        }

        let indices = self
            .region_boundary
            .iter()
            .map(|&i| ("region_boundary", i))
            .chain(
                self.additional_constraints
                    .iter()
                    .flatten()
                    .map(|&i| ("additional_constraints", i)),
            );
        for (field, index) in indices {
            if index >= n {
                return Err(InstanceError::IndexOutOfRange {
                    field,
                    index,
                    len: n,
                });
            }
        }

        if self.region_boundary.len() < 3 {
            return Err(InstanceError::RegionTooSmall(self.region_boundary.len()));
        }

        let mut seen = HashMap::with_capacity(n);
        for (i, xy) in self.points_x.iter().zip(&self.points_y).enumerate() {
            if let Some(first) = seen.insert(xy, i) {
                return Err(InstanceError::DuplicatePoint { first, second: i });
            }
        }
        Ok(())
    }

    /// Input points, in input order.
    pub fn points(&self) -> Vec<Point> {
        self.points_x
            .iter()
            .zip(&self.points_y)
            .map(|(&x, &y)| Point::from_ints(x, y))
            .collect()
    }

    /// Triangulates the points, then forces the additional constraints and
    /// every region boundary edge. Vertex `i` is input point `i`.
    pub fn build(&self) -> Result<MeshSetup, InstanceError> {
        self.validate()?;
        let points = self.points();

        let mut triangulation = Triangulation::new();
        for p in &points {
            triangulation.insert(p.clone(), InsertMode::Delaunay);
        }
        for &[a, b] in &self.additional_constraints {
            triangulation.insert_constraint(a, b)?;
        }
        let ring = &self.region_boundary;
        for (k, &a) in ring.iter().enumerate() {
            triangulation.insert_constraint(a, ring[(k + 1) % ring.len()])?;
        }

        let region = BoundaryRegion::new(ring.iter().map(|&i| points[i].clone()).collect());
        tracing::debug!(
            vertices = triangulation.vertex_count(),
            faces = triangulation.face_count(),
            constraints = triangulation.constraints().len(),
            "instance triangulated"
        );
        Ok(MeshSetup {
            triangulation,
            region,
        })
    }

    /// Method and parameters from the file over the built-in defaults.
    pub fn run_parameters(&self) -> Result<RunParameters, InstanceError> {
        let mut params = RunParameters::default();
        if let Some(name) = &self.method {
            params.method = name.parse::<Method>()?;
        }
        if let Some(p) = self.parameters {
            params.max_iterations = p.l.unwrap_or(params.max_iterations);
            params.alpha = p.alpha.unwrap_or(params.alpha);
            params.beta = p.beta.unwrap_or(params.beta);
        }
        Ok(params)
    }
}
