//! Firing solution between two grid references

use crate::algorithms::grid_coordinates::GridResolver;
use crate::algorithms::range_table::RangeTable;
use crate::algorithms::vector::{add, bearing_degrees, magnitude, scale, Vec2};
use crate::core::types::{FiringSolution, Position};
use crate::validation::error::{GridError, GridResult};
use crate::validation::grid::GridReference;

/// Combines grid resolution and the range table into bearing/range/elevation
#[derive(Debug, Clone, Default)]
pub struct FiringSolutionCalculator {
    resolver: GridResolver,
    table: RangeTable,
}

impl FiringSolutionCalculator {
    pub fn new(resolver: GridResolver, table: RangeTable) -> Self {
        Self { resolver, table }
    }

    pub fn resolver(&self) -> &GridResolver {
        &self.resolver
    }

    pub fn range_table(&self) -> &RangeTable {
        &self.table
    }

    /// Solution from `origin` to `target`
    pub fn solve(&self, origin: &GridReference, target: &GridReference) -> GridResult<FiringSolution> {
        let origin_pos = self.resolver.resolve(origin)?;
        let target_pos = self.resolver.resolve(target)?;
        let solution = self.solve_positions(&origin_pos, &target_pos)?;

        tracing::debug!(
            target: "mortar_calc::solution",
            origin_grid = %origin,
            target_grid = %target,
            range = solution.range,
            bearing = solution.bearing_deg,
            mils = ?solution.mils,
            "solution.computed"
        );

        Ok(solution)
    }

    /// Parse both references and solve
    pub fn solve_str(&self, origin: &str, target: &str) -> GridResult<FiringSolution> {
        let origin = GridReference::parse(origin)?;
        let target = GridReference::parse(target)?;
        self.solve(&origin, &target)
    }

    /// Solution between two already resolved positions
    pub fn solve_positions(&self, origin: &Position, target: &Position) -> GridResult<FiringSolution> {
        let to_target = add(&target.to_vector(), &scale(&origin.to_vector(), -1.0));
        self.solve_displacement(&to_target)
    }

    /// Solution for a displacement vector in map meters (+x east, +y north)
    pub fn solve_displacement(&self, to_target: &Vec2) -> GridResult<FiringSolution> {
        if !to_target.x.is_finite() || !to_target.y.is_finite() {
            return Err(GridError::NonFiniteDisplacement {
                x: to_target.x,
                y: to_target.y,
            });
        }

        let bearing_deg = round_bearing(bearing_degrees(to_target));
        let range_m = magnitude(to_target).round();

        let too_close = self.table.is_too_close(range_m);
        let too_far = self.table.is_too_far(range_m);

        let mils = if too_close || too_far {
            None
        } else {
            self.table.interpolate(range_m).mils().map(|m| m.round() as i32)
        };

        Ok(FiringSolution {
            bearing_deg,
            range: range_m as u32,
            mils,
            too_close,
            too_far,
        })
    }
}

/// One decimal place, keeping the result inside [0, 360)
///
/// Ties are decided on the scaled f64 and round away from zero, so 0.15
/// (stored just below 0.15) still gives 0.2.
fn round_bearing(bearing: f64) -> f64 {
    let rounded = (bearing * 10.0).round() / 10.0;
    if rounded >= 360.0 {
        0.0
    } else {
        rounded
    }
}
