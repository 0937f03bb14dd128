use crate::foundation::core::{Point, Vec2};
use crate::foundation::error::{StrokeError, StrokeResult};

/// Maps an abstract unit grid onto pixel space.
///
/// Unit space has its origin at the bottom-left corner of the grid and y pointing up; pixel
/// space has its origin at the top-left with y pointing down.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "GridDef", into = "GridDef")]
pub struct Grid {
    grid_width: f64,
    grid_height: f64,
    cell_width: f64,
    cell_height: f64,
    radius: f64,
}

/// Raw serde shape of [`Grid`]; converted through [`Grid::new`] so invalid cells never load.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
struct GridDef {
    grid_width: f64,
    grid_height: f64,
    cell_width: f64,
    cell_height: f64,
    #[serde(default = "default_radius")]
    radius: f64,
}

fn default_radius() -> f64 {
    Grid::DEFAULT_RADIUS
}

impl TryFrom<GridDef> for Grid {
    type Error = StrokeError;

    fn try_from(def: GridDef) -> Result<Self, Self::Error> {
        Grid::new(def.grid_width, def.grid_height, def.cell_width, def.cell_height)?
            .with_radius(def.radius)
    }
}

impl From<Grid> for GridDef {
    fn from(g: Grid) -> Self {
        Self {
            grid_width: g.grid_width,
            grid_height: g.grid_height,
            cell_width: g.cell_width,
            cell_height: g.cell_height,
            radius: g.radius,
        }
    }
}

impl Grid {
    /// Overlay dot radius used when none is given.
    pub const DEFAULT_RADIUS: f64 = 2.0;

    pub fn new(
        grid_width: f64,
        grid_height: f64,
        cell_width: f64,
        cell_height: f64,
    ) -> StrokeResult<Self> {
        let all = [grid_width, grid_height, cell_width, cell_height];
        if all.iter().any(|v| !v.is_finite()) {
            return Err(StrokeError::validation("grid dimensions must be finite"));
        }
        if cell_width <= 0.0 || cell_height <= 0.0 {
            return Err(StrokeError::validation(format!(
                "grid cell size must be > 0, got {cell_width}x{cell_height}"
            )));
        }
        if grid_width < 0.0 || grid_height < 0.0 {
            return Err(StrokeError::validation("grid width and height must be >= 0"));
        }
        Ok(Self {
            grid_width,
            grid_height,
            cell_width,
            cell_height,
            radius: Self::DEFAULT_RADIUS,
        })
    }

    pub fn with_radius(mut self, radius: f64) -> StrokeResult<Self> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(StrokeError::validation("grid dot radius must be finite and >= 0"));
        }
        self.radius = radius;
        Ok(self)
    }

    pub fn grid_width(&self) -> f64 {
        self.grid_width
    }

    pub fn grid_height(&self) -> f64 {
        self.grid_height
    }

    pub fn cell_width(&self) -> f64 {
        self.cell_width
    }

    pub fn cell_height(&self) -> f64 {
        self.cell_height
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn columns(&self) -> usize {
        (self.grid_width / self.cell_width).ceil() as usize
    }

    pub fn rows(&self) -> usize {
        (self.grid_height / self.cell_height).ceil() as usize
    }

    pub fn unit_to_pixel(&self, p: Point) -> Point {
        Point::new(
            p.x * self.cell_width,
            self.grid_height - p.y * self.cell_height,
        )
    }

    pub fn pixel_to_unit(&self, x: f64, y: f64) -> Point {
        Point::new(x / self.cell_width, (self.grid_height - y) / self.cell_height)
    }

    /// Scales a unit-space extent to pixels. Sizes carry no origin, so y is not flipped.
    pub fn unit_size_to_pixel(&self, size: Vec2) -> Vec2 {
        Vec2::new(size.x * self.cell_width, size.y * self.cell_height)
    }

    fn extent_units(&self) -> Vec2 {
        Vec2::new(
            self.grid_width / self.cell_width,
            self.grid_height / self.cell_height,
        )
    }

    pub fn center(&self) -> Point {
        let e = self.extent_units();
        Point::new(e.x / 2.0, e.y / 2.0)
    }

    pub fn bottom_center(&self) -> Point {
        let e = self.extent_units();
        Point::new(e.x / 2.0, 0.0)
    }

    pub fn top_center(&self) -> Point {
        let e = self.extent_units();
        Point::new(e.x / 2.0, e.y)
    }

    pub fn center_left(&self) -> Point {
        let e = self.extent_units();
        Point::new(0.0, e.y / 2.0)
    }

    pub fn center_right(&self) -> Point {
        let e = self.extent_units();
        Point::new(e.x, e.y / 2.0)
    }

    /// Named anchors in unit space, in a fixed order.
    pub fn anchors(&self) -> [Point; 5] {
        [
            self.center(),
            self.bottom_center(),
            self.top_center(),
            self.center_left(),
            self.center_right(),
        ]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/mapping.rs"]
mod tests;
