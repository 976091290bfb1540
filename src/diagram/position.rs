//! Integer grid positions and face adjacency.

use std::cmp::Ordering;
use std::fmt;

use crate::core::types::{IVec3, Vec3};

/// The six faces of a grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    /// +z
    Front,
    /// -z
    Back,
    /// -x
    Left,
    /// +x
    Right,
    /// +y
    Top,
    /// -y
    Bottom,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Back,
        Face::Left,
        Face::Right,
        Face::Top,
        Face::Bottom,
    ];

    /// Unit offset from a cell to its neighbour across this face.
    pub fn offset(self) -> IVec3 {
        match self {
            Face::Front => IVec3::Z,
            Face::Back => IVec3::NEG_Z,
            Face::Left => IVec3::NEG_X,
            Face::Right => IVec3::X,
            Face::Top => IVec3::Y,
            Face::Bottom => IVec3::NEG_Y,
        }
    }

    /// The face on the other side of the cell.
    pub fn opposite(self) -> Face {
        match self {
            Face::Front => Face::Back,
            Face::Back => Face::Front,
            Face::Left => Face::Right,
            Face::Right => Face::Left,
            Face::Top => Face::Bottom,
            Face::Bottom => Face::Top,
        }
    }
}

/// Integer coordinate identifying one cell of the diagram.
///
/// Positions order by `(y, x, z)`: all cells of a level sort together, which
/// makes a sorted walk over a store the canonical save order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0, y: 0, z: 0 };

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Same column, moved to level `y`.
    pub const fn with_y(self, y: i32) -> Self {
        Self { y, ..self }
    }

    /// Translate by an integer offset.
    pub fn offset(self, delta: IVec3) -> Self {
        Self::from(IVec3::from(self) + delta)
    }

    /// Neighbouring cell across `face`.
    pub fn neighbor(self, face: Face) -> Self {
        self.offset(face.offset())
    }

    /// All six face-adjacent cells.
    pub fn neighbors(self) -> [Position; 6] {
        Face::ALL.map(|face| self.neighbor(face))
    }

    /// The four same-level neighbours (±x, ±z).
    pub fn horizontal_neighbors(self) -> [Position; 4] {
        [
            self.neighbor(Face::Right),
            self.neighbor(Face::Left),
            self.neighbor(Face::Front),
            self.neighbor(Face::Back),
        ]
    }

    /// World-space centre of the cell, used by the rendering layer.
    pub fn center(self) -> Vec3 {
        Vec3::new(
            self.x as f32 + 0.5,
            self.y as f32 + 0.5,
            self.z as f32 + 0.5,
        )
    }

    /// Cell containing a world-space point.
    pub fn containing(point: Vec3) -> Self {
        Self::new(
            point.x.floor() as i32,
            point.y.floor() as i32,
            point.z.floor() as i32,
        )
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x, self.z).cmp(&(other.y, other.x, other.z))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<IVec3> for Position {
    fn from(v: IVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Position> for IVec3 {
    fn from(p: Position) -> Self {
        IVec3::new(p.x, p.y, p.z)
    }
}

impl From<(i32, i32, i32)> for Position {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
