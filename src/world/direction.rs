use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumCount, EnumIter, EnumString};

// 월드 기준의 절대 방향
// 순서와 이름은 저장 포맷의 키로 사용되므로 바꾸면 안 됨
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumIter,
    EnumCount,
    EnumString,
    Display,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Down,
    Up,
    North,
    South,
    West,
    East,
}

impl Direction {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Down => Direction::Up,
            Direction::Up => Direction::Down,
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
        }
    }

    // north -> east -> south -> west -> north
    pub fn clockwise(self) -> Option<Direction> {
        match self {
            Direction::North => Some(Direction::East),
            Direction::East => Some(Direction::South),
            Direction::South => Some(Direction::West),
            Direction::West => Some(Direction::North),
            Direction::Up | Direction::Down => None,
        }
    }

    pub fn counter_clockwise(self) -> Option<Direction> {
        match self {
            Direction::North => Some(Direction::West),
            Direction::West => Some(Direction::South),
            Direction::South => Some(Direction::East),
            Direction::East => Some(Direction::North),
            Direction::Up | Direction::Down => None,
        }
    }
}
