use serde::{Deserialize, Serialize};
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use super::error::MeterError;
use super::orientation::Orientation;
use crate::world::{direction::Direction, side::FaceLabel};

pub const MAX_OUTPUTS: usize = 4;

// 각 면의 입출력 설정, ordinal 값이 그대로 저장됨
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum IoMode {
    #[default]
    Off = 0,
    In = 1,
    Out = 2,
}

impl IoMode {
    pub fn ordinal(self) -> i32 {
        self as i32
    }

    pub fn from_ordinal(ordinal: i32) -> Option<IoMode> {
        match ordinal {
            0 => Some(IoMode::Off),
            1 => Some(IoMode::In),
            2 => Some(IoMode::Out),
            _ => None,
        }
    }
}

impl TryFrom<i32> for IoMode {
    type Error = MeterError;

    fn try_from(ordinal: i32) -> Result<Self, Self::Error> {
        IoMode::from_ordinal(ordinal).ok_or(MeterError::InvalidState { ordinal })
    }
}

// 미터 하나의 방향별 입출력 설정, 모든 방향이 항상 값을 가짐
// set은 출력 개수 제한을 검사하지 않음
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideConfiguration {
    orientation: Orientation,
    modes: [IoMode; Direction::COUNT],
}

impl SideConfiguration {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            modes: [IoMode::Off; Direction::COUNT],
        }
    }

    // 하나라도 잘못된 ordinal이 있으면 전체를 버림
    pub fn from_ordinals(
        orientation: Orientation,
        ordinals: impl IntoIterator<Item = (Direction, i32)>,
    ) -> Result<Self, MeterError> {
        let mut config = Self::new(orientation);

        for (dir, ordinal) in ordinals {
            config.modes[dir.index()] =
                IoMode::from_ordinal(ordinal).ok_or_else(|| MeterError::CorruptState {
                    key: dir.to_string(),
                    ordinal,
                })?;
        }

        Ok(config)
    }

    pub fn orientation(&self) -> &Orientation {
        &self.orientation
    }

    pub fn direction_of(&self, side: FaceLabel) -> Direction {
        self.orientation.translate(side)
    }

    pub fn get(&self, dir: Direction) -> IoMode {
        self.modes[dir.index()]
    }

    pub fn get_side(&self, side: FaceLabel) -> IoMode {
        self.get(self.direction_of(side))
    }

    pub fn set(&mut self, side: FaceLabel, mode: IoMode) {
        let dir = self.direction_of(side);
        tracing::debug!("set {side} ({dir}) to {mode}");

        self.modes[dir.index()] = mode;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Direction, IoMode)> + '_ {
        Direction::iter().map(|dir| (dir, self.get(dir)))
    }

    pub fn directions_with(&self, mode: IoMode) -> impl Iterator<Item = Direction> + '_ {
        self.iter()
            .filter(move |(_, current)| *current == mode)
            .map(|(dir, _)| dir)
    }

    pub fn has_input(&self) -> bool {
        self.modes.contains(&IoMode::In)
    }

    pub fn has_output(&self) -> bool {
        self.modes.contains(&IoMode::Out)
    }

    pub fn output_count(&self) -> usize {
        self.directions_with(IoMode::Out).count()
    }

    pub fn has_max_outputs(&self) -> bool {
        self.output_count() == MAX_OUTPUTS
    }
}
