use strum::EnumCount;

use super::error::MeterError;
use crate::world::{direction::Direction, side::FaceLabel};

// 설치된 미터의 회전
// facing이 위/아래면 눕힌 상태이고 bottom은 수평 방향이어야 함
// 세워진 상태에서는 bottom을 저장만 하고 변환에는 쓰지 않음
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Orientation {
    facing: Direction,
    bottom: Direction,
    sides: [Direction; FaceLabel::COUNT],
}

impl Orientation {
    pub fn new(facing: Direction, bottom: Direction) -> Result<Self, MeterError> {
        let sides = if facing.is_vertical() {
            let (cw, ccw) = rotations(bottom).ok_or_else(|| MeterError::InvalidArgument {
                what: "bottom of a tipped meter",
                value: bottom.to_string(),
            })?;

            // 위를 보고 있을 때와 아래를 보고 있을 때 좌우가 뒤집힘
            let (left, right) = if facing == Direction::Up {
                (cw, ccw)
            } else {
                (ccw, cw)
            };

            Self::table(bottom.opposite(), bottom, left, right, facing)
        } else {
            let (cw, ccw) = rotations(facing).ok_or_else(|| MeterError::InvalidArgument {
                what: "facing",
                value: facing.to_string(),
            })?;

            Self::table(Direction::Up, Direction::Down, cw, ccw, facing)
        };

        tracing::debug!("orientation facing={facing}, bottom={bottom}: {sides:?}");

        Ok(Self {
            facing,
            bottom,
            sides,
        })
    }

    fn table(
        top: Direction,
        bottom: Direction,
        left: Direction,
        right: Direction,
        front: Direction,
    ) -> [Direction; FaceLabel::COUNT] {
        let mut sides = [front; FaceLabel::COUNT];
        sides[FaceLabel::Top.index()] = top;
        sides[FaceLabel::Bottom.index()] = bottom;
        sides[FaceLabel::Left.index()] = left;
        sides[FaceLabel::Right.index()] = right;
        sides[FaceLabel::Front.index()] = front;
        sides[FaceLabel::Back.index()] = front.opposite();
        sides
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    pub fn bottom(&self) -> Direction {
        self.bottom
    }

    pub fn is_tipped(&self) -> bool {
        self.facing.is_vertical()
    }

    pub fn translate(&self, side: FaceLabel) -> Direction {
        self.sides[side.index()]
    }

    pub fn side_of(&self, dir: Direction) -> FaceLabel {
        match self.sides.iter().position(|&d| d == dir) {
            Some(index) => FACE_LABELS[index],
            // every table is a permutation of the six directions
            None => unreachable!(),
        }
    }
}

const FACE_LABELS: [FaceLabel; FaceLabel::COUNT] = [
    FaceLabel::Top,
    FaceLabel::Bottom,
    FaceLabel::Left,
    FaceLabel::Right,
    FaceLabel::Front,
    FaceLabel::Back,
];

fn rotations(dir: Direction) -> Option<(Direction, Direction)> {
    Some((dir.clockwise()?, dir.counter_clockwise()?))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use itertools::Itertools;
    use strum::IntoEnumIterator;

    use super::*;

    fn all_orientations() -> Vec<Orientation> {
        Direction::iter()
            .cartesian_product(Direction::iter())
            .filter_map(|(facing, bottom)| Orientation::new(facing, bottom).ok())
            .collect_vec()
    }

    #[test]
    fn unittest_upright_translation() -> eyre::Result<()> {
        let orientation = Orientation::new(Direction::North, Direction::Down)?;

        assert!(!orientation.is_tipped());
        assert_eq!(orientation.translate(FaceLabel::Top), Direction::Up);
        assert_eq!(orientation.translate(FaceLabel::Bottom), Direction::Down);
        assert_eq!(orientation.translate(FaceLabel::Left), Direction::East);
        assert_eq!(orientation.translate(FaceLabel::Right), Direction::West);
        assert_eq!(orientation.translate(FaceLabel::Back), Direction::South);
        assert_eq!(orientation.translate(FaceLabel::Front), Direction::North);

        Ok(())
    }

    #[test]
    fn unittest_tipped_up_translation() -> eyre::Result<()> {
        let orientation = Orientation::new(Direction::Up, Direction::South)?;

        assert!(orientation.is_tipped());
        assert_eq!(orientation.translate(FaceLabel::Bottom), Direction::South);
        assert_eq!(orientation.translate(FaceLabel::Top), Direction::North);
        assert_eq!(orientation.translate(FaceLabel::Left), Direction::West);
        assert_eq!(orientation.translate(FaceLabel::Right), Direction::East);
        assert_eq!(orientation.translate(FaceLabel::Back), Direction::Down);
        assert_eq!(orientation.translate(FaceLabel::Front), Direction::Up);

        Ok(())
    }

    #[test]
    fn unittest_tipped_down_mirrors_left_and_right() -> eyre::Result<()> {
        let orientation = Orientation::new(Direction::Down, Direction::South)?;

        assert_eq!(orientation.translate(FaceLabel::Left), Direction::East);
        assert_eq!(orientation.translate(FaceLabel::Right), Direction::West);
        assert_eq!(orientation.translate(FaceLabel::Back), Direction::Up);

        Ok(())
    }

    #[test]
    fn unittest_tipped_with_vertical_bottom_is_rejected() {
        for (facing, bottom) in [
            (Direction::Up, Direction::Down),
            (Direction::Up, Direction::Up),
            (Direction::Down, Direction::Up),
        ] {
            let err = Orientation::new(facing, bottom).unwrap_err();
            assert!(matches!(err, MeterError::InvalidArgument { .. }));
        }
    }

    #[test]
    fn unittest_upright_ignores_bottom() -> eyre::Result<()> {
        let a = Orientation::new(Direction::East, Direction::East)?;
        let b = Orientation::new(Direction::East, Direction::Down)?;

        for side in FaceLabel::iter() {
            assert_eq!(a.translate(side), b.translate(side));
        }

        Ok(())
    }

    #[test]
    fn unittest_translation_is_bijective() {
        let orientations = all_orientations();
        // 4 upright facings * 6 bottoms + 2 tipped facings * 4 bottoms
        assert_eq!(orientations.len(), 32);

        for orientation in orientations {
            let configurable = FaceLabel::configurable()
                .map(|side| orientation.translate(side))
                .collect::<HashSet<_>>();
            assert_eq!(configurable.len(), 5);
            assert!(!configurable.contains(&orientation.facing()));

            for side in FaceLabel::iter() {
                assert_eq!(orientation.side_of(orientation.translate(side)), side);
            }
        }
    }
}
