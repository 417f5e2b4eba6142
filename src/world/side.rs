use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumCount, EnumIter, EnumString};

// 블럭을 바라보는 사람 기준의 면
// discriminant는 Orientation의 변환 테이블 인덱스로 사용됨
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
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
pub enum FaceLabel {
    Top,
    Bottom,
    Left,
    Right,
    Front,
    Back,
}

impl FaceLabel {
    pub fn index(self) -> usize {
        self as usize
    }

    // 앞면은 디스플레이라서 연결 불가
    pub fn is_configurable(self) -> bool {
        !matches!(self, FaceLabel::Front)
    }

    pub fn configurable() -> impl Iterator<Item = FaceLabel> {
        FaceLabel::iter().filter(|side| side.is_configurable())
    }
}
