use crate::meter::error::MeterError;

use self::direction::Direction;
use self::side::FaceLabel;

pub mod direction;
pub mod side;

pub fn parse_direction(src: &str) -> Result<Direction, MeterError> {
    src.trim()
        .to_lowercase()
        .parse()
        .map_err(|_| MeterError::InvalidArgument {
            what: "direction",
            value: src.to_owned(),
        })
}

pub fn parse_face_label(src: &str) -> Result<FaceLabel, MeterError> {
    src.trim()
        .to_lowercase()
        .parse()
        .map_err(|_| MeterError::InvalidArgument {
            what: "block side",
            value: src.to_owned(),
        })
}
