use serde::{Deserialize, Serialize};

use self::config::{IoMode, SideConfiguration};
use self::control::{FaceAction, FaceControl};
use self::error::MeterError;
use self::orientation::Orientation;
use crate::world::{direction::Direction, side::FaceLabel};

pub mod config;
pub mod control;
pub mod error;
pub mod orientation;

// 한 면의 변경 사항, mode는 ordinal 그대로 전달되므로 받는 쪽에서 검증해야 함
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct IoUpdate {
    pub side: FaceLabel,
    pub mode: i32,
}

impl IoUpdate {
    pub fn new(side: FaceLabel, mode: IoMode) -> Self {
        Self {
            side,
            mode: mode.ordinal(),
        }
    }
}

// 에너지 미터 블럭 하나
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meter {
    side_config: SideConfiguration,
}

impl Meter {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            side_config: SideConfiguration::new(orientation),
        }
    }

    pub fn place(facing: Direction, bottom: Direction) -> Result<Self, MeterError> {
        let meter = Self::new(Orientation::new(facing, bottom)?);
        tracing::info!("placed meter facing {facing} (bottom {bottom})");

        Ok(meter)
    }

    pub fn with_side_config(side_config: SideConfiguration) -> Self {
        Self { side_config }
    }

    pub fn orientation(&self) -> &Orientation {
        self.side_config.orientation()
    }

    pub fn side_config(&self) -> &SideConfiguration {
        &self.side_config
    }

    pub fn controls(&self) -> Vec<FaceControl> {
        FaceControl::create(&self.side_config)
    }

    pub fn click(&mut self, side: FaceLabel, action: FaceAction) -> Result<IoUpdate, MeterError> {
        let mut control = FaceControl::new(side, &self.side_config)?;

        Ok(control.click(action, &mut self.side_config))
    }

    pub fn apply_update(&mut self, update: IoUpdate) -> Result<IoMode, MeterError> {
        let mode = IoMode::try_from(update.mode)?;
        self.side_config.set(update.side, mode);

        Ok(mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unittest_meter_click_and_mirror() -> eyre::Result<()> {
        let mut meter = Meter::place(Direction::North, Direction::Down)?;
        let mut mirror = meter.clone();

        let updates = [
            meter.click(FaceLabel::Left, FaceAction::Advance)?,
            meter.click(FaceLabel::Top, FaceAction::Advance)?,
            meter.click(FaceLabel::Back, FaceAction::Advance)?,
        ];

        for update in updates {
            mirror.apply_update(update)?;
        }

        assert_eq!(meter, mirror);
        assert_eq!(meter.side_config().get(Direction::East), IoMode::In);
        assert_eq!(meter.side_config().get(Direction::Up), IoMode::Out);
        assert_eq!(meter.side_config().get(Direction::South), IoMode::Out);

        Ok(())
    }

    #[test]
    fn unittest_apply_update_rejects_unknown_mode() -> eyre::Result<()> {
        let mut meter = Meter::place(Direction::Up, Direction::North)?;
        let err = meter
            .apply_update(IoUpdate {
                side: FaceLabel::Top,
                mode: 3,
            })
            .unwrap_err();

        assert!(matches!(err, MeterError::InvalidState { ordinal: 3 }));
        assert!(!meter.side_config().has_input());
        assert!(!meter.side_config().has_output());

        Ok(())
    }

    #[test]
    fn unittest_meter_front_is_not_clickable() -> eyre::Result<()> {
        let mut meter = Meter::place(Direction::South, Direction::Down)?;

        assert!(meter.click(FaceLabel::Front, FaceAction::Advance).is_err());
        assert_eq!(meter.controls().len(), 5);

        Ok(())
    }

    #[test]
    fn unittest_update_serializes_as_ordinal() -> eyre::Result<()> {
        let update = IoUpdate::new(FaceLabel::Right, IoMode::Out);
        let json = serde_json::to_string(&update)?;

        assert_eq!(json, r#"{"side":"right","mode":2}"#);
        assert_eq!(serde_json::from_str::<IoUpdate>(&json)?, update);

        Ok(())
    }
}
