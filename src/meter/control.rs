use itertools::Itertools;

use super::config::{IoMode, SideConfiguration};
use super::error::MeterError;
use super::IoUpdate;
use crate::world::side::FaceLabel;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum FaceAction {
    // 일반 클릭
    #[default]
    Advance,
    // shift 클릭
    Reset,
}

// 입력이 이미 있으면 새 면은 바로 출력이 되고, 출력이 꽉 찬 상태의 입력은 off로 돌아감
pub fn advance(current: IoMode, config: &SideConfiguration) -> IoMode {
    match current {
        IoMode::Off if config.has_input() => IoMode::Out,
        IoMode::Off => IoMode::In,
        IoMode::In if config.has_max_outputs() => IoMode::Off,
        IoMode::In => IoMode::Out,
        IoMode::Out => IoMode::Off,
    }
}

pub fn reset(_current: IoMode) -> IoMode {
    IoMode::Off
}

// 한 면에 대한 토글 버튼, 마지막으로 알고 있는 설정을 들고 있음
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FaceControl {
    side: FaceLabel,
    mode: IoMode,
}

impl FaceControl {
    pub fn new(side: FaceLabel, config: &SideConfiguration) -> Result<Self, MeterError> {
        if !side.is_configurable() {
            return Err(MeterError::InvalidArgument {
                what: "configurable side",
                value: side.to_string(),
            });
        }

        Ok(Self {
            side,
            mode: config.get_side(side),
        })
    }

    pub fn create(config: &SideConfiguration) -> Vec<FaceControl> {
        FaceLabel::configurable()
            .map(|side| Self {
                side,
                mode: config.get_side(side),
            })
            .collect_vec()
    }

    pub fn side(&self) -> FaceLabel {
        self.side
    }

    pub fn mode(&self) -> IoMode {
        self.mode
    }

    pub fn next_mode(&self, action: FaceAction, config: &SideConfiguration) -> IoMode {
        match action {
            FaceAction::Advance => advance(self.mode, config),
            FaceAction::Reset => reset(self.mode),
        }
    }

    // 반환된 IoUpdate는 이 미터를 보고 있는 쪽으로 전달해야 함
    pub fn click(&mut self, action: FaceAction, config: &mut SideConfiguration) -> IoUpdate {
        // 다른 곳에서 바뀌었을 수 있으므로 캐시 대신 현재 설정에서 시작
        self.sync(config);

        let next = self.next_mode(action, config);
        tracing::debug!("{:?} on {}: {} -> {}", action, self.side, self.mode, next);

        config.set(self.side, next);
        self.mode = next;

        IoUpdate::new(self.side, next)
    }

    pub fn sync(&mut self, config: &SideConfiguration) {
        self.mode = config.get_side(self.side);
    }
}
