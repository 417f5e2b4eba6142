use std::{
    fs::{self, File},
    io::{Read, Write},
    path::{Path, PathBuf},
};

use flate2::{read::GzDecoder, write::GzEncoder, Compression};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::meter::{
    config::SideConfiguration, error::MeterError, orientation::Orientation, Meter,
};
use crate::world::{direction::Direction, parse_direction};

// 면 설정 compound, 방향 이름 -> IoMode ordinal
// 키가 없으면 0 (off) 으로 읽힘
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default)]
pub struct NBTSideConfig {
    down: i32,
    up: i32,
    north: i32,
    south: i32,
    west: i32,
    east: i32,
}

impl NBTSideConfig {
    pub fn get(&self, dir: Direction) -> i32 {
        match dir {
            Direction::Down => self.down,
            Direction::Up => self.up,
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::West => self.west,
            Direction::East => self.east,
        }
    }

    pub fn set(&mut self, dir: Direction, ordinal: i32) {
        let slot = match dir {
            Direction::Down => &mut self.down,
            Direction::Up => &mut self.up,
            Direction::North => &mut self.north,
            Direction::South => &mut self.south,
            Direction::West => &mut self.west,
            Direction::East => &mut self.east,
        };

        *slot = ordinal;
    }

    pub fn to_side_config(
        &self,
        orientation: Orientation,
    ) -> Result<SideConfiguration, MeterError> {
        SideConfiguration::from_ordinals(
            orientation,
            Direction::iter().map(|dir| (dir, self.get(dir))),
        )
    }
}

impl From<&SideConfiguration> for NBTSideConfig {
    fn from(value: &SideConfiguration) -> Self {
        let mut nbt = NBTSideConfig::default();

        for (dir, mode) in value.iter() {
            nbt.set(dir, mode.ordinal());
        }

        nbt
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NBTMeter {
    facing: String,
    bottom: String,

    #[serde(default)]
    side_config: NBTSideConfig,
}

pub trait ToNBT {
    fn to_nbt(&self) -> NBTMeter;
}

impl ToNBT for Meter {
    fn to_nbt(&self) -> NBTMeter {
        self.into()
    }
}

impl From<&Meter> for NBTMeter {
    fn from(value: &Meter) -> Self {
        let orientation = value.orientation();

        NBTMeter {
            facing: orientation.facing().to_string(),
            bottom: orientation.bottom().to_string(),
            side_config: value.side_config().into(),
        }
    }
}

impl NBTMeter {
    pub fn from_bytes(bytes: &[u8]) -> Result<NBTMeter, MeterError> {
        Ok(fastnbt::from_bytes(bytes)?)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, MeterError> {
        Ok(fastnbt::to_bytes(self)?)
    }

    pub fn load(path: &Path) -> eyre::Result<NBTMeter> {
        let file = File::open(path)?;
        let mut decoder = GzDecoder::new(file);

        let mut bytes = vec![];
        decoder.read_to_end(&mut bytes)?;

        Ok(Self::from_bytes(&bytes)?)
    }

    // 임시 파일에 다 쓴 뒤 rename, 중간에 실패해도 기존 파일은 그대로 남음
    pub fn save(&self, path: &Path) -> eyre::Result<()> {
        let new_bytes = self.to_bytes()?;

        let mut tmp_path = path.as_os_str().to_owned();
        tmp_path.push(".tmp");
        let tmp_path = PathBuf::from(tmp_path);

        let result = Self::write_gz(&tmp_path, &new_bytes);
        if result.is_err() {
            let _ = fs::remove_file(&tmp_path);
        }
        result?;

        fs::rename(&tmp_path, path)?;

        tracing::info!("saved meter to {}", path.display());
        Ok(())
    }

    fn write_gz(path: &Path, bytes: &[u8]) -> eyre::Result<()> {
        let outfile = File::create(path)?;
        let mut encoder = GzEncoder::new(outfile, Compression::best());
        encoder.write_all(bytes)?;
        encoder.finish()?.sync_all()?;

        Ok(())
    }

    // 면 설정이 깨졌으면 전부 off로 되돌리고, 방향을 못 읽으면 에러
    pub fn to_meter(&self) -> Result<Meter, MeterError> {
        let orientation = Orientation::new(
            parse_direction(&self.facing)?,
            parse_direction(&self.bottom)?,
        )?;

        let side_config = match self.side_config.to_side_config(orientation) {
            Ok(side_config) => side_config,
            Err(err) => {
                tracing::warn!("{err}, resetting every side to off");
                SideConfiguration::new(orientation)
            }
        };

        Ok(Meter::with_side_config(side_config))
    }
}

impl Meter {
    pub fn load(path: &Path) -> eyre::Result<Meter> {
        let meter = NBTMeter::load(path)?.to_meter()?;
        tracing::info!("loaded meter from {}", path.display());

        Ok(meter)
    }

    pub fn save(&self, path: &Path) -> eyre::Result<()> {
        self.to_nbt().save(path)
    }
}
