use thiserror::Error;

#[derive(Error, Debug)]
pub enum MeterError {
    // 저장된 값이 IoMode 범위를 벗어남
    #[error("Corrupt side configuration: `{key}` holds unknown mode ordinal {ordinal}")]
    CorruptState { key: String, ordinal: i32 },

    // 존재하지 않는 IoMode ordinal
    #[error("Invalid I/O mode ordinal: {ordinal}")]
    InvalidState { ordinal: i32 },

    #[error("Invalid {what}: {value}")]
    InvalidArgument { what: &'static str, value: String },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("NBT error: {source}")]
    Nbt {
        #[from]
        source: fastnbt::error::Error,
    },
}
