use std::path::PathBuf;

/// Where model weights come from.
pub enum ModelSource {
    File(PathBuf),
    Memory(Vec<u8>),
}
