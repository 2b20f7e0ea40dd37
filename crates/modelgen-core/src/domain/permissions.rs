use std::fmt;

/// Unix permission bits applied to a written file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileMode(u32);

impl FileMode {
    /// Read and write for owner, group and others (`0o666`).
    pub const WORLD_READ_WRITE: Self = Self(0o666);

    /// Keep only the permission bits of `mode`.
    pub const fn from_bits(mode: u32) -> Self {
        Self(mode & 0o777)
    }

    pub const fn bits(&self) -> u32 {
        self.0
    }

    /// `true` if owner, group and others may all read and write.
    pub const fn is_world_read_write(&self) -> bool {
        self.0 & 0o666 == 0o666
    }
}

impl Default for FileMode {
    fn default() -> Self {
        Self::WORLD_READ_WRITE
    }
}

impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04o}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_read_write_bits() {
        let mode = FileMode::WORLD_READ_WRITE;
        assert_eq!(mode.bits(), 0o666);
        assert!(mode.is_world_read_write());
        assert_eq!(mode.to_string(), "0666");
    }

    #[test]
    fn from_bits_drops_file_type() {
        // st_mode of a regular file carries S_IFREG in the high bits.
        let mode = FileMode::from_bits(0o100_644);
        assert_eq!(mode.bits(), 0o644);
        assert!(!mode.is_world_read_write());
    }
}
