//! Persisted settings and their storage image.

use crc::{Crc, CRC_16_USB};

use crate::cache::segment::SegmentConfiguration;
use crate::cache::OperatingMode;
use crate::NUM_CHANNELS;

/// Snapshot of all settings that survive a power cycle.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Save {
    pub segment_configurations: [SegmentConfiguration; NUM_CHANNELS],
    pub operating_mode: OperatingMode,
    pub color_blind: bool,
}

impl Save {
    const SIZE: usize = NUM_CHANNELS + 2;

    fn to_bytes(self) -> [u8; Self::SIZE] {
        let mut bytes = [0; Self::SIZE];
        for (byte, configuration) in bytes.iter_mut().zip(&self.segment_configurations) {
            *byte = configuration.raw();
        }
        bytes[NUM_CHANNELS] = self.operating_mode.to_byte();
        bytes[NUM_CHANNELS + 1] = u8::from(self.color_blind);
        bytes
    }

    fn from_bytes(bytes: [u8; Self::SIZE]) -> Result<Self, InvalidData> {
        let mut segment_configurations = [SegmentConfiguration::default(); NUM_CHANNELS];
        for (configuration, byte) in segment_configurations.iter_mut().zip(&bytes) {
            *configuration = SegmentConfiguration::from_raw(*byte);
        }
        // The mode enumeration is closed, an image with an unknown mode byte
        // is corrupted even when its CRC holds.
        let operating_mode =
            OperatingMode::from_byte(bytes[NUM_CHANNELS]).ok_or(InvalidData)?;
        Ok(Self {
            segment_configurations,
            operating_mode,
            color_blind: bytes[NUM_CHANNELS + 1] != 0,
        })
    }
}

// This constant is used to invalidate data when needed
const TOKEN: u16 = 1;
const CRC: Crc<u16> = Crc::<u16>::new(&CRC_16_USB);
pub struct InvalidData;

/// One flash-sized image of a save, wrapped with version and integrity data.
#[derive(Clone, Copy)]
pub struct Store {
    version: u32,
    token: u16,
    save_raw: [u8; Save::SIZE],
    crc: u16,
}

impl Store {
    pub const SIZE: usize = 4 + 2 + Save::SIZE + 2;

    #[must_use]
    pub fn new(save: Save, version: u32) -> Self {
        let save_raw = save.to_bytes();
        let crc = CRC.checksum(&save_raw);
        Self {
            version,
            token: TOKEN,
            save_raw,
            crc,
        }
    }

    /// # Errors
    ///
    /// This fails with `InvalidData` when the recovered image carries an
    /// unexpected token, does not pass the CRC check, or holds a save that
    /// cannot be decoded.
    pub fn from_bytes(bytes: [u8; Self::SIZE]) -> Result<Self, InvalidData> {
        let version = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        let token = u16::from_le_bytes([bytes[4], bytes[5]]);
        let mut save_raw = [0; Save::SIZE];
        save_raw.copy_from_slice(&bytes[6..6 + Save::SIZE]);
        let crc = u16::from_le_bytes([bytes[6 + Save::SIZE], bytes[7 + Save::SIZE]]);

        if token != TOKEN {
            return Err(InvalidData);
        }
        if CRC.checksum(&save_raw) != crc {
            return Err(InvalidData);
        }
        let _ = Save::from_bytes(save_raw)?;

        Ok(Self {
            version,
            token,
            save_raw,
            crc,
        })
    }

    #[must_use]
    pub fn to_bytes(self) -> [u8; Self::SIZE] {
        let mut bytes = [0; Self::SIZE];
        bytes[0..4].copy_from_slice(&self.version.to_le_bytes());
        bytes[4..6].copy_from_slice(&self.token.to_le_bytes());
        bytes[6..6 + Save::SIZE].copy_from_slice(&self.save_raw);
        bytes[6 + Save::SIZE..].copy_from_slice(&self.crc.to_le_bytes());
        bytes
    }

    #[must_use]
    pub fn save(&self) -> Save {
        Save::from_bytes(self.save_raw).unwrap_or_default()
    }

    #[must_use]
    pub fn version(&self) -> u32 {
        self.version
    }
}
