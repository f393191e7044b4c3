//! NES cartridge loading from iNES format (.nes files).
//!
//! Header: 16 bytes (magic, PRG size x 16 KiB, CHR size x 8 KiB, flags, mapper, etc.),
//! optionally followed by a 512-byte trainer, then PRG ROM, then CHR ROM (or CHR RAM).
//! See [iNES](https://www.nesdev.org/wiki/INES).

use std::fs;

use crate::cartridge::mapper::mapper::Mapper;
use crate::cartridge::mapper::mapper0::Mapper0;
use crate::cartridge::mapper::mapper1::Mapper1;
use crate::cartridge::mapper::Mirroring;
use crate::error::{LoadError, NesError};

const HEADER_SIZE: usize = 16;
const TRAINER_SIZE: usize = 512;
const PRG_BANK_SIZE: usize = 16 * 1024;
const CHR_BANK_SIZE: usize = 8 * 1024;

/// Cartridge: holds the mapper that implements PRG ($6000-$FFFF) and CHR ($0000-$1FFF) access,
/// plus the extra 2 KiB of nametable RAM four-screen carts need (see `Mirroring::FourScreen`).
pub struct Cartridge {
    pub mapper: Box<dyn Mapper>,
    pub four_screen_vram: Option<[u8; 0x800]>,
}

impl Cartridge {
    /// Load a cartridge from an iNES v1 file at `path`.
    pub fn load(path: &str) -> Result<Self, NesError> {
        let data = fs::read(path)?;
        Self::from_bytes(&data)
    }

    /// Parse an iNES v1 image already in memory.
    pub fn from_bytes(data: &[u8]) -> Result<Self, NesError> {
        if data.len() < HEADER_SIZE {
            return Err(LoadError::TooSmall.into());
        }
        if &data[0..4] != b"NES\x1A" {
            return Err(LoadError::BadMagic.into());
        }
        if data[7] & 0x0C == 0x08 {
            return Err(LoadError::Nes20Unsupported.into());
        }

        let prg_banks = data[4] as usize;
        let chr_banks = data[5] as usize;
        let flags6 = data[6];
        let flags7 = data[7];

        let has_trainer = flags6 & 0x04 != 0;
        let four_screen = flags6 & 0x08 != 0;
        let vertical = flags6 & 0x01 != 0;
        let mapper_id = (flags7 & 0xF0) | (flags6 >> 4);

        let prg_rom_size = prg_banks * PRG_BANK_SIZE;
        let chr_rom_size = chr_banks * CHR_BANK_SIZE;

        let mut offset = HEADER_SIZE;
        if has_trainer {
            offset += TRAINER_SIZE;
        }
        let prg_start = offset;
        let prg_end = prg_start + prg_rom_size;
        let chr_start = prg_end;
        let chr_end = chr_start + chr_rom_size;

        if data.len() < chr_end {
            return Err(LoadError::Truncated {
                expected: chr_end,
                actual: data.len(),
            }
            .into());
        }

        let prg_rom = data[prg_start..prg_end].to_vec();
        let chr_is_ram = chr_banks == 0;
        let chr = if chr_is_ram {
            vec![0u8; CHR_BANK_SIZE]
        } else {
            data[chr_start..chr_end].to_vec()
        };

        let mirroring = if four_screen {
            Mirroring::FourScreen
        } else if vertical {
            Mirroring::Vertical
        } else {
            Mirroring::Horizontal
        };

        let mapper: Box<dyn Mapper> = match mapper_id {
            0 => Box::new(Mapper0::new(prg_rom, chr, chr_is_ram, mirroring)),
            1 => Box::new(Mapper1::new(prg_rom, chr, chr_is_ram)),
            other => return Err(LoadError::UnsupportedMapper(other).into()),
        };

        let four_screen_vram = four_screen.then_some([0u8; 0x800]);

        Ok(Self {
            mapper,
            four_screen_vram,
        })
    }

    /// Read from CHR ($0000-$1FFF) or PRG RAM/ROM ($6000-$FFFF).
    pub fn read(&self, addr: u16) -> u8 {
        self.mapper.read(addr)
    }

    /// Write to CHR RAM, PRG RAM, or mapper bank-select registers.
    pub fn write(&mut self, addr: u16, data: u8) {
        self.mapper.write(addr, data);
    }

    pub fn mirroring(&self) -> Mirroring {
        self.mapper.mirroring()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_rom(prg_banks: u8, chr_banks: u8, flags6: u8) -> Vec<u8> {
        let mut data = vec![0u8; HEADER_SIZE];
        data[0..4].copy_from_slice(b"NES\x1A");
        data[4] = prg_banks;
        data[5] = chr_banks;
        data[6] = flags6;
        data.resize(HEADER_SIZE + prg_banks as usize * PRG_BANK_SIZE + chr_banks as usize * CHR_BANK_SIZE, 0);
        data
    }

    #[test]
    fn rejects_bad_magic() {
        let mut data = minimal_rom(1, 1, 0);
        data[0] = b'X';
        assert!(matches!(
            Cartridge::from_bytes(&data),
            Err(NesError::Load(LoadError::BadMagic))
        ));
    }

    #[test]
    fn rejects_nes20_header() {
        let mut data = minimal_rom(1, 1, 0);
        data[7] = 0x08;
        assert!(matches!(
            Cartridge::from_bytes(&data),
            Err(NesError::Load(LoadError::Nes20Unsupported))
        ));
    }

    #[test]
    fn loads_nrom_with_chr_ram_when_chr_banks_zero() {
        let data = minimal_rom(1, 0, 0);
        let cart = Cartridge::from_bytes(&data).unwrap();
        assert!(matches!(cart.mirroring(), Mirroring::Horizontal));
    }

    #[test]
    fn rejects_unsupported_mapper() {
        let data = minimal_rom(1, 1, 0x20); // mapper 2 in the high nibble of flags6
        assert!(matches!(
            Cartridge::from_bytes(&data),
            Err(NesError::Load(LoadError::UnsupportedMapper(2)))
        ));
    }
}
