//! NES mappers for PRG/CHR memory mapping and nametable mirroring.
//!
//! - **Mapper 0** ([NROM](https://www.nesdev.org/wiki/NROM)): no bank switching.
//! - **Mapper 1** ([MMC1](https://www.nesdev.org/wiki/MMC1)): shift-register bank switching.
//!
//! Mirroring controls how the PPU maps the four logical nametables ($2000, $2400, $2800, $2C00) to
//! nametable RAM. See [PPU nametables](https://www.nesdev.org/wiki/PPU_nametables#Nametable_mirroring).

/// Nametable mirroring: Horizontal = left/right pairs share data (vertical mirroring in NESdev terms);
/// Vertical = top/bottom pairs share data (horizontal mirroring). One-screen = all four logical
/// nametables map to the same 1 KiB (lower or upper half of the PPU's 2 KiB RAM). FourScreen means
/// the cartridge carries its own extra 2 KiB of nametable RAM so all four tables are independent;
/// only NROM carts with the iNES four-screen header bit set report it. See Mirroring.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Mirroring {
    Horizontal,
    Vertical,
    /// All four nametables use the first 1 KiB ($2000–$23FF).
    OneScreenLower,
    /// All four nametables use the second 1 KiB ($2400–$27FF).
    OneScreenUpper,
    /// Mapper-routed: the cartridge supplies a second 2 KiB bank so all four tables are distinct.
    FourScreen,
}

pub mod mapper;

pub mod mapper0;
pub mod mapper1;
