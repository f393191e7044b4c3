//! nesbox: An NES (Nintendo Entertainment System) emulator written in Rust.
//!
//! ## Modules
//!
//! - **bus** – Memory map, PPU/controller/cartridge access
//! - **cartridge** – iNES loading, mappers (NROM, MMC1)
//! - **controller** – NES controller shift-register protocol
//! - **cpu** – 6502 instruction set and execution
//! - **error** – `NesError` taxonomy
//! - **palette** – 2C02 RGB lookup table
//! - **ppu** – Background, sprites, palettes, framebuffer
//! - **system** – Composition root tying CPU, bus, PPU, and cartridge together
//! - **vram** – PPU-side address routing (CHR, nametable mirroring, palette RAM)

pub mod bus;
pub mod cartridge;
pub mod controller;
pub mod cpu;
pub mod error;
pub mod palette;
pub mod ppu;
pub mod system;
pub mod vram;