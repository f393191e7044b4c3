//! PPU (Picture Processing Unit) emulation for the NES.
//!
//! Handles scanline timing, background and sprite rendering, nametable mirroring,
//! palette RAM, OAM (sprites), and the 256×240 framebuffer.

pub mod ppu;
