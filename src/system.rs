//! Composition root tying the CPU, bus, PPU and cartridge together.
//!
//! Replaces the reference emulator's implicit global CPU/PPU singletons with a single owned
//! value a host binary can construct, step, and read back from.

use crate::bus::{Bus, NesBus};
use crate::cartridge::cartridge::Cartridge;
use crate::controller::Button;
use crate::cpu::cpu::CPU;
use crate::error::NesError;

/// An assembled NES: CPU, bus, PPU and cartridge, reachable only through this handle.
pub struct System {
    cpu: CPU<NesBus>,
    /// Set once a cartridge has powered the system on; distinguishes power-on from re-insertion.
    inserted: bool,
}

impl System {
    /// Load a cartridge from `path` and power on (CPU reset to the reset vector).
    pub fn load(path: &str) -> Result<Self, NesError> {
        let cart = Cartridge::load(path)?;
        Ok(Self::from_cartridge(cart))
    }

    /// Power on with an already-parsed cartridge.
    pub fn from_cartridge(cart: Cartridge) -> Self {
        let bus = NesBus::new(cart);
        let mut cpu = CPU {
            a: 0,
            x: 0,
            y: 0,
            sp: 0xFD,
            pc: 0,
            status: 0x24,
            cycles: 0,
            bus,
            halted: false,
        };
        cpu.reset();
        Self {
            cpu,
            inserted: true,
        }
    }

    /// Swap in a new cartridge and reset. If one was already inserted, logs `StateWarning`
    /// (§7: re-initialisation of an already-inserted cartridge logs and replaces state).
    pub fn insert_cartridge(&mut self, cart: Cartridge) {
        if self.inserted {
            log::error!("{}", NesError::StateWarning);
        }
        self.cpu.bus = NesBus::new(cart);
        self.cpu.reset();
        self.inserted = true;
    }

    /// Parse and swap in a cartridge from `path`, see [`Self::insert_cartridge`].
    pub fn insert_rom(&mut self, path: &str) -> Result<(), NesError> {
        let cart = Cartridge::load(path)?;
        self.insert_cartridge(cart);
        Ok(())
    }

    /// Run CPU/PPU until the PPU finishes a frame (enters vblank) or the CPU halts.
    ///
    /// Latches `buttons1`/`buttons2` onto the controller ports before stepping so button state
    /// stays stable for the whole frame, matching how a real pad is read once per latch.
    pub fn run_frame(&mut self, buttons1: u8, buttons2: u8) {
        self.cpu.bus.controller1.state = buttons1;
        self.cpu.bus.controller2.state = buttons2;

        self.cpu.bus.clear_frame_ready();
        while !self.cpu.bus.frame_ready() && !self.cpu.halted {
            self.cpu.step();
        }
    }

    /// True once `run_frame` stops because the CPU hit an unimplemented/illegal opcode.
    pub fn halted(&self) -> bool {
        self.cpu.halted
    }

    /// Current PPU framebuffer, 256x240 packed RGB, row-major.
    pub fn framebuffer(&self) -> &[u32; 256 * 240] {
        &self.cpu.bus.ppu.framebuffer
    }

    /// Press or release a single controller-1 button (bit order: A,B,Select,Start,Up,Down,Left,Right).
    pub fn set_button1(&mut self, button: Button, pressed: bool) {
        self.cpu.bus.controller1.set_button(button, pressed);
    }

    /// Press or release a single controller-2 button.
    pub fn set_button2(&mut self, button: Button, pressed: bool) {
        self.cpu.bus.controller2.set_button(button, pressed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_nrom() -> Vec<u8> {
        let mut data = vec![0u8; 16 + 16 * 1024 + 8 * 1024];
        data[0..4].copy_from_slice(b"NES\x1A");
        data[4] = 1; // 1 PRG bank
        data[5] = 1; // 1 CHR bank
        // Reset vector -> $8000, where PRG ROM starts; leave PRG full of $EA (NOP).
        let prg_start = 16;
        for b in data[prg_start..prg_start + 16 * 1024].iter_mut() {
            *b = 0xEA;
        }
        data[prg_start + 0x3FFC] = 0x00;
        data[prg_start + 0x3FFD] = 0x80;
        data
    }

    #[test]
    fn loads_and_resets_cpu_to_reset_vector() {
        let cart = Cartridge::from_bytes(&minimal_nrom()).unwrap();
        let system = System::from_cartridge(cart);
        assert!(!system.halted());
    }

    #[test]
    fn run_frame_advances_until_vblank_without_halting_on_nops() {
        let cart = Cartridge::from_bytes(&minimal_nrom()).unwrap();
        let mut system = System::from_cartridge(cart);
        system.run_frame(0, 0);
        assert!(!system.halted());
    }

    #[test]
    fn re_inserting_a_cartridge_resets_the_cpu() {
        let cart = Cartridge::from_bytes(&minimal_nrom()).unwrap();
        let mut system = System::from_cartridge(cart);
        system.run_frame(0, 0);

        let cart2 = Cartridge::from_bytes(&minimal_nrom()).unwrap();
        system.insert_cartridge(cart2);

        assert!(!system.halted());
        assert!(system.inserted);
    }
}
