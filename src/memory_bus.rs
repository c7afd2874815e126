use crate::cartridge::Cartridge;
use crate::hardware::Hardware;
use crate::memory_map::*;
use std::fmt;

/// The unified 16-bit address bus. Every CPU access funnels through
/// `read_byte`/`write_byte`, which route to the hardware register block,
/// the cartridge, or the backing RAM regions.
#[derive(Clone)]
pub struct MemoryBus {
    cartridge: Cartridge,
    hardware: Hardware,

    vram: Box<[u8; VRAM_SIZE]>,
    wram: Box<[u8; WRAM_SIZE]>,
    oam: Box<[u8; OAM_SIZE]>,
    hram: Box<[u8; HRAM_SIZE]>,
}

impl MemoryBus {
    pub fn new(cartridge: Cartridge) -> Self {
        MemoryBus {
            cartridge,
            hardware: Hardware::new(),
            vram: Box::new([0; VRAM_SIZE]),
            wram: Box::new([0; WRAM_SIZE]),
            oam: Box::new([0; OAM_SIZE]),
            hram: Box::new([0; HRAM_SIZE]),
        }
    }

    pub fn read_byte(&self, addr: u16) -> u8 {
        match addr {
            IO_REGISTERS_START..=IO_REGISTERS_END | INTERRUPT_ENABLE_REGISTER => {
                self.hardware.read(addr)
            }
            ROM_BANK_0_START..=ROM_BANK_N_END | EXT_RAM_START..=EXT_RAM_END => {
                self.cartridge.read(addr)
            }
            VRAM_START..=VRAM_END => self.vram[(addr - VRAM_START) as usize],
            WRAM_START..=WRAM_END => self.wram[(addr - WRAM_START) as usize],
            ECHO_RAM_START..=ECHO_RAM_END => self.wram[(addr - ECHO_RAM_START) as usize],
            OAM_START..=OAM_END => self.oam[(addr - OAM_START) as usize],
            NOT_USABLE_START..=NOT_USABLE_END => 0xFF,
            HRAM_START..=HRAM_END => self.hram[(addr - HRAM_START) as usize],
        }
    }

    pub fn write_byte(&mut self, addr: u16, value: u8) {
        match addr {
            DMA_ADDR => {
                self.hardware.write(addr, value);
                self.oam_dma(value);
            }
            IO_REGISTERS_START..=IO_REGISTERS_END | INTERRUPT_ENABLE_REGISTER => {
                self.hardware.write(addr, value);
            }
            ROM_BANK_0_START..=ROM_BANK_N_END | EXT_RAM_START..=EXT_RAM_END => {
                self.cartridge.write(addr, value);
            }
            VRAM_START..=VRAM_END => self.vram[(addr - VRAM_START) as usize] = value,
            WRAM_START..=WRAM_END => self.wram[(addr - WRAM_START) as usize] = value,
            ECHO_RAM_START..=ECHO_RAM_END => {
                self.wram[(addr - ECHO_RAM_START) as usize] = value;
            }
            OAM_START..=OAM_END => self.oam[(addr - OAM_START) as usize] = value,
            NOT_USABLE_START..=NOT_USABLE_END => {}
            HRAM_START..=HRAM_END => self.hram[(addr - HRAM_START) as usize] = value,
        }
    }

    /// Reads a 16-bit word (little endian).
    pub fn read_word(&self, addr: u16) -> u16 {
        let low = self.read_byte(addr) as u16;
        let high = self.read_byte(addr.wrapping_add(1)) as u16;
        (high << 8) | low
    }

    /// Writes a 16-bit word (little endian).
    pub fn write_word(&mut self, addr: u16, value: u16) {
        self.write_byte(addr, (value & 0xFF) as u8);
        self.write_byte(addr.wrapping_add(1), (value >> 8) as u8);
    }

    // Copies source_high << 8 .. +0x9F into OAM in one shot. The copy runs
    // through read_byte so banked ROM sources resolve correctly.
    fn oam_dma(&mut self, source_high: u8) {
        let source = (source_high as u16) << 8;
        if source >= OAM_START {
            log::warn!("OAM DMA from restricted source {:#06X} ignored", source);
            return;
        }
        for i in 0..OAM_SIZE as u16 {
            let byte = self.read_byte(source + i);
            self.oam[i as usize] = byte;
        }
    }

    pub fn tick(&mut self, cycles: u32) {
        self.hardware.tick(cycles);
    }

    pub fn hardware(&self) -> &Hardware {
        &self.hardware
    }

    pub fn hardware_mut(&mut self) -> &mut Hardware {
        &mut self.hardware
    }

    // Renderer snapshot accessors.
    pub fn vram(&self) -> &[u8; VRAM_SIZE] {
        &self.vram
    }

    pub fn oam(&self) -> &[u8; OAM_SIZE] {
        &self.oam
    }
}

impl fmt::Debug for MemoryBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryBus")
            .field("rom_len", &self.cartridge.rom_len())
            .field("IE", &format_args!("{:#04X}", self.read_byte(INTERRUPT_ENABLE_REGISTER)))
            .field("IF", &format_args!("{:#04X}", self.read_byte(IF_ADDR)))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_bus() -> MemoryBus {
        let mut rom = vec![0u8; 0x8000];
        rom[0x0147] = 0x01;
        MemoryBus::new(Cartridge::new(rom).unwrap())
    }

    #[test]
    fn wram_read_write() {
        let mut bus = test_bus();
        bus.write_byte(0xC000, 0x42);
        bus.write_byte(0xDFFF, 0x69);
        assert_eq!(bus.read_byte(0xC000), 0x42);
        assert_eq!(bus.read_byte(0xDFFF), 0x69);
    }

    #[test]
    fn echo_ram_mirrors_wram() {
        let mut bus = test_bus();
        bus.write_byte(0xC000, 0xAB);
        assert_eq!(bus.read_byte(0xE000), 0xAB);
        bus.write_byte(0xE100, 0xCD);
        assert_eq!(bus.read_byte(0xC100), 0xCD);
    }

    #[test]
    fn hram_and_vram_are_backed() {
        let mut bus = test_bus();
        bus.write_byte(0xFF80, 0x11);
        bus.write_byte(0xFFFE, 0x22);
        bus.write_byte(0x8000, 0x33);
        assert_eq!(bus.read_byte(0xFF80), 0x11);
        assert_eq!(bus.read_byte(0xFFFE), 0x22);
        assert_eq!(bus.read_byte(0x8000), 0x33);
    }

    #[test]
    fn rom_writes_hit_cartridge_latches_not_memory() {
        let mut bus = test_bus();
        bus.write_byte(0x1234, 0xFF);
        assert_eq!(bus.read_byte(0x1234), 0x00);
    }

    #[test]
    fn disabled_external_ram_reads_ff() {
        let bus = test_bus();
        assert_eq!(bus.read_byte(0xA000), 0xFF);
    }

    #[test]
    fn hardware_range_delegates() {
        let mut bus = test_bus();
        bus.write_byte(0xFFFF, 0x1F);
        assert_eq!(bus.read_byte(0xFFFF), 0x1F);
        bus.write_byte(0xFF04, 0x99);
        assert_eq!(bus.read_byte(0xFF04), 0x00);
    }

    #[test]
    fn unmapped_io_reads_zero() {
        let bus = test_bus();
        assert_eq!(bus.read_byte(0xFF7F), 0);
    }

    #[test]
    fn word_access_is_little_endian() {
        let mut bus = test_bus();
        bus.write_word(0xC100, 0xBEEF);
        assert_eq!(bus.read_byte(0xC100), 0xEF);
        assert_eq!(bus.read_byte(0xC101), 0xBE);
        assert_eq!(bus.read_word(0xC100), 0xBEEF);
    }

    #[test]
    fn dma_copies_a_page_into_oam() {
        let mut bus = test_bus();
        for i in 0..OAM_SIZE as u16 {
            bus.write_byte(0xC200 + i, i as u8 + 1);
        }
        bus.write_byte(0xFF46, 0xC2);
        assert_eq!(bus.read_byte(0xFE00), 1);
        assert_eq!(bus.read_byte(0xFE9F), OAM_SIZE as u8);
    }

    #[test]
    fn dma_from_restricted_source_is_ignored() {
        let mut bus = test_bus();
        bus.write_byte(0xFE00, 0x55);
        bus.write_byte(0xFF46, 0xFF);
        assert_eq!(bus.read_byte(0xFE00), 0x55);
    }
}
