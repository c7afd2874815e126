use super::{Cpu, CpuResult, constants::*};
use crate::memory_bus::MemoryBus;

// --- Accumulator Rotates (non-CB) ---
// Unlike their CB twins these always clear Z.
impl Cpu {
    pub fn op_rlca(&mut self, _bus: &mut MemoryBus) -> CpuResult<u32> {
        self.a = self.rlc(self.a);
        self.set_flag(FLAG_Z, false);
        Ok(0)
    }
    pub fn op_rla(&mut self, _bus: &mut MemoryBus) -> CpuResult<u32> {
        self.a = self.rl(self.a);
        self.set_flag(FLAG_Z, false);
        Ok(0)
    }
    pub fn op_rrca(&mut self, _bus: &mut MemoryBus) -> CpuResult<u32> {
        self.a = self.rrc(self.a);
        self.set_flag(FLAG_Z, false);
        Ok(0)
    }
    pub fn op_rra(&mut self, _bus: &mut MemoryBus) -> CpuResult<u32> {
        self.a = self.rr(self.a);
        self.set_flag(FLAG_Z, false);
        Ok(0)
    }
}
