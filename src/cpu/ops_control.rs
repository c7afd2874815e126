use super::instruction::CB_INSTRUCTIONS;
use super::{Cpu, CpuResult, constants::*};
use crate::memory_bus::MemoryBus;

// --- Control Flow and Miscellaneous ---
impl Cpu {
    pub fn op_nop(&mut self, _bus: &mut MemoryBus) -> CpuResult<u32> {
        Ok(0)
    }

    // STOP: unimplemented on the original hardware path; the padding byte
    // is consumed by the instruction length and nothing else happens.
    pub fn op_stop(&mut self, _bus: &mut MemoryBus) -> CpuResult<u32> {
        Ok(0)
    }

    // JP a16 / JP HL / JP cc, a16
    fn conditional_jp(&mut self, condition: bool, bus: &MemoryBus) -> CpuResult<u32> {
        let addr = self.read_d16(bus);
        if condition {
            self.pc = addr;
            Ok(4) // taken: 16 total
        } else {
            Ok(0) // not taken: 12 total
        }
    }
    pub fn op_jp_a16(&mut self, bus: &mut MemoryBus) -> CpuResult<u32> {
        self.pc = self.read_d16(bus);
        Ok(0)
    }
    pub fn op_jp_hl(&mut self, _bus: &mut MemoryBus) -> CpuResult<u32> {
        self.pc = self.get_hl();
        Ok(0)
    }
    pub fn op_jp_nz_a16(&mut self, bus: &mut MemoryBus) -> CpuResult<u32> {
        self.conditional_jp(!self.get_flag(FLAG_Z), bus)
    }
    pub fn op_jp_z_a16(&mut self, bus: &mut MemoryBus) -> CpuResult<u32> {
        self.conditional_jp(self.get_flag(FLAG_Z), bus)
    }
    pub fn op_jp_nc_a16(&mut self, bus: &mut MemoryBus) -> CpuResult<u32> {
        self.conditional_jp(!self.get_flag(FLAG_C), bus)
    }
    pub fn op_jp_c_a16(&mut self, bus: &mut MemoryBus) -> CpuResult<u32> {
        self.conditional_jp(self.get_flag(FLAG_C), bus)
    }

    // JR e8 / JR cc, e8
    fn conditional_jr(&mut self, condition: bool, bus: &MemoryBus) -> CpuResult<u32> {
        let offset = self.read_e8(bus);
        if condition {
            self.pc = self.pc.wrapping_add(offset as i16 as u16);
            Ok(4) // taken: 12 total
        } else {
            Ok(0) // not taken: 8 total
        }
    }
    pub fn op_jr_e8(&mut self, bus: &mut MemoryBus) -> CpuResult<u32> {
        let offset = self.read_e8(bus);
        self.pc = self.pc.wrapping_add(offset as i16 as u16);
        Ok(0)
    }
    pub fn op_jr_nz_e8(&mut self, bus: &mut MemoryBus) -> CpuResult<u32> {
        self.conditional_jr(!self.get_flag(FLAG_Z), bus)
    }
    pub fn op_jr_z_e8(&mut self, bus: &mut MemoryBus) -> CpuResult<u32> {
        self.conditional_jr(self.get_flag(FLAG_Z), bus)
    }
    pub fn op_jr_nc_e8(&mut self, bus: &mut MemoryBus) -> CpuResult<u32> {
        self.conditional_jr(!self.get_flag(FLAG_C), bus)
    }
    pub fn op_jr_c_e8(&mut self, bus: &mut MemoryBus) -> CpuResult<u32> {
        self.conditional_jr(self.get_flag(FLAG_C), bus)
    }

    // CALL a16 / CALL cc, a16 (pushes the address after the operand)
    fn conditional_call(&mut self, condition: bool, bus: &mut MemoryBus) -> CpuResult<u32> {
        let addr = self.read_d16(bus);
        if condition {
            self.push_word(self.pc, bus);
            self.pc = addr;
            Ok(12) // taken: 24 total
        } else {
            Ok(0) // not taken: 12 total
        }
    }
    pub fn op_call_a16(&mut self, bus: &mut MemoryBus) -> CpuResult<u32> {
        let addr = self.read_d16(bus);
        self.push_word(self.pc, bus);
        self.pc = addr;
        Ok(0)
    }
    pub fn op_call_nz_a16(&mut self, bus: &mut MemoryBus) -> CpuResult<u32> {
        self.conditional_call(!self.get_flag(FLAG_Z), bus)
    }
    pub fn op_call_z_a16(&mut self, bus: &mut MemoryBus) -> CpuResult<u32> {
        self.conditional_call(self.get_flag(FLAG_Z), bus)
    }
    pub fn op_call_nc_a16(&mut self, bus: &mut MemoryBus) -> CpuResult<u32> {
        self.conditional_call(!self.get_flag(FLAG_C), bus)
    }
    pub fn op_call_c_a16(&mut self, bus: &mut MemoryBus) -> CpuResult<u32> {
        self.conditional_call(self.get_flag(FLAG_C), bus)
    }

    // RET / RET cc / RETI
    fn conditional_ret(&mut self, condition: bool, bus: &mut MemoryBus) -> CpuResult<u32> {
        if condition {
            self.pc = self.pop_word(bus);
            Ok(12) // taken: 20 total
        } else {
            Ok(0) // not taken: 8 total
        }
    }
    pub fn op_ret(&mut self, bus: &mut MemoryBus) -> CpuResult<u32> {
        self.pc = self.pop_word(bus);
        Ok(0)
    }
    pub fn op_ret_nz(&mut self, bus: &mut MemoryBus) -> CpuResult<u32> {
        self.conditional_ret(!self.get_flag(FLAG_Z), bus)
    }
    pub fn op_ret_z(&mut self, bus: &mut MemoryBus) -> CpuResult<u32> {
        self.conditional_ret(self.get_flag(FLAG_Z), bus)
    }
    pub fn op_ret_nc(&mut self, bus: &mut MemoryBus) -> CpuResult<u32> {
        self.conditional_ret(!self.get_flag(FLAG_C), bus)
    }
    pub fn op_ret_c(&mut self, bus: &mut MemoryBus) -> CpuResult<u32> {
        self.conditional_ret(self.get_flag(FLAG_C), bus)
    }
    // RETI re-enables interrupts without the EI delay.
    pub fn op_reti(&mut self, bus: &mut MemoryBus) -> CpuResult<u32> {
        self.pc = self.pop_word(bus);
        self.ime = true;
        self.ime_pending = false;
        Ok(0)
    }

    // RST n
    fn rst(&mut self, vector: u16, bus: &mut MemoryBus) -> CpuResult<u32> {
        self.push_word(self.pc, bus);
        self.pc = vector;
        Ok(0)
    }
    pub fn op_rst_00h(&mut self, bus: &mut MemoryBus) -> CpuResult<u32> {
        self.rst(0x0000, bus)
    }
    pub fn op_rst_08h(&mut self, bus: &mut MemoryBus) -> CpuResult<u32> {
        self.rst(0x0008, bus)
    }
    pub fn op_rst_10h(&mut self, bus: &mut MemoryBus) -> CpuResult<u32> {
        self.rst(0x0010, bus)
    }
    pub fn op_rst_18h(&mut self, bus: &mut MemoryBus) -> CpuResult<u32> {
        self.rst(0x0018, bus)
    }
    pub fn op_rst_20h(&mut self, bus: &mut MemoryBus) -> CpuResult<u32> {
        self.rst(0x0020, bus)
    }
    pub fn op_rst_28h(&mut self, bus: &mut MemoryBus) -> CpuResult<u32> {
        self.rst(0x0028, bus)
    }
    pub fn op_rst_30h(&mut self, bus: &mut MemoryBus) -> CpuResult<u32> {
        self.rst(0x0030, bus)
    }
    pub fn op_rst_38h(&mut self, bus: &mut MemoryBus) -> CpuResult<u32> {
        self.rst(0x0038, bus)
    }

    // Interrupt enable control
    pub fn op_di(&mut self, _bus: &mut MemoryBus) -> CpuResult<u32> {
        self.ime = false;
        self.ime_pending = false;
        Ok(0)
    }
    pub fn op_ei(&mut self, _bus: &mut MemoryBus) -> CpuResult<u32> {
        self.ime_pending = true;
        Ok(0)
    }
    pub fn op_halt(&mut self, _bus: &mut MemoryBus) -> CpuResult<u32> {
        self.halted = true;
        Ok(0)
    }

    // Flag twiddles
    pub fn op_scf(&mut self, _bus: &mut MemoryBus) -> CpuResult<u32> {
        self.set_flag(FLAG_N | FLAG_H, false);
        self.set_flag(FLAG_C, true);
        Ok(0)
    }
    pub fn op_ccf(&mut self, _bus: &mut MemoryBus) -> CpuResult<u32> {
        let carry = self.get_flag(FLAG_C);
        self.set_flag(FLAG_N | FLAG_H, false);
        self.set_flag(FLAG_C, !carry);
        Ok(0)
    }
    pub fn op_cpl(&mut self, _bus: &mut MemoryBus) -> CpuResult<u32> {
        self.a = !self.a;
        self.set_flag(FLAG_N | FLAG_H, true);
        Ok(0)
    }
    pub fn op_daa(&mut self, _bus: &mut MemoryBus) -> CpuResult<u32> {
        self.daa();
        Ok(0)
    }

    // CB prefix: the second opcode byte was consumed by the table-driven
    // PC advance; dispatch it in the CB table. The entry's cycle count is
    // the cost beyond the 4-cycle prefix fetch.
    pub fn op_prefix_cb(&mut self, bus: &mut MemoryBus) -> CpuResult<u32> {
        let cb_opcode = bus.read_byte(self.instruction_pc.wrapping_add(1));
        let cb_instr = &CB_INSTRUCTIONS[cb_opcode as usize];
        match (cb_instr.execute)(self, bus) {
            Ok(_) => Ok(cb_instr.cycles as u32),
            Err(e) => Err(format!("CB opcode {:#04X}: {}", cb_opcode, e)),
        }
    }

    // The eleven holes in the opcode map. A correct ROM never reaches
    // them, so execution cannot continue.
    pub fn op_illegal(&mut self, _bus: &mut MemoryBus) -> CpuResult<u32> {
        Err("illegal opcode".to_string())
    }
}
