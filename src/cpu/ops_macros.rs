// --- LD Macros ---
macro_rules! ld_r_r {
    ($name:ident, $dst:ident, $src:ident) => {
        #[inline(always)]
        pub fn $name(&mut self, _bus: &mut crate::memory_bus::MemoryBus) -> super::CpuResult<u32> {
            self.$dst = self.$src;
            Ok(0)
        }
    };
}
macro_rules! ld_r_hlp {
    ($name:ident, $dst:ident) => {
        pub fn $name(&mut self, bus: &mut crate::memory_bus::MemoryBus) -> super::CpuResult<u32> {
            self.$dst = bus.read_byte(self.get_hl());
            Ok(0)
        }
    };
}
macro_rules! ld_hlp_r {
    ($name:ident, $src:ident) => {
        pub fn $name(&mut self, bus: &mut crate::memory_bus::MemoryBus) -> super::CpuResult<u32> {
            bus.write_byte(self.get_hl(), self.$src);
            Ok(0)
        }
    };
}
macro_rules! ld_r_d8 {
    ($name:ident, $dst:ident) => {
        pub fn $name(&mut self, bus: &mut crate::memory_bus::MemoryBus) -> super::CpuResult<u32> {
            self.$dst = self.read_d8(bus);
            Ok(0)
        }
    };
}

// --- ALU Macros ---
macro_rules! alu_a_r {
    ($name:ident, $op:ident, $src:ident) => {
        #[inline(always)]
        pub fn $name(&mut self, _bus: &mut crate::memory_bus::MemoryBus) -> super::CpuResult<u32> {
            self.$op(self.$src, false);
            Ok(0)
        }
    };
    ($name:ident, $op:ident, $src:ident, carry) => {
        #[inline(always)]
        pub fn $name(&mut self, _bus: &mut crate::memory_bus::MemoryBus) -> super::CpuResult<u32> {
            self.$op(self.$src, true);
            Ok(0)
        }
    };
}
macro_rules! alu_a_hlp {
    ($name:ident, $op:ident) => {
        pub fn $name(&mut self, bus: &mut crate::memory_bus::MemoryBus) -> super::CpuResult<u32> {
            let val = bus.read_byte(self.get_hl());
            self.$op(val, false);
            Ok(0)
        }
    };
    ($name:ident, $op:ident, carry) => {
        pub fn $name(&mut self, bus: &mut crate::memory_bus::MemoryBus) -> super::CpuResult<u32> {
            let val = bus.read_byte(self.get_hl());
            self.$op(val, true);
            Ok(0)
        }
    };
}
macro_rules! inc_dec_r8 {
    ($name:ident, $helper:ident, $reg:ident) => {
        #[inline(always)]
        pub fn $name(&mut self, _bus: &mut crate::memory_bus::MemoryBus) -> super::CpuResult<u32> {
            self.$reg = self.$helper(self.$reg);
            Ok(0)
        }
    };
}

// --- CB Macros ---
macro_rules! cb_reg_op {
    ($name:ident, $op:ident, $reg:ident) => {
        #[inline(always)]
        pub fn $name(&mut self, _bus: &mut crate::memory_bus::MemoryBus) -> super::CpuResult<u32> {
            self.$reg = self.$op(self.$reg);
            Ok(0)
        }
    };
    ($name:ident, bit, $bit:expr, $reg:ident) => {
        #[inline(always)]
        pub fn $name(&mut self, _bus: &mut crate::memory_bus::MemoryBus) -> super::CpuResult<u32> {
            self.op_bit($bit, self.$reg);
            Ok(0)
        }
    };
    ($name:ident, res, $bit:expr, $reg:ident) => {
        #[inline(always)]
        pub fn $name(&mut self, _bus: &mut crate::memory_bus::MemoryBus) -> super::CpuResult<u32> {
            self.$reg &= !(1 << $bit);
            Ok(0)
        }
    };
    ($name:ident, set, $bit:expr, $reg:ident) => {
        #[inline(always)]
        pub fn $name(&mut self, _bus: &mut crate::memory_bus::MemoryBus) -> super::CpuResult<u32> {
            self.$reg |= 1 << $bit;
            Ok(0)
        }
    };
}
macro_rules! cb_hlp_op {
    ($name:ident, $op:ident) => {
        pub fn $name(&mut self, bus: &mut crate::memory_bus::MemoryBus) -> super::CpuResult<u32> {
            let addr = self.get_hl();
            let value = bus.read_byte(addr);
            let result = self.$op(value);
            bus.write_byte(addr, result);
            Ok(0)
        }
    };
    ($name:ident, bit, $bit:expr) => {
        pub fn $name(&mut self, bus: &mut crate::memory_bus::MemoryBus) -> super::CpuResult<u32> {
            let value = bus.read_byte(self.get_hl());
            self.op_bit($bit, value);
            Ok(0)
        }
    };
    ($name:ident, res, $bit:expr) => {
        pub fn $name(&mut self, bus: &mut crate::memory_bus::MemoryBus) -> super::CpuResult<u32> {
            let addr = self.get_hl();
            let value = bus.read_byte(addr);
            bus.write_byte(addr, value & !(1 << $bit));
            Ok(0)
        }
    };
    ($name:ident, set, $bit:expr) => {
        pub fn $name(&mut self, bus: &mut crate::memory_bus::MemoryBus) -> super::CpuResult<u32> {
            let addr = self.get_hl();
            let value = bus.read_byte(addr);
            bus.write_byte(addr, value | (1 << $bit));
            Ok(0)
        }
    };
}
