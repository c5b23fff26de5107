//! Opcode dispatch tables.
//!
//! Each handler is a small monomorphic function; cycle cost falls out of the
//! bus accesses it performs plus explicit internal-cycle ticks, so the table
//! carries no per-opcode cycle interpreter. [`OPCODE_INFO`] holds the
//! expected dot counts for tracing and for the exhaustive timing tests.

use crate::error::DotboyError;
use crate::lr35902::cpu::Cpu;
use crate::lr35902::registers::{Flags, R16, R8};
use crate::memory::mmu::Mmu;
use log::trace;

pub type OpcodeFn = fn(&mut Cpu, &mut Mmu) -> Result<(), DotboyError>;

pub struct OpcodeInfo {
    pub mnemonic: &'static str,
    pub length: u8,
    /// Dot cost (4 per M-cycle), untaken for conditional control flow
    pub dots: u8,
    /// Dot cost when a conditional branch is taken
    pub dots_taken: u8,
}

const fn info(mnemonic: &'static str, length: u8, dots: u8) -> OpcodeInfo {
    OpcodeInfo {
        mnemonic,
        length,
        dots,
        dots_taken: dots,
    }
}

const fn branch(mnemonic: &'static str, length: u8, dots: u8, dots_taken: u8) -> OpcodeInfo {
    OpcodeInfo {
        mnemonic,
        length,
        dots,
        dots_taken,
    }
}

#[derive(Copy, Clone, PartialEq, Eq)]
enum Cond {
    Always,
    NZ,
    Z,
    NC,
    C,
}

fn check(cpu: &Cpu, cond: Cond) -> bool {
    match cond {
        Cond::Always => true,
        Cond::NZ => !cpu.registers.flag(Flags::ZERO),
        Cond::Z => cpu.registers.flag(Flags::ZERO),
        Cond::NC => !cpu.registers.flag(Flags::CARRY),
        Cond::C => cpu.registers.flag(Flags::CARRY),
    }
}

#[derive(Copy, Clone)]
enum Alu {
    Add,
    Adc,
    Sub,
    Sbc,
    And,
    Xor,
    Or,
    Cp,
}

fn alu(cpu: &mut Cpu, op: Alu, value: u8) {
    let a = cpu.registers.a;
    let carry = cpu.registers.flag(Flags::CARRY) as u8;

    match op {
        Alu::Add | Alu::Adc => {
            let carry = if matches!(op, Alu::Adc) { carry } else { 0 };
            let result = a as u16 + value as u16 + carry as u16;
            let half = (a & 0x0f) + (value & 0x0f) + carry;
            cpu.registers.a = result as u8;
            cpu.registers
                .set_flags(result as u8 == 0, false, half > 0x0f, result > 0xff);
        }
        Alu::Sub | Alu::Sbc => {
            let carry = if matches!(op, Alu::Sbc) { carry } else { 0 };
            let result = (a as i16) - value as i16 - carry as i16;
            let half = (a & 0x0f) as i16 - (value & 0x0f) as i16 - carry as i16;
            cpu.registers.a = result as u8;
            cpu.registers
                .set_flags(result as u8 == 0, true, half < 0, result < 0);
        }
        Alu::And => {
            let result = a & value;
            cpu.registers.a = result;
            cpu.registers.set_flags(result == 0, false, true, false);
        }
        Alu::Xor => {
            let result = a ^ value;
            cpu.registers.a = result;
            cpu.registers.set_flags(result == 0, false, false, false);
        }
        Alu::Or => {
            let result = a | value;
            cpu.registers.a = result;
            cpu.registers.set_flags(result == 0, false, false, false);
        }
        Alu::Cp => {
            let result = (a as i16) - value as i16;
            let half = (a & 0x0f) as i16 - (value & 0x0f) as i16;
            cpu.registers
                .set_flags(result as u8 == 0, true, half < 0, result < 0);
        }
    }
}

type OpResult = Result<(), DotboyError>;

fn alu_r(cpu: &mut Cpu, op: Alu, r: R8) -> OpResult {
    let value = cpu.registers.read(r);
    alu(cpu, op, value);
    Ok(())
}

fn alu_hl(cpu: &mut Cpu, mmu: &mut Mmu, op: Alu) -> OpResult {
    let value = mmu.read(cpu.registers.read16(R16::HL));
    alu(cpu, op, value);
    Ok(())
}

fn alu_n8(cpu: &mut Cpu, mmu: &mut Mmu, op: Alu) -> OpResult {
    let value = cpu.fetch_u8(mmu);
    alu(cpu, op, value);
    Ok(())
}

fn inc_r(cpu: &mut Cpu, r: R8) -> OpResult {
    let old = cpu.registers.read(r);
    let new = old.wrapping_add(1);
    cpu.registers.write(r, new);
    cpu.registers.set_flag(Flags::ZERO, new == 0);
    cpu.registers.set_flag(Flags::SUBTRACT, false);
    cpu.registers.set_flag(Flags::HALF_CARRY, (old & 0x0f) + 1 > 0x0f);
    Ok(())
}

fn dec_r(cpu: &mut Cpu, r: R8) -> OpResult {
    let old = cpu.registers.read(r);
    let new = old.wrapping_sub(1);
    cpu.registers.write(r, new);
    cpu.registers.set_flag(Flags::ZERO, new == 0);
    cpu.registers.set_flag(Flags::SUBTRACT, true);
    cpu.registers.set_flag(Flags::HALF_CARRY, old & 0x0f == 0);
    Ok(())
}

fn inc_hl_ind(cpu: &mut Cpu, mmu: &mut Mmu) -> OpResult {
    let addr = cpu.registers.read16(R16::HL);
    let old = mmu.read(addr);
    let new = old.wrapping_add(1);
    mmu.write(addr, new);
    cpu.registers.set_flag(Flags::ZERO, new == 0);
    cpu.registers.set_flag(Flags::SUBTRACT, false);
    cpu.registers.set_flag(Flags::HALF_CARRY, (old & 0x0f) + 1 > 0x0f);
    Ok(())
}

fn dec_hl_ind(cpu: &mut Cpu, mmu: &mut Mmu) -> OpResult {
    let addr = cpu.registers.read16(R16::HL);
    let old = mmu.read(addr);
    let new = old.wrapping_sub(1);
    mmu.write(addr, new);
    cpu.registers.set_flag(Flags::ZERO, new == 0);
    cpu.registers.set_flag(Flags::SUBTRACT, true);
    cpu.registers.set_flag(Flags::HALF_CARRY, old & 0x0f == 0);
    Ok(())
}

fn inc_r16(cpu: &mut Cpu, mmu: &mut Mmu, rr: R16) -> OpResult {
    let value = cpu.registers.read16(rr);
    cpu.registers.write16(rr, value.wrapping_add(1));
    // 16-bit inc/dec burn one internal cycle and leave flags alone
    mmu.tick();
    Ok(())
}

fn dec_r16(cpu: &mut Cpu, mmu: &mut Mmu, rr: R16) -> OpResult {
    let value = cpu.registers.read16(rr);
    cpu.registers.write16(rr, value.wrapping_sub(1));
    mmu.tick();
    Ok(())
}

fn add_hl_r16(cpu: &mut Cpu, mmu: &mut Mmu, rr: R16) -> OpResult {
    let hl = cpu.registers.read16(R16::HL);
    let value = cpu.registers.read16(rr);
    let result = hl as u32 + value as u32;

    cpu.registers.write16(R16::HL, result as u16);
    cpu.registers.set_flag(Flags::SUBTRACT, false);
    cpu.registers
        .set_flag(Flags::HALF_CARRY, (hl & 0x0fff) + (value & 0x0fff) > 0x0fff);
    cpu.registers.set_flag(Flags::CARRY, result > 0xffff);
    mmu.tick();
    Ok(())
}

/// SP + signed immediate; flags come from the unsigned low-byte addition.
fn sp_plus_e8(cpu: &mut Cpu, mmu: &mut Mmu) -> u16 {
    let offset = cpu.fetch_u8(mmu);
    let sp = cpu.registers.sp;

    cpu.registers.set_flags(
        false,
        false,
        (sp & 0x0f) + (offset & 0x0f) as u16 > 0x0f,
        (sp & 0xff) + offset as u16 > 0xff,
    );

    sp.wrapping_add(offset as i8 as u16)
}

fn add_sp_e8(cpu: &mut Cpu, mmu: &mut Mmu) -> OpResult {
    let result = sp_plus_e8(cpu, mmu);
    cpu.registers.sp = result;
    mmu.tick();
    mmu.tick();
    Ok(())
}

fn ld_hl_sp_e8(cpu: &mut Cpu, mmu: &mut Mmu) -> OpResult {
    let result = sp_plus_e8(cpu, mmu);
    cpu.registers.write16(R16::HL, result);
    mmu.tick();
    Ok(())
}

fn ld_r_r(cpu: &mut Cpu, dst: R8, src: R8) -> OpResult {
    let value = cpu.registers.read(src);
    cpu.registers.write(dst, value);
    Ok(())
}

fn ld_r_n8(cpu: &mut Cpu, mmu: &mut Mmu, dst: R8) -> OpResult {
    let value = cpu.fetch_u8(mmu);
    cpu.registers.write(dst, value);
    Ok(())
}

fn ld_r_hl(cpu: &mut Cpu, mmu: &mut Mmu, dst: R8) -> OpResult {
    let value = mmu.read(cpu.registers.read16(R16::HL));
    cpu.registers.write(dst, value);
    Ok(())
}

fn ld_hl_r(cpu: &mut Cpu, mmu: &mut Mmu, src: R8) -> OpResult {
    mmu.write(cpu.registers.read16(R16::HL), cpu.registers.read(src));
    Ok(())
}

fn ld_hl_n8(cpu: &mut Cpu, mmu: &mut Mmu) -> OpResult {
    let value = cpu.fetch_u8(mmu);
    mmu.write(cpu.registers.read16(R16::HL), value);
    Ok(())
}

/// LD A,(rr) with optional post-increment/decrement of the pair.
fn ld_a_r16ind(cpu: &mut Cpu, mmu: &mut Mmu, rr: R16, post: i8) -> OpResult {
    let addr = cpu.registers.read16(rr);
    if post != 0 {
        cpu.registers.write16(rr, addr.wrapping_add(post as u16));
    }
    cpu.registers.a = mmu.read(addr);
    Ok(())
}

fn ld_r16ind_a(cpu: &mut Cpu, mmu: &mut Mmu, rr: R16, post: i8) -> OpResult {
    let addr = cpu.registers.read16(rr);
    if post != 0 {
        cpu.registers.write16(rr, addr.wrapping_add(post as u16));
    }
    mmu.write(addr, cpu.registers.a);
    Ok(())
}

fn ld_r16_n16(cpu: &mut Cpu, mmu: &mut Mmu, rr: R16) -> OpResult {
    let value = cpu.fetch_u16(mmu);
    cpu.registers.write16(rr, value);
    Ok(())
}

fn ld_a16_sp(cpu: &mut Cpu, mmu: &mut Mmu) -> OpResult {
    let addr = cpu.fetch_u16(mmu);
    mmu.write16(addr, cpu.registers.sp);
    Ok(())
}

fn ld_sp_hl(cpu: &mut Cpu, mmu: &mut Mmu) -> OpResult {
    cpu.registers.sp = cpu.registers.read16(R16::HL);
    mmu.tick();
    Ok(())
}

fn ld_a16_a(cpu: &mut Cpu, mmu: &mut Mmu) -> OpResult {
    let addr = cpu.fetch_u16(mmu);
    mmu.write(addr, cpu.registers.a);
    Ok(())
}

fn ld_a_a16(cpu: &mut Cpu, mmu: &mut Mmu) -> OpResult {
    let addr = cpu.fetch_u16(mmu);
    cpu.registers.a = mmu.read(addr);
    Ok(())
}

fn ldh_a8_a(cpu: &mut Cpu, mmu: &mut Mmu) -> OpResult {
    let addr = 0xff00 + cpu.fetch_u8(mmu) as u16;
    mmu.write(addr, cpu.registers.a);
    Ok(())
}

fn ldh_a_a8(cpu: &mut Cpu, mmu: &mut Mmu) -> OpResult {
    let addr = 0xff00 + cpu.fetch_u8(mmu) as u16;
    cpu.registers.a = mmu.read(addr);
    Ok(())
}

fn ld_cind_a(cpu: &mut Cpu, mmu: &mut Mmu) -> OpResult {
    mmu.write(0xff00 + cpu.registers.c as u16, cpu.registers.a);
    Ok(())
}

fn ld_a_cind(cpu: &mut Cpu, mmu: &mut Mmu) -> OpResult {
    cpu.registers.a = mmu.read(0xff00 + cpu.registers.c as u16);
    Ok(())
}

fn push_r16(cpu: &mut Cpu, mmu: &mut Mmu, rr: R16) -> OpResult {
    mmu.tick();
    let value = cpu.registers.read16(rr);
    cpu.push_stack(mmu, value);
    Ok(())
}

fn pop_r16(cpu: &mut Cpu, mmu: &mut Mmu, rr: R16) -> OpResult {
    let value = cpu.pop_stack(mmu);
    cpu.registers.write16(rr, value);
    Ok(())
}

fn jr(cpu: &mut Cpu, mmu: &mut Mmu, cond: Cond) -> OpResult {
    let offset = cpu.fetch_u8(mmu) as i8;
    if check(cpu, cond) {
        cpu.registers.pc = cpu.registers.pc.wrapping_add(offset as u16);
        mmu.tick();
    }
    Ok(())
}

fn jp(cpu: &mut Cpu, mmu: &mut Mmu, cond: Cond) -> OpResult {
    let addr = cpu.fetch_u16(mmu);
    if check(cpu, cond) {
        cpu.registers.pc = addr;
        mmu.tick();
    }
    Ok(())
}

fn jp_hl(cpu: &mut Cpu) -> OpResult {
    // Jumps straight to HL in a single fetch cycle
    cpu.registers.pc = cpu.registers.read16(R16::HL);
    Ok(())
}

fn call(cpu: &mut Cpu, mmu: &mut Mmu, cond: Cond) -> OpResult {
    let addr = cpu.fetch_u16(mmu);
    if check(cpu, cond) {
        mmu.tick();
        let pc = cpu.registers.pc;
        cpu.push_stack(mmu, pc);
        cpu.registers.pc = addr;
    }
    Ok(())
}

fn ret(cpu: &mut Cpu, mmu: &mut Mmu) -> OpResult {
    cpu.registers.pc = cpu.pop_stack(mmu);
    mmu.tick();
    Ok(())
}

fn ret_cond(cpu: &mut Cpu, mmu: &mut Mmu, cond: Cond) -> OpResult {
    // The condition check itself takes a cycle
    mmu.tick();
    if check(cpu, cond) {
        cpu.registers.pc = cpu.pop_stack(mmu);
        mmu.tick();
    }
    Ok(())
}

fn reti(cpu: &mut Cpu, mmu: &mut Mmu) -> OpResult {
    cpu.ime = true;
    ret(cpu, mmu)
}

fn rst(cpu: &mut Cpu, mmu: &mut Mmu, addr: u16) -> OpResult {
    mmu.tick();
    let pc = cpu.registers.pc;
    cpu.push_stack(mmu, pc);
    cpu.registers.pc = addr;
    Ok(())
}

fn daa(cpu: &mut Cpu) -> OpResult {
    let mut a = cpu.registers.a;

    if cpu.registers.flag(Flags::SUBTRACT) {
        if cpu.registers.flag(Flags::CARRY) {
            a = a.wrapping_sub(0x60);
        }
        if cpu.registers.flag(Flags::HALF_CARRY) {
            a = a.wrapping_sub(0x06);
        }
    } else {
        if cpu.registers.flag(Flags::CARRY) || a > 0x99 {
            a = a.wrapping_add(0x60);
            cpu.registers.set_flag(Flags::CARRY, true);
        }
        if cpu.registers.flag(Flags::HALF_CARRY) || a & 0x0f > 0x09 {
            a = a.wrapping_add(0x06);
        }
    }

    cpu.registers.a = a;
    cpu.registers.set_flag(Flags::ZERO, a == 0);
    cpu.registers.set_flag(Flags::HALF_CARRY, false);
    Ok(())
}

fn cpl(cpu: &mut Cpu) -> OpResult {
    cpu.registers.a = !cpu.registers.a;
    cpu.registers.set_flag(Flags::SUBTRACT, true);
    cpu.registers.set_flag(Flags::HALF_CARRY, true);
    Ok(())
}

fn scf(cpu: &mut Cpu) -> OpResult {
    cpu.registers.set_flag(Flags::SUBTRACT, false);
    cpu.registers.set_flag(Flags::HALF_CARRY, false);
    cpu.registers.set_flag(Flags::CARRY, true);
    Ok(())
}

fn ccf(cpu: &mut Cpu) -> OpResult {
    let carry = cpu.registers.flag(Flags::CARRY);
    cpu.registers.set_flag(Flags::SUBTRACT, false);
    cpu.registers.set_flag(Flags::HALF_CARRY, false);
    cpu.registers.set_flag(Flags::CARRY, !carry);
    Ok(())
}

fn halt(cpu: &mut Cpu) -> OpResult {
    cpu.halted = true;
    Ok(())
}

fn stop(cpu: &mut Cpu) -> OpResult {
    Err(DotboyError::StopExecuted {
        pc: cpu.registers.pc.wrapping_sub(1),
    })
}

fn di(cpu: &mut Cpu) -> OpResult {
    cpu.ime = false;
    cpu.ime_scheduled = false;
    Ok(())
}

fn ei(cpu: &mut Cpu) -> OpResult {
    cpu.ime_scheduled = true;
    Ok(())
}

fn illegal(cpu: &mut Cpu, opcode: u8) -> OpResult {
    Err(DotboyError::UnknownOpcode {
        opcode,
        pc: cpu.registers.pc.wrapping_sub(1),
        cpu: format!("{}", cpu.registers),
    })
}

// Rotation and shift primitives, shared by the A forms (Z forced clear) and
// the CB forms (Z from the result).

fn rlc_val(cpu: &mut Cpu, value: u8, z_from_result: bool) -> u8 {
    let carry = value >> 7;
    let result = value << 1 | carry;
    cpu.registers
        .set_flags(z_from_result && result == 0, false, false, carry != 0);
    result
}

fn rrc_val(cpu: &mut Cpu, value: u8, z_from_result: bool) -> u8 {
    let carry = value & 1;
    let result = value >> 1 | carry << 7;
    cpu.registers
        .set_flags(z_from_result && result == 0, false, false, carry != 0);
    result
}

fn rl_val(cpu: &mut Cpu, value: u8, z_from_result: bool) -> u8 {
    let carry_in = cpu.registers.flag(Flags::CARRY) as u8;
    let result = value << 1 | carry_in;
    cpu.registers
        .set_flags(z_from_result && result == 0, false, false, value & 0x80 != 0);
    result
}

fn rr_val(cpu: &mut Cpu, value: u8, z_from_result: bool) -> u8 {
    let carry_in = cpu.registers.flag(Flags::CARRY) as u8;
    let result = value >> 1 | carry_in << 7;
    cpu.registers
        .set_flags(z_from_result && result == 0, false, false, value & 0x01 != 0);
    result
}

fn sla_val(cpu: &mut Cpu, value: u8) -> u8 {
    let result = value << 1;
    cpu.registers
        .set_flags(result == 0, false, false, value & 0x80 != 0);
    result
}

fn sra_val(cpu: &mut Cpu, value: u8) -> u8 {
    let result = value >> 1 | value & 0x80;
    cpu.registers
        .set_flags(result == 0, false, false, value & 0x01 != 0);
    result
}

fn srl_val(cpu: &mut Cpu, value: u8) -> u8 {
    let result = value >> 1;
    cpu.registers
        .set_flags(result == 0, false, false, value & 0x01 != 0);
    result
}

fn swap_val(cpu: &mut Cpu, value: u8) -> u8 {
    let result = value >> 4 | value << 4;
    cpu.registers.set_flags(result == 0, false, false, false);
    result
}

// CB-prefixed dispatch.

#[derive(Copy, Clone)]
enum Target {
    Reg(R8),
    HlInd,
}

fn cb_read(cpu: &mut Cpu, mmu: &mut Mmu, target: Target) -> u8 {
    match target {
        Target::Reg(r) => cpu.registers.read(r),
        Target::HlInd => mmu.read(cpu.registers.read16(R16::HL)),
    }
}

fn cb_write(cpu: &mut Cpu, mmu: &mut Mmu, target: Target, value: u8) {
    match target {
        Target::Reg(r) => cpu.registers.write(r, value),
        Target::HlInd => mmu.write(cpu.registers.read16(R16::HL), value),
    }
}

#[derive(Copy, Clone)]
enum CbOp {
    Rlc,
    Rrc,
    Rl,
    Rr,
    Sla,
    Sra,
    Swap,
    Srl,
}

fn cb_rot(cpu: &mut Cpu, mmu: &mut Mmu, op: CbOp, target: Target) -> OpResult {
    let value = cb_read(cpu, mmu, target);
    let result = match op {
        CbOp::Rlc => rlc_val(cpu, value, true),
        CbOp::Rrc => rrc_val(cpu, value, true),
        CbOp::Rl => rl_val(cpu, value, true),
        CbOp::Rr => rr_val(cpu, value, true),
        CbOp::Sla => sla_val(cpu, value),
        CbOp::Sra => sra_val(cpu, value),
        CbOp::Swap => swap_val(cpu, value),
        CbOp::Srl => srl_val(cpu, value),
    };
    cb_write(cpu, mmu, target, result);
    Ok(())
}

fn cb_bit(cpu: &mut Cpu, mmu: &mut Mmu, bit: u8, target: Target) -> OpResult {
    let value = cb_read(cpu, mmu, target);
    cpu.registers.set_flag(Flags::ZERO, value & (1 << bit) == 0);
    cpu.registers.set_flag(Flags::SUBTRACT, false);
    cpu.registers.set_flag(Flags::HALF_CARRY, true);
    Ok(())
}

fn cb_res(cpu: &mut Cpu, mmu: &mut Mmu, bit: u8, target: Target) -> OpResult {
    let value = cb_read(cpu, mmu, target);
    cb_write(cpu, mmu, target, value & !(1 << bit));
    Ok(())
}

fn cb_set(cpu: &mut Cpu, mmu: &mut Mmu, bit: u8, target: Target) -> OpResult {
    let value = cb_read(cpu, mmu, target);
    cb_write(cpu, mmu, target, value | 1 << bit);
    Ok(())
}

fn cb_prefix(cpu: &mut Cpu, mmu: &mut Mmu) -> OpResult {
    let opcode = cpu.fetch_u8(mmu);
    trace!("       {}", cb_mnemonic(opcode));
    CB_OPCODES[opcode as usize](cpu, mmu)
}

/// Dot cost of a CB-prefixed opcode, prefix fetch included.
pub fn cb_dots(opcode: u8) -> u8 {
    if opcode & 0x07 == 0x06 {
        // [HL] forms; BIT skips the write-back
        if opcode >> 6 == 0b01 {
            12
        } else {
            16
        }
    } else {
        8
    }
}

pub fn cb_mnemonic(opcode: u8) -> String {
    const TARGETS: [&str; 8] = ["B", "C", "D", "E", "H", "L", "[HL]", "A"];
    const OPS: [&str; 8] = ["RLC", "RRC", "RL", "RR", "SLA", "SRA", "SWAP", "SRL"];

    let target = TARGETS[(opcode & 0x07) as usize];
    match opcode >> 6 {
        0b00 => format!("{} {}", OPS[(opcode >> 3 & 0x07) as usize], target),
        0b01 => format!("BIT {},{}", opcode >> 3 & 0x07, target),
        0b10 => format!("RES {},{}", opcode >> 3 & 0x07, target),
        _ => format!("SET {},{}", opcode >> 3 & 0x07, target),
    }
}

use Cond::{Always, C as CondC, NC, NZ, Z as CondZ};
use R16::{AF, BC, DE, HL, SP};
use R8::{A, B, C, D, E, H, L};
use Target::{HlInd, Reg};

pub const OPCODES: [OpcodeFn; 256] = [
    /* 0x00 */ |_c, _m| Ok(()),
    /* 0x01 */ |c, m| ld_r16_n16(c, m, BC),
    /* 0x02 */ |c, m| ld_r16ind_a(c, m, BC, 0),
    /* 0x03 */ |c, m| inc_r16(c, m, BC),
    /* 0x04 */ |c, _m| inc_r(c, B),
    /* 0x05 */ |c, _m| dec_r(c, B),
    /* 0x06 */ |c, m| ld_r_n8(c, m, B),
    /* 0x07 */ |c, _m| { let a = c.registers.a; c.registers.a = rlc_val(c, a, false); Ok(()) },
    /* 0x08 */ |c, m| ld_a16_sp(c, m),
    /* 0x09 */ |c, m| add_hl_r16(c, m, BC),
    /* 0x0a */ |c, m| ld_a_r16ind(c, m, BC, 0),
    /* 0x0b */ |c, m| dec_r16(c, m, BC),
    /* 0x0c */ |c, _m| inc_r(c, C),
    /* 0x0d */ |c, _m| dec_r(c, C),
    /* 0x0e */ |c, m| ld_r_n8(c, m, C),
    /* 0x0f */ |c, _m| { let a = c.registers.a; c.registers.a = rrc_val(c, a, false); Ok(()) },
    /* 0x10 */ |c, _m| stop(c),
    /* 0x11 */ |c, m| ld_r16_n16(c, m, DE),
    /* 0x12 */ |c, m| ld_r16ind_a(c, m, DE, 0),
    /* 0x13 */ |c, m| inc_r16(c, m, DE),
    /* 0x14 */ |c, _m| inc_r(c, D),
    /* 0x15 */ |c, _m| dec_r(c, D),
    /* 0x16 */ |c, m| ld_r_n8(c, m, D),
    /* 0x17 */ |c, _m| { let a = c.registers.a; c.registers.a = rl_val(c, a, false); Ok(()) },
    /* 0x18 */ |c, m| jr(c, m, Always),
    /* 0x19 */ |c, m| add_hl_r16(c, m, DE),
    /* 0x1a */ |c, m| ld_a_r16ind(c, m, DE, 0),
    /* 0x1b */ |c, m| dec_r16(c, m, DE),
    /* 0x1c */ |c, _m| inc_r(c, E),
    /* 0x1d */ |c, _m| dec_r(c, E),
    /* 0x1e */ |c, m| ld_r_n8(c, m, E),
    /* 0x1f */ |c, _m| { let a = c.registers.a; c.registers.a = rr_val(c, a, false); Ok(()) },
    /* 0x20 */ |c, m| jr(c, m, NZ),
    /* 0x21 */ |c, m| ld_r16_n16(c, m, HL),
    /* 0x22 */ |c, m| ld_r16ind_a(c, m, HL, 1),
    /* 0x23 */ |c, m| inc_r16(c, m, HL),
    /* 0x24 */ |c, _m| inc_r(c, H),
    /* 0x25 */ |c, _m| dec_r(c, H),
    /* 0x26 */ |c, m| ld_r_n8(c, m, H),
    /* 0x27 */ |c, _m| daa(c),
    /* 0x28 */ |c, m| jr(c, m, CondZ),
    /* 0x29 */ |c, m| add_hl_r16(c, m, HL),
    /* 0x2a */ |c, m| ld_a_r16ind(c, m, HL, 1),
    /* 0x2b */ |c, m| dec_r16(c, m, HL),
    /* 0x2c */ |c, _m| inc_r(c, L),
    /* 0x2d */ |c, _m| dec_r(c, L),
    /* 0x2e */ |c, m| ld_r_n8(c, m, L),
    /* 0x2f */ |c, _m| cpl(c),
    /* 0x30 */ |c, m| jr(c, m, NC),
    /* 0x31 */ |c, m| ld_r16_n16(c, m, SP),
    /* 0x32 */ |c, m| ld_r16ind_a(c, m, HL, -1),
    /* 0x33 */ |c, m| inc_r16(c, m, SP),
    /* 0x34 */ |c, m| inc_hl_ind(c, m),
    /* 0x35 */ |c, m| dec_hl_ind(c, m),
    /* 0x36 */ |c, m| ld_hl_n8(c, m),
    /* 0x37 */ |c, _m| scf(c),
    /* 0x38 */ |c, m| jr(c, m, CondC),
    /* 0x39 */ |c, m| add_hl_r16(c, m, SP),
    /* 0x3a */ |c, m| ld_a_r16ind(c, m, HL, -1),
    /* 0x3b */ |c, m| dec_r16(c, m, SP),
    /* 0x3c */ |c, _m| inc_r(c, A),
    /* 0x3d */ |c, _m| dec_r(c, A),
    /* 0x3e */ |c, m| ld_r_n8(c, m, A),
    /* 0x3f */ |c, _m| ccf(c),
    /* 0x40 */ |c, _m| ld_r_r(c, B, B),
    /* 0x41 */ |c, _m| ld_r_r(c, B, C),
    /* 0x42 */ |c, _m| ld_r_r(c, B, D),
    /* 0x43 */ |c, _m| ld_r_r(c, B, E),
    /* 0x44 */ |c, _m| ld_r_r(c, B, H),
    /* 0x45 */ |c, _m| ld_r_r(c, B, L),
    /* 0x46 */ |c, m| ld_r_hl(c, m, B),
    /* 0x47 */ |c, _m| ld_r_r(c, B, A),
    /* 0x48 */ |c, _m| ld_r_r(c, C, B),
    /* 0x49 */ |c, _m| ld_r_r(c, C, C),
    /* 0x4a */ |c, _m| ld_r_r(c, C, D),
    /* 0x4b */ |c, _m| ld_r_r(c, C, E),
    /* 0x4c */ |c, _m| ld_r_r(c, C, H),
    /* 0x4d */ |c, _m| ld_r_r(c, C, L),
    /* 0x4e */ |c, m| ld_r_hl(c, m, C),
    /* 0x4f */ |c, _m| ld_r_r(c, C, A),
    /* 0x50 */ |c, _m| ld_r_r(c, D, B),
    /* 0x51 */ |c, _m| ld_r_r(c, D, C),
    /* 0x52 */ |c, _m| ld_r_r(c, D, D),
    /* 0x53 */ |c, _m| ld_r_r(c, D, E),
    /* 0x54 */ |c, _m| ld_r_r(c, D, H),
    /* 0x55 */ |c, _m| ld_r_r(c, D, L),
    /* 0x56 */ |c, m| ld_r_hl(c, m, D),
    /* 0x57 */ |c, _m| ld_r_r(c, D, A),
    /* 0x58 */ |c, _m| ld_r_r(c, E, B),
    /* 0x59 */ |c, _m| ld_r_r(c, E, C),
    /* 0x5a */ |c, _m| ld_r_r(c, E, D),
    /* 0x5b */ |c, _m| ld_r_r(c, E, E),
    /* 0x5c */ |c, _m| ld_r_r(c, E, H),
    /* 0x5d */ |c, _m| ld_r_r(c, E, L),
    /* 0x5e */ |c, m| ld_r_hl(c, m, E),
    /* 0x5f */ |c, _m| ld_r_r(c, E, A),
    /* 0x60 */ |c, _m| ld_r_r(c, H, B),
    /* 0x61 */ |c, _m| ld_r_r(c, H, C),
    /* 0x62 */ |c, _m| ld_r_r(c, H, D),
    /* 0x63 */ |c, _m| ld_r_r(c, H, E),
    /* 0x64 */ |c, _m| ld_r_r(c, H, H),
    /* 0x65 */ |c, _m| ld_r_r(c, H, L),
    /* 0x66 */ |c, m| ld_r_hl(c, m, H),
    /* 0x67 */ |c, _m| ld_r_r(c, H, A),
    /* 0x68 */ |c, _m| ld_r_r(c, L, B),
    /* 0x69 */ |c, _m| ld_r_r(c, L, C),
    /* 0x6a */ |c, _m| ld_r_r(c, L, D),
    /* 0x6b */ |c, _m| ld_r_r(c, L, E),
    /* 0x6c */ |c, _m| ld_r_r(c, L, H),
    /* 0x6d */ |c, _m| ld_r_r(c, L, L),
    /* 0x6e */ |c, m| ld_r_hl(c, m, L),
    /* 0x6f */ |c, _m| ld_r_r(c, L, A),
    /* 0x70 */ |c, m| ld_hl_r(c, m, B),
    /* 0x71 */ |c, m| ld_hl_r(c, m, C),
    /* 0x72 */ |c, m| ld_hl_r(c, m, D),
    /* 0x73 */ |c, m| ld_hl_r(c, m, E),
    /* 0x74 */ |c, m| ld_hl_r(c, m, H),
    /* 0x75 */ |c, m| ld_hl_r(c, m, L),
    /* 0x76 */ |c, _m| halt(c),
    /* 0x77 */ |c, m| ld_hl_r(c, m, A),
    /* 0x78 */ |c, _m| ld_r_r(c, A, B),
    /* 0x79 */ |c, _m| ld_r_r(c, A, C),
    /* 0x7a */ |c, _m| ld_r_r(c, A, D),
    /* 0x7b */ |c, _m| ld_r_r(c, A, E),
    /* 0x7c */ |c, _m| ld_r_r(c, A, H),
    /* 0x7d */ |c, _m| ld_r_r(c, A, L),
    /* 0x7e */ |c, m| ld_r_hl(c, m, A),
    /* 0x7f */ |c, _m| ld_r_r(c, A, A),
    /* 0x80 */ |c, _m| alu_r(c, Alu::Add, B),
    /* 0x81 */ |c, _m| alu_r(c, Alu::Add, C),
    /* 0x82 */ |c, _m| alu_r(c, Alu::Add, D),
    /* 0x83 */ |c, _m| alu_r(c, Alu::Add, E),
    /* 0x84 */ |c, _m| alu_r(c, Alu::Add, H),
    /* 0x85 */ |c, _m| alu_r(c, Alu::Add, L),
    /* 0x86 */ |c, m| alu_hl(c, m, Alu::Add),
    /* 0x87 */ |c, _m| alu_r(c, Alu::Add, A),
    /* 0x88 */ |c, _m| alu_r(c, Alu::Adc, B),
    /* 0x89 */ |c, _m| alu_r(c, Alu::Adc, C),
    /* 0x8a */ |c, _m| alu_r(c, Alu::Adc, D),
    /* 0x8b */ |c, _m| alu_r(c, Alu::Adc, E),
    /* 0x8c */ |c, _m| alu_r(c, Alu::Adc, H),
    /* 0x8d */ |c, _m| alu_r(c, Alu::Adc, L),
    /* 0x8e */ |c, m| alu_hl(c, m, Alu::Adc),
    /* 0x8f */ |c, _m| alu_r(c, Alu::Adc, A),
    /* 0x90 */ |c, _m| alu_r(c, Alu::Sub, B),
    /* 0x91 */ |c, _m| alu_r(c, Alu::Sub, C),
    /* 0x92 */ |c, _m| alu_r(c, Alu::Sub, D),
    /* 0x93 */ |c, _m| alu_r(c, Alu::Sub, E),
    /* 0x94 */ |c, _m| alu_r(c, Alu::Sub, H),
    /* 0x95 */ |c, _m| alu_r(c, Alu::Sub, L),
    /* 0x96 */ |c, m| alu_hl(c, m, Alu::Sub),
    /* 0x97 */ |c, _m| alu_r(c, Alu::Sub, A),
    /* 0x98 */ |c, _m| alu_r(c, Alu::Sbc, B),
    /* 0x99 */ |c, _m| alu_r(c, Alu::Sbc, C),
    /* 0x9a */ |c, _m| alu_r(c, Alu::Sbc, D),
    /* 0x9b */ |c, _m| alu_r(c, Alu::Sbc, E),
    /* 0x9c */ |c, _m| alu_r(c, Alu::Sbc, H),
    /* 0x9d */ |c, _m| alu_r(c, Alu::Sbc, L),
    /* 0x9e */ |c, m| alu_hl(c, m, Alu::Sbc),
    /* 0x9f */ |c, _m| alu_r(c, Alu::Sbc, A),
    /* 0xa0 */ |c, _m| alu_r(c, Alu::And, B),
    /* 0xa1 */ |c, _m| alu_r(c, Alu::And, C),
    /* 0xa2 */ |c, _m| alu_r(c, Alu::And, D),
    /* 0xa3 */ |c, _m| alu_r(c, Alu::And, E),
    /* 0xa4 */ |c, _m| alu_r(c, Alu::And, H),
    /* 0xa5 */ |c, _m| alu_r(c, Alu::And, L),
    /* 0xa6 */ |c, m| alu_hl(c, m, Alu::And),
    /* 0xa7 */ |c, _m| alu_r(c, Alu::And, A),
    /* 0xa8 */ |c, _m| alu_r(c, Alu::Xor, B),
    /* 0xa9 */ |c, _m| alu_r(c, Alu::Xor, C),
    /* 0xaa */ |c, _m| alu_r(c, Alu::Xor, D),
    /* 0xab */ |c, _m| alu_r(c, Alu::Xor, E),
    /* 0xac */ |c, _m| alu_r(c, Alu::Xor, H),
    /* 0xad */ |c, _m| alu_r(c, Alu::Xor, L),
    /* 0xae */ |c, m| alu_hl(c, m, Alu::Xor),
    /* 0xaf */ |c, _m| alu_r(c, Alu::Xor, A),
    /* 0xb0 */ |c, _m| alu_r(c, Alu::Or, B),
    /* 0xb1 */ |c, _m| alu_r(c, Alu::Or, C),
    /* 0xb2 */ |c, _m| alu_r(c, Alu::Or, D),
    /* 0xb3 */ |c, _m| alu_r(c, Alu::Or, E),
    /* 0xb4 */ |c, _m| alu_r(c, Alu::Or, H),
    /* 0xb5 */ |c, _m| alu_r(c, Alu::Or, L),
    /* 0xb6 */ |c, m| alu_hl(c, m, Alu::Or),
    /* 0xb7 */ |c, _m| alu_r(c, Alu::Or, A),
    /* 0xb8 */ |c, _m| alu_r(c, Alu::Cp, B),
    /* 0xb9 */ |c, _m| alu_r(c, Alu::Cp, C),
    /* 0xba */ |c, _m| alu_r(c, Alu::Cp, D),
    /* 0xbb */ |c, _m| alu_r(c, Alu::Cp, E),
    /* 0xbc */ |c, _m| alu_r(c, Alu::Cp, H),
    /* 0xbd */ |c, _m| alu_r(c, Alu::Cp, L),
    /* 0xbe */ |c, m| alu_hl(c, m, Alu::Cp),
    /* 0xbf */ |c, _m| alu_r(c, Alu::Cp, A),
    /* 0xc0 */ |c, m| ret_cond(c, m, NZ),
    /* 0xc1 */ |c, m| pop_r16(c, m, BC),
    /* 0xc2 */ |c, m| jp(c, m, NZ),
    /* 0xc3 */ |c, m| jp(c, m, Always),
    /* 0xc4 */ |c, m| call(c, m, NZ),
    /* 0xc5 */ |c, m| push_r16(c, m, BC),
    /* 0xc6 */ |c, m| alu_n8(c, m, Alu::Add),
    /* 0xc7 */ |c, m| rst(c, m, 0x0000),
    /* 0xc8 */ |c, m| ret_cond(c, m, CondZ),
    /* 0xc9 */ |c, m| ret(c, m),
    /* 0xca */ |c, m| jp(c, m, CondZ),
    /* 0xcb */ |c, m| cb_prefix(c, m),
    /* 0xcc */ |c, m| call(c, m, CondZ),
    /* 0xcd */ |c, m| call(c, m, Always),
    /* 0xce */ |c, m| alu_n8(c, m, Alu::Adc),
    /* 0xcf */ |c, m| rst(c, m, 0x0008),
    /* 0xd0 */ |c, m| ret_cond(c, m, NC),
    /* 0xd1 */ |c, m| pop_r16(c, m, DE),
    /* 0xd2 */ |c, m| jp(c, m, NC),
    /* 0xd3 */ |c, _m| illegal(c, 0xd3),
    /* 0xd4 */ |c, m| call(c, m, NC),
    /* 0xd5 */ |c, m| push_r16(c, m, DE),
    /* 0xd6 */ |c, m| alu_n8(c, m, Alu::Sub),
    /* 0xd7 */ |c, m| rst(c, m, 0x0010),
    /* 0xd8 */ |c, m| ret_cond(c, m, CondC),
    /* 0xd9 */ |c, m| reti(c, m),
    /* 0xda */ |c, m| jp(c, m, CondC),
    /* 0xdb */ |c, _m| illegal(c, 0xdb),
    /* 0xdc */ |c, m| call(c, m, CondC),
    /* 0xdd */ |c, _m| illegal(c, 0xdd),
    /* 0xde */ |c, m| alu_n8(c, m, Alu::Sbc),
    /* 0xdf */ |c, m| rst(c, m, 0x0018),
    /* 0xe0 */ |c, m| ldh_a8_a(c, m),
    /* 0xe1 */ |c, m| pop_r16(c, m, HL),
    /* 0xe2 */ |c, m| ld_cind_a(c, m),
    /* 0xe3 */ |c, _m| illegal(c, 0xe3),
    /* 0xe4 */ |c, _m| illegal(c, 0xe4),
    /* 0xe5 */ |c, m| push_r16(c, m, HL),
    /* 0xe6 */ |c, m| alu_n8(c, m, Alu::And),
    /* 0xe7 */ |c, m| rst(c, m, 0x0020),
    /* 0xe8 */ |c, m| add_sp_e8(c, m),
    /* 0xe9 */ |c, _m| jp_hl(c),
    /* 0xea */ |c, m| ld_a16_a(c, m),
    /* 0xeb */ |c, _m| illegal(c, 0xeb),
    /* 0xec */ |c, _m| illegal(c, 0xec),
    /* 0xed */ |c, _m| illegal(c, 0xed),
    /* 0xee */ |c, m| alu_n8(c, m, Alu::Xor),
    /* 0xef */ |c, m| rst(c, m, 0x0028),
    /* 0xf0 */ |c, m| ldh_a_a8(c, m),
    /* 0xf1 */ |c, m| pop_r16(c, m, AF),
    /* 0xf2 */ |c, m| ld_a_cind(c, m),
    /* 0xf3 */ |c, _m| di(c),
    /* 0xf4 */ |c, _m| illegal(c, 0xf4),
    /* 0xf5 */ |c, m| push_r16(c, m, AF),
    /* 0xf6 */ |c, m| alu_n8(c, m, Alu::Or),
    /* 0xf7 */ |c, m| rst(c, m, 0x0030),
    /* 0xf8 */ |c, m| ld_hl_sp_e8(c, m),
    /* 0xf9 */ |c, m| ld_sp_hl(c, m),
    /* 0xfa */ |c, m| ld_a_a16(c, m),
    /* 0xfb */ |c, _m| ei(c),
    /* 0xfc */ |c, _m| illegal(c, 0xfc),
    /* 0xfd */ |c, _m| illegal(c, 0xfd),
    /* 0xfe */ |c, m| alu_n8(c, m, Alu::Cp),
    /* 0xff */ |c, m| rst(c, m, 0x0038),
];

pub const CB_OPCODES: [OpcodeFn; 256] = [
    /* 0x00 */ |c, m| cb_rot(c, m, CbOp::Rlc, Reg(B)),
    /* 0x01 */ |c, m| cb_rot(c, m, CbOp::Rlc, Reg(C)),
    /* 0x02 */ |c, m| cb_rot(c, m, CbOp::Rlc, Reg(D)),
    /* 0x03 */ |c, m| cb_rot(c, m, CbOp::Rlc, Reg(E)),
    /* 0x04 */ |c, m| cb_rot(c, m, CbOp::Rlc, Reg(H)),
    /* 0x05 */ |c, m| cb_rot(c, m, CbOp::Rlc, Reg(L)),
    /* 0x06 */ |c, m| cb_rot(c, m, CbOp::Rlc, HlInd),
    /* 0x07 */ |c, m| cb_rot(c, m, CbOp::Rlc, Reg(A)),
    /* 0x08 */ |c, m| cb_rot(c, m, CbOp::Rrc, Reg(B)),
    /* 0x09 */ |c, m| cb_rot(c, m, CbOp::Rrc, Reg(C)),
    /* 0x0a */ |c, m| cb_rot(c, m, CbOp::Rrc, Reg(D)),
    /* 0x0b */ |c, m| cb_rot(c, m, CbOp::Rrc, Reg(E)),
    /* 0x0c */ |c, m| cb_rot(c, m, CbOp::Rrc, Reg(H)),
    /* 0x0d */ |c, m| cb_rot(c, m, CbOp::Rrc, Reg(L)),
    /* 0x0e */ |c, m| cb_rot(c, m, CbOp::Rrc, HlInd),
    /* 0x0f */ |c, m| cb_rot(c, m, CbOp::Rrc, Reg(A)),
    /* 0x10 */ |c, m| cb_rot(c, m, CbOp::Rl, Reg(B)),
    /* 0x11 */ |c, m| cb_rot(c, m, CbOp::Rl, Reg(C)),
    /* 0x12 */ |c, m| cb_rot(c, m, CbOp::Rl, Reg(D)),
    /* 0x13 */ |c, m| cb_rot(c, m, CbOp::Rl, Reg(E)),
    /* 0x14 */ |c, m| cb_rot(c, m, CbOp::Rl, Reg(H)),
    /* 0x15 */ |c, m| cb_rot(c, m, CbOp::Rl, Reg(L)),
    /* 0x16 */ |c, m| cb_rot(c, m, CbOp::Rl, HlInd),
    /* 0x17 */ |c, m| cb_rot(c, m, CbOp::Rl, Reg(A)),
    /* 0x18 */ |c, m| cb_rot(c, m, CbOp::Rr, Reg(B)),
    /* 0x19 */ |c, m| cb_rot(c, m, CbOp::Rr, Reg(C)),
    /* 0x1a */ |c, m| cb_rot(c, m, CbOp::Rr, Reg(D)),
    /* 0x1b */ |c, m| cb_rot(c, m, CbOp::Rr, Reg(E)),
    /* 0x1c */ |c, m| cb_rot(c, m, CbOp::Rr, Reg(H)),
    /* 0x1d */ |c, m| cb_rot(c, m, CbOp::Rr, Reg(L)),
    /* 0x1e */ |c, m| cb_rot(c, m, CbOp::Rr, HlInd),
    /* 0x1f */ |c, m| cb_rot(c, m, CbOp::Rr, Reg(A)),
    /* 0x20 */ |c, m| cb_rot(c, m, CbOp::Sla, Reg(B)),
    /* 0x21 */ |c, m| cb_rot(c, m, CbOp::Sla, Reg(C)),
    /* 0x22 */ |c, m| cb_rot(c, m, CbOp::Sla, Reg(D)),
    /* 0x23 */ |c, m| cb_rot(c, m, CbOp::Sla, Reg(E)),
    /* 0x24 */ |c, m| cb_rot(c, m, CbOp::Sla, Reg(H)),
    /* 0x25 */ |c, m| cb_rot(c, m, CbOp::Sla, Reg(L)),
    /* 0x26 */ |c, m| cb_rot(c, m, CbOp::Sla, HlInd),
    /* 0x27 */ |c, m| cb_rot(c, m, CbOp::Sla, Reg(A)),
    /* 0x28 */ |c, m| cb_rot(c, m, CbOp::Sra, Reg(B)),
    /* 0x29 */ |c, m| cb_rot(c, m, CbOp::Sra, Reg(C)),
    /* 0x2a */ |c, m| cb_rot(c, m, CbOp::Sra, Reg(D)),
    /* 0x2b */ |c, m| cb_rot(c, m, CbOp::Sra, Reg(E)),
    /* 0x2c */ |c, m| cb_rot(c, m, CbOp::Sra, Reg(H)),
    /* 0x2d */ |c, m| cb_rot(c, m, CbOp::Sra, Reg(L)),
    /* 0x2e */ |c, m| cb_rot(c, m, CbOp::Sra, HlInd),
    /* 0x2f */ |c, m| cb_rot(c, m, CbOp::Sra, Reg(A)),
    /* 0x30 */ |c, m| cb_rot(c, m, CbOp::Swap, Reg(B)),
    /* 0x31 */ |c, m| cb_rot(c, m, CbOp::Swap, Reg(C)),
    /* 0x32 */ |c, m| cb_rot(c, m, CbOp::Swap, Reg(D)),
    /* 0x33 */ |c, m| cb_rot(c, m, CbOp::Swap, Reg(E)),
    /* 0x34 */ |c, m| cb_rot(c, m, CbOp::Swap, Reg(H)),
    /* 0x35 */ |c, m| cb_rot(c, m, CbOp::Swap, Reg(L)),
    /* 0x36 */ |c, m| cb_rot(c, m, CbOp::Swap, HlInd),
    /* 0x37 */ |c, m| cb_rot(c, m, CbOp::Swap, Reg(A)),
    /* 0x38 */ |c, m| cb_rot(c, m, CbOp::Srl, Reg(B)),
    /* 0x39 */ |c, m| cb_rot(c, m, CbOp::Srl, Reg(C)),
    /* 0x3a */ |c, m| cb_rot(c, m, CbOp::Srl, Reg(D)),
    /* 0x3b */ |c, m| cb_rot(c, m, CbOp::Srl, Reg(E)),
    /* 0x3c */ |c, m| cb_rot(c, m, CbOp::Srl, Reg(H)),
    /* 0x3d */ |c, m| cb_rot(c, m, CbOp::Srl, Reg(L)),
    /* 0x3e */ |c, m| cb_rot(c, m, CbOp::Srl, HlInd),
    /* 0x3f */ |c, m| cb_rot(c, m, CbOp::Srl, Reg(A)),
    /* 0x40 */ |c, m| cb_bit(c, m, 0, Reg(B)),
    /* 0x41 */ |c, m| cb_bit(c, m, 0, Reg(C)),
    /* 0x42 */ |c, m| cb_bit(c, m, 0, Reg(D)),
    /* 0x43 */ |c, m| cb_bit(c, m, 0, Reg(E)),
    /* 0x44 */ |c, m| cb_bit(c, m, 0, Reg(H)),
    /* 0x45 */ |c, m| cb_bit(c, m, 0, Reg(L)),
    /* 0x46 */ |c, m| cb_bit(c, m, 0, HlInd),
    /* 0x47 */ |c, m| cb_bit(c, m, 0, Reg(A)),
    /* 0x48 */ |c, m| cb_bit(c, m, 1, Reg(B)),
    /* 0x49 */ |c, m| cb_bit(c, m, 1, Reg(C)),
    /* 0x4a */ |c, m| cb_bit(c, m, 1, Reg(D)),
    /* 0x4b */ |c, m| cb_bit(c, m, 1, Reg(E)),
    /* 0x4c */ |c, m| cb_bit(c, m, 1, Reg(H)),
    /* 0x4d */ |c, m| cb_bit(c, m, 1, Reg(L)),
    /* 0x4e */ |c, m| cb_bit(c, m, 1, HlInd),
    /* 0x4f */ |c, m| cb_bit(c, m, 1, Reg(A)),
    /* 0x50 */ |c, m| cb_bit(c, m, 2, Reg(B)),
    /* 0x51 */ |c, m| cb_bit(c, m, 2, Reg(C)),
    /* 0x52 */ |c, m| cb_bit(c, m, 2, Reg(D)),
    /* 0x53 */ |c, m| cb_bit(c, m, 2, Reg(E)),
    /* 0x54 */ |c, m| cb_bit(c, m, 2, Reg(H)),
    /* 0x55 */ |c, m| cb_bit(c, m, 2, Reg(L)),
    /* 0x56 */ |c, m| cb_bit(c, m, 2, HlInd),
    /* 0x57 */ |c, m| cb_bit(c, m, 2, Reg(A)),
    /* 0x58 */ |c, m| cb_bit(c, m, 3, Reg(B)),
    /* 0x59 */ |c, m| cb_bit(c, m, 3, Reg(C)),
    /* 0x5a */ |c, m| cb_bit(c, m, 3, Reg(D)),
    /* 0x5b */ |c, m| cb_bit(c, m, 3, Reg(E)),
    /* 0x5c */ |c, m| cb_bit(c, m, 3, Reg(H)),
    /* 0x5d */ |c, m| cb_bit(c, m, 3, Reg(L)),
    /* 0x5e */ |c, m| cb_bit(c, m, 3, HlInd),
    /* 0x5f */ |c, m| cb_bit(c, m, 3, Reg(A)),
    /* 0x60 */ |c, m| cb_bit(c, m, 4, Reg(B)),
    /* 0x61 */ |c, m| cb_bit(c, m, 4, Reg(C)),
    /* 0x62 */ |c, m| cb_bit(c, m, 4, Reg(D)),
    /* 0x63 */ |c, m| cb_bit(c, m, 4, Reg(E)),
    /* 0x64 */ |c, m| cb_bit(c, m, 4, Reg(H)),
    /* 0x65 */ |c, m| cb_bit(c, m, 4, Reg(L)),
    /* 0x66 */ |c, m| cb_bit(c, m, 4, HlInd),
    /* 0x67 */ |c, m| cb_bit(c, m, 4, Reg(A)),
    /* 0x68 */ |c, m| cb_bit(c, m, 5, Reg(B)),
    /* 0x69 */ |c, m| cb_bit(c, m, 5, Reg(C)),
    /* 0x6a */ |c, m| cb_bit(c, m, 5, Reg(D)),
    /* 0x6b */ |c, m| cb_bit(c, m, 5, Reg(E)),
    /* 0x6c */ |c, m| cb_bit(c, m, 5, Reg(H)),
    /* 0x6d */ |c, m| cb_bit(c, m, 5, Reg(L)),
    /* 0x6e */ |c, m| cb_bit(c, m, 5, HlInd),
    /* 0x6f */ |c, m| cb_bit(c, m, 5, Reg(A)),
    /* 0x70 */ |c, m| cb_bit(c, m, 6, Reg(B)),
    /* 0x71 */ |c, m| cb_bit(c, m, 6, Reg(C)),
    /* 0x72 */ |c, m| cb_bit(c, m, 6, Reg(D)),
    /* 0x73 */ |c, m| cb_bit(c, m, 6, Reg(E)),
    /* 0x74 */ |c, m| cb_bit(c, m, 6, Reg(H)),
    /* 0x75 */ |c, m| cb_bit(c, m, 6, Reg(L)),
    /* 0x76 */ |c, m| cb_bit(c, m, 6, HlInd),
    /* 0x77 */ |c, m| cb_bit(c, m, 6, Reg(A)),
    /* 0x78 */ |c, m| cb_bit(c, m, 7, Reg(B)),
    /* 0x79 */ |c, m| cb_bit(c, m, 7, Reg(C)),
    /* 0x7a */ |c, m| cb_bit(c, m, 7, Reg(D)),
    /* 0x7b */ |c, m| cb_bit(c, m, 7, Reg(E)),
    /* 0x7c */ |c, m| cb_bit(c, m, 7, Reg(H)),
    /* 0x7d */ |c, m| cb_bit(c, m, 7, Reg(L)),
    /* 0x7e */ |c, m| cb_bit(c, m, 7, HlInd),
    /* 0x7f */ |c, m| cb_bit(c, m, 7, Reg(A)),
    /* 0x80 */ |c, m| cb_res(c, m, 0, Reg(B)),
    /* 0x81 */ |c, m| cb_res(c, m, 0, Reg(C)),
    /* 0x82 */ |c, m| cb_res(c, m, 0, Reg(D)),
    /* 0x83 */ |c, m| cb_res(c, m, 0, Reg(E)),
    /* 0x84 */ |c, m| cb_res(c, m, 0, Reg(H)),
    /* 0x85 */ |c, m| cb_res(c, m, 0, Reg(L)),
    /* 0x86 */ |c, m| cb_res(c, m, 0, HlInd),
    /* 0x87 */ |c, m| cb_res(c, m, 0, Reg(A)),
    /* 0x88 */ |c, m| cb_res(c, m, 1, Reg(B)),
    /* 0x89 */ |c, m| cb_res(c, m, 1, Reg(C)),
    /* 0x8a */ |c, m| cb_res(c, m, 1, Reg(D)),
    /* 0x8b */ |c, m| cb_res(c, m, 1, Reg(E)),
    /* 0x8c */ |c, m| cb_res(c, m, 1, Reg(H)),
    /* 0x8d */ |c, m| cb_res(c, m, 1, Reg(L)),
    /* 0x8e */ |c, m| cb_res(c, m, 1, HlInd),
    /* 0x8f */ |c, m| cb_res(c, m, 1, Reg(A)),
    /* 0x90 */ |c, m| cb_res(c, m, 2, Reg(B)),
    /* 0x91 */ |c, m| cb_res(c, m, 2, Reg(C)),
    /* 0x92 */ |c, m| cb_res(c, m, 2, Reg(D)),
    /* 0x93 */ |c, m| cb_res(c, m, 2, Reg(E)),
    /* 0x94 */ |c, m| cb_res(c, m, 2, Reg(H)),
    /* 0x95 */ |c, m| cb_res(c, m, 2, Reg(L)),
    /* 0x96 */ |c, m| cb_res(c, m, 2, HlInd),
    /* 0x97 */ |c, m| cb_res(c, m, 2, Reg(A)),
    /* 0x98 */ |c, m| cb_res(c, m, 3, Reg(B)),
    /* 0x99 */ |c, m| cb_res(c, m, 3, Reg(C)),
    /* 0x9a */ |c, m| cb_res(c, m, 3, Reg(D)),
    /* 0x9b */ |c, m| cb_res(c, m, 3, Reg(E)),
    /* 0x9c */ |c, m| cb_res(c, m, 3, Reg(H)),
    /* 0x9d */ |c, m| cb_res(c, m, 3, Reg(L)),
    /* 0x9e */ |c, m| cb_res(c, m, 3, HlInd),
    /* 0x9f */ |c, m| cb_res(c, m, 3, Reg(A)),
    /* 0xa0 */ |c, m| cb_res(c, m, 4, Reg(B)),
    /* 0xa1 */ |c, m| cb_res(c, m, 4, Reg(C)),
    /* 0xa2 */ |c, m| cb_res(c, m, 4, Reg(D)),
    /* 0xa3 */ |c, m| cb_res(c, m, 4, Reg(E)),
    /* 0xa4 */ |c, m| cb_res(c, m, 4, Reg(H)),
    /* 0xa5 */ |c, m| cb_res(c, m, 4, Reg(L)),
    /* 0xa6 */ |c, m| cb_res(c, m, 4, HlInd),
    /* 0xa7 */ |c, m| cb_res(c, m, 4, Reg(A)),
    /* 0xa8 */ |c, m| cb_res(c, m, 5, Reg(B)),
    /* 0xa9 */ |c, m| cb_res(c, m, 5, Reg(C)),
    /* 0xaa */ |c, m| cb_res(c, m, 5, Reg(D)),
    /* 0xab */ |c, m| cb_res(c, m, 5, Reg(E)),
    /* 0xac */ |c, m| cb_res(c, m, 5, Reg(H)),
    /* 0xad */ |c, m| cb_res(c, m, 5, Reg(L)),
    /* 0xae */ |c, m| cb_res(c, m, 5, HlInd),
    /* 0xaf */ |c, m| cb_res(c, m, 5, Reg(A)),
    /* 0xb0 */ |c, m| cb_res(c, m, 6, Reg(B)),
    /* 0xb1 */ |c, m| cb_res(c, m, 6, Reg(C)),
    /* 0xb2 */ |c, m| cb_res(c, m, 6, Reg(D)),
    /* 0xb3 */ |c, m| cb_res(c, m, 6, Reg(E)),
    /* 0xb4 */ |c, m| cb_res(c, m, 6, Reg(H)),
    /* 0xb5 */ |c, m| cb_res(c, m, 6, Reg(L)),
    /* 0xb6 */ |c, m| cb_res(c, m, 6, HlInd),
    /* 0xb7 */ |c, m| cb_res(c, m, 6, Reg(A)),
    /* 0xb8 */ |c, m| cb_res(c, m, 7, Reg(B)),
    /* 0xb9 */ |c, m| cb_res(c, m, 7, Reg(C)),
    /* 0xba */ |c, m| cb_res(c, m, 7, Reg(D)),
    /* 0xbb */ |c, m| cb_res(c, m, 7, Reg(E)),
    /* 0xbc */ |c, m| cb_res(c, m, 7, Reg(H)),
    /* 0xbd */ |c, m| cb_res(c, m, 7, Reg(L)),
    /* 0xbe */ |c, m| cb_res(c, m, 7, HlInd),
    /* 0xbf */ |c, m| cb_res(c, m, 7, Reg(A)),
    /* 0xc0 */ |c, m| cb_set(c, m, 0, Reg(B)),
    /* 0xc1 */ |c, m| cb_set(c, m, 0, Reg(C)),
    /* 0xc2 */ |c, m| cb_set(c, m, 0, Reg(D)),
    /* 0xc3 */ |c, m| cb_set(c, m, 0, Reg(E)),
    /* 0xc4 */ |c, m| cb_set(c, m, 0, Reg(H)),
    /* 0xc5 */ |c, m| cb_set(c, m, 0, Reg(L)),
    /* 0xc6 */ |c, m| cb_set(c, m, 0, HlInd),
    /* 0xc7 */ |c, m| cb_set(c, m, 0, Reg(A)),
    /* 0xc8 */ |c, m| cb_set(c, m, 1, Reg(B)),
    /* 0xc9 */ |c, m| cb_set(c, m, 1, Reg(C)),
    /* 0xca */ |c, m| cb_set(c, m, 1, Reg(D)),
    /* 0xcb */ |c, m| cb_set(c, m, 1, Reg(E)),
    /* 0xcc */ |c, m| cb_set(c, m, 1, Reg(H)),
    /* 0xcd */ |c, m| cb_set(c, m, 1, Reg(L)),
    /* 0xce */ |c, m| cb_set(c, m, 1, HlInd),
    /* 0xcf */ |c, m| cb_set(c, m, 1, Reg(A)),
    /* 0xd0 */ |c, m| cb_set(c, m, 2, Reg(B)),
    /* 0xd1 */ |c, m| cb_set(c, m, 2, Reg(C)),
    /* 0xd2 */ |c, m| cb_set(c, m, 2, Reg(D)),
    /* 0xd3 */ |c, m| cb_set(c, m, 2, Reg(E)),
    /* 0xd4 */ |c, m| cb_set(c, m, 2, Reg(H)),
    /* 0xd5 */ |c, m| cb_set(c, m, 2, Reg(L)),
    /* 0xd6 */ |c, m| cb_set(c, m, 2, HlInd),
    /* 0xd7 */ |c, m| cb_set(c, m, 2, Reg(A)),
    /* 0xd8 */ |c, m| cb_set(c, m, 3, Reg(B)),
    /* 0xd9 */ |c, m| cb_set(c, m, 3, Reg(C)),
    /* 0xda */ |c, m| cb_set(c, m, 3, Reg(D)),
    /* 0xdb */ |c, m| cb_set(c, m, 3, Reg(E)),
    /* 0xdc */ |c, m| cb_set(c, m, 3, Reg(H)),
    /* 0xdd */ |c, m| cb_set(c, m, 3, Reg(L)),
    /* 0xde */ |c, m| cb_set(c, m, 3, HlInd),
    /* 0xdf */ |c, m| cb_set(c, m, 3, Reg(A)),
    /* 0xe0 */ |c, m| cb_set(c, m, 4, Reg(B)),
    /* 0xe1 */ |c, m| cb_set(c, m, 4, Reg(C)),
    /* 0xe2 */ |c, m| cb_set(c, m, 4, Reg(D)),
    /* 0xe3 */ |c, m| cb_set(c, m, 4, Reg(E)),
    /* 0xe4 */ |c, m| cb_set(c, m, 4, Reg(H)),
    /* 0xe5 */ |c, m| cb_set(c, m, 4, Reg(L)),
    /* 0xe6 */ |c, m| cb_set(c, m, 4, HlInd),
    /* 0xe7 */ |c, m| cb_set(c, m, 4, Reg(A)),
    /* 0xe8 */ |c, m| cb_set(c, m, 5, Reg(B)),
    /* 0xe9 */ |c, m| cb_set(c, m, 5, Reg(C)),
    /* 0xea */ |c, m| cb_set(c, m, 5, Reg(D)),
    /* 0xeb */ |c, m| cb_set(c, m, 5, Reg(E)),
    /* 0xec */ |c, m| cb_set(c, m, 5, Reg(H)),
    /* 0xed */ |c, m| cb_set(c, m, 5, Reg(L)),
    /* 0xee */ |c, m| cb_set(c, m, 5, HlInd),
    /* 0xef */ |c, m| cb_set(c, m, 5, Reg(A)),
    /* 0xf0 */ |c, m| cb_set(c, m, 6, Reg(B)),
    /* 0xf1 */ |c, m| cb_set(c, m, 6, Reg(C)),
    /* 0xf2 */ |c, m| cb_set(c, m, 6, Reg(D)),
    /* 0xf3 */ |c, m| cb_set(c, m, 6, Reg(E)),
    /* 0xf4 */ |c, m| cb_set(c, m, 6, Reg(H)),
    /* 0xf5 */ |c, m| cb_set(c, m, 6, Reg(L)),
    /* 0xf6 */ |c, m| cb_set(c, m, 6, HlInd),
    /* 0xf7 */ |c, m| cb_set(c, m, 6, Reg(A)),
    /* 0xf8 */ |c, m| cb_set(c, m, 7, Reg(B)),
    /* 0xf9 */ |c, m| cb_set(c, m, 7, Reg(C)),
    /* 0xfa */ |c, m| cb_set(c, m, 7, Reg(D)),
    /* 0xfb */ |c, m| cb_set(c, m, 7, Reg(E)),
    /* 0xfc */ |c, m| cb_set(c, m, 7, Reg(H)),
    /* 0xfd */ |c, m| cb_set(c, m, 7, Reg(L)),
    /* 0xfe */ |c, m| cb_set(c, m, 7, HlInd),
    /* 0xff */ |c, m| cb_set(c, m, 7, Reg(A)),
];

pub static OPCODE_INFO: [OpcodeInfo; 256] = [
    info("NOP", 1, 4),
    info("LD BC,n16", 3, 12),
    info("LD [BC],A", 1, 8),
    info("INC BC", 1, 8),
    info("INC B", 1, 4),
    info("DEC B", 1, 4),
    info("LD B,n8", 2, 8),
    info("RLCA", 1, 4),
    info("LD [a16],SP", 3, 20),
    info("ADD HL,BC", 1, 8),
    info("LD A,[BC]", 1, 8),
    info("DEC BC", 1, 8),
    info("INC C", 1, 4),
    info("DEC C", 1, 4),
    info("LD C,n8", 2, 8),
    info("RRCA", 1, 4),
    info("STOP", 2, 4),
    info("LD DE,n16", 3, 12),
    info("LD [DE],A", 1, 8),
    info("INC DE", 1, 8),
    info("INC D", 1, 4),
    info("DEC D", 1, 4),
    info("LD D,n8", 2, 8),
    info("RLA", 1, 4),
    info("JR e8", 2, 12),
    info("ADD HL,DE", 1, 8),
    info("LD A,[DE]", 1, 8),
    info("DEC DE", 1, 8),
    info("INC E", 1, 4),
    info("DEC E", 1, 4),
    info("LD E,n8", 2, 8),
    info("RRA", 1, 4),
    branch("JR NZ,e8", 2, 8, 12),
    info("LD HL,n16", 3, 12),
    info("LD [HL+],A", 1, 8),
    info("INC HL", 1, 8),
    info("INC H", 1, 4),
    info("DEC H", 1, 4),
    info("LD H,n8", 2, 8),
    info("DAA", 1, 4),
    branch("JR Z,e8", 2, 8, 12),
    info("ADD HL,HL", 1, 8),
    info("LD A,[HL+]", 1, 8),
    info("DEC HL", 1, 8),
    info("INC L", 1, 4),
    info("DEC L", 1, 4),
    info("LD L,n8", 2, 8),
    info("CPL", 1, 4),
    branch("JR NC,e8", 2, 8, 12),
    info("LD SP,n16", 3, 12),
    info("LD [HL-],A", 1, 8),
    info("INC SP", 1, 8),
    info("INC [HL]", 1, 12),
    info("DEC [HL]", 1, 12),
    info("LD [HL],n8", 2, 12),
    info("SCF", 1, 4),
    branch("JR C,e8", 2, 8, 12),
    info("ADD HL,SP", 1, 8),
    info("LD A,[HL-]", 1, 8),
    info("DEC SP", 1, 8),
    info("INC A", 1, 4),
    info("DEC A", 1, 4),
    info("LD A,n8", 2, 8),
    info("CCF", 1, 4),
    info("LD B,B", 1, 4),
    info("LD B,C", 1, 4),
    info("LD B,D", 1, 4),
    info("LD B,E", 1, 4),
    info("LD B,H", 1, 4),
    info("LD B,L", 1, 4),
    info("LD B,[HL]", 1, 8),
    info("LD B,A", 1, 4),
    info("LD C,B", 1, 4),
    info("LD C,C", 1, 4),
    info("LD C,D", 1, 4),
    info("LD C,E", 1, 4),
    info("LD C,H", 1, 4),
    info("LD C,L", 1, 4),
    info("LD C,[HL]", 1, 8),
    info("LD C,A", 1, 4),
    info("LD D,B", 1, 4),
    info("LD D,C", 1, 4),
    info("LD D,D", 1, 4),
    info("LD D,E", 1, 4),
    info("LD D,H", 1, 4),
    info("LD D,L", 1, 4),
    info("LD D,[HL]", 1, 8),
    info("LD D,A", 1, 4),
    info("LD E,B", 1, 4),
    info("LD E,C", 1, 4),
    info("LD E,D", 1, 4),
    info("LD E,E", 1, 4),
    info("LD E,H", 1, 4),
    info("LD E,L", 1, 4),
    info("LD E,[HL]", 1, 8),
    info("LD E,A", 1, 4),
    info("LD H,B", 1, 4),
    info("LD H,C", 1, 4),
    info("LD H,D", 1, 4),
    info("LD H,E", 1, 4),
    info("LD H,H", 1, 4),
    info("LD H,L", 1, 4),
    info("LD H,[HL]", 1, 8),
    info("LD H,A", 1, 4),
    info("LD L,B", 1, 4),
    info("LD L,C", 1, 4),
    info("LD L,D", 1, 4),
    info("LD L,E", 1, 4),
    info("LD L,H", 1, 4),
    info("LD L,L", 1, 4),
    info("LD L,[HL]", 1, 8),
    info("LD L,A", 1, 4),
    info("LD [HL],B", 1, 8),
    info("LD [HL],C", 1, 8),
    info("LD [HL],D", 1, 8),
    info("LD [HL],E", 1, 8),
    info("LD [HL],H", 1, 8),
    info("LD [HL],L", 1, 8),
    info("HALT", 1, 4),
    info("LD [HL],A", 1, 8),
    info("LD A,B", 1, 4),
    info("LD A,C", 1, 4),
    info("LD A,D", 1, 4),
    info("LD A,E", 1, 4),
    info("LD A,H", 1, 4),
    info("LD A,L", 1, 4),
    info("LD A,[HL]", 1, 8),
    info("LD A,A", 1, 4),
    info("ADD A,B", 1, 4),
    info("ADD A,C", 1, 4),
    info("ADD A,D", 1, 4),
    info("ADD A,E", 1, 4),
    info("ADD A,H", 1, 4),
    info("ADD A,L", 1, 4),
    info("ADD A,[HL]", 1, 8),
    info("ADD A,A", 1, 4),
    info("ADC A,B", 1, 4),
    info("ADC A,C", 1, 4),
    info("ADC A,D", 1, 4),
    info("ADC A,E", 1, 4),
    info("ADC A,H", 1, 4),
    info("ADC A,L", 1, 4),
    info("ADC A,[HL]", 1, 8),
    info("ADC A,A", 1, 4),
    info("SUB A,B", 1, 4),
    info("SUB A,C", 1, 4),
    info("SUB A,D", 1, 4),
    info("SUB A,E", 1, 4),
    info("SUB A,H", 1, 4),
    info("SUB A,L", 1, 4),
    info("SUB A,[HL]", 1, 8),
    info("SUB A,A", 1, 4),
    info("SBC A,B", 1, 4),
    info("SBC A,C", 1, 4),
    info("SBC A,D", 1, 4),
    info("SBC A,E", 1, 4),
    info("SBC A,H", 1, 4),
    info("SBC A,L", 1, 4),
    info("SBC A,[HL]", 1, 8),
    info("SBC A,A", 1, 4),
    info("AND A,B", 1, 4),
    info("AND A,C", 1, 4),
    info("AND A,D", 1, 4),
    info("AND A,E", 1, 4),
    info("AND A,H", 1, 4),
    info("AND A,L", 1, 4),
    info("AND A,[HL]", 1, 8),
    info("AND A,A", 1, 4),
    info("XOR A,B", 1, 4),
    info("XOR A,C", 1, 4),
    info("XOR A,D", 1, 4),
    info("XOR A,E", 1, 4),
    info("XOR A,H", 1, 4),
    info("XOR A,L", 1, 4),
    info("XOR A,[HL]", 1, 8),
    info("XOR A,A", 1, 4),
    info("OR A,B", 1, 4),
    info("OR A,C", 1, 4),
    info("OR A,D", 1, 4),
    info("OR A,E", 1, 4),
    info("OR A,H", 1, 4),
    info("OR A,L", 1, 4),
    info("OR A,[HL]", 1, 8),
    info("OR A,A", 1, 4),
    info("CP A,B", 1, 4),
    info("CP A,C", 1, 4),
    info("CP A,D", 1, 4),
    info("CP A,E", 1, 4),
    info("CP A,H", 1, 4),
    info("CP A,L", 1, 4),
    info("CP A,[HL]", 1, 8),
    info("CP A,A", 1, 4),
    branch("RET NZ", 1, 8, 20),
    info("POP BC", 1, 12),
    branch("JP NZ,a16", 3, 12, 16),
    info("JP a16", 3, 16),
    branch("CALL NZ,a16", 3, 12, 24),
    info("PUSH BC", 1, 16),
    info("ADD A,n8", 2, 8),
    info("RST $00", 1, 16),
    branch("RET Z", 1, 8, 20),
    info("RET", 1, 16),
    branch("JP Z,a16", 3, 12, 16),
    info("PREFIX", 1, 4),
    branch("CALL Z,a16", 3, 12, 24),
    info("CALL a16", 3, 24),
    info("ADC A,n8", 2, 8),
    info("RST $08", 1, 16),
    branch("RET NC", 1, 8, 20),
    info("POP DE", 1, 12),
    branch("JP NC,a16", 3, 12, 16),
    info("ILLEGAL $D3", 1, 4),
    branch("CALL NC,a16", 3, 12, 24),
    info("PUSH DE", 1, 16),
    info("SUB A,n8", 2, 8),
    info("RST $10", 1, 16),
    branch("RET C", 1, 8, 20),
    info("RETI", 1, 16),
    branch("JP C,a16", 3, 12, 16),
    info("ILLEGAL $DB", 1, 4),
    branch("CALL C,a16", 3, 12, 24),
    info("ILLEGAL $DD", 1, 4),
    info("SBC A,n8", 2, 8),
    info("RST $18", 1, 16),
    info("LDH [a8],A", 2, 12),
    info("POP HL", 1, 12),
    info("LD [C],A", 1, 8),
    info("ILLEGAL $E3", 1, 4),
    info("ILLEGAL $E4", 1, 4),
    info("PUSH HL", 1, 16),
    info("AND A,n8", 2, 8),
    info("RST $20", 1, 16),
    info("ADD SP,e8", 2, 16),
    info("JP HL", 1, 4),
    info("LD [a16],A", 3, 16),
    info("ILLEGAL $EB", 1, 4),
    info("ILLEGAL $EC", 1, 4),
    info("ILLEGAL $ED", 1, 4),
    info("XOR A,n8", 2, 8),
    info("RST $28", 1, 16),
    info("LDH A,[a8]", 2, 12),
    info("POP AF", 1, 12),
    info("LD A,[C]", 1, 8),
    info("DI", 1, 4),
    info("ILLEGAL $F4", 1, 4),
    info("PUSH AF", 1, 16),
    info("OR A,n8", 2, 8),
    info("RST $30", 1, 16),
    info("LD HL,SP+e8", 2, 12),
    info("LD SP,HL", 1, 8),
    info("LD A,[a16]", 3, 16),
    info("EI", 1, 4),
    info("ILLEGAL $FC", 1, 4),
    info("ILLEGAL $FD", 1, 4),
    info("CP A,n8", 2, 8),
    info("RST $38", 1, 16),
];
