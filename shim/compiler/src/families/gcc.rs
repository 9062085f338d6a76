//! GNU toolchain family (`avr-gcc`, `avr32-gcc`).

use core::hint::black_box;
use core::sync::atomic::{compiler_fence, Ordering};

use crate::family::Family;
use crate::isr::IsrKind;
use crate::part::PartConvention;
use crate::register::{StatusWord, SysReg, Word};
use crate::toolchain::Toolchain;

#[cfg(all(target_arch = "avr", not(toolshim_arch = "uc3")))]
use crate::register::sreg;
#[cfg(not(any(target_arch = "avr", toolshim_arch = "uc3")))]
use crate::register::STATUS_REGISTER;

/// GNU toolchain primitives.
#[derive(Debug, Clone, Copy, Default)]
pub struct Gcc;

// UC3 system registers are only reachable through `mfsr`/`mtsr`/`csrf`/`ssrf`,
// which rustc cannot emit for AVR32. The firmware links these from its
// avr32-gcc startup objects.
#[cfg(toolshim_arch = "uc3")]
extern "C" {
    fn toolshim_mfsr(reg: u32) -> u32;
    fn toolshim_mtsr(reg: u32, value: u32);
    fn toolshim_csrf(mask: u32);
    fn toolshim_ssrf(mask: u32);
}

impl Toolchain for Gcc {
    const FAMILY: Family = Family::Gcc;
    const CONSTANT_FOLDING: bool = true;
    const PART_CONVENTION: Option<PartConvention> = Some(PartConvention {
        avr8: "__AVR_",
        xmega: "__AVR_",
        uc3: "__AVR32_",
    });
    const ISR_KIND: IsrKind = IsrKind::Attributes;

    #[inline(always)]
    fn memory_barrier() {
        compiler_fence(Ordering::SeqCst);
    }

    #[inline(always)]
    fn force_pointer_access<T: ?Sized>(target: &mut T) -> &mut T {
        black_box(target)
    }

    #[inline(always)]
    unsafe fn read_sys_register<W: Word>(reg: SysReg<W>) -> W {
        #[cfg(toolshim_arch = "uc3")]
        let value = W::from_raw(unsafe { toolshim_mfsr(reg.id() as u32) });
        #[cfg(not(toolshim_arch = "uc3"))]
        let value = unsafe { reg.as_ptr().read_volatile() };
        value
    }

    #[inline(always)]
    unsafe fn write_sys_register<W: Word>(reg: SysReg<W>, value: W) {
        #[cfg(toolshim_arch = "uc3")]
        unsafe {
            toolshim_mtsr(reg.id() as u32, value.into_raw());
        };
        #[cfg(not(toolshim_arch = "uc3"))]
        unsafe {
            reg.as_ptr().write_volatile(value);
        };
    }

    #[inline(always)]
    unsafe fn clear_status_flag(mask: StatusWord) {
        #[cfg(toolshim_arch = "uc3")]
        unsafe {
            toolshim_csrf(mask);
        };
        #[cfg(all(target_arch = "avr", not(toolshim_arch = "uc3")))]
        unsafe {
            sreg::clear(mask);
        };
        #[cfg(not(any(target_arch = "avr", toolshim_arch = "uc3")))]
        unsafe {
            StatusWord::clear_bits(STATUS_REGISTER.as_ptr(), mask);
        };
    }

    #[inline(always)]
    unsafe fn set_status_flag(mask: StatusWord) {
        #[cfg(toolshim_arch = "uc3")]
        unsafe {
            toolshim_ssrf(mask);
        };
        #[cfg(all(target_arch = "avr", not(toolshim_arch = "uc3")))]
        unsafe {
            sreg::set(mask);
        };
        #[cfg(not(any(target_arch = "avr", toolshim_arch = "uc3")))]
        unsafe {
            StatusWord::set_bits(STATUS_REGISTER.as_ptr(), mask);
        };
    }
}
