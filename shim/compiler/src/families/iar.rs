//! IAR toolchain family (IAR Embedded Workbench for AVR32).

use core::sync::atomic::{compiler_fence, Ordering};

use crate::family::Family;
use crate::isr::IsrKind;
use crate::part::PartConvention;
use crate::register::{StatusWord, SysReg, Word};
use crate::toolchain::Toolchain;

/// IAR toolchain primitives.
///
/// Register access goes through the IAR intrinsics, linked in from an object
/// built with the IAR compiler. IAR offers no constant-folding query and no
/// pointer-register hint, so those answer `false` and do nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Iar;

extern "C" {
    fn __get_system_register(reg: i32) -> u32;
    fn __set_system_register(reg: i32, value: u32);
    fn __clear_status_flag(mask: u32);
    fn __set_status_flag(mask: u32);
}

impl Toolchain for Iar {
    const FAMILY: Family = Family::Iar;
    const CONSTANT_FOLDING: bool = false;
    const PART_CONVENTION: Option<PartConvention> = Some(PartConvention {
        avr8: "__AT",
        xmega: "__AT",
        uc3: "__AT32",
    });
    const ISR_KIND: IsrKind = IsrKind::Grouped;

    #[inline(always)]
    fn memory_barrier() {
        compiler_fence(Ordering::SeqCst);
    }

    #[inline(always)]
    fn force_pointer_access<T: ?Sized>(target: &mut T) -> &mut T {
        target
    }

    #[inline(always)]
    unsafe fn read_sys_register<W: Word>(reg: SysReg<W>) -> W {
        W::from_raw(unsafe { __get_system_register(reg.id() as i32) })
    }

    #[inline(always)]
    unsafe fn write_sys_register<W: Word>(reg: SysReg<W>, value: W) {
        unsafe { __set_system_register(reg.id() as i32, value.into_raw()) }
    }

    #[inline(always)]
    unsafe fn clear_status_flag(mask: StatusWord) {
        unsafe { __clear_status_flag(mask.into_raw()) }
    }

    #[inline(always)]
    unsafe fn set_status_flag(mask: StatusWord) {
        unsafe { __set_status_flag(mask.into_raw()) }
    }
}
