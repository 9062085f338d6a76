//! Fallback family, active when no toolchain is recognized.
//!
//! Keeps every facade name defined so that calling code needs no
//! conditional compilation of its own. Nothing here provides ordering or
//! touches hardware: barriers are no-ops, queries answer `false`, register
//! reads return zero and writes are discarded. Build with the `deny`
//! fallback policy to turn uses of the barrier and register primitives into
//! build errors instead.

use crate::family::Family;
use crate::isr::IsrKind;
use crate::part::PartConvention;
use crate::register::{StatusWord, SysReg, Word};
use crate::toolchain::Toolchain;

/// Neutral primitives.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fallback;

impl Toolchain for Fallback {
    const FAMILY: Family = Family::Fallback;
    const CONSTANT_FOLDING: bool = false;
    const PART_CONVENTION: Option<PartConvention> = None;
    const ISR_KIND: IsrKind = IsrKind::Discarded;

    #[inline(always)]
    fn memory_barrier() {}

    #[inline(always)]
    fn force_pointer_access<T: ?Sized>(target: &mut T) -> &mut T {
        target
    }

    #[inline(always)]
    unsafe fn read_sys_register<W: Word>(_reg: SysReg<W>) -> W {
        W::ZERO
    }

    #[inline(always)]
    unsafe fn write_sys_register<W: Word>(_reg: SysReg<W>, _value: W) {}

    #[inline(always)]
    unsafe fn clear_status_flag(_mask: StatusWord) {}

    #[inline(always)]
    unsafe fn set_status_flag(_mask: StatusWord) {}
}
