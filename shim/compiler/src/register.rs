//! System register handles and the indivisible read-modify-write used by the
//! status flag primitives.
//!
//! A [`SysReg`] identifier is a data-space address on AVR8 and XMEGA, where
//! the I/O registers are memory mapped, and a system register number on UC3,
//! where they are reached through `mfsr`/`mtsr`.

use core::fmt;
use core::marker::PhantomData;
use core::ops::{BitAnd, BitOr, Not};

mod sealed {
    pub trait Sealed {}
}

/// Register word. Implemented for `u8`, `u16` and `u32`.
pub trait Word:
    sealed::Sealed
    + Copy
    + Eq
    + fmt::Debug
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + Not<Output = Self>
{
    const ZERO: Self;

    /// Widens to the 32-bit value the intrinsic interfaces take.
    fn into_raw(self) -> u32;

    /// Truncates a 32-bit intrinsic value to this width.
    fn from_raw(raw: u32) -> Self;

    /// Clears `mask` in `*ptr` as one indivisible read-modify-write.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for volatile reads and writes and suitably aligned.
    unsafe fn clear_bits(ptr: *mut Self, mask: Self);

    /// Sets `mask` in `*ptr` as one indivisible read-modify-write.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for volatile reads and writes and suitably aligned.
    unsafe fn set_bits(ptr: *mut Self, mask: Self);
}

macro_rules! impl_word {
    ($ty:ty, $atomic:ident, $width:tt) => {
        impl sealed::Sealed for $ty {}

        impl Word for $ty {
            const ZERO: Self = 0;

            #[inline(always)]
            fn into_raw(self) -> u32 {
                self as u32
            }

            #[inline(always)]
            fn from_raw(raw: u32) -> Self {
                raw as $ty
            }

            #[inline(always)]
            unsafe fn clear_bits(ptr: *mut Self, mask: Self) {
                #[cfg(target_has_atomic = $width)]
                unsafe {
                    core::sync::atomic::$atomic::from_ptr(ptr)
                        .fetch_and(!mask, core::sync::atomic::Ordering::SeqCst);
                };
                #[cfg(not(target_has_atomic = $width))]
                critical_section::with(|_| unsafe {
                    ptr.write_volatile(ptr.read_volatile() & !mask);
                });
            }

            #[inline(always)]
            unsafe fn set_bits(ptr: *mut Self, mask: Self) {
                #[cfg(target_has_atomic = $width)]
                unsafe {
                    core::sync::atomic::$atomic::from_ptr(ptr)
                        .fetch_or(mask, core::sync::atomic::Ordering::SeqCst);
                };
                #[cfg(not(target_has_atomic = $width))]
                critical_section::with(|_| unsafe {
                    ptr.write_volatile(ptr.read_volatile() | mask);
                });
            }
        }
    };
}

impl_word!(u8, AtomicU8, "8");
impl_word!(u16, AtomicU16, "16");
impl_word!(u32, AtomicU32, "32");

/// Identifier of a system register holding a `W`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SysReg<W> {
    id: usize,
    _word: PhantomData<W>,
}

impl<W: Word> SysReg<W> {
    /// Creates a register handle from its identifier.
    pub const fn new(id: usize) -> Self {
        Self {
            id,
            _word: PhantomData,
        }
    }

    /// Creates a memory-mapped register handle from a pointer.
    pub fn from_ptr(ptr: *mut W) -> Self {
        Self::new(ptr as usize)
    }

    /// Raw identifier.
    pub const fn id(self) -> usize {
        self.id
    }

    /// The identifier as a data-space pointer.
    pub fn as_ptr(self) -> *mut W {
        self.id as *mut W
    }
}

/// Width of the status register.
#[cfg(not(toolshim_arch = "uc3"))]
pub type StatusWord = u8;
/// Width of the status register.
#[cfg(toolshim_arch = "uc3")]
pub type StatusWord = u32;

/// `SREG`: I/O address `0x3F`, data address `0x5F`.
#[cfg(not(any(toolshim_arch = "xmega", toolshim_arch = "uc3")))]
pub const STATUS_REGISTER: SysReg<StatusWord> = SysReg::new(0x5F);
/// `SREG`: XMEGA maps I/O space 1:1 into data space, so data address `0x3F`.
#[cfg(toolshim_arch = "xmega")]
pub const STATUS_REGISTER: SysReg<StatusWord> = SysReg::new(0x3F);
/// `SR`: system register 0.
#[cfg(toolshim_arch = "uc3")]
pub const STATUS_REGISTER: SysReg<StatusWord> = SysReg::new(0x0000);

/// `SREG` updates on AVR.
///
/// [`Word::clear_bits`] falls back to a critical section on AVR, and AVR
/// critical sections save `SREG` on entry and restore the I bit on exit, which
/// would undo a clear of I. `in`/`and`/`out` needs no critical section: an
/// interrupt taken between `in` and `out` saves `SREG` on entry and restores
/// it before `reti`, so the value read is still current when written back.
#[cfg(target_arch = "avr")]
pub(crate) mod sreg {
    use core::arch::asm;

    #[inline(always)]
    pub(crate) unsafe fn clear(mask: u8) {
        unsafe {
            asm!(
                "in {tmp}, 0x3F",
                "and {tmp}, {keep}",
                "out 0x3F, {tmp}",
                tmp = out(reg) _,
                keep = in(reg) !mask,
            );
        }
    }

    #[inline(always)]
    pub(crate) unsafe fn set(mask: u8) {
        unsafe {
            asm!(
                "in {tmp}, 0x3F",
                "or {tmp}, {mask}",
                "out 0x3F, {tmp}",
                tmp = out(reg) _,
                mask = in(reg) mask,
            );
        }
    }
}
