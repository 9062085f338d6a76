#![no_std]

//! # toolshim
//!
//! One set of names for the compiler-specific primitives that AVR8, XMEGA and
//! UC3 firmware needs, resolved to the active toolchain at build time.
//!
//! | Primitive | Name |
//! |---|---|
//! | Compiler memory barrier | [`memory_barrier!`] |
//! | Constant-folding query | [`is_compile_const!`] |
//! | Pointer-register access hint | [`force_pointer_access!`] |
//! | Target part query | [`is_part_defined!`] |
//! | Interrupt service routine | [`isr!`], [`gcc_isr!`], [`iar_isr!`] |
//! | System register access | [`read_sys_register!`], [`write_sys_register!`] |
//! | Status flag update | [`clear_status_flag!`], [`set_status_flag!`] |
//!
//! ## Selecting a toolchain
//!
//! Enable exactly one of the `gcc` (default) or `iar` features, or set
//! `TOOLSHIM_TOOLCHAIN` to the compiler identity (`avr-gcc`, `iccavr32`, ...).
//! The architecture comes from `arch-avr8` (default), `arch-xmega` or
//! `arch-uc3`, or `TOOLSHIM_ARCH`. The target part is passed through
//! `TOOLSHIM_PART`.
//!
//! Two different toolchains, or two different architectures, fail the build.
//! With no recognized toolchain the fallback family is used: every name stays
//! defined, barriers do nothing and queries answer `false`. Enable
//! `strict-fallback` (or set `TOOLSHIM_FALLBACK=deny`) to turn each use of a
//! barrier or register primitive into a build error instead.
//!
//! ## Example
//!
//! ```
//! use toolshim::{Family, ACTIVE_FAMILY};
//!
//! toolshim::gcc_isr! {
//!     fn USB_COM_vect() {
//!         // endpoint servicing
//!     }
//! }
//!
//! assert_eq!(USB_COM_vect.name(), "USB_COM_vect");
//!
//! let fold = toolshim::is_compile_const!(64);
//! assert_eq!(fold, ACTIVE_FAMILY == Family::Gcc);
//! ```
//!
//! On AVR8 and XMEGA give the vector number so the routine lands in the
//! vector table as `__vector_N`:
//!
//! ```
//! toolshim::gcc_isr! {
//!     vector = 10;
//!     fn USB_GEN_vect() {}
//! }
//!
//! assert_eq!(USB_GEN_vect.symbol(), "__vector_10");
//! ```
//!
//! An IAR routine cannot be declared without its group and level:
//!
//! ```compile_fail
//! toolshim::iar_isr! {
//!     fn usb_general() {}
//! }
//! ```
//!
//! Out-of-range values are caught while the descriptor is built:
//!
//! ```compile_fail
//! toolshim::iar_isr! {
//!     group = 3, level = 4;
//!     fn usb_general() {}
//! }
//! ```
//!
//! ## Strict fallback
//!
//! With `strict-fallback` and no toolchain feature, every use of a barrier or
//! register primitive is a build error naming the primitive. In any other
//! build the same uses compile.
//!
#![cfg_attr(all(feature = "strict-fallback", not(any(feature = "gcc", feature = "iar"))), doc = "```compile_fail")]
#![cfg_attr(not(all(feature = "strict-fallback", not(any(feature = "gcc", feature = "iar")))), doc = "```no_run")]
//! toolshim::memory_barrier!();
//! ```
//!
#![cfg_attr(all(feature = "strict-fallback", not(any(feature = "gcc", feature = "iar"))), doc = "```compile_fail")]
#![cfg_attr(not(all(feature = "strict-fallback", not(any(feature = "gcc", feature = "iar")))), doc = "```no_run")]
//! let _value: u8 = unsafe { toolshim::read_sys_register!(toolshim::SysReg::<u8>::new(0x25)) };
//! ```
//!
#![cfg_attr(all(feature = "strict-fallback", not(any(feature = "gcc", feature = "iar"))), doc = "```compile_fail")]
#![cfg_attr(not(all(feature = "strict-fallback", not(any(feature = "gcc", feature = "iar")))), doc = "```no_run")]
//! unsafe { toolshim::write_sys_register!(toolshim::SysReg::<u8>::new(0x25), 0x20) };
//! ```
//!
#![cfg_attr(all(feature = "strict-fallback", not(any(feature = "gcc", feature = "iar"))), doc = "```compile_fail")]
#![cfg_attr(not(all(feature = "strict-fallback", not(any(feature = "gcc", feature = "iar")))), doc = "```no_run")]
//! unsafe { toolshim::clear_status_flag!(0x80) };
//! ```
//!
#![cfg_attr(all(feature = "strict-fallback", not(any(feature = "gcc", feature = "iar"))), doc = "```compile_fail")]
#![cfg_attr(not(all(feature = "strict-fallback", not(any(feature = "gcc", feature = "iar")))), doc = "```no_run")]
//! unsafe { toolshim::set_status_flag!(0x80) };
//! ```

pub use toolshim_compiler::{
    clear_status_flag, force_pointer_access, gcc_isr, iar_isr, is_compile_const,
    is_part_defined, isr, memory_barrier, read_sys_register, set_status_flag,
    write_sys_register,
};

pub use toolshim_compiler::{families, part, register};
pub use toolshim_compiler::{
    Active, Arch, Family, IrqGroup, IrqLevel, IsrBinding, IsrConfig, IsrDescriptor, IsrKind,
    PartConvention, PartSymbol, ShimError, ShimResult, StatusWord, SysReg, Toolchain, Vector, Word,
    ACTIVE_ARCH, ACTIVE_FAMILY, STATUS_REGISTER,
};

/// toolshim version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
