//! The primitive set every toolchain family supplies.

use crate::family::Family;
use crate::isr::IsrKind;
use crate::part::PartConvention;
use crate::register::{StatusWord, SysReg, Word};

/// Compiler-specific primitives.
///
/// One zero-sized type per [`Family`] implements this trait and
/// [`crate::Active`] names the one chosen for the build. Every method is
/// `#[inline(always)]` in every implementation so that dispatch disappears
/// before code generation.
///
/// Interrupt service routine declaration is not a method: its shape differs
/// between families, see [`crate::isr`].
pub trait Toolchain {
    /// Family this implementation belongs to.
    const FAMILY: Family;

    /// Whether the family can prove an expression constant at compile time.
    ///
    /// Drives [`is_compile_const!`](crate::is_compile_const). Families that
    /// cannot prove constantness answer `false`.
    const CONSTANT_FOLDING: bool;

    /// Naming convention of the part symbols the compiler predefines, or
    /// `None` when part queries must always answer `false`.
    const PART_CONVENTION: Option<PartConvention>;

    /// Shape of this family's interrupt service routine declarations.
    const ISR_KIND: IsrKind;

    /// Forbids the compiler from moving memory accesses across this point in
    /// either direction, or caching memory values in registers across it.
    fn memory_barrier();

    /// Hides the address of `target` from the optimizer so that member
    /// accesses go through a pointer register rather than direct,
    /// offset-addressed loads and stores.
    fn force_pointer_access<T: ?Sized>(target: &mut T) -> &mut T;

    /// Reads a system register.
    ///
    /// # Safety
    ///
    /// `reg` must identify a readable system register of the target.
    unsafe fn read_sys_register<W: Word>(reg: SysReg<W>) -> W;

    /// Writes a system register.
    ///
    /// # Safety
    ///
    /// `reg` must identify a writable system register of the target, and the
    /// write must not break invariants the rest of the program relies on.
    unsafe fn write_sys_register<W: Word>(reg: SysReg<W>, value: W);

    /// Clears exactly the bits of `mask` in the status register, with no
    /// other instruction interleaved with the read-modify-write.
    ///
    /// # Safety
    ///
    /// Status bits change machine-wide behaviour (interrupt enable, for
    /// instance); the caller is responsible for the consequences.
    unsafe fn clear_status_flag(mask: StatusWord);

    /// Sets exactly the bits of `mask` in the status register, with no other
    /// instruction interleaved with the read-modify-write.
    ///
    /// # Safety
    ///
    /// See [`Toolchain::clear_status_flag`].
    unsafe fn set_status_flag(mask: StatusWord);
}
