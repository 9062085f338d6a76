//! Toolchain-independent names for the primitive set.
//!
//! Every macro here expands to [`Active`](crate::Active)'s implementation.
//! Under the `deny` fallback policy the barrier and register macros expand to
//! `compile_error!` instead, so a build with no recognized toolchain fails
//! at each place that relies on them.

/// `true` when the active toolchain can prove `value` is a compile-time
/// constant, `false` otherwise.
///
/// Literals and `const { .. }` blocks are constant by construction; for any
/// other expression the answer is `false`. The expression is type-checked
/// but never evaluated.
///
/// This is narrower than `__builtin_constant_p`: a macro cannot tell a
/// `const` item from a local binding, so `N` or `N + 1` answer `false` even
/// under the GNU family. Wrap such expressions in `const { .. }`, which also
/// turns a non-constant operand into a build error:
///
/// ```rust,ignore
/// const EP0_SIZE: u16 = 64;
/// assert!(toolshim::is_compile_const!(const { EP0_SIZE * 2 }));
/// ```
#[macro_export]
macro_rules! is_compile_const {
    ($value:literal) => {
        <$crate::Active as $crate::Toolchain>::CONSTANT_FOLDING
    };
    (const $value:block) => {{
        let _ = const $value;
        <$crate::Active as $crate::Toolchain>::CONSTANT_FOLDING
    }};
    ($value:expr) => {{
        if false {
            let _ = &$value;
        }
        false
    }};
}

/// Compiler memory barrier. See [`Toolchain::memory_barrier`](crate::Toolchain::memory_barrier).
#[cfg(not(toolshim_strict))]
#[macro_export]
macro_rules! memory_barrier {
    () => {
        <$crate::Active as $crate::Toolchain>::memory_barrier()
    };
}

#[cfg(toolshim_strict)]
#[macro_export]
macro_rules! memory_barrier {
    () => {
        ::core::compile_error!(
            "memory_barrier!: no toolchain recognized and the fallback policy is `deny`"
        )
    };
}

/// Rebinds `target` (a `&mut` binding) so that accesses through it use a
/// pointer register. See
/// [`Toolchain::force_pointer_access`](crate::Toolchain::force_pointer_access).
#[macro_export]
macro_rules! force_pointer_access {
    ($target:ident) => {
        let $target = <$crate::Active as $crate::Toolchain>::force_pointer_access($target);
    };
}

/// `true` when the build targets `part`, spelled per the active toolchain's
/// convention for the active architecture. Evaluated at compile time.
#[macro_export]
macro_rules! is_part_defined {
    ($part:ident) => {{
        const DEFINED: bool = $crate::part::is_part_defined::<$crate::Active>(
            $crate::ACTIVE_ARCH,
            ::core::stringify!($part),
        );
        DEFINED
    }};
}

/// Declares an interrupt service routine with the active toolchain's
/// syntax: [`gcc_isr!`](crate::gcc_isr) or [`iar_isr!`](crate::iar_isr).
/// Under the fallback family the declaration expands to nothing.
#[cfg(toolshim_family = "gcc")]
#[macro_export]
macro_rules! isr {
    ($($declaration:tt)*) => {
        $crate::gcc_isr! { $($declaration)* }
    };
}

#[cfg(toolshim_family = "iar")]
#[macro_export]
macro_rules! isr {
    ($($declaration:tt)*) => {
        $crate::iar_isr! { $($declaration)* }
    };
}

#[cfg(not(any(toolshim_family = "gcc", toolshim_family = "iar")))]
#[macro_export]
macro_rules! isr {
    ($($declaration:tt)*) => {};
}

/// Reads a system register. Must be used inside `unsafe`.
#[cfg(not(toolshim_strict))]
#[macro_export]
macro_rules! read_sys_register {
    ($reg:expr) => {
        <$crate::Active as $crate::Toolchain>::read_sys_register($reg)
    };
}

#[cfg(toolshim_strict)]
#[macro_export]
macro_rules! read_sys_register {
    ($reg:expr) => {
        ::core::compile_error!(
            "read_sys_register!: no toolchain recognized and the fallback policy is `deny`"
        )
    };
}

/// Writes a system register. Must be used inside `unsafe`.
#[cfg(not(toolshim_strict))]
#[macro_export]
macro_rules! write_sys_register {
    ($reg:expr, $value:expr) => {
        <$crate::Active as $crate::Toolchain>::write_sys_register($reg, $value)
    };
}

#[cfg(toolshim_strict)]
#[macro_export]
macro_rules! write_sys_register {
    ($reg:expr, $value:expr) => {
        ::core::compile_error!(
            "write_sys_register!: no toolchain recognized and the fallback policy is `deny`"
        )
    };
}

/// Clears status register bits. Must be used inside `unsafe`.
#[cfg(not(toolshim_strict))]
#[macro_export]
macro_rules! clear_status_flag {
    ($mask:expr) => {
        <$crate::Active as $crate::Toolchain>::clear_status_flag($mask)
    };
}

#[cfg(toolshim_strict)]
#[macro_export]
macro_rules! clear_status_flag {
    ($mask:expr) => {
        ::core::compile_error!(
            "clear_status_flag!: no toolchain recognized and the fallback policy is `deny`"
        )
    };
}

/// Sets status register bits. Must be used inside `unsafe`.
#[cfg(not(toolshim_strict))]
#[macro_export]
macro_rules! set_status_flag {
    ($mask:expr) => {
        <$crate::Active as $crate::Toolchain>::set_status_flag($mask)
    };
}

#[cfg(toolshim_strict)]
#[macro_export]
macro_rules! set_status_flag {
    ($mask:expr) => {
        ::core::compile_error!(
            "set_status_flag!: no toolchain recognized and the fallback policy is `deny`"
        )
    };
}
