//! Interrupt service routine declaration.
//!
//! The two toolchains disagree on what an ISR declaration needs, and the
//! difference is kept rather than papered over:
//!
//! - [`gcc_isr!`](crate::gcc_isr) takes a name and any number of free-form
//!   attributes; the routine is exported by symbol so that the vector table
//!   picks it up. On AVR8 and XMEGA that symbol is `__vector_N`.
//! - [`iar_isr!`](crate::iar_isr) takes a name plus a mandatory interrupt
//!   `group` and priority `level`; the descriptor is placed in the
//!   `.toolshim.intc` section that the interrupt controller setup walks.
//!
//! Both produce a `static` [`IsrDescriptor`] named after the routine. The
//! routine itself is scoped inside the descriptor's initializer, so regular
//! code cannot call it by name.
//!
//! On AVR the routine uses the `avr-interrupt` ABI, which saves `SREG` and
//! every register it touches and returns with `reti`. Crates declaring
//! routines for AVR need `#![feature(abi_avr_interrupt)]`. Elsewhere, UC3
//! included, the routine is `extern "C"`: the UC3 interrupt controller
//! dispatcher from the startup code calls handlers as plain functions.

use crate::error::{ShimError, ShimResult};

/// Number of interrupt groups of the UC3 interrupt controller.
pub const MAX_GROUPS: u8 = 64;

/// Interrupt priority level, `INT0` lowest to `INT3` highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IrqLevel {
    Int0 = 0,
    Int1 = 1,
    Int2 = 2,
    Int3 = 3,
}

impl IrqLevel {
    /// Converts a raw level, or `None` when it is above 3.
    pub const fn try_from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(IrqLevel::Int0),
            1 => Some(IrqLevel::Int1),
            2 => Some(IrqLevel::Int2),
            3 => Some(IrqLevel::Int3),
            _ => None,
        }
    }

    /// Converts a raw level.
    ///
    /// # Panics
    ///
    /// Panics when `raw` is above 3. Inside a `static` initializer this is a
    /// build failure.
    pub const fn from_raw(raw: u8) -> Self {
        match Self::try_from_raw(raw) {
            Some(level) => level,
            None => panic!("interrupt level must be in 0..=3"),
        }
    }

    pub const fn raw(self) -> u8 {
        self as u8
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for IrqLevel {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "INT{}", self.raw());
    }
}

/// Interrupt group of the interrupt controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct IrqGroup(u8);

impl IrqGroup {
    /// # Panics
    ///
    /// Panics when `raw` is not below [`MAX_GROUPS`].
    pub const fn new(raw: u8) -> Self {
        assert!(raw < MAX_GROUPS, "interrupt group out of range");
        IrqGroup(raw)
    }

    pub const fn raw(self) -> u8 {
        self.0
    }
}

/// How a routine is bound to its interrupt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IsrBinding {
    /// Interrupt-controller group and level (IAR).
    Grouped { group: IrqGroup, level: IrqLevel },
    /// Free-form attributes applied to the routine (GCC).
    Attributes(&'static [&'static str]),
}

impl IsrBinding {
    /// Group/level binding checked at compile time when used in a `const` or
    /// `static` initializer.
    pub const fn grouped(group: u8, level: u8) -> Self {
        IsrBinding::Grouped {
            group: IrqGroup::new(group),
            level: IrqLevel::from_raw(level),
        }
    }

    /// Group/level binding checked at run time.
    pub fn try_grouped(group: u8, level: u8) -> ShimResult<Self> {
        if group >= MAX_GROUPS {
            return Err(ShimError::InvalidGroup(group));
        }
        let level = IrqLevel::try_from_raw(level).ok_or(ShimError::InvalidLevel(level))?;
        Ok(IsrBinding::Grouped {
            group: IrqGroup(group),
            level,
        })
    }

    pub const fn attributes(attributes: &'static [&'static str]) -> Self {
        IsrBinding::Attributes(attributes)
    }
}

/// Entry point of an interrupt service routine on this target.
#[cfg(target_arch = "avr")]
pub type Vector = extern "avr-interrupt" fn();
/// Entry point of an interrupt service routine on this target.
#[cfg(not(target_arch = "avr"))]
pub type Vector = extern "C" fn();

/// Declared interrupt service routine: its name and binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsrConfig {
    pub name: &'static str,
    /// Linker symbol the routine is exported under.
    pub symbol: &'static str,
    pub binding: IsrBinding,
}

/// Shape of a family's ISR declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IsrKind {
    /// Name plus free-form attribute list.
    Attributes,
    /// Name plus mandatory group and level.
    Grouped,
    /// Declarations expand to nothing.
    Discarded,
}

/// Descriptor emitted by the ISR macros for every declared routine.
#[derive(Debug, Clone, Copy)]
pub struct IsrDescriptor {
    config: IsrConfig,
    vector: Vector,
}

impl IsrDescriptor {
    pub const fn new(config: IsrConfig, vector: Vector) -> Self {
        Self { config, vector }
    }

    pub const fn config(&self) -> &IsrConfig {
        &self.config
    }

    pub const fn name(&self) -> &'static str {
        self.config.name
    }

    pub const fn symbol(&self) -> &'static str {
        self.config.symbol
    }

    pub const fn binding(&self) -> IsrBinding {
        self.config.binding
    }

    /// Entry point to install in the vector table or interrupt controller.
    pub fn vector(&self) -> Vector {
        self.vector
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! __isr_routine {
    (#[$link:meta] $(#[$attr:meta])* fn $name:ident() $body:block) => {
        #[cfg(target_arch = "avr")]
        #[$link]
        #[allow(non_snake_case)]
        $(#[$attr])*
        extern "avr-interrupt" fn $name() $body

        #[cfg(not(target_arch = "avr"))]
        #[$link]
        #[allow(non_snake_case)]
        $(#[$attr])*
        extern "C" fn $name() $body
    };
}

/// Declares an interrupt service routine the GCC way.
///
/// Takes zero or more attributes and a `fn NAME() { .. }` item with no
/// arguments and no return value. A `static NAME: IsrDescriptor` is defined
/// in its place.
///
/// The AVR8 and XMEGA vector tables only pick up `__vector_N` symbols. Give
/// the vector number with a leading `vector = N;` and the routine is exported
/// as `__vector_N`; without it the routine is exported unmangled as `NAME`,
/// which is what UC3 interrupt controller registration and hand-written
/// vector tables expect.
///
/// ```rust,ignore
/// toolshim::gcc_isr! {
///     vector = 10;
///     #[inline(never)]
///     pub fn USB_GEN_vect() {
///         usb_general_event();
///     }
/// }
/// ```
#[macro_export]
macro_rules! gcc_isr {
    (vector = $vector:literal; $(#[$attr:meta])* $vis:vis fn $name:ident() $body:block) => {
        #[allow(non_upper_case_globals)]
        $vis static $name: $crate::isr::IsrDescriptor = {
            $crate::__isr_routine! {
                #[export_name = ::core::concat!("__vector_", $vector)]
                $(#[$attr])*
                fn $name() $body
            }

            $crate::isr::IsrDescriptor::new(
                $crate::isr::IsrConfig {
                    name: ::core::stringify!($name),
                    symbol: ::core::concat!("__vector_", $vector),
                    binding: $crate::isr::IsrBinding::attributes(&[$(::core::stringify!($attr)),*]),
                },
                $name,
            )
        };
    };
    ($(#[$attr:meta])* $vis:vis fn $name:ident() $body:block) => {
        #[allow(non_upper_case_globals)]
        $vis static $name: $crate::isr::IsrDescriptor = {
            $crate::__isr_routine! {
                #[no_mangle]
                $(#[$attr])*
                fn $name() $body
            }

            $crate::isr::IsrDescriptor::new(
                $crate::isr::IsrConfig {
                    name: ::core::stringify!($name),
                    symbol: ::core::stringify!($name),
                    binding: $crate::isr::IsrBinding::attributes(&[$(::core::stringify!($attr)),*]),
                },
                $name,
            )
        };
    };
}

/// Declares an interrupt service routine the IAR way.
///
/// The interrupt `group` (below [`MAX_GROUPS`]) and `level` (`0..=3`) are
/// mandatory and checked at compile time. No attributes are accepted.
///
/// Unlike [`isr!`](crate::isr), this macro expands in every build, not only
/// when the IAR family is active: the routine is exported unmangled and the
/// descriptor is placed in `.toolshim.intc` regardless. Use `isr!` for
/// declarations that must vanish under other families.
///
/// ```rust,ignore
/// toolshim::iar_isr! {
///     group = 17, level = 1;
///     pub fn usb_general() {
///         usb_general_event();
///     }
/// }
/// ```
#[macro_export]
macro_rules! iar_isr {
    (group = $group:expr, level = $level:expr; $vis:vis fn $name:ident() $body:block) => {
        #[allow(non_upper_case_globals)]
        #[used]
        #[cfg_attr(target_os = "none", link_section = ".toolshim.intc")]
        $vis static $name: $crate::isr::IsrDescriptor = {
            $crate::__isr_routine! {
                #[no_mangle]
                fn $name() $body
            }

            $crate::isr::IsrDescriptor::new(
                $crate::isr::IsrConfig {
                    name: ::core::stringify!($name),
                    symbol: ::core::stringify!($name),
                    binding: $crate::isr::IsrBinding::grouped($group, $level),
                },
                $name,
            )
        };
    };
}
