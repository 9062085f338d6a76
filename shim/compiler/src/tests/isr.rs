use core::sync::atomic::{AtomicU32, Ordering};

use crate::isr::MAX_GROUPS;
use crate::{IrqGroup, IrqLevel, IsrBinding, ShimError};

static GENERAL_HITS: AtomicU32 = AtomicU32::new(0);
static TIMER_HITS: AtomicU32 = AtomicU32::new(0);
static USART_HITS: AtomicU32 = AtomicU32::new(0);
static USB_HITS: AtomicU32 = AtomicU32::new(0);

crate::gcc_isr! {
    fn TOOLSHIM_UNIT_GEN_vect() {
        GENERAL_HITS.fetch_add(1, Ordering::SeqCst);
    }
}

crate::gcc_isr! {
    #[inline(never)]
    #[cold]
    pub(crate) fn TOOLSHIM_UNIT_TIMER_vect() {
        TIMER_HITS.fetch_add(1, Ordering::SeqCst);
    }
}

crate::gcc_isr! {
    vector = 42;
    fn TOOLSHIM_UNIT_USB_GEN_vect() {
        USB_HITS.fetch_add(1, Ordering::SeqCst);
    }
}

crate::iar_isr! {
    group = 17, level = 1;
    fn toolshim_unit_usart_handler() {
        USART_HITS.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn gcc_isr_without_attributes() {
    assert_eq!(TOOLSHIM_UNIT_GEN_vect.name(), "TOOLSHIM_UNIT_GEN_vect");
    assert_eq!(TOOLSHIM_UNIT_GEN_vect.symbol(), "TOOLSHIM_UNIT_GEN_vect");
    assert_eq!(TOOLSHIM_UNIT_GEN_vect.binding(), IsrBinding::Attributes(&[]));

    (TOOLSHIM_UNIT_GEN_vect.vector())();
    assert_eq!(GENERAL_HITS.load(Ordering::SeqCst), 1);
}

#[test]
fn gcc_isr_keeps_its_attributes() {
    assert_eq!(
        TOOLSHIM_UNIT_TIMER_vect.binding(),
        IsrBinding::Attributes(&["inline(never)", "cold"])
    );

    let vector = TOOLSHIM_UNIT_TIMER_vect.vector();
    vector();
    vector();
    assert_eq!(TIMER_HITS.load(Ordering::SeqCst), 2);
}

#[test]
fn gcc_isr_with_a_vector_number_exports_vector_symbol() {
    assert_eq!(TOOLSHIM_UNIT_USB_GEN_vect.name(), "TOOLSHIM_UNIT_USB_GEN_vect");
    assert_eq!(TOOLSHIM_UNIT_USB_GEN_vect.symbol(), "__vector_42");
    assert_eq!(TOOLSHIM_UNIT_USB_GEN_vect.binding(), IsrBinding::Attributes(&[]));

    (TOOLSHIM_UNIT_USB_GEN_vect.vector())();
    assert_eq!(USB_HITS.load(Ordering::SeqCst), 1);
}

#[test]
fn iar_isr_records_group_and_level() {
    let config = toolshim_unit_usart_handler.config();
    assert_eq!(config.name, "toolshim_unit_usart_handler");
    assert_eq!(config.symbol, "toolshim_unit_usart_handler");
    assert_eq!(
        config.binding,
        IsrBinding::Grouped {
            group: IrqGroup::new(17),
            level: IrqLevel::Int1,
        }
    );

    (toolshim_unit_usart_handler.vector())();
    assert_eq!(USART_HITS.load(Ordering::SeqCst), 1);
}

#[test]
fn try_grouped_rejects_out_of_range_values() {
    assert_eq!(
        IsrBinding::try_grouped(MAX_GROUPS, 0),
        Err(ShimError::InvalidGroup(MAX_GROUPS))
    );
    assert_eq!(IsrBinding::try_grouped(3, 4), Err(ShimError::InvalidLevel(4)));
    assert_eq!(
        IsrBinding::try_grouped(MAX_GROUPS - 1, 3),
        Ok(IsrBinding::grouped(MAX_GROUPS - 1, 3))
    );
}

#[test]
fn levels_are_ordered() {
    assert!(IrqLevel::Int0 < IrqLevel::Int3);
    assert_eq!(IrqLevel::try_from_raw(2), Some(IrqLevel::Int2));
    assert_eq!(IrqLevel::try_from_raw(7), None);
    assert_eq!(IrqLevel::Int3.raw(), 3);
}

#[test]
#[should_panic(expected = "interrupt level must be in 0..=3")]
fn from_raw_panics_outside_range() {
    IrqLevel::from_raw(core::hint::black_box(4));
}

#[test]
#[should_panic(expected = "interrupt group out of range")]
fn group_panics_outside_range() {
    IrqGroup::new(core::hint::black_box(MAX_GROUPS));
}
