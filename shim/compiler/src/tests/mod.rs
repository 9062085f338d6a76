mod isr;

/// Host stand-ins for the IAR register intrinsics.
///
/// Register numbers index `SYSTEM_REGISTERS`; each test uses its own
/// numbers since tests run in parallel.
pub(crate) mod intrinsics {
    use std::sync::atomic::{AtomicU32, Ordering};

    pub static SYSTEM_REGISTERS: [AtomicU32; 16] = [const { AtomicU32::new(0) }; 16];
    pub static STATUS: AtomicU32 = AtomicU32::new(0);

    #[no_mangle]
    extern "C" fn __get_system_register(reg: i32) -> u32 {
        SYSTEM_REGISTERS[reg as usize].load(Ordering::SeqCst)
    }

    #[no_mangle]
    extern "C" fn __set_system_register(reg: i32, value: u32) {
        SYSTEM_REGISTERS[reg as usize].store(value, Ordering::SeqCst);
    }

    #[no_mangle]
    extern "C" fn __clear_status_flag(mask: u32) {
        STATUS.fetch_and(!mask, Ordering::SeqCst);
    }

    #[no_mangle]
    extern "C" fn __set_status_flag(mask: u32) {
        STATUS.fetch_or(mask, Ordering::SeqCst);
    }
}
