/// Debug tracing for tree construction and walks
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;

/// Global flag to control debug output
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

static INIT: Once = Once::new();

fn init_from_env() {
    INIT.call_once(|| {
        if std::env::var_os("SQLTREE_DEBUG").is_some() {
            DEBUG_ENABLED.store(true, Ordering::Relaxed);
        }
    });
}

/// Enable debug output regardless of `SQLTREE_DEBUG`
pub fn enable_debug() {
    init_from_env();
    DEBUG_ENABLED.store(true, Ordering::Relaxed);
}

/// Check if debug output is enabled
pub fn is_debug_enabled() -> bool {
    init_from_env();
    DEBUG_ENABLED.load(Ordering::Relaxed)
}

/// Print debug message only if debug mode is enabled
#[macro_export]
macro_rules! debug_println {
    ($($arg:tt)*) => {
        if $crate::debug::is_debug_enabled() {
            eprintln!("[sqltree] {}", format_args!($($arg)*));
        }
    };
}
