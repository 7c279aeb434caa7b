//! Exit handling: signal handlers and terminal restore.
//!
//! The form runs in raw mode on the alternate screen. If the process leaves
//! without dropping its guard (a signal, `process::exit`), the atexit hook
//! puts the terminal back.

use std::sync::atomic::{AtomicBool, Ordering};

/// Set while the form owns the terminal.
static TERMINAL_DIRTY: AtomicBool = AtomicBool::new(false);

pub fn set_terminal_dirty(dirty: bool) {
    TERMINAL_DIRTY.store(dirty, Ordering::SeqCst);
}

/// Reset terminal to sane state using termios directly
fn reset_terminal_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
        }
    }
}

extern "C" fn cleanup_on_exit() {
    if !TERMINAL_DIRTY.load(Ordering::SeqCst) {
        return;
    }
    reset_terminal_termios();
    const RESTORE: &[u8] = b"\x1b[0m\x1b[?25h\x1b[?1049l";
    unsafe {
        if libc::isatty(1) == 1 {
            libc::write(1, RESTORE.as_ptr() as *const libc::c_void, RESTORE.len());
        }
    }
}

/// SIGINT/SIGTERM/SIGHUP: exit through libc so the atexit hook runs.
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// Install signal handlers and register atexit cleanup. Call early in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}

/// Keep generated passwords out of core dumps.
#[cfg(target_os = "linux")]
pub fn disable_core_dumps() {
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };
}

#[cfg(not(target_os = "linux"))]
pub fn disable_core_dumps() {}
