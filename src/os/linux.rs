//! Kernel entropy via the `getrandom` system call.

use libc::{c_void, getrandom};

/// Fills the buffer with random bytes from the kernel entropy pool.
///
/// `getrandom` may return fewer bytes than requested (short reads,
/// signal interruption); the call is retried until the buffer is full.
///
/// # Panics
/// Panics if the system call reports an error. There is no sensible
/// recovery when the OS cannot produce entropy for key material.
pub(crate) fn sys_random(buf: &mut [u8]) {
    let mut filled = 0;

    while filled < buf.len() {
        let ret = unsafe {
            getrandom(
                buf[filled..].as_mut_ptr() as *mut c_void,
                buf.len() - filled,
                0,
            )
        };

        if ret < 0 {
            panic!("getrandom() failed");
        }

        filled += ret as usize;
    }
}
