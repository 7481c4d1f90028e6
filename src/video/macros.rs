/// Clears pending driver errors, evaluates a GL call, then checks `glGetError`.
///
/// Every error reported after the call is logged together with the stringified
/// call and its source location. The expression value is returned on success,
/// otherwise the first reported error.
///
/// This must be used inside an `unsafe` block, and a GL context must be current.
#[macro_export]
macro_rules! gl_call {
    ($e:expr) => {{
        $crate::video::debug::clear_errors();
        let value = $e;
        $crate::video::debug::log_errors(stringify!($e), file!(), line!()).map(|_| value)
    }};
}
