/// # Process Introspection
///
/// Reads what `GET /api/info` reports about the running process: the runtime
/// version, the OS and CPU architecture, and a memory snapshot taken from the
/// operating system.
///
/// Failures surface as [`ApiError`] and end up as a generic 500.
///
/// [`ApiError`]: crate::error::ApiError
pub mod process;
