//! Console output, enabled by the `console` feature.

/// Installs the colored allocator console.
///
/// Safe to call multiple times - only the first call has effect.
pub fn init_console() {
    allocforge_console::init();
}
