// A single import point for `Arc`.
//
// Error values are the only thing in this crate that needs shared
// ownership. Routing the import through here keeps the door open for a
// `portable-atomic` fallback on targets without pointer-sized atomics,
// without touching the error module itself.
pub(crate) use alloc::sync::Arc;
