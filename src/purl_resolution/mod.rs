/// Package URL resolution - domain layer
///
/// Pure logic with no I/O: the consumed advisory model and the
/// resolver that walks it.
pub mod domain;
pub mod services;
