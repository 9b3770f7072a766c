/// Ports module defining the interfaces between the application core
/// and infrastructure (file system, console, output formats).
pub mod outbound;
