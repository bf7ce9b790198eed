pub mod formatter;

pub use formatter::WalkFormatter;
