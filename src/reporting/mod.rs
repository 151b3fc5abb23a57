pub mod assembler;
pub mod formatter;
pub mod html;
pub mod terminal;

pub use assembler::assemble_reports;
