pub mod printer;
pub mod raw;
pub mod ring;
