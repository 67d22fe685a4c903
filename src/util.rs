/// Numeric literal conversion.
///
/// Turns the text between two operators into an `f64`, accepting only plain
/// decimal notation so that stray characters are reported instead of being
/// silently interpreted.
pub mod literal;
