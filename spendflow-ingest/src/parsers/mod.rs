//! Statement layout parsers

pub mod line_statement;
