//! Building blocks shared by the Filaship command-line programs.

pub mod config;
