//! Unit test modules.

mod catalog_test;
mod macros_test;
mod meals_test;
