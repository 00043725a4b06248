#[macro_use(quickcheck)]
extern crate quickcheck_macros;

mod tree;
