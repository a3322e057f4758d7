extern crate itertools;
extern crate num_integer;
extern crate rand;

#[macro_use]
extern crate log;

#[cfg(test)]
extern crate env_logger;

pub mod poly;

#[cfg(test)]
mod tests;
