pub mod assembler;
pub mod damage;
pub mod engine;
pub mod moves;
pub mod rng;
pub mod turn_order;

#[cfg(test)]
pub(crate) mod tests;
