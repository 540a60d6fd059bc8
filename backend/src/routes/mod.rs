pub mod outcomes;
pub mod scatter;
pub mod sites;
