//! Lazy enumeration of combinatorial spaces: combinations, permutations, power sets, base-_N_
//! sequences and cartesian products, produced one result at a time without materialising the
//! space. Also counts those spaces exactly, and converts integers to the factorial number system.
//!
//! Every enumerator is an [Enumerator](enumerator::Enumerator) over an explicit-stack walk.
//! Results are either views of a single reused buffer or independent copies, as selected by
//! [OutputMode](output::OutputMode).

pub mod arrays;
pub mod base_n;
pub mod cartesian;
pub mod comb;
pub mod count;
pub mod enumerator;
pub mod factoradic;
pub mod factorial;
pub mod output;
pub mod perm;
pub mod power;
pub mod print;

#[cfg(test)]
pub(crate) mod testing;

#[doc = include_str!("../README.md")]
#[cfg(doc)]
fn readme() {}
