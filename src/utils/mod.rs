/*!
# Utilities

Support structures with no graph semantics of their own. Currently this is
only the [`BitSet`] used as the visited-set of every traversal.
*/

mod bitset;

pub use bitset::*;
