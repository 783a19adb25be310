/*!
Graph analyzers.

Every analyzer in this module follows the same shape: it runs eagerly against
a borrowed graph in its constructor and afterwards only answers read-only
queries. Analyzers never mutate the graph and never observe later mutations.
*/

mod bipartite;
mod connectivity;
mod cycle;
mod properties;
mod traversal;

pub use bipartite::*;
pub use connectivity::*;
pub use cycle::*;
pub use properties::*;
pub use traversal::*;
