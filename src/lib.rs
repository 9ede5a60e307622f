//! # inequality-rs
//!
//! $$
//! G=\sum_{i=1}^{n-1}\left(L_i\,F_{i-1}-F_i\,L_{i-1}\right)
//! $$
//!
//! Weighted distributional statistics for household survey samples:
//! empirical weighted pdf/cdf, population partitions by value or by
//! population share, the Gini coefficient with its Lorenz curve, and
//! grouped weighted averages.
//!
//! Every routine is a pure function over in-memory arrays. Sampling
//! weights are normalized internally, so replicate weights that do not
//! add up to one are handled. Composition of the pieces (which variable
//! to sort by, which partitions to build, what to do with the results)
//! belongs to the caller; independent computations can safely run on
//! separate threads.

pub mod distribution;
pub mod error;
pub mod table;

pub use distribution::argsort;
pub use distribution::density::WeightedDensity;
pub use distribution::gini::GiniFormula;
pub use distribution::gini::GiniLorenz;
pub use distribution::partition::Partition;
pub use error::StatsError;
pub use table::frame::Table;
pub use table::sorted::SortedView;
