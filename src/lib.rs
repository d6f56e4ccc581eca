//! Orbitize prior library
//!
//! This library provides the prior distributions used by the orbit fitter, including:
//! - Gaussian, Jeffreys (log-uniform), uniform and sine priors
//! - Summing log-priors over a full parameter vector
//! - Drawing initial walker ensembles for ensemble samplers
//! - Named prior tables loaded from JSON

#![warn(unused_imports)]

/// Commonly used types and functionality re-exported for convenience
pub mod prelude {
    pub use crate::config::*;
    pub use crate::io::*;
    pub use crate::priors::*;
}

/// Prior distributions and their aggregation
pub mod priors {
    pub use crate::priors::aggregate::*;
    pub use crate::priors::distribution::PriorDistribution;
    pub use crate::priors::error::*;
    pub use crate::priors::gaussian::*;
    pub use crate::priors::jeffreys::*;
    pub use crate::priors::linear::*;
    pub use crate::priors::prior::*;
    pub use crate::priors::sin::*;
    pub use crate::priors::uniform::*;

    /// Summing log-priors and drawing walker ensembles
    pub mod aggregate;
    /// The trait every prior implements
    pub mod distribution;
    /// Error types for prior construction and evaluation
    pub mod error;
    pub mod gaussian;
    pub mod jeffreys;
    pub mod linear;
    /// Closed enum over all priors with string parsing
    pub mod prior;
    pub mod sin;
    pub mod uniform;
}

/// Named prior tables
pub mod config;

/// IO functionality
pub mod io;
