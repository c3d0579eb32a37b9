//! summation algorithms

pub(crate) mod partitioned;
pub(crate) mod reduce;
pub(crate) mod sequential;
