//! clickflat normalizes directories of NDJSON click-stream event logs into
//! flat ten-column CSV tables, one artifact per input file.

pub mod extract;
pub mod normalize;
pub mod pipeline;
