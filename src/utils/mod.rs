//! Presentation helpers that sit outside the cryptanalysis pipeline.

pub mod banner;
