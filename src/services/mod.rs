pub mod artifact;
pub mod emit;
pub mod encoding;
pub mod literal;
pub mod pipeline;
pub mod qa;
pub mod sjis2004;
