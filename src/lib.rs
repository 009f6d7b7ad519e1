pub mod frequency;
pub mod preprocess;
pub mod rndrec;
