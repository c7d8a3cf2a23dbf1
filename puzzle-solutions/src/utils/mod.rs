//! Building blocks shared by the solutions

pub mod jigsaw;
