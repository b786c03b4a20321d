pub mod error;
pub mod validation;
pub mod model;
pub mod normalize;
pub mod directory;
pub mod matching;
pub mod roster;
pub mod lookup;
pub mod ops;
pub mod output;
pub mod cli;
