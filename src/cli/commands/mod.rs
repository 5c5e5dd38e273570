pub mod migrate;
pub mod navigation;
pub mod serve;
pub mod token;
