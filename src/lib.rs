pub mod client;
pub mod loaders;
pub mod models;
pub mod presentation;
pub mod storage;
