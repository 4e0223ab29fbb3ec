pub mod collections;
pub mod storage;
