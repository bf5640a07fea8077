pub mod file;
pub mod format;
pub mod message;
pub mod navigation;
pub mod pagination;
pub mod storage;
