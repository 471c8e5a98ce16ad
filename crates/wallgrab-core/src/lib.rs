pub mod config;
pub mod logging;

pub mod downloader;
pub mod fetch;
pub mod pipeline;
pub mod pool;
pub mod scrape;
pub mod sequencer;
pub mod storage;
