pub mod config;
pub mod logging;

pub mod batch;
pub mod download;
pub mod flow;
pub mod form;
pub mod link;
pub mod page;
pub mod render;
pub mod response;
pub mod single;
pub mod transport;
pub mod view;
