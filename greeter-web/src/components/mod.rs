//! UI Components

pub mod footer;

pub use footer::Footer;
