//! Page modules - the greeting page only

pub mod home;

pub use home::HomePage;
