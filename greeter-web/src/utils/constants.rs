//! Application constants

pub const PAGE_TITLE: &str = "ENS dApp";

// Greeting copy
pub const COLLECTION_NAME: &str = "Crypto Devs Punks";
pub const GREETING_PREFIX: &str = "Bienvenid@ a";
pub const DESCRIPTION: &str = "Es una colección NFT para Crypto Devs Punks.";

// Connection control
pub const CONNECT_LABEL: &str = "Conecta tu wallet";
pub const CONNECTED_LABEL: &str = "Wallet conectada";
pub const WRONG_NETWORK_NOTICE: &str = "Por favor cambia tu red a";

// Assets
pub const COLLECTION_IMAGE: &str = "./learnweb3punks.png";

pub const FOOTER_TEXT: &str = "Made with \u{2764} by Crypto Devs";
