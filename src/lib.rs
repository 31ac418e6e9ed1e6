pub mod address;
mod artifact;
pub mod addresses;
pub mod chain;
pub mod error;
pub mod keys;
pub mod network;
pub mod report;
pub mod script;

pub use address::CounterpartyAddress;
pub use error::ResolveError;
pub use keys::KeyPair;
pub use network::Network;
pub use script::{PlutusVersion, ScriptArtifact};
