pub mod config;
pub mod error;
pub mod types;

pub use config::Config;
pub use error::{CaseFileError, Result};
pub use types::{
    CaseNarrative, CaseSeed, ChatMessage, ChatRole, Gender, GuiltRecord, PublicCase, SeedSuspect,
    Suspect,
};
