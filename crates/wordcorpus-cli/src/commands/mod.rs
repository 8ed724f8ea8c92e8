use crate::commands::{encode::EncodeArgs, vocab::VocabArgs};

pub mod encode;
pub mod vocab;

/// Subcommands for wcorpus
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Build a vocabulary and list its tokens.
    Vocab(VocabArgs),

    /// Encode a corpus into vocabulary indices.
    Encode(EncodeArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Vocab(cmd) => cmd.run(),
            Commands::Encode(cmd) => cmd.run(),
        }
    }
}
