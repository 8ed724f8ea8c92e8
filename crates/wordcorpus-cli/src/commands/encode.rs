use std::io::Write;

use wordcorpus::TokenType;

use crate::{
    corpus_args::CorpusArgs,
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
};

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    corpus: CorpusArgs,

    /// Keep at most this many indices; <= 0 keeps all.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    max_tokens: i64,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl EncodeArgs {
    /// Run the encode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let pipeline = self
            .corpus
            .pipeline_options()?
            .with_max_tokens(self.max_tokens)
            .init::<u32>();
        let corpus = pipeline.load_reader(self.input.open_reader()?)?;

        let mut writer = self.output.open_writer()?;
        write_indices(&corpus.indices, &mut writer)?;
        writer.flush()?;

        Ok(())
    }
}

/// Write the indices on one space-separated line.
fn write_indices<T: TokenType>(
    indices: &[T],
    writer: &mut dyn Write,
) -> std::io::Result<()> {
    for (idx, index) in indices.iter().enumerate() {
        write!(writer, "{}{}", if idx == 0 { "" } else { " " }, index)?;
    }
    writeln!(writer)
}
