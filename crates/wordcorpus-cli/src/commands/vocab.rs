use std::{collections::HashMap, io::Write};

use wordcorpus::{EncodedCorpus, TokenType};

use crate::{
    corpus_args::CorpusArgs,
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
};

/// Args for the vocab command.
#[derive(clap::Args, Debug)]
pub struct VocabArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    corpus: CorpusArgs,

    /// List only the first N indices; 0 lists all.
    #[arg(long, default_value_t = 0)]
    top: usize,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl VocabArgs {
    /// Run the vocab command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let pipeline = self.corpus.pipeline_options()?.init::<u32>();
        let corpus = pipeline.load_reader(self.input.open_reader()?)?;

        let mut writer = self.output.open_writer()?;
        write_vocab_listing(&corpus, self.top, &mut writer)?;
        writer.flush()?;

        Ok(())
    }
}

/// Write one `index\ttoken\tcount` line per vocab index.
fn write_vocab_listing<T: TokenType>(
    corpus: &EncodedCorpus<T>,
    top: usize,
    writer: &mut dyn Write,
) -> std::io::Result<()> {
    let vocab = &corpus.vocab;
    let counts: HashMap<&str, usize> = vocab
        .token_freqs()
        .iter()
        .map(|(token, count)| (token.as_str(), *count))
        .collect();

    let limit = if top == 0 { vocab.len() } else { top };
    for (idx, token) in vocab.tokens().enumerate().take(limit) {
        let count = counts.get(token).copied().unwrap_or_default();
        writeln!(writer, "{idx}\t{token}\t{count}")?;
    }
    Ok(())
}
