use wordcorpus::{CorpusPipelineOptions, TokenizeMode, VocabOptions};

/// Corpus tokenizing and vocab arg group.
#[derive(clap::Args, Debug)]
pub struct CorpusArgs {
    /// Token unit: "word" or "char".
    #[arg(long, default_value = "char")]
    pub mode: String,

    /// Minimum token count to receive an index.
    #[arg(long, default_value_t = 0)]
    pub min_freq: usize,

    /// Reserved tokens, placed directly after the unknown token.
    #[arg(long = "reserved")]
    pub reserved_tokens: Vec<String>,

    /// The unknown token.
    #[arg(long, default_value = wordcorpus::vocab::DEFAULT_UNK_TOKEN)]
    pub unk_token: String,
}

impl CorpusArgs {
    /// Build pipeline options from the args.
    pub fn pipeline_options(&self) -> wordcorpus::WCResult<CorpusPipelineOptions> {
        let mode = TokenizeMode::try_from_name(&self.mode)?;

        let vocab = VocabOptions::default()
            .with_min_freq(self.min_freq)
            .with_reserved_tokens(&self.reserved_tokens)
            .with_unk_token(&self.unk_token);

        Ok(CorpusPipelineOptions::default()
            .with_mode(mode)
            .with_vocab(vocab))
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use wordcorpus::WordcorpusError;

    use super::*;

    #[derive(clap::Parser, Debug)]
    struct TestArgs {
        #[clap(flatten)]
        corpus: CorpusArgs,
    }

    #[test]
    fn test_pipeline_options() {
        let args = TestArgs::parse_from([
            "t",
            "--mode",
            "word",
            "--min-freq",
            "2",
            "--reserved",
            "<pad>",
            "--reserved",
            "<eos>",
        ]);

        let options = args.corpus.pipeline_options().unwrap();
        assert_eq!(options.mode, TokenizeMode::Word);
        assert_eq!(options.vocab.min_freq, 2);
        assert_eq!(options.vocab.reserved_tokens, vec!["<pad>", "<eos>"]);
        assert_eq!(options.vocab.unk_token, "<unk>");
    }

    #[test]
    fn test_unknown_mode() {
        let args = TestArgs::parse_from(["t", "--mode", "sentence"]);
        let err = args.corpus.pipeline_options().unwrap_err();
        assert!(matches!(err, WordcorpusError::InvalidArgument(_)));
    }
}
