#![allow(missing_docs)]

use std::sync::Arc;

use wordcorpus::{
    CorpusEncoderOptions,
    CorpusPipelineOptions,
    TokenSource,
    TokenizeMode,
    Vocab,
    VocabOptions,
    WordcorpusError,
    read_lines,
    tokenize,
    tokenize_with_mode_name,
};

const SAMPLES: &[&str] = &[
    "The Time Machine, by H. G. Wells [1898]",
    "",
    "I",
    "",
    "The Time Traveller (for so it will be convenient to speak of him)",
    "was expounding a recondite matter to us. His grey eyes shone and",
    "twinkled, and his usually pale face was flushed and animated. The",
];

fn sample_text() -> String {
    SAMPLES.join("\n")
}

#[test]
fn word_tokens_keep_empty_lines() {
    let lines = ["the time machine", ""];
    assert_eq!(
        tokenize(&lines, TokenizeMode::Word),
        vec![vec!["the", "time", "machine"], vec![]]
    );
}

#[test]
fn unknown_mode_is_reported() {
    let lines = ["the time machine"];
    let err = tokenize_with_mode_name(&lines, "sentence").unwrap_err();
    assert!(matches!(err, WordcorpusError::InvalidArgument(_)));
}

#[test]
fn small_vocab_scenarios() {
    let tokens = vec![vec!["a", "a", "b"]];
    let vocab: Vocab = VocabOptions::default()
        .build(TokenSource::Lines(&tokens))
        .unwrap();
    assert_eq!(vocab.len(), 3);
    assert_eq!(vocab.lookup_index("a"), 1);
    assert_eq!(vocab.lookup_index("z"), 0);

    let tokens = vec![vec!["a", "b"]];
    let vocab: Vocab = VocabOptions::default()
        .with_min_freq(2)
        .build(TokenSource::Lines(&tokens))
        .unwrap();
    assert_eq!(vocab.len(), 1);
}

#[test]
fn flat_and_line_sources_agree() {
    let text = read_lines(sample_text().as_bytes()).unwrap();
    let lines = tokenize(&text, TokenizeMode::Word);
    let flat: Vec<String> = lines.iter().flatten().cloned().collect();

    let options = VocabOptions::default().with_reserved_tokens(["<pad>"]);
    let from_lines: Vocab<u32> = options.build(TokenSource::Lines(&lines)).unwrap();
    let from_flat: Vocab<u32> = options.build(TokenSource::Flat(&flat[..])).unwrap();

    assert_eq!(from_lines, from_flat);
}

#[test]
fn truncated_encoding_discards_line_boundaries() {
    let lines = vec![vec!["a", "b"], vec!["c"]];
    let vocab: Vocab = VocabOptions::default()
        .build(TokenSource::Lines(&lines))
        .unwrap();

    let corpus = CorpusEncoderOptions::from_max_tokens(2)
        .init(Arc::new(vocab))
        .encode_lines(&lines);

    assert_eq!(corpus.indices.len(), 2);
    assert_eq!(
        corpus.vocab.try_lookup_tokens(&corpus.indices).unwrap(),
        vec!["a", "b"]
    );
}

#[test]
fn pipeline_decodes_back_to_text() {
    let text = sample_text();

    let corpus = CorpusPipelineOptions::default()
        .with_mode(TokenizeMode::Word)
        .init::<u32>()
        .load_reader(text.as_bytes())
        .unwrap();

    let expected: Vec<String> = read_lines(text.as_bytes())
        .unwrap()
        .into_iter()
        .filter(|line| !line.is_empty())
        .collect();

    let decoded = corpus
        .vocab
        .try_lookup_tokens(&corpus.indices)
        .unwrap()
        .join(" ");

    assert_eq!(decoded, expected.join(" "));

    // "the" and "and" are tied; "the" is seen first.
    let freqs = corpus.vocab.token_freqs();
    assert_eq!((freqs[0].0.as_str(), freqs[0].1), ("the", 3));
    assert_eq!((freqs[1].0.as_str(), freqs[1].1), ("and", 3));
    assert_eq!(corpus.vocab.lookup_index("the"), 1);
    assert_eq!(corpus.vocab.lookup_index("and"), 2);
}
