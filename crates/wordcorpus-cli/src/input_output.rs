use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
};

fn squash_standard_io(path: &Option<String>) -> Option<&str> {
    match path.as_deref() {
        Some("-") | None => None,
        Some(p) => Some(p),
    }
}

/// Input argument group.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Optional input text file; "-" may be used to indicate stdin.
    #[clap(long, default_value = None)]
    pub input: Option<String>,
}

impl InputArgs {
    /// Open a reader for the input.
    pub fn open_reader(&self) -> Result<Box<dyn BufRead>, Box<dyn std::error::Error>> {
        Ok(match squash_standard_io(&self.input) {
            None => Box::new(BufReader::new(std::io::stdin().lock())),
            Some(p) => {
                log::info!("input: {p}");
                Box::new(BufReader::new(File::open(p)?))
            }
        })
    }
}

/// Output argument group.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Optional output file; "-" may be used to indicate stdout.
    #[clap(long, default_value = None)]
    pub output: Option<String>,
}

impl OutputArgs {
    /// Open a writer for the output.
    pub fn open_writer(&self) -> Result<Box<dyn Write>, Box<dyn std::error::Error>> {
        Ok(match squash_standard_io(&self.output) {
            Some(p) => {
                log::info!("output: {p}");
                Box::new(BufWriter::new(File::create(p)?))
            }
            None => Box::new(BufWriter::new(std::io::stdout().lock())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_squash_standard_io() {
        assert_eq!(squash_standard_io(&None), None);
        assert_eq!(squash_standard_io(&Some("-".to_string())), None);
        assert_eq!(
            squash_standard_io(&Some("corpus.txt".to_string())),
            Some("corpus.txt")
        );
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempdir::TempDir::new("cli_io_test").unwrap();
        let path = dir.path().join("out.txt").to_string_lossy().to_string();

        let output = OutputArgs {
            output: Some(path.clone()),
        };
        let mut writer = output.open_writer().unwrap();
        writeln!(writer, "the time machine").unwrap();
        drop(writer);

        let input = InputArgs { input: Some(path) };
        let mut line = String::new();
        input.open_reader().unwrap().read_line(&mut line).unwrap();
        assert_eq!(line, "the time machine\n");
    }
}
