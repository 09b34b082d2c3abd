use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use tracing::debug;

use crate::{Error, Result};
use super::sample_struct::{Record, Sample};


/// The column delimiter set as default.
pub const DEFAULT_DELIMITER: char = '\t';


/// A struct that returns [`Sample`].
/// Using this struct, one can read a delimited text file to [`Sample`].
/// Each non-blank line is a record whose last field is the class label.
/// Since the file has no header, the attribute names are given separately.
/// # Example
/// ```no_run
/// use minitree::SampleReader;
/// let sample = SampleReader::new()
///     .file("/path/to/lenses.txt")
///     .attributes(&["age", "prescript", "astigmatic", "tearRate"])
///     .read()?;
/// # Ok::<(), minitree::Error>(())
/// ```
pub struct SampleReader<P> {
    file: Option<P>,
    attributes: Option<Vec<String>>,
    delimiter: char,
}


impl<P> SampleReader<P> {
    /// Construct a new instance of [`SampleReader`].
    pub fn new() -> Self {
        Self {
            file: None,
            attributes: None,
            delimiter: DEFAULT_DELIMITER,
        }
    }


    /// Set the attribute names.
    /// The `i`th name describes the `i`th column.
    pub fn attributes<S>(mut self, names: &[S]) -> Self
        where S: AsRef<str>
    {
        let names = names.iter()
            .map(|name| name.as_ref().to_string())
            .collect();
        self.attributes = Some(names);
        self
    }


    /// Set the column delimiter.
    /// Default is `'\t'`.
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }
}


impl<P> Default for SampleReader<P> {
    fn default() -> Self {
        Self::new()
    }
}


impl<P> SampleReader<P>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }


    /// Reads the file based on the arguments,
    /// and returns `minitree::Result<Sample>`.
    /// This method consumes `self.`
    pub fn read(self) -> Result<Sample> {
        let file = self.file
            .ok_or_else(|| Error::input("the file to read is not set"))?;
        let attributes = self.attributes
            .ok_or_else(|| Error::input(
                "attribute names are not set. Use `SampleReader::attributes`."
            ))?;
        let path = file.as_ref();

        let mut contents = String::new();
        File::open(path)
            .and_then(|mut f| f.read_to_string(&mut contents))
            .map_err(|e| Error::io(path, e))?;

        let records = parse_records(&contents, self.delimiter);
        debug!(
            path = %path.display(),
            records = records.len(),
            "read a delimited sample"
        );

        Sample::new(attributes, records)
    }
}


/// Split each non-blank line of `contents` by `delimiter`.
/// Leading/trailing whitespaces of each field are removed.
pub fn parse_records(contents: &str, delimiter: char) -> Vec<Record> {
    contents.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            line.split(delimiter)
                .map(|field| field.trim().to_string())
                .collect::<Record>()
        })
        .collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_records() {
        let contents = "young\tmyope\tno lenses\r\n\npre\thyper\tsoft\n";
        let records = parse_records(contents, '\t');
        assert_eq!(
            records,
            vec![
                vec!["young", "myope", "no lenses"],
                vec!["pre", "hyper", "soft"],
            ]
        );
    }

    #[test]
    fn test_missing_attributes() {
        let res = SampleReader::new()
            .file("does-not-matter.txt")
            .read();
        assert!(matches!(res, Err(Error::Input { .. })), "got {res:?}");
    }

    #[test]
    fn test_missing_file() {
        let res = SampleReader::new()
            .file("/this/path/does/not/exist.txt")
            .attributes(&["a"])
            .read();
        assert!(matches!(res, Err(Error::Io { .. })), "got {res:?}");
    }
}
