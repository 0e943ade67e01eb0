use crate::input::InputRecord;
use crate::Transaction;

use std::{
    cell::RefCell,
    fs::File,
    io::{self, BufReader, Read},
    path::PathBuf,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Transaction source not found: {0:?}")]
    NotFound(PathBuf),

    #[error("Couldn't read transaction source: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed transaction source: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Anything able to produce the full, ordered sequence of transactions up front
pub trait TransactionSource {
    fn load(&self) -> Result<Vec<Transaction>, LoadError>;
}

/// A JSON array of transactions stored on disk
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        return Self { path: path.into() };
    }
}

impl TransactionSource for JsonFileSource {
    fn load(&self) -> Result<Vec<Transaction>, LoadError> {
        log::debug!("Opening transaction source: {:?}", self.path);

        let file = File::open(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound(self.path.clone()),
            _ => LoadError::Io(e),
        })?;

        return read_transactions(BufReader::new(file));
    }
}

/// A JSON array of transactions held by a reader, consumed on first load.
/// Later loads see an exhausted reader and fail as malformed.
pub struct JsonReaderSource<R: Read> {
    reader: RefCell<R>,
}

impl<R: Read> JsonReaderSource<R> {
    pub fn new(reader: R) -> Self {
        return Self {
            reader: RefCell::new(reader),
        };
    }
}

impl<R: Read> TransactionSource for JsonReaderSource<R> {
    fn load(&self) -> Result<Vec<Transaction>, LoadError> {
        let mut reader = self.reader.borrow_mut();
        return read_transactions(&mut *reader);
    }
}

impl TransactionSource for Vec<Transaction> {
    fn load(&self) -> Result<Vec<Transaction>, LoadError> {
        return Ok(self.clone());
    }
}

pub fn read_transactions<R: Read>(reader: R) -> Result<Vec<Transaction>, LoadError> {
    let records: Vec<InputRecord> = serde_json::from_reader(reader)?;
    log::debug!("Deserialized {} input records", records.len());

    return Ok(records
        .into_iter()
        .map(InputRecord::into_transaction)
        .collect());
}

pub fn parse_transactions(json: &str) -> Result<Vec<Transaction>, LoadError> {
    return read_transactions(json.as_bytes());
}
