use thiserror::Error;

#[derive(Error, Debug)]
/// An error that can occur when decoding ACO data.
pub enum DecodeError {
    #[error("Not an Adobe color swatch (ACO) file.")]
    TooShort,
    #[error("A swatch record extends past the end of the data.")]
    Read(#[from] std::io::Error),
}
