use thiserror::Error;

#[derive(Error, Debug)]
pub enum DcStegError {
    /// Represents a scan that ran out of eligible coefficients. This is the one recoverable
    /// failure of the pipeline: when hiding it means the message does not fit into the image
    #[error("Not enough space in the image: medium exhausted after {consumed} bits")]
    EndOfMedium { consumed: usize },

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents planes that do not match the announced image dimensions
    #[error("Image planes do not match the dimensions {width}x{height}")]
    InvalidImageDimensions { width: usize, height: usize },

    /// Represents a bit order argument that is not a number or out of range
    #[error("Imprint strength (bit order) is invalid: {0}")]
    InvalidBitOrder(String),

    /// Represents a Hamming codeword whose syndrome matches no column of the parity check matrix
    #[error("Hamming codeword {0:#09b} cannot be corrected")]
    UncorrectableCodeword(u8),

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,
}

impl DcStegError {
    /// true if the medium ran out of eligible coefficients
    pub fn is_end_of_medium(&self) -> bool {
        matches!(self, DcStegError::EndOfMedium { .. })
    }

    /// true for everything that originates from loading or saving an image
    pub fn is_image_io(&self) -> bool {
        matches!(
            self,
            DcStegError::InvalidImageMedia
                | DcStegError::InvalidImageDimensions { .. }
                | DcStegError::WriteError { .. }
                | DcStegError::ImageEncodingError
                | DcStegError::IoError(_)
        )
    }
}
