use crate::DcStegError;

pub type Result<T> = std::result::Result<T, DcStegError>;
