use std::fmt;

#[derive(Debug)]
pub enum ConvertError {
    UnparsableInput(roxmltree::Error),
    MissingSvgRoot,
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::UnparsableInput(err) => write!(f, "unparsable svg input: {}", err),
            ConvertError::MissingSvgRoot => write!(f, "document has no <svg> root element"),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::UnparsableInput(err) => Some(err),
            ConvertError::MissingSvgRoot => None,
        }
    }
}

impl From<roxmltree::Error> for ConvertError {
    fn from(value: roxmltree::Error) -> Self {
        ConvertError::UnparsableInput(value)
    }
}
