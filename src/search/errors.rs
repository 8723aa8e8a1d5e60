use crate::data::err::GetCode;
use std::{error::Error, fmt};

/// An enum representing errors that can happen while validating a search
/// pattern or building its shift tables.
#[derive(PartialEq, Eq)]
#[non_exhaustive]
pub enum SearchError {
    /// The pattern was empty; no table or match offset is defined for it.
    EmptyPattern,
}

impl fmt::Display for SearchError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SearchError::EmptyPattern => write!(f, "The search pattern must contain at least one symbol"),
        }
    }
}

impl fmt::Debug for SearchError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Error for SearchError {}

impl GetCode for SearchError {}
