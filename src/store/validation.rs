//! Argument validation for the patch store.
//!
//! Every store operation validates before touching state, so a rejected call
//! leaves the store exactly as it was.

use crate::model::{port_in_range, PatchNumber, PortDirection, PATCH_COUNT};

/// Errors returned by patch store operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// Patch number not in 1-8, 10-18, 20-28.
    InvalidPatchNumber(u8),
    /// Port index outside 0-7.
    IndexOutOfRange {
        direction: PortDirection,
        index: usize,
    },
    /// Replacement collection has the wrong number of patches.
    PatchCount { found: usize },
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPatchNumber(n) => write!(f, "Invalid patch number: {}", n),
            Self::IndexOutOfRange { direction, index } => {
                write!(f, "{} index out of range: {}", direction.name(), index)
            }
            Self::PatchCount { found } => {
                write!(f, "Expected {} patches, found {}", PATCH_COUNT, found)
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// Resolve an external patch number.
pub fn validate_patch_number(number: u8) -> Result<PatchNumber, StoreError> {
    PatchNumber::new(number).ok_or(StoreError::InvalidPatchNumber(number))
}

/// Check a port index against its side of the patch bay.
pub fn validate_port(direction: PortDirection, index: usize) -> Result<usize, StoreError> {
    if port_in_range(index) {
        Ok(index)
    } else {
        Err(StoreError::IndexOutOfRange { direction, index })
    }
}

/// Check the size of a replacement patch collection.
pub fn validate_patch_count(found: usize) -> Result<(), StoreError> {
    if found == PATCH_COUNT {
        Ok(())
    } else {
        Err(StoreError::PatchCount { found })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_number_validation() {
        assert_eq!(validate_patch_number(10).unwrap().index(), 8);
        assert_eq!(
            validate_patch_number(19),
            Err(StoreError::InvalidPatchNumber(19))
        );
    }

    #[test]
    fn test_port_validation() {
        assert_eq!(validate_port(PortDirection::Output, 7), Ok(7));
        assert_eq!(
            validate_port(PortDirection::Input, 8),
            Err(StoreError::IndexOutOfRange {
                direction: PortDirection::Input,
                index: 8
            })
        );
    }

    #[test]
    fn test_patch_count_validation() {
        assert!(validate_patch_count(PATCH_COUNT).is_ok());
        assert_eq!(
            validate_patch_count(29),
            Err(StoreError::PatchCount { found: 29 })
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            StoreError::InvalidPatchNumber(9).to_string(),
            "Invalid patch number: 9"
        );
        let err = StoreError::IndexOutOfRange {
            direction: PortDirection::Output,
            index: 12,
        };
        assert!(err.to_string().contains("Output"));
        assert!(err.to_string().contains("12"));
    }
}
