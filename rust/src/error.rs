//! Error handling and result types for AvlTreeMap operations.
//!
//! Two kinds of error reach callers of the map proper: `OutOfBound` from
//! checked lookups and `InvalidIterator` from handle and cursor misuse. The
//! remaining variants are reported only by the invariant checker.

/// Error type for AVL map operations.
#[derive(Debug, Clone, PartialEq)]
pub enum AvlMapError {
    /// Checked lookup of a key that is not in the map.
    OutOfBound,
    /// A handle or cursor was stepped past a boundary, or a handle was
    /// used with a map that does not own its node (foreign, end, or erased).
    InvalidIterator(String),
    /// Internal data structure integrity violation.
    DataIntegrityError(String),
    /// Tree corruption detected.
    CorruptedTree(String),
}

impl AvlMapError {
    /// Create an InvalidIterator error with context
    pub fn invalid_iterator(operation: &str, reason: &str) -> Self {
        Self::InvalidIterator(format!("{}: {}", operation, reason))
    }

    /// Create a DataIntegrityError with context
    pub fn data_integrity(context: &str, details: &str) -> Self {
        Self::DataIntegrityError(format!("{}: {}", context, details))
    }

    /// Create a CorruptedTree error with context
    pub fn corrupted_tree(component: &str, details: &str) -> Self {
        Self::CorruptedTree(format!("{} corruption: {}", component, details))
    }

    /// Check if this error is an out-of-bound lookup
    pub fn is_out_of_bound(&self) -> bool {
        matches!(self, Self::OutOfBound)
    }

    /// Check if this error is an invalid iterator error
    pub fn is_invalid_iterator(&self) -> bool {
        matches!(self, Self::InvalidIterator(_))
    }
}

impl std::fmt::Display for AvlMapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AvlMapError::OutOfBound => write!(f, "Key not found in map"),
            AvlMapError::InvalidIterator(msg) => write!(f, "Invalid iterator: {}", msg),
            AvlMapError::DataIntegrityError(msg) => write!(f, "Data integrity error: {}", msg),
            AvlMapError::CorruptedTree(msg) => write!(f, "Corrupted tree: {}", msg),
        }
    }
}

impl std::error::Error for AvlMapError {}

/// Internal result type for tree operations
pub(crate) type TreeResult<T> = Result<T, AvlMapError>;

/// Public result type for map operations that may fail
pub type MapResult<T> = Result<T, AvlMapError>;

/// Result type for key lookup operations
pub type KeyResult<T> = Result<T, AvlMapError>;

/// Result type for map modification operations
pub type ModifyResult<T> = Result<T, AvlMapError>;

/// Result extension trait for improved error handling
pub trait MapResultExt<T> {
    /// Convert to a MapResult with additional context
    fn with_context(self, context: &str) -> MapResult<T>;

    /// Convert to a MapResult with operation context
    fn with_operation(self, operation: &str) -> MapResult<T>;

    /// Log error and continue with default value
    fn or_default_with_log(self) -> T
    where
        T: Default;
}

impl<T> MapResultExt<T> for Result<T, AvlMapError> {
    fn with_context(self, context: &str) -> MapResult<T> {
        self.map_err(|e| match e {
            AvlMapError::OutOfBound => AvlMapError::OutOfBound,
            AvlMapError::InvalidIterator(msg) => AvlMapError::invalid_iterator(context, &msg),
            AvlMapError::DataIntegrityError(msg) => AvlMapError::data_integrity(context, &msg),
            AvlMapError::CorruptedTree(msg) => AvlMapError::corrupted_tree(context, &msg),
        })
    }

    fn with_operation(self, operation: &str) -> MapResult<T> {
        self.with_context(&format!("Operation '{}'", operation))
    }

    fn or_default_with_log(self) -> T
    where
        T: Default,
    {
        match self {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "AVL map operation failed, using default");
                T::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(AvlMapError::OutOfBound.to_string(), "Key not found in map");
        assert_eq!(
            AvlMapError::invalid_iterator("erase", "end handle").to_string(),
            "Invalid iterator: erase: end handle"
        );
    }

    #[test]
    fn test_kind_predicates() {
        assert!(AvlMapError::OutOfBound.is_out_of_bound());
        assert!(!AvlMapError::OutOfBound.is_invalid_iterator());
        assert!(AvlMapError::invalid_iterator("step", "past end").is_invalid_iterator());
    }

    #[test]
    fn test_with_context_keeps_kind() {
        let err: MapResult<()> = Err(AvlMapError::invalid_iterator("erase", "foreign handle"));
        let err = err.with_operation("remove_current").unwrap_err();
        assert!(err.is_invalid_iterator());
        assert!(err.to_string().contains("remove_current"));

        let missing: MapResult<()> = Err(AvlMapError::OutOfBound);
        assert_eq!(missing.with_context("at").unwrap_err(), AvlMapError::OutOfBound);
    }

    #[test]
    fn test_or_default_with_log() {
        let failed: MapResult<i32> = Err(AvlMapError::OutOfBound);
        assert_eq!(failed.or_default_with_log(), 0);
        let ok: MapResult<i32> = Ok(5);
        assert_eq!(ok.or_default_with_log(), 5);
    }
}
