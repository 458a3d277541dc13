//! When constructing or converting a big integer goes wrong.
//!
//! The arithmetic itself never fails: shifts and additions grow the integer
//! as needed, and running out of memory aborts like any other allocation.
//! Errors only come from the fallible constructors and from narrowing
//! conversions into native integers.

use crate::lib::fmt::{self, Debug, Display};
use crate::lib::{result, Box, ToString};

/// This type represents all possible errors that can occur when constructing
/// or converting a [`BigUint`](crate::BigUint).
pub struct Error {
    /// This `Box` allows us to keep the size of `Error` as small as possible.
    err: Box<ErrorImpl>,
}

/// Alias for a `Result` with the error type `biguint::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// Specifies the cause of this error.
    pub fn code(&self) -> &ErrorCode {
        &self.err.code
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::Capacity` - a requested limb capacity that cannot hold a
    ///   big integer
    /// - `Category::Conversion` - a value that does not fit the target type
    pub fn classify(&self) -> Category {
        match self.err.code {
            ErrorCode::ZeroCapacity => Category::Capacity,
            ErrorCode::OutOfRange { .. } => Category::Conversion,
        }
    }

    /// Returns true if this error was caused by a requested capacity.
    pub fn is_capacity(&self) -> bool {
        self.classify() == Category::Capacity
    }

    /// Returns true if this error was caused by a value that does not fit the
    /// target type of a conversion.
    pub fn is_conversion(&self) -> bool {
        self.classify() == Category::Conversion
    }
}

/// Categorizes the cause of a `biguint::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// The error was caused by a requested limb capacity.
    Capacity,

    /// The error was caused by converting a value into a type too narrow to
    /// hold it.
    Conversion,
}

struct ErrorImpl {
    code: ErrorCode,
}

/// This type describes all possible errors that can occur when constructing
/// or converting a big integer.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ErrorCode {
    /// A big integer must store at least one limb.
    ZeroCapacity,

    /// The value needs more bits than the target type has.
    OutOfRange {
        /// Number of significant bits in the value.
        bits: usize,
        /// Number of bits in the target type.
        target_bits: usize,
    },
}

impl Error {
    #[cold]
    pub(crate) fn new(code: ErrorCode) -> Self {
        Error {
            err: Box::new(ErrorImpl { code }),
        }
    }

    #[cold]
    pub(crate) fn zero_capacity() -> Self {
        Error::new(ErrorCode::ZeroCapacity)
    }

    #[cold]
    pub(crate) fn out_of_range(bits: usize, target_bits: usize) -> Self {
        Error::new(ErrorCode::OutOfRange { bits, target_bits })
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::ZeroCapacity => f.write_str("capacity must be at least one limb"),
            ErrorCode::OutOfRange { bits, target_bits } => write!(
                f,
                "value of {} bits does not fit in {} bits",
                bits, target_bits
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&self.err.code, f)
    }
}

// Remove two layers of verbosity from the debug representation. Humans often
// end up seeing this representation because it is what unwrap() shows.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Error({:?}, {:?})",
            self.classify(),
            self.err.code.to_string()
        )
    }
}
