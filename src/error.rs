//! Errors reported by the sorting entry points.

use core::{
	fmt::{self, Debug, Display, Formatter},
	ops::Range,
};

#[cfg(feature = "alloc")]
use crate::chain::Link;

/// Error type of the fallible sorting operations.
///
/// `E` is the error type of the ordering capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortError<E> {
	/// The requested range `start..end` does not lie within a sequence of length `len`.
	///
	/// Reported before anything is mutated.
	InvalidRange {
		/// First index of the range.
		start: usize,
		/// One past the last index of the range.
		end: usize,
		/// Length of the sequence.
		len: usize,
	},
	/// The ordering capability failed.
	///
	/// The sequence holds the same elements as before but in an unspecified order.
	Compare(E),
}

impl<E> SortError<E> {
	/// Returns the comparator error, if any.
	pub fn into_compare(self) -> Option<E> {
		match self {
			Self::Compare(error) => Some(error),
			Self::InvalidRange { .. } => None,
		}
	}
}

impl<E: Display> Display for SortError<E> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Self::InvalidRange { start, end, len } => {
				write!(f, "Invalid range {start}..{end} for sequence of length {len}")
			}
			Self::Compare(error) => write!(f, "Ordering failed: {error}"),
		}
	}
}

#[cfg(feature = "std")]
impl<E> std::error::Error for SortError<E>
where
	E: std::error::Error + 'static,
{
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::Compare(error) => Some(error),
			Self::InvalidRange { .. } => None,
		}
	}
}

/// Checks that `range` addresses elements of a sequence of length `len`.
///
/// An empty range (`start == end`) is valid as long as it does not start past the end.
pub(crate) fn check_range<E>(len: usize, range: &Range<usize>) -> Result<(), SortError<E>> {
	if range.start > range.end || range.end > len {
		return Err(SortError::InvalidRange {
			start: range.start,
			end: range.end,
			len,
		});
	}
	Ok(())
}

/// Failed chain sort.
///
/// Owns the chain again so the caller can keep using its nodes. After an
/// [`InvalidRange`](SortError::InvalidRange) the chain is untouched, after a
/// [`Compare`](SortError::Compare) it holds every node exactly once in unspecified order.
#[cfg(feature = "alloc")]
pub struct ChainError<T, E> {
	/// Head of the chain holding every node that was passed in.
	pub head: Link<T>,
	/// Cause of the failure.
	pub error: SortError<E>,
}

#[cfg(feature = "alloc")]
impl<T, E> ChainError<T, E> {
	/// Splits into the chain and the error.
	pub fn into_parts(self) -> (Link<T>, SortError<E>) {
		(self.head, self.error)
	}
}

#[cfg(feature = "alloc")]
impl<T: Debug, E: Debug> Debug for ChainError<T, E> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("ChainError")
			.field("head", &self.head)
			.field("error", &self.error)
			.finish()
	}
}

#[cfg(feature = "alloc")]
impl<T, E: Display> Display for ChainError<T, E> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.error, f)
	}
}

#[cfg(feature = "std")]
impl<T: Debug, E> std::error::Error for ChainError<T, E>
where
	E: std::error::Error + 'static,
{
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		std::error::Error::source(&self.error)
	}
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::{SortError, check_range};
	use core::convert::Infallible;
	use std::error::Error;

	#[derive(Debug, PartialEq)]
	struct Broken;

	impl core::fmt::Display for Broken {
		fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
			f.write_str("broken key")
		}
	}

	impl Error for Broken {}

	#[test]
	fn ranges() {
		assert!(check_range::<Infallible>(5, &(0..5)).is_ok());
		assert!(check_range::<Infallible>(5, &(2..2)).is_ok());
		assert!(check_range::<Infallible>(5, &(5..5)).is_ok());
		assert!(check_range::<Infallible>(0, &(0..0)).is_ok());
		assert_eq!(
			check_range::<Infallible>(5, &(3..2)),
			Err(SortError::InvalidRange {
				start: 3,
				end: 2,
				len: 5
			})
		);
		assert_eq!(
			check_range::<Infallible>(5, &(0..6)),
			Err(SortError::InvalidRange {
				start: 0,
				end: 6,
				len: 5
			})
		);
	}

	#[test]
	fn display_and_source() {
		let error = SortError::<Broken>::InvalidRange {
			start: 3,
			end: 2,
			len: 5,
		};
		assert_eq!(
			error.to_string(),
			"Invalid range 3..2 for sequence of length 5"
		);
		assert!(error.source().is_none());

		let error = SortError::Compare(Broken);
		assert_eq!(error.to_string(), "Ordering failed: broken key");
		assert!(error.source().is_some());
		assert_eq!(error.into_compare(), Some(Broken));
	}
}
