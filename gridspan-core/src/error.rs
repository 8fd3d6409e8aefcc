//! Error types for the gridspan core library.
//!
//! Defines the error enums exposed by the public API together with stable
//! machine-readable code enums for logging surfaces.

use std::{fmt, sync::Arc};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while registering a candidate link.
///
/// The first four variants describe malformed link requests and are rejected
/// before the registry is touched. [`RegistryError::DuplicateLink`] is
/// informational: the link is already known and the registry keeps its
/// original entry. Use [`RegistryError::is_duplicate`] to separate the two
/// classes.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum RegistryError {
    /// Both endpoints named the same substation.
    #[error("link endpoints must name two different substations (got `{node}` twice)")]
    SelfLoop {
        /// The substation named on both sides of the link.
        node: Arc<str>,
    },
    /// An endpoint was empty after trimming whitespace.
    #[error("link endpoints must both name a substation")]
    EmptyEndpoint,
    /// The length was NaN or infinite.
    #[error("link (`{left}`, `{right}`) has a non-finite length")]
    NonFiniteLength {
        /// Left endpoint as provided by the caller.
        left: Arc<str>,
        /// Right endpoint as provided by the caller.
        right: Arc<str>,
    },
    /// The length was negative.
    #[error("link (`{left}`, `{right}`) has a negative length of {length} m")]
    NegativeLength {
        /// Left endpoint as provided by the caller.
        left: Arc<str>,
        /// Right endpoint as provided by the caller.
        right: Arc<str>,
        /// The offending length in metres.
        length: f32,
    },
    /// A link between the same unordered pair is already registered.
    #[error("link (`{left}`, `{right}`) is already registered")]
    DuplicateLink {
        /// Left endpoint as provided by the caller.
        left: Arc<str>,
        /// Right endpoint as provided by the caller.
        right: Arc<str>,
    },
}

define_error_codes! {
    /// Stable codes describing [`RegistryError`] variants.
    enum RegistryErrorCode for RegistryError {
        /// Both endpoints named the same substation.
        SelfLoop => SelfLoop { .. } => "REGISTRY_SELF_LOOP",
        /// An endpoint was empty after trimming whitespace.
        EmptyEndpoint => EmptyEndpoint => "REGISTRY_EMPTY_ENDPOINT",
        /// The length was NaN or infinite.
        NonFiniteLength => NonFiniteLength { .. } => "REGISTRY_NON_FINITE_LENGTH",
        /// The length was negative.
        NegativeLength => NegativeLength { .. } => "REGISTRY_NEGATIVE_LENGTH",
        /// A link between the same unordered pair is already registered.
        DuplicateLink => DuplicateLink { .. } => "REGISTRY_DUPLICATE_LINK",
    }
}

impl RegistryError {
    /// Returns `true` for the informational already-registered rejection.
    #[must_use]
    pub const fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateLink { .. })
    }

    /// Returns `true` for rejections of malformed link requests.
    #[must_use]
    pub const fn is_invalid_link(&self) -> bool {
        !self.is_duplicate()
    }
}

/// An error produced by [`crate::LinkSource`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum LinkSourceError {
    /// Requested index was outside the source's bounds.
    #[error("link index {index} is out of bounds")]
    OutOfBounds {
        /// The requested link index that exceeded the source bounds.
        index: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`LinkSourceError`] variants.
    enum LinkSourceErrorCode for LinkSourceError {
        /// Requested index was outside the source's bounds.
        OutOfBounds => OutOfBounds { .. } => "LINK_SOURCE_OUT_OF_BOUNDS",
    }
}

/// An error produced while ingesting a [`crate::LinkSource`] into a registry.
///
/// Carries the name of the failing source so callers can report which input
/// surface was at fault.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum IngestError {
    /// The source itself failed to yield a record.
    #[error("link source `{source_name}` failed: {error}")]
    Source {
        /// Identifier reported by the failing source.
        source_name: Arc<str>,
        /// Underlying source error.
        #[source]
        error: LinkSourceError,
    },
    /// The registry rejected a record as malformed.
    #[error("link source `{source_name}` yielded a rejected link: {error}")]
    Rejected {
        /// Identifier reported by the source that yielded the record.
        source_name: Arc<str>,
        /// Underlying registry rejection.
        #[source]
        error: RegistryError,
    },
}

define_error_codes! {
    /// Stable codes describing [`IngestError`] variants.
    enum IngestErrorCode for IngestError {
        /// The source itself failed to yield a record.
        Source => Source { .. } => "INGEST_SOURCE_FAILURE",
        /// The registry rejected a record as malformed.
        Rejected => Rejected { .. } => "INGEST_REJECTED_LINK",
    }
}

impl IngestError {
    /// Retrieve the inner [`RegistryErrorCode`] when the registry rejected a record.
    #[must_use]
    pub const fn registry_code(&self) -> Option<RegistryErrorCode> {
        match self {
            Self::Rejected { error, .. } => Some(error.code()),
            Self::Source { .. } => None,
        }
    }
}
