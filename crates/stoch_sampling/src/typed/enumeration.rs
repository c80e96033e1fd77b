//! Enumeration member sampling.
//!
//! Member lists are declared at compile time through [`Enumerable`]; there is
//! no runtime reflection. Flag-style enumerations, whose valid values are
//! combinations of members, are refused rather than sampled as a single
//! member or as an arbitrary bit pattern.

use stoch_core::engine::BitSource;
use stoch_core::types::{Result, SamplingError};

use crate::strategy::SamplingStrategy;

/// An enumeration with a fixed, ordered member list.
///
/// Implement by hand or with [`enumerable!`](crate::enumerable).
pub trait Enumerable: Copy + 'static {
    /// Every member, each listed once.
    const MEMBERS: &'static [Self];

    /// Whether members are bit flags meant to be combined.
    const IS_FLAGS: bool = false;
}

/// Picks one member uniformly.
///
/// # Errors
///
/// - `Unsupported` for flag-style enumerations
/// - `EmptySequence` if the member list is empty
pub fn member<E, S, B>(source: &mut B) -> Result<E>
where
    E: Enumerable,
    S: SamplingStrategy,
    B: BitSource + ?Sized,
{
    if E::IS_FLAGS {
        return Err(SamplingError::Unsupported("flag-style enumeration sampling"));
    }
    let members = E::MEMBERS;
    if members.is_empty() {
        return Err(SamplingError::EmptySequence);
    }
    let index = S::bounded_u64(source, members.len() as u64) as usize;
    Ok(members[index])
}

/// Implements [`Enumerable`] for a fieldless enum.
///
/// ```rust
/// use stoch_sampling::enumerable;
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// enum Suit { Clubs, Diamonds, Hearts, Spades }
/// enumerable!(Suit { Clubs, Diamonds, Hearts, Spades });
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// enum Permission { Read = 1, Write = 2, Execute = 4 }
/// enumerable!(flags Permission { Read, Write, Execute });
/// ```
#[macro_export]
macro_rules! enumerable {
    (flags $ty:ident { $($variant:ident),+ $(,)? }) => {
        impl $crate::typed::Enumerable for $ty {
            const MEMBERS: &'static [Self] = &[$($ty::$variant),+];
            const IS_FLAGS: bool = true;
        }
    };
    ($ty:ident { $($variant:ident),+ $(,)? }) => {
        impl $crate::typed::Enumerable for $ty {
            const MEMBERS: &'static [Self] = &[$($ty::$variant),+];
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{Precision, Speed};
    use stoch_core::engine::Xoshiro256StarStar;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Colour {
        Red,
        Green,
        Blue,
    }
    crate::enumerable!(Colour { Red, Green, Blue });

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Access {
        Read = 1,
        Write = 2,
    }
    crate::enumerable!(flags Access { Read, Write });

    #[derive(Clone, Copy, Debug)]
    enum Never {}

    impl Enumerable for Never {
        const MEMBERS: &'static [Self] = &[];
    }

    #[test]
    fn test_every_member_is_reachable() {
        let mut engine = Xoshiro256StarStar::new(5);
        let mut counts = [0usize; 3];
        for _ in 0..3_000 {
            let colour: Colour = member::<_, Precision, _>(&mut engine).unwrap();
            counts[colour as usize] += 1;
        }
        for count in counts {
            assert!((800..1_200).contains(&count), "counts {:?}", counts);
        }
    }

    #[test]
    fn test_flags_are_unsupported() {
        let mut engine = Xoshiro256StarStar::new(5);
        let err = member::<Access, Speed, _>(&mut engine).unwrap_err();
        assert!(matches!(err, SamplingError::Unsupported(_)));
        assert_eq!(Access::MEMBERS, &[Access::Read, Access::Write]);
    }

    #[test]
    fn test_empty_enumeration_fails() {
        let mut engine = Xoshiro256StarStar::new(5);
        assert_eq!(
            member::<Never, Precision, _>(&mut engine).unwrap_err(),
            SamplingError::EmptySequence
        );
    }
}
