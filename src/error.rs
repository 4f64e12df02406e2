//! Error type shared by every allocation component.

use crate::sa::SaError;

/// Errors raised while building, scoring, or mutating an allocation.
///
/// Lookup failures (`UnknownPerson`, `MissingHouse`, `MissingRoom`) mean an
/// allocation was built over a different person set than the store, or an
/// upstream transform produced an inconsistent state. They are never
/// defaulted away.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AllocError {
    /// A person has no entry in the preference store.
    #[error("unknown person `{0}`: not present in the preference store")]
    UnknownPerson(String),

    /// A house index was addressed that the house view does not contain.
    #[error("house {house} does not exist in the allocation")]
    MissingHouse { house: usize },

    /// A room index was addressed that the house does not contain.
    #[error("room {room} does not exist in house {house}")]
    MissingRoom { house: usize, room: usize },

    /// A person was placed into the house view twice.
    #[error("person `{0}` already occupies a slot")]
    DuplicatePerson(String),

    /// The allocation has no two distinguishable slots to exchange.
    #[error("no valid move available for {operator}: {reason}")]
    NoValidMove {
        operator: &'static str,
        reason: String,
    },

    /// Random draws never produced a valid pair within the attempt budget.
    #[error("{operator} found no valid pair after {attempts} attempts")]
    MovesExhausted {
        operator: &'static str,
        attempts: usize,
    },

    /// Room or house capacity is unusable.
    #[error("invalid layout: {0}")]
    InvalidLayout(String),

    /// Search parameters failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<SaError<AllocError>> for AllocError {
    fn from(e: SaError<AllocError>) -> Self {
        match e {
            SaError::InvalidConfig(msg) => AllocError::InvalidConfig(msg),
            SaError::Problem(inner) => inner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = AllocError::MissingRoom { house: 1, room: 4 };
        assert_eq!(e.to_string(), "room 4 does not exist in house 1");

        let e = AllocError::MovesExhausted {
            operator: "switch_people",
            attempts: 10,
        };
        assert_eq!(
            e.to_string(),
            "switch_people found no valid pair after 10 attempts"
        );
    }

    #[test]
    fn test_from_sa_error_unwraps_problem() {
        let e: AllocError = SaError::Problem(AllocError::UnknownPerson("zoe".into())).into();
        assert_eq!(e, AllocError::UnknownPerson("zoe".into()));

        let e: AllocError = SaError::<AllocError>::InvalidConfig("bad".into()).into();
        assert_eq!(e, AllocError::InvalidConfig("bad".into()));
    }
}
