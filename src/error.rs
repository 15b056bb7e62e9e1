use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot parse triplet '{text}': unexpected '{token}'")]
    Triplet { text: String, token: String },

    #[error("fraction {num}/{den} in '{text}' is not representable in {min_den}ths")]
    Fraction {
        text: String,
        num: i32,
        den: i32,
        min_den: i32,
    },

    #[error("cannot parse Hall symbol '{symbol}': {details}")]
    Hall { symbol: String, details: String },

    #[error("operation '{triplet}' is not invertible")]
    NotInvertible { triplet: String },

    #[error("basis change '{triplet}' does not map the lattice onto itself")]
    BasisChange { triplet: String },

    #[error("space group '{name}' not found")]
    UnknownSpaceGroup { name: String },
}

impl Error {
    pub fn triplet(text: impl Into<String>, token: impl Into<String>) -> Self {
        Self::Triplet {
            text: text.into(),
            token: token.into(),
        }
    }

    pub fn fraction(text: impl Into<String>, num: i32, den: i32, min_den: i32) -> Self {
        Self::Fraction {
            text: text.into(),
            num,
            den,
            min_den,
        }
    }

    pub fn hall(symbol: impl Into<String>, details: impl Into<String>) -> Self {
        Self::Hall {
            symbol: symbol.into(),
            details: details.into(),
        }
    }

    pub fn not_invertible(triplet: impl Into<String>) -> Self {
        Self::NotInvertible {
            triplet: triplet.into(),
        }
    }

    pub fn basis_change(triplet: impl Into<String>) -> Self {
        Self::BasisChange {
            triplet: triplet.into(),
        }
    }

    pub fn unknown_spacegroup(name: impl Into<String>) -> Self {
        Self::UnknownSpaceGroup { name: name.into() }
    }
}
