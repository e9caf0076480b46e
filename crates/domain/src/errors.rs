use thiserror::Error;

/// Errors produced by the pure domain math.
#[derive(Debug, Error)]
pub enum MathError {
    /// Tick lies outside the supported protocol bounds.
    #[error("tick {0} outside supported bounds")]
    TickOutOfBounds(i32),
    /// Lower tick must be strictly below upper tick.
    #[error("invalid tick range [{lower}, {upper})")]
    InvalidTickRange { lower: i32, upper: i32 },
    /// Prices entering the math must be strictly positive.
    #[error("price must be positive")]
    NonPositivePrice,
    /// A price range was supplied with lower >= upper.
    #[error("invalid price range: lower bound must be below upper bound")]
    InvalidPriceRange,
    /// Conversion between numeric representations overflowed.
    #[error("numeric conversion overflow")]
    NumericOverflow,
}
