use thiserror::Error;

/// Errors that can occur when creating a [`Bracket`] or validating bounds.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BracketError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint(s)")]
    NonFinite,

    /// Endpoints are equal, giving zero width.
    #[error("zero width")]
    ZeroWidth,

    /// Function values at the endpoints do not have opposite signs.
    #[error("no sign change: f(left) = {f_left}, f(right) = {f_right}")]
    NoSignChange { f_left: f64, f_right: f64 },
}

/// Returns true if one value is strictly negative and the other strictly positive.
///
/// Compares signs directly; the product of two tiny values underflows to zero.
pub(crate) fn opposite_signs(a: f64, b: f64) -> bool {
    (a < 0.0 && b > 0.0) || (a > 0.0 && b < 0.0)
}

/// Current bracket bounds and the function values there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    left: f64,
    right: f64,
    f_left: f64,
    f_right: f64,
}

impl Bracket {
    /// Creates a validated bracket from bounds and their function values.
    ///
    /// # Errors
    ///
    /// Returns `BracketError::NoSignChange` unless `f_left` and `f_right`
    /// have strictly opposite signs.
    /// An endpoint that is itself a root does not form a bracket.
    pub(super) fn new(bounds: Bounds, f_left: f64, f_right: f64) -> Result<Self, BracketError> {
        if !opposite_signs(f_left, f_right) {
            return Err(BracketError::NoSignChange { f_left, f_right });
        }

        Ok(Self {
            left: bounds.left,
            right: bounds.right,
            f_left,
            f_right,
        })
    }

    /// Returns the bracket bounds as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    /// Returns the midpoint of the bracket.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    /// Returns where the secant through both endpoints crosses zero.
    ///
    /// The denominator never vanishes because the endpoint values have
    /// opposite signs.
    #[must_use]
    pub fn secant_root(&self) -> f64 {
        self.right - self.f_right * (self.right - self.left) / (self.f_right - self.f_left)
    }

    /// Returns the bracket width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Shrinks the bracket using an interior point and its function value.
    ///
    /// The endpoint whose value has the same sign as `fx` is replaced.
    pub(super) fn shrink(&mut self, x: f64, fx: f64) {
        if self.f_left.is_sign_negative() == fx.is_sign_negative() {
            self.left = x;
            self.f_left = fx;
        } else {
            self.right = x;
            self.f_right = fx;
        }
    }
}

/// Ordered finite bounds for a bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bounds {
    left: f64,
    right: f64,
}

impl Bounds {
    /// Validates and orders the bracket endpoints.
    ///
    /// # Errors
    ///
    /// Returns `BracketError` if endpoints are non-finite or zero width.
    pub(super) fn new(bracket: [f64; 2]) -> Result<Self, BracketError> {
        let [left, right] = bracket;

        if !left.is_finite() || !right.is_finite() {
            return Err(BracketError::NonFinite);
        }

        #[allow(clippy::float_cmp)]
        if left == right {
            return Err(BracketError::ZeroWidth);
        }

        if left < right {
            Ok(Self { left, right })
        } else {
            Ok(Self {
                left: right,
                right: left,
            })
        }
    }

    pub(super) fn left(&self) -> f64 {
        self.left
    }

    pub(super) fn right(&self) -> f64 {
        self.right
    }
}
