//! Shared fixtures for the end-to-end tests.

use serde_json::{Value, json};

/// The 4×4 system used to check elimination stages and solutions.
pub mod reference_system {
    use super::{Value, json};

    /// Coefficient matrix rows.
    pub const A: [[f64; 4]; 4] = [
        [-7.0, 2.0, -3.0, 4.0],
        [5.0, -1.0, 14.0, -1.0],
        [1.0, 9.0, -7.0, 5.0],
        [-12.0, 13.0, -8.0, -4.0],
    ];

    /// Right-hand side.
    pub const B: [f64; 4] = [-12.0, 13.0, 31.0, -32.0];

    /// Solution in the original variable order.
    pub const X: [f64; 4] = [3.624_387_031, 1.603_454_585, -0.073_775_891, 2.485_618_093];

    /// Upper-triangular augmented matrix produced by partial pivoting.
    pub const TRIANGULAR: [[f64; 5]; 4] = [
        [-12.0, 13.0, -8.0, -4.0, -32.0],
        [0.0, 10.083_333_3, -7.666_666_7, 4.666_666_7, 28.333_333_3],
        [0.0, 0.0, 14.024_793_4, -4.710_743_8, -12.743_801_7],
        [0.0, 0.0, 0.0, 8.051_266_9, 20.012_374_8],
    ];

    /// Parameter document for the system with the given strategy tag.
    #[must_use]
    pub fn document(strategy: &str) -> Value {
        json!({ "A": A, "b": B, "strategy": strategy })
    }
}

/// Parameter document for bisection on `x^3 - x - 2` over `[1, 2]`.
#[must_use]
pub fn cubic_bracket() -> Value {
    json!({
        "function": "x^3 - x - 2",
        "lowerBound": 1.0,
        "upperBound": 2.0,
    })
}

/// The real root of `x^3 - x - 2`.
pub const CUBIC_ROOT: f64 = 1.521_379_706_804_567_6;
