use crate::EvalError;

/// A node in a parsed expression tree.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Node {
    Number(f64),
    Variable,
    Neg(Box<Node>),
    Binary(BinaryOp, Box<Node>, Box<Node>),
    Call(Builtin, Box<Node>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

/// Built-in functions of one argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Builtin {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Exp,
    Ln,
    Log10,
    Log2,
    Sqrt,
    Abs,
}

impl Builtin {
    /// Looks up a built-in by name. `log` is the natural logarithm.
    pub(super) fn lookup(name: &str) -> Option<Self> {
        let builtin = match name {
            "sin" => Self::Sin,
            "cos" => Self::Cos,
            "tan" => Self::Tan,
            "asin" => Self::Asin,
            "acos" => Self::Acos,
            "atan" => Self::Atan,
            "sinh" => Self::Sinh,
            "cosh" => Self::Cosh,
            "tanh" => Self::Tanh,
            "exp" => Self::Exp,
            "ln" | "log" => Self::Ln,
            "log10" => Self::Log10,
            "log2" => Self::Log2,
            "sqrt" => Self::Sqrt,
            "abs" => Self::Abs,
            _ => return None,
        };
        Some(builtin)
    }

    fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
            Self::Exp => "exp",
            Self::Ln => "ln",
            Self::Log10 => "log10",
            Self::Log2 => "log2",
            Self::Sqrt => "sqrt",
            Self::Abs => "abs",
        }
    }

    fn apply(self, arg: f64, x: f64) -> Result<f64, EvalError> {
        let defined = match self {
            Self::Asin | Self::Acos => (-1.0..=1.0).contains(&arg),
            Self::Ln | Self::Log10 | Self::Log2 => arg > 0.0,
            Self::Sqrt => arg >= 0.0,
            _ => true,
        };
        if !defined {
            return Err(EvalError::Domain {
                function: self.name(),
                arg,
                x,
            });
        }

        Ok(match self {
            Self::Sin => arg.sin(),
            Self::Cos => arg.cos(),
            Self::Tan => arg.tan(),
            Self::Asin => arg.asin(),
            Self::Acos => arg.acos(),
            Self::Atan => arg.atan(),
            Self::Sinh => arg.sinh(),
            Self::Cosh => arg.cosh(),
            Self::Tanh => arg.tanh(),
            Self::Exp => arg.exp(),
            Self::Ln => arg.ln(),
            Self::Log10 => arg.log10(),
            Self::Log2 => arg.log2(),
            Self::Sqrt => arg.sqrt(),
            Self::Abs => arg.abs(),
        })
    }
}

impl Node {
    /// Evaluates the tree with the variable bound to `x`.
    pub(super) fn eval(&self, x: f64) -> Result<f64, EvalError> {
        match self {
            Self::Number(value) => Ok(*value),
            Self::Variable => Ok(x),
            Self::Neg(inner) => Ok(-inner.eval(x)?),
            Self::Call(builtin, arg) => builtin.apply(arg.eval(x)?, x),
            Self::Binary(op, lhs, rhs) => {
                let lhs = lhs.eval(x)?;
                let rhs = rhs.eval(x)?;
                match op {
                    BinaryOp::Add => Ok(lhs + rhs),
                    BinaryOp::Sub => Ok(lhs - rhs),
                    BinaryOp::Mul => Ok(lhs * rhs),
                    BinaryOp::Div if rhs == 0.0 => Err(EvalError::DivisionByZero { x }),
                    BinaryOp::Div => Ok(lhs / rhs),
                    BinaryOp::Pow => Ok(lhs.powf(rhs)),
                }
            }
        }
    }
}
