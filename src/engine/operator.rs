/// Precedence group an operator is reduced in.
///
/// Tiers are applied in declaration order: every `**` in a block is reduced
/// before any `*`, `/` or `%`, which in turn go before any `+` or `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    /// `**`
    Power,
    /// `*`, `/`, `%`
    Product,
    /// `+`, `-`
    Sum,
}

impl Tier {
    /// All tiers, highest precedence first.
    pub const ALL: [Self; 3] = [Self::Power, Self::Product, Self::Sum];
}

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `**`
    Power,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `%`
    Remainder,
    /// `+`
    Add,
    /// `-`
    Subtract,
}

impl Operator {
    /// Looks up the operator written as `symbol`.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "**" => Some(Self::Power),
            "*" => Some(Self::Multiply),
            "/" => Some(Self::Divide),
            "%" => Some(Self::Remainder),
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            _ => None,
        }
    }

    /// The operator as it appears in an expression.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Power => "**",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Remainder => "%",
            Self::Add => "+",
            Self::Subtract => "-",
        }
    }

    #[must_use]
    pub const fn tier(self) -> Tier {
        match self {
            Self::Power => Tier::Power,
            Self::Multiply | Self::Divide | Self::Remainder => Tier::Product,
            Self::Add | Self::Subtract => Tier::Sum,
        }
    }

    /// Applies the operator to two operands with plain IEEE semantics.
    ///
    /// Division and remainder by zero are not checked: `1 / 0` is infinite and
    /// `0 / 0` is `NaN`. A negative base raised to a fractional power is `NaN`.
    ///
    /// # Example
    /// ```
    /// use stepcalc::engine::operator::Operator;
    ///
    /// assert_eq!(Operator::Power.apply(2.0, 10.0), 1024.0);
    /// assert_eq!(Operator::Remainder.apply(7.0, 4.0), 3.0);
    /// assert!(Operator::Divide.apply(1.0, 0.0).is_infinite());
    /// assert!(Operator::Power.apply(-8.0, 1.0 / 3.0).is_nan());
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Power => left.powf(right),
            Self::Multiply => left * right,
            Self::Divide => left / right,
            Self::Remainder => left % right,
            Self::Add => left + right,
            Self::Subtract => left - right,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
