//! Exact rational point amounts, denominated in quarters.
//!
//! Payouts such as the Tunkarri split produce fractional quarters (e.g.
//! -3/4 per opponent) that must stay exact so the per-hole zero-sum
//! invariant never drifts. Amounts are stored as a normalized fraction;
//! floating point never enters the scoring path.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// A signed, exact amount of quarters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "(i64, i64)", into = "(i64, i64)")]
pub struct Points {
    num: i64,
    den: i64,
}

impl Default for Points {
    fn default() -> Self {
        Points::ZERO
    }
}

impl Points {
    pub const ZERO: Points = Points { num: 0, den: 1 };

    /// Whole quarters.
    pub fn from_quarters(q: i64) -> Self {
        Points { num: q, den: 1 }
    }

    /// Exact fraction of quarters. `den` must be non-zero.
    pub fn from_ratio(num: i64, den: i64) -> Self {
        assert!(den != 0, "Points denominator must be non-zero");
        Self::normalized(num, den)
    }

    fn normalized(num: i64, den: i64) -> Self {
        let (num, den) = if den < 0 { (-num, -den) } else { (num, den) };
        if num == 0 {
            return Points::ZERO;
        }
        let g = gcd(num.unsigned_abs(), den.unsigned_abs()) as i64;
        Points {
            num: num / g,
            den: den / g,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.num == 0
    }

    pub fn is_positive(&self) -> bool {
        self.num > 0
    }

    pub fn is_negative(&self) -> bool {
        self.num < 0
    }

    pub fn numerator(&self) -> i64 {
        self.num
    }

    pub fn denominator(&self) -> i64 {
        self.den
    }

    /// Exact division by a positive player count.
    pub fn div_exact(self, divisor: i64) -> Self {
        assert!(divisor != 0, "cannot divide Points by zero");
        Self::normalized(self.num, self.den * divisor)
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

impl TryFrom<(i64, i64)> for Points {
    type Error = String;

    fn try_from(value: (i64, i64)) -> Result<Self, Self::Error> {
        let (num, den) = value;
        if den == 0 {
            return Err("Points denominator must be non-zero".to_string());
        }
        Ok(Points::normalized(num, den))
    }
}

impl From<Points> for (i64, i64) {
    fn from(p: Points) -> Self {
        (p.num, p.den)
    }
}

impl Add for Points {
    type Output = Points;

    fn add(self, rhs: Points) -> Points {
        Points::normalized(self.num * rhs.den + rhs.num * self.den, self.den * rhs.den)
    }
}

impl AddAssign for Points {
    fn add_assign(&mut self, rhs: Points) {
        *self = *self + rhs;
    }
}

impl Sub for Points {
    type Output = Points;

    fn sub(self, rhs: Points) -> Points {
        self + (-rhs)
    }
}

impl SubAssign for Points {
    fn sub_assign(&mut self, rhs: Points) {
        *self = *self - rhs;
    }
}

impl Neg for Points {
    type Output = Points;

    fn neg(self) -> Points {
        Points {
            num: -self.num,
            den: self.den,
        }
    }
}

impl Mul<i64> for Points {
    type Output = Points;

    fn mul(self, rhs: i64) -> Points {
        Points::normalized(self.num * rhs, self.den)
    }
}

impl Ord for Points {
    fn cmp(&self, other: &Self) -> Ordering {
        // Cross-multiply in i128 so large accumulations cannot overflow.
        let lhs = self.num as i128 * other.den as i128;
        let rhs = other.num as i128 * self.den as i128;
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Points {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

impl std::iter::Sum for Points {
    fn sum<I: Iterator<Item = Points>>(iter: I) -> Points {
        iter.fold(Points::ZERO, |acc, p| acc + p)
    }
}
