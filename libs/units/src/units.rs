use std::fmt;

/// Numerator and denominator unit symbols.
///
/// A freshly parsed `Units` keeps the symbols in the order they were given.
/// `Dimension` only ever stores the `normalized()` form: shared symbols
/// cancelled one-for-one and both lists sorted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Units {
    pub numerator: Vec<String>,
    pub denominator: Vec<String>,
}

impl Units {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn new(numerator: Vec<String>, denominator: Vec<String>) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Parses the `n1*n2/d1*d2` form produced by `Display`.
    ///
    /// Every segment after the first `/` belongs to the denominator, so
    /// `a/b/c` reads as `a/b*c`. Empty symbols are dropped; `""` is unitless.
    pub fn parse(expr: &str) -> Self {
        let mut segments = expr.split('/');
        let numerator = segments.next().map(split_factors).unwrap_or_default();
        let denominator = segments.flat_map(split_factors).collect();
        Self {
            numerator,
            denominator,
        }
    }

    /// One optional numerator unit and one optional denominator unit.
    pub fn single(numerator: &str, denominator: &str) -> Self {
        let unit = |u: &str| {
            if u.is_empty() {
                vec![]
            } else {
                vec![u.to_owned()]
            }
        };
        Self {
            numerator: unit(numerator),
            denominator: unit(denominator),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.numerator.is_empty() && self.denominator.is_empty()
    }

    /// Cancels symbols present on both sides and sorts each side.
    ///
    /// Each numerator occurrence cancels at most one denominator occurrence,
    /// so `px*px/em*px` normalizes to `px/em`.
    pub fn normalized(self) -> Self {
        let Units {
            mut numerator,
            mut denominator,
        } = self;

        if !denominator.is_empty() {
            numerator.retain(|unit| match denominator.iter().position(|d| d == unit) {
                Some(pos) => {
                    tracing::trace!(unit = %unit, "cancelling unit");
                    denominator.remove(pos);
                    false
                }
                None => true,
            });
        }

        numerator.sort();
        denominator.sort();
        Self {
            numerator,
            denominator,
        }
    }
}

fn split_factors(segment: &str) -> Vec<String> {
    segment
        .split('*')
        .filter(|unit| !unit.is_empty())
        .map(str::to_owned)
        .collect()
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.numerator.join("*"))?;
        if !self.denominator.is_empty() {
            write!(f, "/{}", self.denominator.join("*"))?;
        }
        Ok(())
    }
}

impl From<&str> for Units {
    fn from(expr: &str) -> Self {
        Units::parse(expr)
    }
}

impl From<String> for Units {
    fn from(expr: String) -> Self {
        Units::parse(&expr)
    }
}

impl From<&String> for Units {
    fn from(expr: &String) -> Self {
        Units::parse(expr)
    }
}

impl From<(&str, &str)> for Units {
    fn from((numerator, denominator): (&str, &str)) -> Self {
        Units::single(numerator, denominator)
    }
}

impl From<(Vec<String>, Vec<String>)> for Units {
    fn from((numerator, denominator): (Vec<String>, Vec<String>)) -> Self {
        Units::new(numerator, denominator)
    }
}

impl From<(&[&str], &[&str])> for Units {
    fn from((numerator, denominator): (&[&str], &[&str])) -> Self {
        let owned = |units: &[&str]| units.iter().map(|u| (*u).to_owned()).collect();
        Units::new(owned(numerator), owned(denominator))
    }
}

impl From<&Units> for Units {
    fn from(units: &Units) -> Self {
        units.clone()
    }
}
