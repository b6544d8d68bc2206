use crate::scalar::Numeric;


/// Closed set of operations that combine two nodes into a new one.
///
/// Everything that differs between operations lives here, so supporting
/// another operation means adding a variant and filling in its arms.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
  Add,
  Mul,
}

impl Operation {
  /// Compute the payload of a node produced by this operation.

  pub fn apply<T: Numeric>(&self, lhs: T, rhs: T) -> T {
    match self {
      Self::Add => lhs + rhs,
      Self::Mul => lhs * rhs,
    }
  }

  pub fn name(&self) -> &'static str {
    match self {
      Self::Add => "add",
      Self::Mul => "mul",
    }
  }

  pub fn symbol(&self) -> &'static str {
    match self {
      Self::Add => "+",
      Self::Mul => "*",
    }
  }
}

impl std::fmt::Display for Operation {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    let label = match self {
      Self::Add => "AddBackward",
      Self::Mul => "MulBackward",
    };
    write!(f, "{label}")
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn apply() {
    assert_eq!(Operation::Add.apply(2, 3), 5);
    assert_eq!(Operation::Mul.apply(2, 3), 6);
    assert_eq!(Operation::Mul.apply(1.5, 4.0), 6.0);
  }

  #[test]
  fn labels() {
    assert_eq!(Operation::Add.name(), "add");
    assert_eq!(Operation::Mul.symbol(), "*");
    assert_eq!(Operation::Mul.to_string(), "MulBackward");
  }
}
