use rand::distributions::uniform::SampleUniform;
use num_traits::{ Num, NumCast };


/// All types that may be stored in a [Tensor](crate::Tensor).
///
/// This trait gets implemented automatically for all types
/// that satisfy its dependent traits.

pub trait Numeric: Num + NumCast + PartialOrd + Copy + Send + Sync + std::fmt::Debug + std::fmt::Display {}
impl<T: Num + NumCast + PartialOrd + Copy + Send + Sync + std::fmt::Debug + std::fmt::Display> Numeric for T {}


/// All continuous numeric types.
///
/// This trait gets implemented automatically for all types
/// that satisfy its dependent traits.

pub trait Real: Numeric + num_traits::Float + SampleUniform {}
impl<T: Numeric + num_traits::Float + SampleUniform> Real for T {}


#[cfg(test)]
mod tests {
  use super::*;

  fn is_numeric<T: Numeric>() {}
  fn is_real<T: Real>() {}

  #[test]
  fn primitives() {
    is_numeric::<i32>();
    is_numeric::<u8>();
    is_numeric::<f64>();
    is_real::<f32>();
    is_real::<f64>();
  }
}
