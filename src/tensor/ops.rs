use crate::{
  operation::Operation,
  scalar::Numeric,
  tensor::Tensor,
};


macro_rules! add_operator {
  ($op:ident, $meth:ident, $assign:ident, $assign_meth:ident, $variant:expr) => {
    impl<T: Numeric> std::ops::$op for &Tensor<T> { // &tensor * &other
      type Output = Tensor<T>;

      fn $meth(self, rhs: Self) -> Tensor<T> {
        self.binary_op($variant, rhs.clone())
      }
    }

    impl<T: Numeric> std::ops::$op for Tensor<T> { // tensor * other
      type Output = Tensor<T>;

      fn $meth(self, rhs: Self) -> Tensor<T> {
        self.binary_op($variant, rhs)
      }
    }

    impl<T: Numeric> std::ops::$op<Tensor<T>> for &Tensor<T> { // &tensor * other
      type Output = Tensor<T>;

      fn $meth(self, rhs: Tensor<T>) -> Tensor<T> {
        self.binary_op($variant, rhs)
      }
    }

    impl<T: Numeric> std::ops::$op<&Tensor<T>> for Tensor<T> { // tensor * &other
      type Output = Tensor<T>;

      fn $meth(self, rhs: &Tensor<T>) -> Tensor<T> {
        self.binary_op($variant, rhs.clone())
      }
    }

    impl<T: Numeric> std::ops::$op<T> for &Tensor<T> { // &tensor * T
      type Output = Tensor<T>;

      fn $meth(self, rhs: T) -> Tensor<T> {
        self.binary_op($variant, rhs)
      }
    }

    impl<T: Numeric> std::ops::$op<T> for Tensor<T> { // tensor * T
      type Output = Tensor<T>;

      fn $meth(self, rhs: T) -> Tensor<T> {
        self.binary_op($variant, rhs)
      }
    }

    // Rebinds to a new node, the old one stays untouched
    impl<T: Numeric, R: Into<Tensor<T>>> std::ops::$assign<R> for Tensor<T> {
      fn $assign_meth(&mut self, rhs: R) {
        *self = self.binary_op($variant, rhs);
      }
    }
  };
}

add_operator!(Add, add, AddAssign, add_assign, Operation::Add);
add_operator!(Mul, mul, MulAssign, mul_assign, Operation::Mul);


// Raw scalars on the left get wrapped into a leaf that keeps
// its place as the first operand.

macro_rules! reflect_operators {
  ($($t:ty),*) => {
    $(
      impl std::ops::Add<Tensor<$t>> for $t { // T + tensor
        type Output = Tensor<$t>;

        fn add(self, rhs: Tensor<$t>) -> Tensor<$t> {
          Tensor::new(self).binary_op(Operation::Add, rhs)
        }
      }

      impl std::ops::Add<&Tensor<$t>> for $t { // T + &tensor
        type Output = Tensor<$t>;

        fn add(self, rhs: &Tensor<$t>) -> Tensor<$t> {
          Tensor::new(self).binary_op(Operation::Add, rhs.clone())
        }
      }

      impl std::ops::Mul<Tensor<$t>> for $t { // T * tensor
        type Output = Tensor<$t>;

        fn mul(self, rhs: Tensor<$t>) -> Tensor<$t> {
          Tensor::new(self).binary_op(Operation::Mul, rhs)
        }
      }

      impl std::ops::Mul<&Tensor<$t>> for $t { // T * &tensor
        type Output = Tensor<$t>;

        fn mul(self, rhs: &Tensor<$t>) -> Tensor<$t> {
          Tensor::new(self).binary_op(Operation::Mul, rhs.clone())
        }
      }
    )*
  };
}

reflect_operators!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);


impl<T: Numeric> std::iter::Sum for Tensor<T> {
  fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
    iter.reduce(|acc, tensor| acc + tensor ).unwrap_or_else(Tensor::zero)
  }
}

impl<'a, T: Numeric> std::iter::Sum<&'a Tensor<T>> for Tensor<T> {
  fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
    iter.cloned().sum()
  }
}

impl<T: Numeric> std::iter::Product for Tensor<T> {
  fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
    iter.reduce(|acc, tensor| acc * tensor ).unwrap_or_else(Tensor::one)
  }
}

impl<'a, T: Numeric> std::iter::Product<&'a Tensor<T>> for Tensor<T> {
  fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
    iter.cloned().product()
  }
}
