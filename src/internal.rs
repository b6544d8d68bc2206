use std::sync::atomic::{ AtomicUsize, Ordering };

use rand::Rng;

use crate::scalar::Real;


#[cfg(not(feature = "threading"))]
pub type RcT<T> = std::rc::Rc<T>;

#[cfg(feature = "threading")]
pub type RcT<T> = std::sync::Arc<T>;


pub fn make_id() -> usize {
  static LAST_ID: AtomicUsize = AtomicUsize::new(0);
  LAST_ID.fetch_add(1, Ordering::Relaxed)
}


// Polar Box-Muller transformation

pub fn randn<T: Real>() -> (T, T) {
  let mut rng = rand::thread_rng();
  loop {
    let u = rng.gen_range(-T::one(), T::one());
    let v = rng.gen_range(-T::one(), T::one());
    let r = u * u + v * v;
    // Try again if outside interval
    if r == T::zero() || r >= T::one() { continue }
    let c = (-(T::one() + T::one()) * r.ln() / r).sqrt();
    return (u * c, v * c)
  }
}

pub fn uniform<T: Real>(low: T, high: T) -> T {
  rand::thread_rng().gen_range(low, high)
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn ids_increase() {
    let a = make_id();
    let b = make_id();
    assert!(b > a);
  }

  #[test]
  fn randn_is_finite() {
    for _ in 0..100 {
      let (a, b) = randn::<f64>();
      assert!(a.is_finite() && b.is_finite());
    }
  }

  #[test]
  fn uniform_in_range() {
    for _ in 0..100 {
      let x = uniform(2.0f32, 3.0);
      assert!(x >= 2.0 && x < 3.0);
    }
  }
}
