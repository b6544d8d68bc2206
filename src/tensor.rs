use std::collections::{ HashSet, HashMap };
use std::fmt::Debug;

use log::{ trace, warn };

mod ops;
mod graph;

pub use graph::{ Graph, Statistics };

use crate::{
  internal::*,
  operation::Operation,
  scalar::{ Numeric, Real },
};


/// Record of the operation that produced a [Tensor] and the
/// operands it was applied to, in expression order.

#[derive(Clone)]
pub struct GradFn<T: Numeric> {
  operation: Operation,
  parents: [Tensor<T>; 2],
}

impl<T: Numeric> GradFn<T> {
  pub fn operation(&self) -> Operation {
    self.operation
  }

  pub fn parents(&self) -> &[Tensor<T>] {
    &self.parents
  }
}

impl<T: Numeric> Debug for GradFn<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    let parents: Vec<usize> = self.parents.iter().map(|parent| parent.id() ).collect();
    f.debug_struct("GradFn")
      .field("operation", &self.operation)
      .field("parents", &parents)
      .finish()
  }
}


/// Node in a computation graph, containing a [Tensor]'s data and gradient,
/// as well as the operation used to create it.

#[derive(Debug)]
struct Node<T: Numeric> {
  id: usize,
  data: T,
  grad: Option<T>,
  grad_fn: Option<GradFn<T>>,
}

// Unlink operand chains one node at a time, so that
// dropping a long graph doesn't recurse once per level
impl<T: Numeric> Drop for Node<T> {
  fn drop(&mut self) {
    let mut pending: Vec<RcT<Node<T>>> = vec![];
    if let Some(grad_fn) = self.grad_fn.take() {
      pending.extend(grad_fn.parents.into_iter().map(|parent| parent.node ));
    }
    while let Some(node) = pending.pop() {
      if let Ok(mut node) = RcT::try_unwrap(node) {
        if let Some(grad_fn) = node.grad_fn.take() {
          pending.extend(grad_fn.parents.into_iter().map(|parent| parent.node ));
        }
      }
    }
  }
}


/// Scalar value that records the computations used to create it.
///
/// Tensors are cheap handles to immutable graph nodes. Cloning a
/// tensor clones the handle, so both copies refer to the same node
/// and compare equal. Use [data](Tensor::data) to compare values.
///
/// Adding or multiplying tensors, or tensors and raw scalars,
/// produces a new tensor whose [grad_fn](Tensor::grad_fn) points
/// back at both operands.

#[derive(Clone)]
pub struct Tensor<T: Numeric> {
  node: RcT<Node<T>>,
}

impl<T: Numeric> PartialEq for Tensor<T> {
  fn eq(&self, rhs: &Self) -> bool {
    self.id() == rhs.id()
  }
}

impl<T: Numeric> Eq for Tensor<T> {}

impl<T: Numeric> std::hash::Hash for Tensor<T> {
  fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
    self.id().hash(state);
  }
}

impl<T: Numeric> From<T> for Tensor<T> {
  fn from(value: T) -> Self {
    Self::new(value)
  }
}

impl<T: Numeric> Tensor<T> {
  /// Wrap a raw scalar into a leaf node without provenance.

  pub fn new(data: T) -> Self {
    Self::from_node(Node {
      id: make_id(),
      data,
      grad: None,
      grad_fn: None,
    })
  }

  pub fn zero() -> Self {
    Self::new(T::zero())
  }

  pub fn one() -> Self {
    Self::new(T::one())
  }

  fn from_node(node: Node<T>) -> Self {
    Self { node: RcT::new(node) }
  }

  pub fn id(&self) -> usize {
    self.node.id
  }

  pub fn data(&self) -> T {
    self.node.data
  }

  /// Accumulated gradient. Always `None` until gradient
  /// propagation gets implemented in [backward](Tensor::backward).

  pub fn grad(&self) -> Option<T> {
    self.node.grad
  }

  pub fn grad_fn(&self) -> Option<&GradFn<T>> {
    self.node.grad_fn.as_ref()
  }

  pub fn is_leaf(&self) -> bool {
    self.node.grad_fn.is_none()
  }

  /// Operands this tensor was computed from. Empty for leaves.

  pub fn parents(&self) -> &[Tensor<T>] {
    match &self.node.grad_fn {
      Some(grad_fn) => grad_fn.parents(),
      None => &[],
    }
  }

  /// Combine this tensor with another tensor or raw scalar.
  ///
  /// Raw scalars get wrapped into leaves first, so the resulting
  /// node always has exactly two tensor operands, `[self, rhs]`.

  pub fn binary_op(&self, operation: Operation, rhs: impl Into<Self>) -> Self {
    let rhs = rhs.into();
    let data = operation.apply(self.data(), rhs.data());
    let result = Self::from_node(Node {
      id: make_id(),
      data,
      grad: None,
      grad_fn: Some(GradFn {
        operation,
        parents: [self.clone(), rhs],
      }),
    });
    trace!("#{} = #{} {} #{} ({data})",
      result.id(), result.parents()[0].id(), operation.symbol(), result.parents()[1].id());
    result
  }

  pub fn add(&self, rhs: impl Into<Self>) -> Self {
    self.binary_op(Operation::Add, rhs)
  }

  pub fn mul(&self, rhs: impl Into<Self>) -> Self {
    self.binary_op(Operation::Mul, rhs)
  }

  /// Reserved for reverse-mode gradient propagation.
  ///
  /// Not implemented: this is a no-op. No gradient gets computed and
  /// [grad](Tensor::grad) stays `None` on every node of the graph.

  pub fn backward(&self) {
    warn!("backward() called on #{}, but gradient propagation is not implemented", self.id());
  }

  /// All nodes this tensor depends on, including itself, each listed once.
  /// Operands always precede the nodes computed from them.

  pub fn history(&self) -> Vec<Self> {
    let mut history = vec![];
    let mut visited = HashSet::new();
    let mut stack = vec![(self.clone(), false)];
    while let Some((tensor, expanded)) = stack.pop() {
      if expanded {
        history.push(tensor);
        continue
      }
      if !visited.insert(tensor.id()) { continue }
      stack.push((tensor.clone(), true));
      // Reversed, so the first operand gets visited first
      for parent in tensor.parents().iter().rev() {
        if !visited.contains(&parent.id()) {
          stack.push((parent.clone(), false));
        }
      }
    }
    history
  }

  /// List all leaves this tensor was computed from.

  pub fn leaves(&self) -> Vec<Self> {
    self.history()
      .into_iter()
      .filter(|tensor| tensor.is_leaf() )
      .collect()
  }

  pub fn statistics(&self) -> Statistics {
    Statistics::of(&self.history())
  }

  /// Length of the longest operand chain from any leaf to this tensor.

  pub fn depth(&self) -> usize {
    depths(&self.history()).get(&self.id()).copied().unwrap_or(0)
  }
}


/// Depth of every node in a topologically ordered history, keyed by id.

pub(crate) fn depths<T: Numeric>(history: &[Tensor<T>]) -> HashMap<usize, usize> {
  let mut depths: HashMap<usize, usize> = HashMap::with_capacity(history.len());
  for tensor in history {
    let depth = tensor.parents()
      .iter()
      .map(|parent| depths.get(&parent.id()).map_or(0, |depth| depth + 1) )
      .max()
      .unwrap_or(0);
    depths.insert(tensor.id(), depth);
  }
  depths
}

impl<T: Real> Tensor<T> {
  /// Leaf sampled from a standard normal distribution.

  pub fn randn() -> Self {
    Self::new(randn().0)
  }

  /// Leaf sampled uniformly from `[low, high)`.

  pub fn rand(low: T, high: T) -> Self {
    Self::new(uniform(low, high))
  }
}

impl<T: Numeric> Debug for Tensor<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    f.debug_struct("Tensor")
      .field("id", &self.node.id)
      .field("data", &self.node.data)
      .field("grad", &self.node.grad)
      .field("grad_fn", &self.node.grad_fn)
      .finish()
  }
}

impl<T: Numeric> std::fmt::Display for Tensor<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    match self.grad_fn() {
      Some(grad_fn) => write!(f, "tensor({}, grad_fn=<{}>)", self.data(), grad_fn.operation()),
      None => write!(f, "tensor({})", self.data()),
    }
  }
}
