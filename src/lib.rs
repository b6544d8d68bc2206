//! Scalar computation graphs, recorded through operator overloading.
//! Tiny. Few dependencies. Runs on stable Rust.
//!
//! # Features
//!
//! - **Graph recording** — Adding or multiplying [Tensor]s produces a new
//! tensor that remembers the [Operation] and both operands it was created from.
//!
//! - **Raw scalar operands** — Plain numbers on either side of `+` and `*` get
//! wrapped into leaf tensors, keeping their position in the expression.
//!
//! - **Arbitrary numeric types** — Tensors can store any type that satisfies
//! [scalar::Numeric], including all primitive integers and floats.
//!
//! - **Inspection** — Walk a graph in topological order, count its nodes or
//! render it with Graphviz using [Graph].
//!
//! Gradient propagation is not implemented yet. [Tensor::backward] exists as a
//! placeholder and leaves all gradients unset.
//!
//! # Examples
//!
//! ```
//! use tensorseed::{ Tensor, Operation };
//!
//! let a: Tensor<f64> = Tensor::new(2.0);
//! let b = Tensor::new(3.0);
//!
//! // Raw scalars get wrapped automatically
//! let c = 4.0 * (&a * &b) + 1.0;
//! assert_eq!(c.data(), 25.0);
//!
//! // Every derived tensor knows how it was created
//! let grad_fn = c.grad_fn().unwrap();
//! assert_eq!(grad_fn.operation(), Operation::Add);
//! assert_eq!(grad_fn.parents()[1].data(), 1.0);
//!
//! // Leaves don't
//! assert!(a.grad_fn().is_none());
//! ```
//!
//! Inspecting a graph:
//! ```
//! use tensorseed::{ Tensor, Graph };
//!
//! let x = Tensor::new(3);
//! let y = &x * &x + 2;
//!
//! assert_eq!(y.leaves().len(), 2);
//! assert_eq!(y.statistics().operations, 2);
//!
//! let dot = Graph::new(&[y]).to_dot();
//! assert!(dot.contains("mul | 9"));
//! ```
//!
//! ## More examples
//! Check the `/demos` folder for more example code.
//!
//!
//! # Optional features
//!
//! Some features can be toggled in your `Cargo.toml`.
//!
//! - `threading` — Share graph nodes through [Arc](std::sync::Arc), making tensors `Send + Sync`.

mod internal;
mod tensor;

pub mod scalar;
pub mod operation;

pub use operation::Operation;
pub use tensor::{ Tensor, GradFn, Graph, Statistics };
