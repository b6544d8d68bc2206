// This example builds the smallest possible graph, two leaves and
// their sum, and prints how each node was created.

// Run with RUST_LOG=trace to see every node as it gets recorded.

use tensorseed::{ Tensor, Graph };

fn main() {
  env_logger::init();

  // Leaves are created from raw scalars
  let a = Tensor::new(1);
  let b = Tensor::new(2);

  // Operators record the graph as they go
  let c = &a + &b;

  println!("a_gradfn: {:?}, b_gradfn: {:?}, c_gradfn: {:?}", a.grad_fn(), b.grad_fn(), c.grad_fn());
  println!("{a} + {b} = {c}");

  // Gradients are not computed yet, this only logs a warning
  c.backward();

  print!("{}", Graph::new(&[c]).to_dot());
}
