use std::io;
use std::fs;

use itertools::Itertools;
use log::debug;

use crate::{
  scalar::Numeric,
  tensor::{ Tensor, depths },
};


/// Node counts of a computation graph.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Statistics {
  pub nodes: usize,
  pub operations: usize,
  pub leaves: usize,
  pub depth: usize,
}

impl Statistics {
  pub(crate) fn of<T: Numeric>(history: &[Tensor<T>]) -> Self {
    let operations = history.iter().filter(|tensor| !tensor.is_leaf() ).count();
    Self {
      nodes: history.len(),
      operations,
      leaves: history.len() - operations,
      depth: depths(history).into_values().max().unwrap_or(0),
    }
  }
}


/// Snapshot of a computation graph with one or more outputs.
///
/// Can be used for inspecting the graph or rendering it with Graphviz.

#[derive(Debug, Clone)]
pub struct Graph<T: Numeric> {
  pub outputs: Vec<Tensor<T>>,
}

impl<T: Numeric> Graph<T> {
  pub fn new(outputs: &[Tensor<T>]) -> Self {
    Self { outputs: outputs.into() }
  }

  /// Every node reachable from any output, in creation order.

  pub fn history(&self) -> Vec<Tensor<T>> {
    let mut history = self.outputs
      .iter()
      .map(|out| out.history() )
      .collect::<Vec<_>>()
      .concat();
    history.sort_by_key(|tensor| tensor.id() );
    history.into_iter().unique_by(|tensor| tensor.id() ).collect()
  }

  pub fn leaves(&self) -> Vec<Tensor<T>> {
    self.history()
      .into_iter()
      .filter(|tensor| tensor.is_leaf() )
      .collect()
  }

  pub fn statistics(&self) -> Statistics {
    Statistics::of(&self.history())
  }

  /// Render the graph in Graphviz DOT format, with edges
  /// pointing from operands to the nodes computed from them.

  pub fn to_dot(&self) -> String {
    let mut dot = String::from("digraph G {\n");
    dot.push_str("  rankdir=LR;\n");
    dot.push_str("  node [shape=box];\n\n");
    for tensor in self.history() {
      let label = match tensor.grad_fn() {
        Some(grad_fn) => format!("{} | {}", grad_fn.operation().name(), tensor.data()),
        None => format!("{}", tensor.data()),
      };
      dot.push_str(&format!("  n{} [label=\"{}\"];\n", tensor.id(), label));
    }
    dot.push('\n');
    for tensor in self.history() {
      let edges = tensor.parents()
        .iter()
        .map(|parent| format!("  n{} -> n{};", parent.id(), tensor.id()) )
        .join("\n");
      if !edges.is_empty() {
        dot.push_str(&edges);
        dot.push('\n');
      }
    }
    dot.push_str("}\n");
    dot
  }

  pub fn write_dot(&self, filename: &str) -> io::Result<()> {
    let dot = self.to_dot();
    debug!("Writing graph of {} outputs to {filename}", self.outputs.len());
    fs::write(filename, dot)
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn statistics() {
    let a = Tensor::new(2);
    let b = Tensor::new(3);
    let c = &(&a * &b) + &a;
    assert_eq!(c.statistics(), Statistics { nodes: 4, operations: 2, leaves: 2, depth: 2 });
  }

  #[test]
  fn statistics_of_large_graph() {
    let mut t: Tensor<i64> = Tensor::new(0);
    for i in 0..5_000 {
      t = &t + i;
    }
    let stats = Graph::new(&[t.clone()]).statistics();
    assert_eq!(stats, Statistics { nodes: 10_001, operations: 5_000, leaves: 5_001, depth: 5_000 });
    assert_eq!(t.statistics(), stats);
  }

  #[test]
  fn sum_of_many() {
    let tensors: Vec<Tensor<i64>> = (0..100_000).map(Tensor::new).collect();
    let sum: Tensor<i64> = tensors.iter().sum();
    assert_eq!(sum.data(), 4_999_950_000);
    assert_eq!(sum.statistics().depth, 99_999);
    let product: Tensor<i64> = tensors.iter().take(10).skip(1).product();
    assert_eq!(product.data(), 362_880);
  }

  #[test]
  fn merged_history() {
    let a = Tensor::new(1.0);
    let b = Tensor::new(2.0);
    let y = &a + &b;
    let z = &y * &b;
    let graph = Graph::new(&[y.clone(), z.clone()]);
    let history = graph.history();
    assert_eq!(history, vec![a.clone(), b.clone(), y, z]);
    assert_eq!(graph.leaves(), vec![a, b]);
    assert_eq!(graph.statistics().nodes, 4);
  }

  #[test]
  fn dot() {
    let a = Tensor::new(1);
    let b = Tensor::new(2);
    let c = &a + &b;
    let dot = Graph::new(&[c.clone()]).to_dot();
    assert!(dot.starts_with("digraph G {"));
    assert!(dot.contains(&format!("n{} [label=\"1\"];", a.id())));
    assert!(dot.contains(&format!("n{} [label=\"add | 3\"];", c.id())));
    assert!(dot.contains(&format!("n{} -> n{};", a.id(), c.id())));
    assert!(dot.contains(&format!("n{} -> n{};", b.id(), c.id())));
    assert!(dot.trim_end().ends_with('}'));
  }

  #[test]
  fn write_dot() {
    let _ = env_logger::builder().is_test(true).try_init();
    let c = Tensor::new(4) * 5;
    let path = std::env::temp_dir().join(format!("tensorseed-{}.dot", c.id()));
    let path = path.to_string_lossy().into_owned();
    Graph::new(&[c]).write_dot(&path).unwrap();
    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("mul | 20"));
    fs::remove_file(&path).unwrap();
  }
}
