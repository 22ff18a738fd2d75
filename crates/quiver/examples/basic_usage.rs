//! Build a small mixed graph, query it, and expand a frontier.
//!
//! Run with: `cargo run --example basic_usage`

use quiver::order::edges_by_weight;
use quiver::traversal::{Bfs, Direction};
use quiver::{FrontierToken, Graph, GraphResult};

fn main() -> GraphResult<()> {
    let mut graph: Graph<&str, u32> = Graph::new();

    // A few people and how they relate.
    let ada = graph.add_vertex("ada")?;
    let grace = graph.add_vertex("grace")?;
    let edsger = graph.add_vertex("edsger")?;

    graph.add_directed_edge(ada, grace, 10)?;
    graph.add_directed_edge(grace, edsger, 20)?;
    graph.add_undirected_edge(ada, edsger, 30)?;

    println!("{} vertices, {} edges", graph.vertex_count(), graph.edge_count());

    let edge = graph.directed_edge(ada, grace)?;
    let (from, to) = edge.vertices()?;
    println!("{} -> {} (weight {})", *from, *to, *edge);

    // Everything reachable from ada, level by level.
    for node in Bfs::new(graph.engine(), ada, Direction::Any) {
        println!("depth {}: {}", node.depth, graph.payload(node.vertex)?);
    }

    // Deterministic edge order despite hash-ordered adjacency.
    for (id, weight) in edges_by_weight(graph.engine()) {
        println!("{id} weighs {weight}");
    }

    // Frontier expansion: an edge to a vertex we haven't built yet.
    let pending = graph.add_frontier_edge(edsger, FrontierToken::new(1936), 40)?;
    println!("pending edges: {}", graph.pending_edge_count());

    let alan = graph.resolve_frontier(pending, |token| {
        // The generator sees the token it promised earlier.
        if token.as_u64() == 1936 {
            "alan"
        } else {
            "unknown"
        }
    })?;
    println!("materialized {} ({} pending left)", graph.payload(alan)?, graph.pending_edge_count());

    Ok(())
}
