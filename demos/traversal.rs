//! adjgraph 遍历演示
//!
//! 构建随机连通图并输出广度优先或深度优先的访问顺序

use adjgraph::{Graph, TraversalOrder};
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Order {
    Bfs,
    Dfs,
}

impl From<Order> for TraversalOrder {
    fn from(order: Order) -> Self {
        match order {
            Order::Bfs => TraversalOrder::BreadthFirst,
            Order::Dfs => TraversalOrder::DepthFirst,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "adjgraph-traversal")]
#[command(about = "adjgraph 遍历演示")]
struct Args {
    /// 顶点数量
    #[arg(short, long, default_value = "16")]
    vertices: u32,

    /// 生成树之外追加的随机边数量
    #[arg(short, long, default_value = "8")]
    extra_edges: u32,

    /// 随机种子
    #[arg(short, long, default_value = "1")]
    seed: u64,

    /// 遍历顺序
    #[arg(short, long, value_enum, default_value = "bfs")]
    order: Order,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    if args.vertices == 0 {
        return Err("顶点数量必须大于 0".into());
    }

    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut graph = Graph::with_capacity(args.vertices as usize);
    graph.add_vertex(0u32);
    for v in 1..args.vertices {
        graph.add_edge(v, rng.gen_range(0..v));
    }
    for _ in 0..args.extra_edges {
        let a = rng.gen_range(0..args.vertices);
        let b = rng.gen_range(0..args.vertices);
        if a != b {
            graph.add_edge(a, b);
        }
    }

    println!("adjgraph 遍历演示");
    println!("==================");
    println!("  顶点数: {}", graph.order());
    println!("  边数: {}", graph.size());

    let mut visited = Vec::with_capacity(graph.order());
    graph.traverse(args.order.into(), &0, |v| visited.push(*v))?;

    println!("{:?} 访问顺序:", args.order);
    println!("  {:?}", visited);

    Ok(())
}
